use sea_orm_migration::prelude::*;

/// 文件访问记录
#[derive(DeriveIden)]
enum ViewRecords {
    Table,
    Id,
    FilePath,
    CreatedAt,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ViewRecords::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ViewRecords::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ViewRecords::FilePath)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ViewRecords::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ViewRecords::Table).to_owned())
            .await
    }
}
