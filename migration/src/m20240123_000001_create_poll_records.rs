use sea_orm_migration::prelude::*;

/// 投票记录 (email + car brand)
#[derive(DeriveIden)]
enum PollRecords {
    Table,
    Id,
    UserEmail,
    CarBrand,
    CreatedTime,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PollRecords::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PollRecords::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(PollRecords::UserEmail)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PollRecords::CarBrand)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PollRecords::CreatedTime)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PollRecords::Table).to_owned())
            .await
    }
}
