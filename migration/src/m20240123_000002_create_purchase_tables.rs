use sea_orm_migration::prelude::*;

#[derive(DeriveIden)]
enum Players {
    Table,
    Id,
    Name,
    Region,
    Balance,
}

#[derive(DeriveIden)]
enum Rewards {
    Table,
    Id,
    Name,
    Color,
    Num,
    Price,
}

/// 购买流水 (append-only, 不建外键)
#[derive(DeriveIden)]
enum Purchases {
    Table,
    Id,
    PlayerId,
    RewardId,
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
                    .table(Players::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Players::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Players::Name).string_len(255).not_null())
                    .col(ColumnDef::new(Players::Region).string_len(255).not_null())
                    .col(
                        ColumnDef::new(Players::Balance)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Rewards::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Rewards::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Rewards::Name).string_len(255).not_null())
                    .col(ColumnDef::new(Rewards::Color).string_len(255).not_null())
                    .col(ColumnDef::new(Rewards::Num).string_len(255).not_null())
                    .col(ColumnDef::new(Rewards::Price).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Purchases::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Purchases::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Purchases::PlayerId).big_integer().not_null())
                    .col(ColumnDef::new(Purchases::RewardId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Purchases::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_purchases_player_id")
                    .table(Purchases::Table)
                    .col(Purchases::PlayerId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Purchases::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Rewards::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Players::Table).to_owned())
            .await
    }
}
