use chrono::{DateTime, Utc};
use sea_orm::Set;
use sea_orm::entity::prelude::*;

/// 购买流水。只追加，不做去重
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "purchases")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub player_id: i64,
    pub reward_id: i64,
    pub created_at: DateTime<Utc>,
}

impl Model {
    pub async fn create<C: ConnectionTrait>(
        db: &C,
        player_id: i64,
        reward_id: i64,
    ) -> Result<Self, DbErr> {
        ActiveModel {
            player_id: Set(player_id),
            reward_id: Set(reward_id),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(db)
        .await
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
