use sea_orm::entity::prelude::*;

/// 奖品配置，服务层只读
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "rewards")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub color: String,
    pub num: String,
    pub price: i64,
}

impl Model {
    pub async fn find<C: ConnectionTrait>(db: &C, reward_id: i64) -> Result<Option<Self>, DbErr> {
        Entity::find_by_id(reward_id).one(db).await
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
