use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "players")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub region: String,
    /// 余额，只在购买时扣减
    pub balance: i64,
}

impl Model {
    /// 按 id 查找玩家，不存在返回 None
    pub async fn find<C: ConnectionTrait>(db: &C, player_id: i64) -> Result<Option<Self>, DbErr> {
        Entity::find_by_id(player_id).one(db).await
    }

    pub fn can_afford(&self, price: i64) -> bool {
        self.balance >= price
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
