use chrono::{DateTime, Utc};
use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "poll_records")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub user_email: String,
    pub car_brand: String,
    pub created_time: DateTime<Utc>,
}

impl Model {
    pub async fn create<C: ConnectionTrait>(db: &C, email: &str, brand: &str) -> Result<Self, DbErr> {
        ActiveModel {
            user_email: Set(email.to_string()),
            car_brand: Set(brand.to_string()),
            created_time: Set(Utc::now()),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    pub fn thank_you_message(&self) -> String {
        format!("Thank you for your poll. id = {}", self.id)
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
