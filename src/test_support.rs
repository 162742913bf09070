//! Shared fixtures for service and handler tests.

use migration::{Migrator, MigratorTrait};
use sea_orm::{ActiveModelTrait, Database, DatabaseConnection, Set};

use crate::entities::{player_entity as players, reward_entity as rewards};

pub async fn setup_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    db
}

pub async fn seed_player(db: &DatabaseConnection, name: &str, region: &str, balance: i64) -> players::Model {
    players::ActiveModel {
        name: Set(name.to_string()),
        region: Set(region.to_string()),
        balance: Set(balance),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
}

pub async fn seed_reward(db: &DatabaseConnection, name: &str, color: &str, num: &str, price: i64) -> rewards::Model {
    rewards::ActiveModel {
        name: Set(name.to_string()),
        color: Set(color.to_string()),
        num: Set(num.to_string()),
        price: Set(price),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
}

/// r1(100), r2(200), p1(1000), p2(20)
pub struct PurchaseFixture {
    pub r1: rewards::Model,
    pub r2: rewards::Model,
    pub p1: players::Model,
    pub p2: players::Model,
}

pub async fn seed_purchase_fixture(db: &DatabaseConnection) -> PurchaseFixture {
    PurchaseFixture {
        r1: seed_reward(db, "r1", "red", "1", 100).await,
        r2: seed_reward(db, "r2", "blue", "2", 200).await,
        p1: seed_player(db, "p1", "r1", 1000).await,
        p2: seed_player(db, "p2", "r2", 20).await,
    }
}
