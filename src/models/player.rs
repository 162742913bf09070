use sea_orm::{ConnectionTrait, DbErr};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::entities::player_entity as players;

/// 玩家信息序列化层，只暴露 name / region / balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PlayerInfo {
    pub name: String,
    pub region: String,
    pub balance: i64,
}

impl PlayerInfo {
    pub async fn from_id<C: ConnectionTrait>(db: &C, player_id: i64) -> Result<Option<Self>, DbErr> {
        Ok(players::Model::find(db, player_id).await?.map(Self::from))
    }
}

impl From<players::Model> for PlayerInfo {
    fn from(m: players::Model) -> Self {
        Self {
            name: m.name,
            region: m.region,
            balance: m.balance,
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct PurchaseForm {
    #[schema(example = "1")]
    pub player_id: Option<String>,
    #[schema(example = "1")]
    pub reward_id: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PlayerQuery {
    /// 玩家ID
    pub player_id: Option<String>,
}

/// 非数字 id 按不存在处理
pub fn parse_id(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
}

impl PurchaseForm {
    pub fn player_id(&self) -> Option<i64> {
        parse_id(self.player_id.as_deref())
    }

    pub fn reward_id(&self) -> Option<i64> {
        parse_id(self.reward_id.as_deref())
    }
}

impl PlayerQuery {
    pub fn player_id(&self) -> Option<i64> {
        parse_id(self.player_id.as_deref())
    }
}
