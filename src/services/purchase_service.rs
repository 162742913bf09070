use crate::entities::{
    player_entity as players, purchase_entity as purchases, reward_entity as rewards,
};
use crate::error::{AppError, AppResult, Code};
use crate::models::PlayerInfo;
use sea_orm::{ActiveModelTrait, DatabaseConnection, IntoActiveModel, Set};

#[derive(Clone)]
pub struct PurchaseService {
    pool: DatabaseConnection,
}

impl PurchaseService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    /// 用余额兑换奖品
    ///
    /// 校验顺序固定: 玩家存在 -> 奖品存在 -> 余额充足。
    /// 无法解析的 id 以 `None` 传入，按记录不存在处理。
    ///
    /// 扣款与写购买流水是两次独立写入，没有事务包裹；
    /// 并发请求下可能出现重复扣款或只扣款不记流水。
    pub async fn purchase(
        &self,
        player_id: Option<i64>,
        reward_id: Option<i64>,
    ) -> AppResult<purchases::Model> {
        let player = self
            .find_player(player_id)
            .await?
            .ok_or(AppError::Domain(Code::InvalidPlayer))?;

        let reward = match reward_id {
            Some(id) => rewards::Model::find(&self.pool, id).await?,
            None => None,
        }
        .ok_or(AppError::Domain(Code::InvalidReward))?;

        if !player.can_afford(reward.price) {
            log::info!(
                "Insufficient balance: player={} balance={} price={}",
                player.id,
                player.balance,
                reward.price
            );
            return Err(Code::InsufficientBalance.into());
        }

        let player_id = player.id;
        let new_balance = player.balance.checked_sub(reward.price).ok_or_else(|| {
            AppError::InternalError(format!(
                "Balance overflow: player={} balance={} price={}",
                player_id, player.balance, reward.price
            ))
        })?;
        let mut am = player.into_active_model();
        am.balance = Set(new_balance);
        am.update(&self.pool).await?;

        let record = purchases::Model::create(&self.pool, player_id, reward.id).await?;
        log::info!(
            "Purchase recorded: id={} player={} reward={} balance_after={}",
            record.id,
            player_id,
            reward.id,
            new_balance
        );

        Ok(record)
    }

    /// 查询玩家公开信息
    pub async fn info(&self, player_id: Option<i64>) -> AppResult<PlayerInfo> {
        let info = match player_id {
            Some(id) => PlayerInfo::from_id(&self.pool, id).await?,
            None => None,
        };
        info.ok_or(AppError::Domain(Code::InvalidPlayer))
    }

    async fn find_player(&self, player_id: Option<i64>) -> AppResult<Option<players::Model>> {
        match player_id {
            Some(id) => Ok(players::Model::find(&self.pool, id).await?),
            None => Ok(None),
        }
    }
}
