use crate::entities::poll_record_entity as poll_records;
use crate::error::AppResult;
use crate::utils::validate_poll;
use sea_orm::DatabaseConnection;

#[derive(Clone)]
pub struct PollService {
    pool: DatabaseConnection,
}

impl PollService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    /// 校验并记录一次投票
    pub async fn poll(&self, email: &str, brand: &str) -> AppResult<poll_records::Model> {
        validate_poll(email, brand)?;

        let record = poll_records::Model::create(&self.pool, email, brand).await?;
        log::info!("Poll recorded: id={} brand={}", record.id, record.car_brand);

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AppError, Code};
    use crate::test_support::setup_db;
    use sea_orm::{EntityTrait, PaginatorTrait};

    #[tokio::test]
    async fn test_poll() {
        let db = setup_db().await;
        let service = PollService::new(db.clone());

        let record = service.poll("user1@qq.com", "BMW").await.unwrap();
        assert_eq!(record.user_email, "user1@qq.com");
        assert_eq!(record.car_brand, "BMW");
        assert_eq!(
            record.thank_you_message(),
            format!("Thank you for your poll. id = {}", record.id)
        );

        let err = service.poll("", "BMW").await.unwrap_err();
        assert_eq!(err.translate(), Code::EmptyEmail);

        let err = service.poll("user1@qq.com", "").await.unwrap_err();
        assert_eq!(err.translate(), Code::EmptyBrand);
    }

    #[tokio::test]
    async fn test_rejected_poll_writes_nothing() {
        let db = setup_db().await;
        let service = PollService::new(db.clone());

        for (email, brand, code) in [
            ("user1", "BMW", Code::InvalidEmail),
            ("user1@qq.com", "Tesla", Code::InvalidBrand),
        ] {
            let err = service.poll(email, brand).await.unwrap_err();
            assert!(matches!(err, AppError::Domain(c) if c == code));
        }

        let count = poll_records::Entity::find().count(&db).await.unwrap();
        assert_eq!(count, 0);
    }
}
