use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 投票表单；字段缺失与空串同样视为未填写
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct PollForm {
    #[schema(example = "user1@qq.com")]
    pub user_email: Option<String>,
    #[schema(example = "BMW")]
    pub car_brand: Option<String>,
}

impl PollForm {
    pub fn email(&self) -> &str {
        self.user_email.as_deref().unwrap_or_default()
    }

    pub fn brand(&self) -> &str {
        self.car_brand.as_deref().unwrap_or_default()
    }
}
