use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::Code;

/// 示例接口统一响应: `{code, message?, data?}`
#[derive(Debug, Serialize, Deserialize)]
pub struct CodeResponse<T> {
    pub code: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> CodeResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            code: Code::Success.value(),
            message: None,
            data: Some(data),
        }
    }
}

impl CodeResponse<()> {
    pub fn success_with_message(message: impl Into<String>) -> Self {
        Self {
            code: Code::Success.value(),
            message: Some(message.into()),
            data: None,
        }
    }

    pub fn from_code(code: Code) -> Self {
        Self {
            code: code.value(),
            message: Some(code.message().to_string()),
            data: None,
        }
    }
}

/// 文件定位接口响应: `{code, msg}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MsgResponse {
    #[schema(example = 1000)]
    pub code: i32,
    #[schema(example = "Success")]
    pub msg: String,
}

impl From<Code> for MsgResponse {
    fn from(code: Code) -> Self {
        Self {
            code: code.value(),
            msg: code.message().to_string(),
        }
    }
}
