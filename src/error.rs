use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

use crate::external::CacheError;

pub type AppResult<T> = Result<T, AppError>;

/// 对外稳定的结果码，成功与失败共用一套编号
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Code {
    Success,
    EmptyEmail,
    EmptyBrand,
    InvalidEmail,
    InvalidBrand,
    InvalidPlayer,
    InvalidReward,
    InsufficientBalance,
    FileNotFound,
    FileNotJson,
    DbError,
    RedisError,
    /// 无法识别的错误。编号与 Success 相同，沿用旧接口约定
    BaseError,
}

impl Code {
    pub fn value(self) -> i32 {
        match self {
            Code::Success => 1000,
            Code::EmptyEmail => 1001,
            Code::EmptyBrand => 1002,
            Code::InvalidEmail => 1003,
            Code::InvalidBrand => 1004,
            Code::InvalidPlayer => 1101,
            Code::InvalidReward => 1102,
            Code::InsufficientBalance => 1103,
            Code::FileNotFound => 2001,
            Code::FileNotJson => 2002,
            Code::DbError => 2003,
            Code::RedisError => 2004,
            Code::BaseError => 1000,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Code::Success => "Success",
            Code::EmptyEmail => "Please enter your email.",
            Code::EmptyBrand => "Please enter your car brand.",
            Code::InvalidEmail => "Please enter a valid email.",
            Code::InvalidBrand => "Please enter a valid car brand.",
            Code::InvalidPlayer => "Invalid player.",
            Code::InvalidReward => "Invalid reward.",
            Code::InsufficientBalance => "Insufficient balance.",
            Code::FileNotFound => "File not found",
            Code::FileNotJson => "File content is not valid json",
            Code::DbError => "Database error",
            Code::RedisError => "Redis error",
            Code::BaseError => "Base error",
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{}", .0.message())]
    Domain(Code),

    #[error("Database error: {0}")]
    DatabaseError(#[from] sea_orm::DbErr),

    #[error("Cache error: {0}")]
    CacheError(#[from] CacheError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJsonError(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl From<Code> for AppError {
    fn from(code: Code) -> Self {
        AppError::Domain(code)
    }
}

impl AppError {
    /// 把内部错误折算成对外结果码，未识别的一律 BaseError
    pub fn translate(&self) -> Code {
        match self {
            AppError::DatabaseError(_) => Code::DbError,
            AppError::CacheError(_) => Code::RedisError,
            AppError::Domain(code) => *code,
            AppError::IoError(err) if err.kind() == std::io::ErrorKind::NotFound => {
                Code::FileNotFound
            }
            AppError::SerdeJsonError(_) => Code::FileNotJson,
            _ => Code::BaseError,
        }
    }

    fn log(&self) {
        match self {
            AppError::Domain(code) => log::info!("Request rejected: {}", code.message()),
            AppError::DatabaseError(err) => log::error!("Database error: {err}"),
            AppError::CacheError(err) => log::error!("Cache error: {err}"),
            AppError::IoError(err) => log::warn!("IO error: {err}"),
            AppError::SerdeJsonError(err) => log::warn!("JSON parse error: {err}"),
            _ => log::error!("Internal error: {self}"),
        }
    }
}

// 结果码放在响应体里，HTTP 状态始终 200
impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        StatusCode::OK
    }

    fn error_response(&self) -> HttpResponse {
        self.log();
        let code = self.translate();
        HttpResponse::Ok().json(json!({
            "code": code.value(),
            "message": code.message()
        }))
    }
}

/// 文件定位接口的错误边界，响应体使用 `msg` 字段
#[derive(Error, Debug)]
#[error(transparent)]
pub struct MsgError(#[from] pub AppError);

impl From<Code> for MsgError {
    fn from(code: Code) -> Self {
        MsgError(AppError::Domain(code))
    }
}

impl ResponseError for MsgError {
    fn status_code(&self) -> StatusCode {
        StatusCode::OK
    }

    fn error_response(&self) -> HttpResponse {
        self.0.log();
        let code = self.0.translate();
        HttpResponse::Ok().json(json!({
            "msg": code.message(),
            "code": code.value()
        }))
    }
}
