use actix_web::{web, HttpResponse, Result, ResponseError};
use sea_orm::DatabaseConnection;

use crate::error::{AppResult, Code};
use crate::models::*;
use crate::services::PurchaseService;

const PURCHASE_SUCCESS: &str = "Purchase success.";

/// 示例三: 调用服务后在 handler 中匹配结果
#[utoipa::path(
    post,
    path = "/api/example3/purchase",
    tag = "purchase",
    request_body(content = PurchaseForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "code=1000 购买成功；1101 玩家无效；1102 奖品无效；1103 余额不足")
    )
)]
pub async fn example3_purchase(
    purchase_service: web::Data<PurchaseService>,
    form: Option<web::Form<PurchaseForm>>,
) -> Result<HttpResponse> {
    let form = form.map(web::Form::into_inner).unwrap_or_default();
    match purchase_service
        .purchase(form.player_id(), form.reward_id())
        .await
    {
        Ok(_) => Ok(HttpResponse::Ok().json(CodeResponse::success_with_message(PURCHASE_SUCCESS))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/api/example3/info",
    tag = "purchase",
    params(PlayerQuery),
    responses(
        (status = 200, description = "code=1000 返回玩家信息；1101 玩家无效", body = PlayerInfo)
    )
)]
pub async fn example3_info(
    purchase_service: web::Data<PurchaseService>,
    query: web::Query<PlayerQuery>,
) -> Result<HttpResponse> {
    match purchase_service.info(query.player_id()).await {
        Ok(info) => Ok(HttpResponse::Ok().json(CodeResponse::success(info))),
        Err(e) => Ok(e.error_response()),
    }
}

/// 示例四: 服务层 + 序列化层，错误用 `?` 交给响应边界
#[utoipa::path(
    post,
    path = "/api/example4/purchase",
    tag = "purchase",
    request_body(content = PurchaseForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "code=1000 购买成功；1101 玩家无效；1102 奖品无效；1103 余额不足")
    )
)]
pub async fn example4_purchase(
    purchase_service: web::Data<PurchaseService>,
    form: Option<web::Form<PurchaseForm>>,
) -> AppResult<HttpResponse> {
    let form = form.map(web::Form::into_inner).unwrap_or_default();
    purchase_service
        .purchase(form.player_id(), form.reward_id())
        .await?;

    Ok(HttpResponse::Ok().json(CodeResponse::success_with_message(PURCHASE_SUCCESS)))
}

#[utoipa::path(
    get,
    path = "/api/example4/info",
    tag = "purchase",
    params(PlayerQuery),
    responses(
        (status = 200, description = "code=1000 返回玩家信息；1101 玩家无效", body = PlayerInfo)
    )
)]
pub async fn example4_info(
    db: web::Data<DatabaseConnection>,
    query: web::Query<PlayerQuery>,
) -> AppResult<HttpResponse> {
    let info = match query.player_id() {
        Some(id) => PlayerInfo::from_id(db.get_ref(), id).await?,
        None => None,
    }
    .ok_or(Code::InvalidPlayer)?;

    Ok(HttpResponse::Ok().json(CodeResponse::success(info)))
}

pub fn purchase_config(cfg: &mut web::ServiceConfig) {
    cfg.route("/example3/purchase", web::post().to(example3_purchase))
        .route("/example3/info", web::get().to(example3_info))
        .route("/example4/purchase", web::post().to(example4_purchase))
        .route("/example4/info", web::get().to(example4_info));
}
