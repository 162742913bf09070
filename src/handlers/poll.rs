use actix_web::{web, HttpResponse, Result, ResponseError};
use sea_orm::DatabaseConnection;

use crate::entities::poll_record_entity as poll_records;
use crate::error::{AppError, AppResult};
use crate::models::*;
use crate::services::PollService;
use crate::utils::validate_poll;

/// 示例一: 校验与写库都在 handler 中完成，结果码就地返回
#[utoipa::path(
    post,
    path = "/api/example1/poll",
    tag = "poll",
    request_body(content = PollForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "code=1000 投票成功；1001-1004 参数错误")
    )
)]
pub async fn example1_poll(
    db: web::Data<DatabaseConnection>,
    form: Option<web::Form<PollForm>>,
) -> Result<HttpResponse> {
    let form = form.map(web::Form::into_inner).unwrap_or_default();
    if let Err(code) = validate_poll(form.email(), form.brand()) {
        return Ok(HttpResponse::Ok().json(CodeResponse::from_code(code)));
    }

    match poll_records::Model::create(db.get_ref(), form.email(), form.brand()).await {
        Ok(record) => Ok(HttpResponse::Ok().json(CodeResponse::success_with_message(
            record.thank_you_message(),
        ))),
        Err(e) => Ok(AppError::from(e).error_response()),
    }
}

/// 示例二: 逻辑下沉到 PollService，错误用 `?` 交给响应边界
#[utoipa::path(
    post,
    path = "/api/example2/poll",
    tag = "poll",
    request_body(content = PollForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "code=1000 投票成功；1001-1004 参数错误")
    )
)]
pub async fn example2_poll(
    poll_service: web::Data<PollService>,
    form: Option<web::Form<PollForm>>,
) -> AppResult<HttpResponse> {
    let form = form.map(web::Form::into_inner).unwrap_or_default();
    let record = poll_service.poll(form.email(), form.brand()).await?;

    Ok(HttpResponse::Ok().json(CodeResponse::success_with_message(
        record.thank_you_message(),
    )))
}

pub fn poll_config(cfg: &mut web::ServiceConfig) {
    cfg.route("/example1/poll", web::post().to(example1_poll))
        .route("/example2/poll", web::post().to(example2_poll));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::setup_db;
    use actix_web::{test, App};
    use serde_json::Value;

    #[actix_web::test]
    async fn test_poll_endpoints() {
        let db = setup_db().await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(db.clone()))
                .app_data(web::Data::new(PollService::new(db.clone())))
                .service(web::scope("/api").configure(poll_config)),
        )
        .await;

        for uri in ["/api/example1/poll", "/api/example2/poll"] {
            let req = test::TestRequest::post()
                .uri(uri)
                .set_form(vec![("user_email", "user1@qq.com"), ("car_brand", "BMW")])
                .to_request();
            let ret: Value = test::call_and_read_body_json(&app, req).await;
            assert_eq!(ret["code"], 1000);
            assert!(
                ret["message"]
                    .as_str()
                    .unwrap()
                    .starts_with("Thank you for your poll. id = ")
            );

            let req = test::TestRequest::post()
                .uri(uri)
                .set_form(vec![("user_email", ""), ("car_brand", "BMW")])
                .to_request();
            let ret: Value = test::call_and_read_body_json(&app, req).await;
            assert_eq!(ret["code"], 1001);
            assert_eq!(ret["message"], "Please enter your email.");

            let req = test::TestRequest::post()
                .uri(uri)
                .set_form(vec![("user_email", "user1@qq.com"), ("car_brand", "")])
                .to_request();
            let ret: Value = test::call_and_read_body_json(&app, req).await;
            assert_eq!(ret["code"], 1002);
        }
    }

    #[actix_web::test]
    async fn test_poll_without_form_body() {
        let db = setup_db().await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(db.clone()))
                .app_data(web::Data::new(PollService::new(db.clone())))
                .service(web::scope("/api").configure(poll_config)),
        )
        .await;

        for uri in ["/api/example1/poll", "/api/example2/poll"] {
            let req = test::TestRequest::post().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), actix_web::http::StatusCode::OK);
            let ret: Value = test::read_body_json(resp).await;
            assert_eq!(ret["code"], 1001, "{uri}");

            // JSON 请求体不当作表单解析
            let req = test::TestRequest::post()
                .uri(uri)
                .set_json(serde_json::json!({"user_email": "user1@qq.com", "car_brand": "BMW"}))
                .to_request();
            let ret: Value = test::call_and_read_body_json(&app, req).await;
            assert_eq!(ret["code"], 1001, "{uri}");
        }
    }

    #[actix_web::test]
    async fn test_poll_missing_fields_count_as_empty() {
        let db = setup_db().await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(db.clone()))
                .app_data(web::Data::new(PollService::new(db.clone())))
                .service(web::scope("/api").configure(poll_config)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/example2/poll")
            .set_form(vec![("car_brand", "Benz")])
            .to_request();
        let ret: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(ret["code"], 1001);

        let req = test::TestRequest::post()
            .uri("/api/example1/poll")
            .set_form(vec![("user_email", "user1@qq.com"), ("car_brand", "Tesla")])
            .to_request();
        let ret: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(ret["code"], 1004);
    }
}
