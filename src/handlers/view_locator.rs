use actix_web::{web, HttpResponse, Result};

use crate::error::{Code, MsgError};
use crate::models::*;
use crate::services::ViewLocatorService;

/// 结果码由服务逐步返回
#[utoipa::path(
    get,
    path = "/api/error/example1/locate_file",
    tag = "locate_file",
    params(LocateFileQuery),
    responses(
        (status = 200, description = "code=1000 成功；2001 文件不存在；2002 非 JSON；2003 数据库错误；2004 缓存错误", body = MsgResponse)
    )
)]
pub async fn example1_locate_file(
    locator: web::Data<ViewLocatorService>,
    query: web::Query<LocateFileQuery>,
) -> Result<HttpResponse> {
    let ret = locator.locate_file_checked(query.path()).await;
    Ok(HttpResponse::Ok().json(ret))
}

/// 错误向上抛出，由 `MsgError` 统一翻译
#[utoipa::path(
    get,
    path = "/api/error/example2/locate_file",
    tag = "locate_file",
    params(LocateFileQuery),
    responses(
        (status = 200, description = "code=1000 成功；2001 文件不存在；2002 非 JSON；2003 数据库错误；2004 缓存错误", body = MsgResponse)
    )
)]
pub async fn example2_locate_file(
    locator: web::Data<ViewLocatorService>,
    query: web::Query<LocateFileQuery>,
) -> Result<HttpResponse, MsgError> {
    locator.locate_file(query.path()).await?;
    Ok(HttpResponse::Ok().json(MsgResponse::from(Code::Success)))
}

pub fn view_locator_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/error")
            .route("/example1/locate_file", web::get().to(example1_locate_file))
            .route("/example2/locate_file", web::get().to(example2_locate_file)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::external::{CounterCache, MemoryCache};
    use crate::services::cache_key;
    use crate::test_support::setup_db;
    use actix_web::{test, App};
    use serde_json::Value;
    use std::io::Write;
    use std::sync::Arc;

    #[actix_web::test]
    async fn test_locate_file_endpoints() {
        let db = setup_db().await;
        let cache = Arc::new(MemoryCache::new());
        let locator = ViewLocatorService::new(db.clone(), cache.clone());
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(locator))
                .service(web::scope("/api").configure(view_locator_config)),
        )
        .await;

        let mut json_file = tempfile::NamedTempFile::new().unwrap();
        json_file.write_all(br#"{"ok": true}"#).unwrap();
        let json_path = json_file.path().to_str().unwrap().to_string();

        let mut text_file = tempfile::NamedTempFile::new().unwrap();
        text_file.write_all(b"plain text").unwrap();
        let text_path = text_file.path().to_str().unwrap().to_string();

        for variant in ["example1", "example2"] {
            let uri = format!("/api/error/{variant}/locate_file");

            let req = test::TestRequest::get()
                .uri(&format!("{uri}?file_path={json_path}"))
                .to_request();
            let ret: Value = test::call_and_read_body_json(&app, req).await;
            assert_eq!(ret["code"], 1000, "{variant}");
            assert_eq!(ret["msg"], "Success");

            let req = test::TestRequest::get()
                .uri(&format!("{uri}?file_path={text_path}"))
                .to_request();
            let ret: Value = test::call_and_read_body_json(&app, req).await;
            assert_eq!(ret["code"], 2002, "{variant}");
            assert_eq!(ret["msg"], "File content is not valid json");

            let req = test::TestRequest::get().uri(&uri).to_request();
            let ret: Value = test::call_and_read_body_json(&app, req).await;
            assert_eq!(ret["code"], 2001, "{variant}");
            assert_eq!(ret["msg"], "File not found");
        }

        assert_eq!(cache.get(&cache_key(&json_path)).await.unwrap(), Some(2));
    }
}
