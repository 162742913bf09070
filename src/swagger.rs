use actix_web::web;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers;
use crate::models::*;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::poll::example1_poll,
        handlers::poll::example2_poll,
        handlers::purchase::example3_purchase,
        handlers::purchase::example3_info,
        handlers::purchase::example4_purchase,
        handlers::purchase::example4_info,
        handlers::view_locator::example1_locate_file,
        handlers::view_locator::example2_locate_file,
    ),
    components(
        schemas(
            PollForm,
            PurchaseForm,
            PlayerInfo,
            MsgResponse,
        )
    ),
    tags(
        (name = "poll", description = "Car brand poll API"),
        (name = "purchase", description = "Reward purchase API"),
        (name = "locate_file", description = "File view locator API"),
    ),
    info(
        title = "Playground Backend API",
        version = "0.1.0",
        description = "Layering and error handling playground endpoints"
    )
)]
pub struct ApiDoc;

pub fn swagger_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    )
    .route(
        "/swagger-ui",
        web::get().to(|| async {
            actix_web::HttpResponse::Found()
                .append_header(("Location", "/swagger-ui/"))
                .finish()
        }),
    );
}
