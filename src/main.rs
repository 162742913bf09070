use actix_web::{App, HttpServer, middleware::Logger, web};
use chrono::Local; // timestamp in log lines
use env_logger::{Env, Target};
use std::io::Write; // for env_logger custom formatter
use std::sync::Arc;

use playground_backend::{
    config::Config,
    database::{create_pool, run_migrations},
    external::{CounterCache, MemoryCache, RedisCache},
    handlers,
    middlewares::create_cors,
    services::*,
    swagger::swagger_config,
};

async fn build_cache(url: Option<&str>) -> anyhow::Result<Arc<dyn CounterCache>> {
    match url {
        Some(url) => {
            let cache = RedisCache::connect(url).await?;
            log::info!("Connected to view counter cache at {url}");
            Ok(Arc::new(cache))
        }
        None => {
            log::warn!("REDIS_URL not configured, view counters are kept in process memory");
            Ok(Arc::new(MemoryCache::new()))
        }
    }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let ts = Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z");
            let level = record.level().as_str().to_ascii_lowercase();
            let msg_json = serde_json::to_string(&format!("{}", record.args()))
                .unwrap_or_else(|_| "\"<invalid utf8>\"".to_string());
            writeln!(
                buf,
                "{{\"timestamp\":\"{}\",\"level\":\"{}\",\"message\":{},\"target\":\"{}\"}}",
                ts,
                level,
                msg_json,
                record.target(),
            )
        })
        .target(Target::Stdout)
        .init();

    // 加载配置
    let config = Config::from_toml()?;

    // 创建数据库连接池并迁移
    let pool = create_pool(&config.database).await?;
    run_migrations(&pool).await?;

    let cache = build_cache(config.cache.url.as_deref()).await?;

    // 创建服务
    let poll_service = PollService::new(pool.clone());
    let purchase_service = PurchaseService::new(pool.clone());
    let view_locator_service = ViewLocatorService::new(pool.clone(), cache);

    log::info!(
        "Starting HTTP server at {}:{}",
        config.server.host,
        config.server.port
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(create_cors())
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::Data::new(poll_service.clone()))
            .app_data(web::Data::new(purchase_service.clone()))
            .app_data(web::Data::new(view_locator_service.clone()))
            .configure(swagger_config)
            .service(
                web::scope("/api")
                    .configure(handlers::poll_config)
                    .configure(handlers::purchase_config)
                    .configure(handlers::view_locator_config),
            )
    })
    .bind((config.server.host.as_str(), config.server.port))?
    .run()
    .await?;

    Ok(())
}
