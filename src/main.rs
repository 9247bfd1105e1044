use actix_web::{App, HttpServer, middleware::Logger, web};
use chrono::Local; // timestamp in log lines
use env_logger::{Env, Target};
use std::io::Write; // for env_logger custom formatter

use koquifi_backend::{
    config::Config,
    database::{create_pool, run_migrations},
    external::BaseRpcClient,
    handlers,
    middlewares::{RequestIdMiddleware, create_cors},
    services::*,
    swagger::swagger_config,
    tasks,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
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

    let config = Config::from_toml().expect("Failed to load configuration");

    let pool = create_pool(&config.database)
        .await
        .expect("Failed to create database connection pool");

    run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");

    log::info!(
        "Connected to {} store",
        koquifi_backend::database::backend_name(&pool)
    );

    let rpc_client = BaseRpcClient::new(config.wallet.base_rpc_url.clone());

    let auth_service = AuthService::new(pool.clone());
    let user_service = UserService::new(pool.clone());
    let lottery_service = LotteryService::new(pool.clone());
    let transaction_service = TransactionService::new(pool.clone());
    let scratch_service = ScratchService::new(pool.clone(), transaction_service.clone());
    let stats_service = StatsService::new(pool.clone());

    // Close expired rounds every minute in the background.
    tasks::spawn_all(lottery_service.clone());

    log::info!(
        "Starting HTTP server at {}:{}",
        config.server.host,
        config.server.port
    );
    let bind_addr = (config.server.host.clone(), config.server.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(create_cors())
            .wrap(RequestIdMiddleware)
            .app_data(web::Data::new(config.clone()))
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::Data::new(rpc_client.clone()))
            .app_data(web::Data::new(auth_service.clone()))
            .app_data(web::Data::new(user_service.clone()))
            .app_data(web::Data::new(lottery_service.clone()))
            .app_data(web::Data::new(transaction_service.clone()))
            .app_data(web::Data::new(scratch_service.clone()))
            .app_data(web::Data::new(stats_service.clone()))
            .configure(swagger_config)
            .service(
                web::scope("/api")
                    .configure(handlers::auth_config)
                    .configure(handlers::user_config)
                    .configure(handlers::lottery_config)
                    .configure(handlers::ko_ticket_config)
                    .configure(handlers::stats_config)
                    .configure(handlers::webhook_config)
                    .configure(handlers::diagnostic_config),
            )
    })
    .bind(bind_addr)?
    .run()
    .await
}
