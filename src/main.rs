use actix_web::{App, HttpServer, middleware::Logger, web};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use minibank::{
  adapters::http::{
    AccountRouteDependencies, RequestIdMiddleware, configure_account_routes,
    configure_auth_routes, configure_transfer_routes, json_error_handler, path_error_handler,
  },
  application::account::{
    DeleteAccountUseCase, ListAccountsUseCase, LoginUseCase, LogoutUseCase,
    RegisterAccountUseCase, TransferUseCase, UpdateAccountUseCase,
  },
  domain::account::services::AccountService,
  infrastructure::{
    config::Config,
    persistence::postgres::PostgresAccountRepository,
    security::{Argon2PasswordHasher, JwtTokenService},
  },
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  // Initialize environment variables from .env file
  dotenvy::dotenv().ok();

  // Initialize tracing subscriber for logging
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "minibank=debug,actix_web=info".into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  tracing::info!("Starting minibank");

  // Load configuration; a missing signing secret or database URL aborts here
  let config = Config::load()
    .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()))?;
  tracing::info!("Configuration loaded");

  // Set up database connection pool with timeout
  let db_pool = tokio::time::timeout(
    Duration::from_secs(config.database.connect_timeout_seconds),
    PgPoolOptions::new()
      .max_connections(config.database.max_connections)
      .acquire_timeout(Duration::from_secs(config.database.acquire_timeout_seconds))
      .connect(&config.database.url),
  )
  .await
  .map_err(|_| {
    tracing::error!(
      "Database connection timed out after {} seconds. Is PostgreSQL running?",
      config.database.connect_timeout_seconds
    );
    std::io::Error::new(
      std::io::ErrorKind::TimedOut,
      format!(
        "Database connection timed out after {} seconds",
        config.database.connect_timeout_seconds
      ),
    )
  })?
  .map_err(|e| {
    tracing::error!("Failed to connect to database: {}", e);
    match e {
      sqlx::Error::Io(_) => std::io::Error::new(
        std::io::ErrorKind::ConnectionRefused,
        format!(
          "Could not connect to database. Is PostgreSQL running at {}?",
          config.database.url
        ),
      ),
      _ => std::io::Error::other(format!("Database error: {}", e)),
    }
  })?;

  tracing::info!("Database connection pool created");

  // Create the accounts table if this is a fresh database
  PostgresAccountRepository::ensure_schema(&db_pool)
    .await
    .map_err(|e| std::io::Error::other(format!("Schema init failed: {}", e)))?;
  tracing::info!("Database schema ready");

  // Initialize repository and security services
  let account_repo = Arc::new(PostgresAccountRepository::new(db_pool.clone()));
  let password_hasher = Arc::new(
    Argon2PasswordHasher::new()
      .map_err(|e| std::io::Error::other(format!("Hasher init failed: {}", e)))?,
  );
  let token_service = Arc::new(
    JwtTokenService::new(
      &config.security.jwt_secret,
      config.security.token_ttl_seconds,
    )
    .map_err(|e| std::io::Error::other(format!("Token service init failed: {}", e)))?,
  );

  // Initialize domain service
  let account_service = Arc::new(AccountService::new(
    account_repo.clone(),
    password_hasher,
    token_service,
  ));

  // Initialize use cases
  let register_use_case = Arc::new(RegisterAccountUseCase::new(account_service.clone()));
  let login_use_case = Arc::new(LoginUseCase::new(account_service.clone()));
  let logout_use_case = Arc::new(LogoutUseCase::new(account_service.clone()));
  let list_use_case = Arc::new(ListAccountsUseCase::new(account_repo.clone()));
  let update_use_case = Arc::new(UpdateAccountUseCase::new(account_repo.clone()));
  let delete_use_case = Arc::new(DeleteAccountUseCase::new(account_repo.clone()));
  let transfer_use_case = Arc::new(TransferUseCase::new());

  let server_host = config.server.host.clone();
  let server_port = config.server.port;

  tracing::info!("Starting HTTP server on {}:{}", server_host, server_port);

  HttpServer::new(move || {
    App::new()
      // Add request ID middleware
      .wrap(RequestIdMiddleware::new())
      // Add logging middleware
      .wrap(Logger::default())
      // Malformed bodies and path parameters use the uniform error envelope
      .app_data(web::JsonConfig::default().error_handler(json_error_handler))
      .app_data(web::PathConfig::default().error_handler(path_error_handler))
      // Configure account routes (the /account/{id} resource carries the auth gate)
      .configure(|cfg| {
        configure_account_routes(
          cfg,
          AccountRouteDependencies {
            register_use_case: register_use_case.clone(),
            list_use_case: list_use_case.clone(),
            update_use_case: update_use_case.clone(),
            delete_use_case: delete_use_case.clone(),
            account_service: account_service.clone(),
          },
        )
      })
      // Configure session routes
      .configure(|cfg| {
        configure_auth_routes(cfg, login_use_case.clone(), logout_use_case.clone())
      })
      // Configure the transfer route
      .configure(|cfg| configure_transfer_routes(cfg, transfer_use_case.clone()))
      // Health check endpoint
      .route("/health", web::get().to(health_check))
  })
  .bind((server_host.as_str(), server_port))?
  .run()
  .await
}

/// Health check endpoint
async fn health_check() -> &'static str {
  "OK"
}
