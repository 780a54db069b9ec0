use actix_web::{App, HttpServer, middleware::Logger, web};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use userbase::{
  adapters::http::{RequestIdMiddleware, configure_account_routes, health_check},
  application::account::{LoginAccountUseCase, RegisterAccountUseCase},
  domain::account::{AccountService, CredentialStore},
  infrastructure::{
    config::{Config, DatabaseConfig, StorageBackend},
    persistence::{memory::InMemoryCredentialStore, postgres::PostgresCredentialStore},
    security::Argon2PasswordHasher,
  },
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  dotenvy::dotenv().ok();

  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "userbase=debug,actix_web=info".into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  tracing::info!("Starting userbase");

  let config = Config::load().map_err(|e| {
    tracing::error!("Failed to load configuration: {}", e);
    std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
  })?;
  tracing::info!("Configuration loaded successfully");

  let store: Arc<dyn CredentialStore> = match config.storage.backend {
    StorageBackend::Postgres => {
      let pool = connect_database(&config.database).await?;
      Arc::new(PostgresCredentialStore::new(pool))
    }
    StorageBackend::Memory => {
      tracing::warn!("Using in-memory credential store, accounts will not survive a restart");
      Arc::new(InMemoryCredentialStore::new())
    }
  };

  let password_hasher = Arc::new(
    Argon2PasswordHasher::new(config.security.hashing_params()).map_err(|e| {
      tracing::error!("Invalid password hashing parameters: {}", e);
      std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?,
  );

  let account_service = Arc::new(AccountService::new(
    store,
    password_hasher,
    config.security.account_service_config(),
  ));

  let register_use_case = Arc::new(RegisterAccountUseCase::new(account_service.clone()));
  let login_use_case = Arc::new(LoginAccountUseCase::new(account_service));

  let server_host = config.server.host.clone();
  let server_port = config.server.port;

  tracing::info!("Starting HTTP server on {}:{}", server_host, server_port);

  HttpServer::new(move || {
    App::new()
      .wrap(RequestIdMiddleware::new())
      .wrap(Logger::default())
      .service(web::scope("/api/v1/account").configure(|cfg| {
        configure_account_routes(cfg, register_use_case.clone(), login_use_case.clone())
      }))
      .route("/health", web::get().to(health_check))
  })
  .bind((server_host.as_str(), server_port))?
  .run()
  .await
}

/// Connects the PostgreSQL pool and, if enabled, applies pending migrations
async fn connect_database(config: &DatabaseConfig) -> std::io::Result<sqlx::PgPool> {
  tracing::info!("Connecting to database");

  let pool = tokio::time::timeout(
    Duration::from_secs(config.connect_timeout_seconds),
    PgPoolOptions::new()
      .max_connections(config.max_connections)
      .acquire_timeout(Duration::from_secs(config.acquire_timeout_seconds))
      .connect(&config.url),
  )
  .await
  .map_err(|_| {
    tracing::error!(
      "Database connection timed out after {} seconds. Is PostgreSQL running?",
      config.connect_timeout_seconds
    );
    std::io::Error::new(
      std::io::ErrorKind::TimedOut,
      format!(
        "Database connection timed out after {} seconds",
        config.connect_timeout_seconds
      ),
    )
  })?
  .map_err(|e| {
    tracing::error!("Failed to connect to database: {}", e);
    match e {
      sqlx::Error::Io(_) => std::io::Error::new(
        std::io::ErrorKind::ConnectionRefused,
        "Could not connect to database. Is PostgreSQL running?",
      ),
      _ => std::io::Error::other(format!("Database error: {}", e)),
    }
  })?;

  tracing::info!("Database connection pool created");

  if config.auto_migrate {
    tracing::info!("Running database migrations");
    sqlx::migrate!("./migrations").run(&pool).await.map_err(|e| {
      tracing::error!("Failed to run database migrations: {}", e);
      std::io::Error::other(format!("Migration error: {}", e))
    })?;
    tracing::info!("Database migrations completed");
  }

  Ok(pool)
}
