use actix_web::{App, HttpServer, middleware::Logger, web};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pinewood::{
  adapters::http::{RequestIdMiddleware, configure_customer_routes},
  application::customer::{
    AddCustomerUseCase, DeleteCustomerUseCase, GetCustomerUseCase, ListCustomersUseCase,
    UpdateCustomerUseCase,
  },
  domain::customer::CustomerService,
  infrastructure::{config::Config, persistence::postgres::PostgresCustomerRepository},
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  // Initialize environment variables from .env file
  dotenvy::dotenv().ok();

  // Initialize tracing subscriber for logging
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "pinewood=debug,actix_web=info".into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  tracing::info!("Starting Pinewood customer API");

  // Load configuration
  let config = Config::load().expect("Failed to load configuration");
  tracing::info!("Configuration loaded successfully");

  // Set up database connection pool with timeout
  tracing::info!("Connecting to database: {}", config.database.url);

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

  // Run database migrations
  tracing::info!("Running database migrations");
  sqlx::migrate!("./migrations")
    .run(&db_pool)
    .await
    .expect("Failed to run database migrations");
  tracing::info!("Database migrations completed");

  // Initialize repository and domain service
  let customer_repo = Arc::new(PostgresCustomerRepository::new(db_pool.clone()));
  let customer_service = Arc::new(CustomerService::new(customer_repo));

  // Initialize use cases
  let list_customers_use_case = Arc::new(ListCustomersUseCase::new(customer_service.clone()));
  let get_customer_use_case = Arc::new(GetCustomerUseCase::new(customer_service.clone()));
  let add_customer_use_case = Arc::new(AddCustomerUseCase::new(customer_service.clone()));
  let update_customer_use_case = Arc::new(UpdateCustomerUseCase::new(customer_service.clone()));
  let delete_customer_use_case = Arc::new(DeleteCustomerUseCase::new(customer_service.clone()));

  let server_host = config.server.host.clone();
  let server_port = config.server.port;

  tracing::info!("Starting HTTP server on {}:{}", server_host, server_port);

  // Create and start the HTTP server
  HttpServer::new(move || {
    App::new()
      // Add request ID middleware
      .wrap(RequestIdMiddleware::new())
      // Add logging middleware
      .wrap(Logger::default())
      // Configure customer API routes
      .service(web::scope("/api/customer").configure(|cfg| {
        configure_customer_routes(
          cfg,
          list_customers_use_case.clone(),
          get_customer_use_case.clone(),
          add_customer_use_case.clone(),
          update_customer_use_case.clone(),
          delete_customer_use_case.clone(),
        )
      }))
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
