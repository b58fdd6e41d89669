pub mod api;
pub mod health;
pub mod modules;
pub mod shared;
pub use modules::account;
pub use modules::friendship;

use crate::account::adapter::outgoing::security::Argon2Hasher;
use crate::account::adapter::outgoing::{
    AccountQueryPostgres, AccountRepositoryPostgres, AuthTokenRepositoryPostgres,
};
use crate::account::application::account_use_cases::AccountUseCases;
use crate::account::application::helpers::AccountIdentityResolver;
use crate::account::application::ports::incoming::access_policy::AccessPolicy;
use crate::account::application::ports::outgoing::password_hasher::PasswordHasher;
use crate::account::application::services::access::{AllowAllPolicy, BearerTokenPolicy};
use crate::account::application::services::{
    CreateAccountService, LoginService, ResetPasswordService, SearchAccountsService,
};
use crate::api::openapi::ApiDoc;
use crate::friendship::adapter::outgoing::{
    FriendRequestQueryPostgres, FriendRequestRepositoryPostgres,
};
use crate::friendship::application::friendship_use_cases::FriendshipUseCases;
use crate::friendship::application::services::{
    AcceptFriendRequestService, ListFriendsService, ListPendingFriendRequestsService,
    RejectFriendRequestService, SendFriendRequestService,
};
use crate::shared::api::{custom_json_config, custom_query_config};
use crate::shared::config::{AccessPolicyKind, AppConfig};

use actix_web::{middleware::NormalizePath, web, App, HttpServer};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub account: AccountUseCases,
    pub friendship: FriendshipUseCases,
    pub access_policy: Arc<dyn AccessPolicy + Send + Sync>,
}

impl AppState {
    pub fn from_connection(
        db: Arc<DatabaseConnection>,
        config: &AppConfig,
    ) -> Result<Self, argon2::Error> {
        let account_query = AccountQueryPostgres::new(Arc::clone(&db));
        let account_repo = AccountRepositoryPostgres::new(Arc::clone(&db));
        let token_repo = AuthTokenRepositoryPostgres::new(Arc::clone(&db));
        let request_repo = FriendRequestRepositoryPostgres::new(Arc::clone(&db));
        let request_query = FriendRequestQueryPostgres::new(Arc::clone(&db));

        let hasher: Arc<dyn PasswordHasher + Send + Sync> =
            Arc::new(Argon2Hasher::from_settings(&config.argon2)?);

        let resolver = AccountIdentityResolver::new(Arc::new(account_query.clone()));

        let access_policy: Arc<dyn AccessPolicy + Send + Sync> = match config.access_policy {
            AccessPolicyKind::Open => Arc::new(AllowAllPolicy),
            AccessPolicyKind::Token => Arc::new(BearerTokenPolicy::new(
                token_repo.clone(),
                account_query.clone(),
            )),
        };

        let account = AccountUseCases {
            create: Arc::new(CreateAccountService::new(
                account_repo.clone(),
                Arc::clone(&hasher),
            )),
            login: Arc::new(LoginService::new(
                account_query.clone(),
                token_repo,
                Arc::clone(&hasher),
            )),
            reset_password: Arc::new(ResetPasswordService::new(
                account_query.clone(),
                account_repo,
                hasher,
            )),
            search: Arc::new(SearchAccountsService::new(account_query.clone())),
        };

        let friendship = FriendshipUseCases {
            send: Arc::new(SendFriendRequestService::new(
                account_query,
                request_repo.clone(),
            )),
            accept: Arc::new(AcceptFriendRequestService::new(request_repo.clone())),
            reject: Arc::new(RejectFriendRequestService::new(request_repo)),
            list_friends: Arc::new(ListFriendsService::new(
                resolver.clone(),
                request_query.clone(),
            )),
            list_pending: Arc::new(ListPendingFriendRequestsService::new(
                resolver,
                request_query,
            )),
        };

        Ok(Self {
            account,
            friendship,
            access_policy,
        })
    }
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let config = AppConfig::from_env().map_err(|e| {
        error!(error = %e, "Invalid configuration");
        io::Error::new(io::ErrorKind::InvalidInput, e.to_string())
    })?;

    let server_url = config.server_url();

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(config.db_max_connections)
        .min_connections(config.db_min_connections)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt).await.map_err(|e| {
        error!(error = %e, "Failed to connect to database");
        io::Error::new(io::ErrorKind::ConnectionRefused, e.to_string())
    })?;

    if config.run_migrations {
        Migrator::up(&conn, None).await.map_err(|e| {
            error!(error = %e, "Migrations failed");
            io::Error::other(e.to_string())
        })?;
        info!("Migrations applied");
    }

    let db_arc = Arc::new(conn);

    let state = AppState::from_connection(Arc::clone(&db_arc), &config).map_err(|e| {
        error!(error = %e, "Invalid Argon2 parameters");
        io::Error::new(io::ErrorKind::InvalidInput, e.to_string())
    })?;

    info!(
        address = %server_url,
        access_policy = ?config.access_policy,
        "Server listening"
    );

    HttpServer::new(move || {
        App::new()
            .app_data(custom_json_config())
            .app_data(custom_query_config())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .configure(init_app)
    })
    .bind(server_url)?
    .run()
    .await
}

/// Swagger UI plus the API routes. Trailing slashes are trimmed on the API
/// routes only, since the Swagger UI entry point is `/swagger-ui/`.
pub fn init_app(cfg: &mut web::ServiceConfig) {
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    );
    cfg.service(
        web::scope("")
            .wrap(NormalizePath::trim())
            .configure(init_routes),
    );
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Accounts
    cfg.service(crate::account::adapter::incoming::web::routes::signup_handler);
    cfg.service(crate::account::adapter::incoming::web::routes::login_handler);
    cfg.service(crate::account::adapter::incoming::web::routes::password_reset_handler);
    cfg.service(crate::account::adapter::incoming::web::routes::search_accounts_handler);
    // Friendship
    cfg.service(crate::friendship::adapter::incoming::web::routes::send_friend_request_handler);
    cfg.service(crate::friendship::adapter::incoming::web::routes::accept_friend_request_handler);
    cfg.service(crate::friendship::adapter::incoming::web::routes::reject_friend_request_handler);
    cfg.service(crate::friendship::adapter::incoming::web::routes::list_friends_handler);
    cfg.service(
        crate::friendship::adapter::incoming::web::routes::list_pending_friend_requests_handler,
    );
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
