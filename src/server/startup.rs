use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use tower_sessions::SessionManagerLayer;
use tower_sessions_redis_store::RedisStore;

use crate::server::{
    config::Config,
    error::Error,
    service::{lookup::LookupSyncService, user::UserService},
};

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Connect to Valkey/Redis and configure session management
pub async fn connect_to_session(
    config: &Config,
) -> Result<SessionManagerLayer<RedisStore<tower_sessions_redis_store::fred::prelude::Pool>>, Error>
{
    use time::Duration;
    use tower_sessions::{cookie::SameSite, Expiry};
    use tower_sessions_redis_store::fred::prelude::*;

    let config = Config::from_url(&config.valkey_url)?;
    let pool = Pool::new(config, None, None, None, 6)?;

    pool.connect();
    pool.wait_for_connect().await?;

    let session_store = RedisStore::new(pool);

    // Secure cookies outside debug builds
    let secure_cookies = !cfg!(debug_assertions);

    let session = SessionManagerLayer::new(session_store)
        .with_secure(secure_cookies)
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)));

    Ok(session)
}

/// Create or reset the configured staff account, if any
pub async fn ensure_bootstrap_user(config: &Config, db: &DatabaseConnection) -> Result<(), Error> {
    let Some((username, password)) = &config.admin_credentials else {
        return Ok(());
    };

    let (_, created) = UserService::new(db).ensure_user(username, password).await?;
    tracing::info!(username = %username, created, "Bootstrap staff user ready");

    Ok(())
}

/// Run the lookup table synchronisation when enabled
pub async fn sync_lookups(config: &Config, db: &DatabaseConnection) -> Result<(), Error> {
    if !config.sync_lookups_on_startup {
        return Ok(());
    }

    let report = LookupSyncService::new(db).sync().await?;
    tracing::info!(
        container_types = report.container_types_created,
        pavilions = report.pavilions_created,
        ships = report.ships_created,
        entries = report.entries_linked,
        "Lookup tables synchronised"
    );

    Ok(())
}
