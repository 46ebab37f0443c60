use sea_orm::DatabaseConnection;

use crate::server::config::{Config, DEFAULT_MEDIA_URL, DEFAULT_PAGE_SIZE};

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    /// Prefix prepended to stored image paths, ending in `/`
    pub media_url: String,
    pub page_size: u64,
}

impl AppState {
    pub fn new(db: DatabaseConnection, config: &Config) -> Self {
        Self {
            db,
            media_url: config.media_url.clone(),
            page_size: config.page_size,
        }
    }
}

impl From<DatabaseConnection> for AppState {
    fn from(db: DatabaseConnection) -> Self {
        Self {
            db,
            media_url: DEFAULT_MEDIA_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}
