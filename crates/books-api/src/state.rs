use std::sync::Arc;

use books_core::BookService;
use books_security::Credentials;
use books_shared::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub books: Arc<BookService>,
    pub config: AppConfig,
}

impl AppState {
    /// Fresh, empty catalog that accepts the credential pair from `config.auth`.
    pub fn new(config: AppConfig) -> Self {
        let credentials = Credentials::new(
            config.auth.username.clone(),
            config.auth.password.clone(),
        );
        Self {
            books: Arc::new(BookService::new(credentials)),
            config,
        }
    }

    pub fn cookie_name(&self) -> &str {
        &self.config.auth.cookie_name
    }
}
