//! Configuration management

use config::{
    builder::DefaultState, Config, ConfigBuilder, ConfigError, Environment, File, FileFormat,
};
use serde::Deserialize;

use crate::constants::{DEFAULT_COOKIE_NAME, DEFAULT_PASSWORD, DEFAULT_PORT, DEFAULT_USERNAME};
use crate::error::AppError;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub auth: AuthSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: String,
    pub host: String,
    pub port: u16,
    pub name: String,
}

/// The single credential pair accepted by `/login` and the cookie that
/// carries the issued session token.
#[derive(Debug, Deserialize, Clone)]
pub struct AuthSettings {
    pub username: String,
    pub password: String,
    pub cookie_name: String,
}

impl AppConfig {
    /// Defaults, then `config/default.*`, then `config/{BOOKS_ENV}.*`, then
    /// `BOOKS_`-prefixed environment variables (`BOOKS_AUTH__PASSWORD`).
    pub fn load() -> Result<Self, AppError> {
        let env = std::env::var("BOOKS_ENV").unwrap_or_else(|_| "development".into());
        let builder = Self::defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                Environment::with_prefix("BOOKS")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );
        Self::finish(builder)
    }

    /// Defaults overlaid with an inline TOML document. No files, no environment.
    pub fn from_toml_str(toml: &str) -> Result<Self, AppError> {
        let builder = Self::defaults()?.add_source(File::from_str(toml, FileFormat::Toml));
        Self::finish(builder)
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("app.env", "development")?
            .set_default("app.host", "0.0.0.0")?
            .set_default("app.port", i64::from(DEFAULT_PORT))?
            .set_default("app.name", "books-server")?
            .set_default("auth.username", DEFAULT_USERNAME)?
            .set_default("auth.password", DEFAULT_PASSWORD)?
            .set_default("auth.cookie_name", DEFAULT_COOKIE_NAME)
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> Result<Self, AppError> {
        let config: Self = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), AppError> {
        if self.auth.username.is_empty() {
            return Err(AppError::InvalidConfig("auth.username must not be empty".into()));
        }
        let name = &self.auth.cookie_name;
        if name.is_empty()
            || name
                .chars()
                .any(|c| c.is_whitespace() || c == ';' || c == '=' || c == ',')
        {
            return Err(AppError::InvalidConfig(format!(
                "auth.cookie_name is not a valid cookie name: {:?}",
                name
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config.app.port, 7000);
        assert_eq!(config.app.host, "0.0.0.0");
        assert_eq!(config.auth.username, "test_user");
        assert_eq!(config.auth.password, "test_password");
        assert_eq!(config.auth.cookie_name, "my_cookie");
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_toml_str(
            r#"
            [app]
            port = 8088

            [auth]
            username = "librarian"
            cookie_name = "sid"
            "#,
        )
        .unwrap();
        assert_eq!(config.app.port, 8088);
        assert_eq!(config.auth.username, "librarian");
        assert_eq!(config.auth.password, "test_password");
        assert_eq!(config.auth.cookie_name, "sid");
    }

    #[test]
    fn test_rejects_bad_cookie_name() {
        let err = AppConfig::from_toml_str("[auth]\ncookie_name = \"a b\"").unwrap_err();
        assert!(matches!(err, AppError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_empty_username() {
        let err = AppConfig::from_toml_str("[auth]\nusername = \"\"").unwrap_err();
        assert!(matches!(err, AppError::InvalidConfig(_)));
    }
}
