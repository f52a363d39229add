//! Async HTTP client for the book catalog service.
//!
//! ```no_run
//! use books_client::{BookFields, BooksClient, ListParams};
//!
//! # async fn demo() -> Result<(), books_client::ClientError> {
//! let mut client = BooksClient::new("http://127.0.0.1:7000");
//! client.login("test_user", "test_password").await?;
//!
//! client.add_book(&BookFields::new("Eugene Onegin", "Pushkin")).await?;
//! let books = client.list_books(&ListParams::by_title()).await?;
//! assert!(!books.is_empty());
//! # Ok(())
//! # }
//! ```

use books_core::Book;
use books_shared::constants::DEFAULT_COOKIE_NAME;
use reqwest::{header::COOKIE, IntoUrl, Method, RequestBuilder, Response, StatusCode, Url};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server answered {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Http(e) => e.status().map(|s| s.as_u16()),
            ClientError::InvalidUrl(_) => None,
        }
    }
}

/// Query for `GET /books`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
}

impl ListParams {
    pub fn by_title() -> Self {
        Self {
            sort: Some("by_title".to_string()),
            limit: None,
        }
    }

    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Form fields for create and update. Unset fields are not sent.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BookFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

impl BookFields {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            author: Some(author.into()),
        }
    }

    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            author: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
    pub books: usize,
    pub sessions: usize,
}

#[derive(Deserialize)]
struct LoginBody {
    auth_cookie: String,
}

#[derive(Deserialize)]
struct DeletedBody {
    deleted: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Lookup {
    Found(Book),
    Missing {},
}

pub struct BooksClient {
    http: reqwest::Client,
    base_url: String,
    cookie_name: String,
    session: Option<String>,
}

impl BooksClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            cookie_name: DEFAULT_COOKIE_NAME.to_string(),
            session: None,
        }
    }

    pub fn with_cookie_name(mut self, name: impl Into<String>) -> Self {
        self.cookie_name = name.into();
        self
    }

    /// Reuse a token obtained elsewhere instead of logging in.
    pub fn with_session(mut self, token: impl Into<String>) -> Self {
        self.session = Some(token.into());
        self
    }

    pub fn session(&self) -> Option<&str> {
        self.session.as_deref()
    }

    /// `GET /login` with HTTP Basic. The returned token is kept and sent as
    /// the session cookie on every later call.
    pub async fn login(&mut self, username: &str, password: &str) -> Result<String, ClientError> {
        let response = self
            .http
            .get(self.url("/login"))
            .basic_auth(username, Some(password))
            .send()
            .await?;
        let body: LoginBody = decode(response).await?;
        debug!("Logged in as {}", username);
        self.session = Some(body.auth_cookie.clone());
        Ok(body.auth_cookie)
    }

    pub async fn health(&self) -> Result<HealthStatus, ClientError> {
        let response = self.http.get(self.url("/health")).send().await?;
        decode(response).await
    }

    pub async fn list_books(&self, params: &ListParams) -> Result<Vec<Book>, ClientError> {
        let response = self
            .request(Method::GET, self.url("/books"))
            .query(params)
            .send()
            .await?;
        decode(response).await
    }

    /// `None` when the service answers `{}` for an unknown id.
    pub async fn get_book(&self, id: &str) -> Result<Option<Book>, ClientError> {
        let response = self
            .request(Method::GET, self.book_url(id)?)
            .send()
            .await?;
        match decode(response).await? {
            Lookup::Found(book) => Ok(Some(book)),
            Lookup::Missing {} => Ok(None),
        }
    }

    pub async fn add_book(&self, fields: &BookFields) -> Result<Book, ClientError> {
        let response = self
            .request(Method::POST, self.url("/add_book"))
            .form(fields)
            .send()
            .await?;
        decode(response).await
    }

    pub async fn update_book(&self, id: &str, fields: &BookFields) -> Result<Book, ClientError> {
        let response = self
            .request(Method::PUT, self.book_url(id)?)
            .form(fields)
            .send()
            .await?;
        decode(response).await
    }

    /// Returns the id echoed back by the service.
    pub async fn delete_book(&self, id: &str) -> Result<String, ClientError> {
        let response = self
            .request(Method::DELETE, self.book_url(id)?)
            .send()
            .await?;
        let body: DeletedBody = decode(response).await?;
        Ok(body.deleted)
    }

    pub async fn delete_all_books(&self) -> Result<(), ClientError> {
        let response = self.request(Method::DELETE, self.url("/delete_books")).send().await?;
        decode::<serde_json::Value>(response).await?;
        Ok(())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `/books/{id}` with the id percent-encoded as a single path segment.
    fn book_url(&self, id: &str) -> Result<Url, ClientError> {
        let mut url =
            Url::parse(&self.url("/books")).map_err(|e| ClientError::InvalidUrl(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl(self.base_url.clone()))?
            .push(id);
        Ok(url)
    }

    fn request(&self, method: Method, url: impl IntoUrl) -> RequestBuilder {
        let builder = self.http.request(method, url);
        match &self.session {
            Some(token) => builder.header(COOKIE, format!("{}={}", self.cookie_name, token)),
            None => builder,
        }
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json::<T>().await?);
    }

    let text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&text)
        .map(|body| body.message)
        .unwrap_or_else(|_| fallback_message(status, text));
    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}

fn fallback_message(status: StatusCode, text: String) -> String {
    if text.is_empty() {
        status.canonical_reason().unwrap_or("unknown error").to_string()
    } else {
        text
    }
}
