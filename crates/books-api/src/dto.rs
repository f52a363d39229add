//! Request and response bodies

use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Multipart, Query, Request},
    http::{header::CONTENT_TYPE, request::Parts, HeaderMap, Uri},
    Form,
};
use books_core::{Book, BookPatch, ListQuery};
use serde::Serialize;

use crate::error::ApiError;

/// Decoded `key=value` pairs in arrival order.
type Pairs = Vec<(String, String)>;

/// First value sent for `key`. Later repeats are ignored.
fn first(pairs: &[(String, String)], key: &str) -> Option<String> {
    pairs
        .iter()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.clone())
}

fn query_pairs(uri: &Uri) -> Result<Pairs, ApiError> {
    Query::<Pairs>::try_from_uri(uri)
        .map(|Query(pairs)| pairs)
        .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))
}

/// `GET /books` query string. Both values are kept as raw text so that
/// junk input is ignored instead of rejected.
#[derive(Debug, Default)]
pub struct ListParams {
    pub sort: Option<String>,
    pub limit: Option<String>,
}

impl ListParams {
    pub fn to_query(&self) -> ListQuery {
        ListQuery::from_raw(self.sort.as_deref(), self.limit.as_deref())
    }
}

impl<S: Send + Sync> FromRequestParts<S> for ListParams {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let pairs = query_pairs(&parts.uri)?;
        Ok(Self {
            sort: first(&pairs, "sort"),
            limit: first(&pairs, "limit"),
        })
    }
}

#[derive(Debug, PartialEq, Eq)]
enum BodyKind {
    UrlEncoded,
    Multipart,
    Other,
}

fn body_kind(headers: &HeaderMap) -> BodyKind {
    let mime = headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(str::trim)
        .unwrap_or_default();

    if mime.eq_ignore_ascii_case("application/x-www-form-urlencoded") {
        BodyKind::UrlEncoded
    } else if mime.eq_ignore_ascii_case("multipart/form-data") {
        BodyKind::Multipart
    } else {
        BodyKind::Other
    }
}

/// `title` / `author` taken from the query string and the request body.
/// The query string is looked at first, so it wins when both carry a key.
#[derive(Debug, Default, Clone)]
pub struct BookFields {
    pub title: Option<String>,
    pub author: Option<String>,
}

impl BookFields {
    fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            title: first(pairs, "title"),
            author: first(pairs, "author"),
        }
    }

    /// Fill the gaps left by `self` from `fallback`.
    pub fn merge(self, fallback: BookFields) -> Self {
        Self {
            title: self.title.or(fallback.title),
            author: self.author.or(fallback.author),
        }
    }

    async fn from_multipart(mut multipart: Multipart) -> Result<Self, ApiError> {
        let mut fields = Self::default();
        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| ApiError::BadRequest(e.body_text()))?
        {
            // File parts are not form values.
            if field.file_name().is_some() {
                continue;
            }
            let slot = match field.name() {
                Some("title") => &mut fields.title,
                Some("author") => &mut fields.author,
                _ => continue,
            };
            if slot.is_none() {
                let text = field
                    .text()
                    .await
                    .map_err(|e| ApiError::BadRequest(e.body_text()))?;
                *slot = Some(text);
            }
        }
        Ok(fields)
    }

    pub fn into_patch(self) -> BookPatch {
        BookPatch {
            title: self.title,
            author: self.author,
        }
    }
}

impl<S: Send + Sync> FromRequest<S> for BookFields {
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let query = Self::from_pairs(&query_pairs(req.uri())?);
        let kind = body_kind(req.headers());

        let body = match kind {
            BodyKind::UrlEncoded => {
                let Form(pairs) = Form::<Pairs>::from_request(req, state)
                    .await
                    .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
                Self::from_pairs(&pairs)
            }
            BodyKind::Multipart => {
                let multipart = Multipart::from_request(req, state)
                    .await
                    .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
                Self::from_multipart(multipart).await?
            }
            BodyKind::Other => {
                let bytes = Bytes::from_request(req, state)
                    .await
                    .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
                if !bytes.is_empty() {
                    return Err(ApiError::BadRequest(
                        "Book fields must be sent as a urlencoded or multipart form".to_string(),
                    ));
                }
                Self::default()
            }
        };

        Ok(query.merge(body))
    }
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub auth_cookie: String,
}

#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub deleted: String,
}

/// Serializes as `{}`.
#[derive(Debug, Default, Serialize)]
pub struct EmptyObject {}

/// A single-book lookup answers with the book, or `{}` when the id is unknown.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum BookLookup {
    Found(Book),
    Missing(EmptyObject),
}

impl From<Option<Book>> for BookLookup {
    fn from(book: Option<Book>) -> Self {
        match book {
            Some(book) => BookLookup::Found(book),
            None => BookLookup::Missing(EmptyObject {}),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn pairs(raw: &[(&str, &str)]) -> Pairs {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_missing_book_serializes_as_empty_object() {
        let value = serde_json::to_value(BookLookup::from(None)).unwrap();
        assert_eq!(value, serde_json::json!({}));
    }

    #[test]
    fn test_found_book_serializes_flat() {
        let book = Book::new(Some("T".into()), None);
        let value = serde_json::to_value(BookLookup::from(Some(book.clone()))).unwrap();
        assert_eq!(value["id"], book.id);
        assert_eq!(value["title"], "T");
        assert_eq!(value["author"], "No Name");
    }

    #[test]
    fn test_query_fields_win() {
        let query = BookFields {
            title: Some("from query".into()),
            author: None,
        };
        let body = BookFields {
            title: Some("from body".into()),
            author: Some("body author".into()),
        };
        let merged = query.merge(body);
        assert_eq!(merged.title.as_deref(), Some("from query"));
        assert_eq!(merged.author.as_deref(), Some("body author"));
    }

    #[test]
    fn test_first_occurrence_is_used() {
        let fields = BookFields::from_pairs(&pairs(&[
            ("title", "a"),
            ("other", "x"),
            ("title", "b"),
        ]));
        assert_eq!(fields.title.as_deref(), Some("a"));
        assert_eq!(fields.author, None);
    }

    #[test]
    fn test_body_kind() {
        let mut headers = HeaderMap::new();
        assert_eq!(body_kind(&headers), BodyKind::Other);

        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("application/x-www-form-urlencoded; charset=UTF-8"),
        );
        assert_eq!(body_kind(&headers), BodyKind::UrlEncoded);

        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("Multipart/Form-Data; boundary=xyz"),
        );
        assert_eq!(body_kind(&headers), BodyKind::Multipart);

        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        assert_eq!(body_kind(&headers), BodyKind::Other);
    }
}
