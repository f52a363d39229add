//! HTTP Basic credentials

use base64::{engine::general_purpose::STANDARD, Engine as _};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CredentialError {
    #[error("Authorization header is not using the Basic scheme")]
    MissingScheme,
    #[error("Basic credentials are not valid base64 UTF-8")]
    InvalidEncoding,
    #[error("Basic credentials lack the ':' separator")]
    MissingSeparator,
}

#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Decode an `Authorization` header value of the form `Basic <base64(user:pass)>`.
    /// Only the first `:` separates the two parts, so passwords may contain colons.
    pub fn from_basic_header(value: &str) -> Result<Self, CredentialError> {
        let (scheme, encoded) = value
            .trim()
            .split_once(' ')
            .ok_or(CredentialError::MissingScheme)?;
        if !scheme.eq_ignore_ascii_case("basic") {
            return Err(CredentialError::MissingScheme);
        }

        let decoded = STANDARD
            .decode(encoded.trim())
            .map_err(|_| CredentialError::InvalidEncoding)?;
        let decoded = String::from_utf8(decoded).map_err(|_| CredentialError::InvalidEncoding)?;

        let (username, password) = decoded
            .split_once(':')
            .ok_or(CredentialError::MissingSeparator)?;
        Ok(Self::new(username, password))
    }

    pub fn to_basic_header(&self) -> String {
        let raw = format!("{}:{}", self.username, self.password);
        format!("Basic {}", STANDARD.encode(raw))
    }

    pub fn matches(&self, presented: &Credentials) -> bool {
        self.username == presented.username && self.password == presented.password
    }
}

// Never print the password.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_header() {
        // base64("test_user:test_password")
        let creds =
            Credentials::from_basic_header("Basic dGVzdF91c2VyOnRlc3RfcGFzc3dvcmQ=").unwrap();
        assert_eq!(creds.username, "test_user");
        assert_eq!(creds.password, "test_password");
    }

    #[test]
    fn test_scheme_is_case_insensitive() {
        let header = Credentials::new("a", "b").to_basic_header().replace("Basic", "bAsIc");
        assert!(Credentials::from_basic_header(&header).is_ok());
    }

    #[test]
    fn test_password_with_colon() {
        let header = Credentials::new("user", "pa:ss:word").to_basic_header();
        let creds = Credentials::from_basic_header(&header).unwrap();
        assert_eq!(creds.username, "user");
        assert_eq!(creds.password, "pa:ss:word");
    }

    #[test]
    fn test_rejects_other_schemes() {
        assert_eq!(
            Credentials::from_basic_header("Bearer abc"),
            Err(CredentialError::MissingScheme)
        );
        assert_eq!(
            Credentials::from_basic_header("Basic"),
            Err(CredentialError::MissingScheme)
        );
    }

    #[test]
    fn test_rejects_bad_encoding() {
        assert_eq!(
            Credentials::from_basic_header("Basic !!!"),
            Err(CredentialError::InvalidEncoding)
        );
        // base64("nocolon")
        assert_eq!(
            Credentials::from_basic_header("Basic bm9jb2xvbg=="),
            Err(CredentialError::MissingSeparator)
        );
    }

    #[test]
    fn test_matches() {
        let expected = Credentials::new("test_user", "test_password");
        assert!(expected.matches(&Credentials::new("test_user", "test_password")));
        assert!(!expected.matches(&Credentials::new("qwe", "test_password")));
        assert!(!expected.matches(&Credentials::new("test_user", "qwe")));
        assert!(!expected.matches(&Credentials::new("qwe", "qwe")));
    }

    #[test]
    fn test_debug_hides_password() {
        let rendered = format!("{:?}", Credentials::new("u", "secret"));
        assert!(!rendered.contains("secret"));
    }
}
