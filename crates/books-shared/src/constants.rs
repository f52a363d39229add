//! Application-wide constants

pub const DEFAULT_COOKIE_NAME: &str = "my_cookie";
pub const DEFAULT_USERNAME: &str = "test_user";
pub const DEFAULT_PASSWORD: &str = "test_password";
pub const DEFAULT_PORT: u16 = 7000;

pub const DEFAULT_TITLE: &str = "";
pub const DEFAULT_AUTHOR: &str = "No Name";
pub const SORT_BY_TITLE: &str = "by_title";

pub const MSG_INVALID_COOKIE: &str = "No valid auth cookie provided!";
pub const MSG_BOOK_NOT_FOUND: &str = "No book with given ID!";
pub const MSG_INVALID_CREDENTIALS: &str = "Invalid credentials";
