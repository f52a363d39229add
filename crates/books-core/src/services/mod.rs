//! Domain services (business logic)

pub mod book_service;

pub use book_service::BookService;
