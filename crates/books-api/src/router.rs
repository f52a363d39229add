use axum::{
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE, COOKIE},
        Method,
    },
    middleware,
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::{DefaultMakeSpan, TraceLayer},
};

use crate::handlers::{auth, books, health};
use crate::middleware::{require_basic_auth, require_session};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    // Public routes (no auth)
    let public_routes = Router::new().route("/health", get(health::health_check));

    // Basic auth only
    let login_routes = Router::new()
        .route("/login", get(auth::login))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_basic_auth,
        ));

    // Session cookie required
    let book_routes = Router::new()
        .route("/books", get(books::list_books))
        .route(
            "/books/{id}",
            get(books::get_book)
                .put(books::update_book)
                .delete(books::delete_book),
        )
        .route("/add_book", post(books::add_book))
        .route("/delete_books", delete(books::delete_all_books))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_session,
        ));

    Router::new()
        .merge(public_routes)
        .merge(login_routes)
        .merge(book_routes)
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers([CONTENT_TYPE, AUTHORIZATION, COOKIE]),
        )
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
}
