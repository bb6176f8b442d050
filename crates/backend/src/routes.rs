use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::{handlers, system};

/// Route table for the whole application
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // SYSTEM AUTH ROUTES (PUBLIC)
        // ========================================
        .route(
            "/api/system/auth/login",
            post(system::handlers::auth::login),
        )
        .route(
            "/api/system/auth/refresh",
            post(system::handlers::auth::refresh),
        )
        .route(
            "/api/system/auth/logout",
            post(system::handlers::auth::logout),
        )
        // System auth routes (protected)
        .route(
            "/api/system/auth/me",
            get(system::handlers::auth::current_user)
                .layer(middleware::from_fn(system::auth::middleware::require_auth)),
        )
        // System users management (admin only)
        .route(
            "/api/system/users",
            get(system::handlers::users::list)
                .post(system::handlers::users::create)
                .layer(middleware::from_fn(system::auth::middleware::require_admin)),
        )
        .route(
            "/api/system/users/:id",
            get(system::handlers::users::get_by_id)
                .put(system::handlers::users::update)
                .delete(system::handlers::users::delete)
                .layer(middleware::from_fn(system::auth::middleware::require_admin)),
        )
        .route(
            "/api/system/users/:id/change-password",
            post(system::handlers::users::change_password)
                .layer(middleware::from_fn(system::auth::middleware::require_auth)),
        )
        // ========================================
        // BUSINESS ROUTES (authenticated)
        // ========================================
        // A001 Client handlers
        .route(
            "/api/clients",
            get(handlers::a001_client::list_all)
                .post(handlers::a001_client::upsert)
                .layer(middleware::from_fn(system::auth::middleware::require_auth)),
        )
        .route(
            "/api/clients/:id",
            get(handlers::a001_client::get_by_id)
                .delete(handlers::a001_client::delete)
                .layer(middleware::from_fn(system::auth::middleware::require_auth)),
        )
        // A002 Product handlers
        .route(
            "/api/products",
            get(handlers::a002_product::list_all)
                .post(handlers::a002_product::upsert)
                .layer(middleware::from_fn(system::auth::middleware::require_auth)),
        )
        .route(
            "/api/products/:id",
            get(handlers::a002_product::get_by_id)
                .delete(handlers::a002_product::delete)
                .layer(middleware::from_fn(system::auth::middleware::require_auth)),
        )
        // A003 Order handlers
        .route(
            "/api/orders",
            get(handlers::a003_order::list_all)
                .post(handlers::a003_order::upsert)
                .layer(middleware::from_fn(system::auth::middleware::require_auth)),
        )
        .route(
            "/api/orders/:id",
            get(handlers::a003_order::get_by_id)
                .delete(handlers::a003_order::delete)
                .layer(middleware::from_fn(system::auth::middleware::require_auth)),
        )
        // A004 Sale handlers (incl. payments sub-resource)
        .route(
            "/api/sales",
            get(handlers::a004_sale::list_all)
                .post(handlers::a004_sale::upsert)
                .layer(middleware::from_fn(system::auth::middleware::require_auth)),
        )
        .route(
            "/api/sales/:id",
            get(handlers::a004_sale::get_by_id)
                .delete(handlers::a004_sale::delete)
                .layer(middleware::from_fn(system::auth::middleware::require_auth)),
        )
        .route(
            "/api/sales/:id/payments",
            post(handlers::a004_sale::add_payment)
                .layer(middleware::from_fn(system::auth::middleware::require_auth)),
        )
        .route(
            "/api/sales/:id/payments/:payment_id",
            axum::routing::delete(handlers::a004_sale::delete_payment)
                .layer(middleware::from_fn(system::auth::middleware::require_auth)),
        )
        // A005 Calendar event handlers
        .route(
            "/api/events",
            get(handlers::a005_calendar_event::list_all)
                .post(handlers::a005_calendar_event::upsert)
                .layer(middleware::from_fn(system::auth::middleware::require_auth)),
        )
        .route(
            "/api/events/:id",
            get(handlers::a005_calendar_event::get_by_id)
                .delete(handlers::a005_calendar_event::delete)
                .layer(middleware::from_fn(system::auth::middleware::require_auth)),
        )
        // Compiled frontend assets
        .fallback_service(ServeDir::new("dist"))
}
