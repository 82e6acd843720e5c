use axum::Router;

pub mod customers;
pub mod invoices;
pub mod revenue;
pub mod session;
pub mod system;

/// Routes behind the session middleware.
pub fn router() -> Router {
    Router::new()
        .nest("/dashboard/invoices", invoices::router())
        .nest("/dashboard/customers", customers::router())
        .nest("/dashboard/revenue", revenue::router())
}
