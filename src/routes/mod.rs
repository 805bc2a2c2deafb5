//! Route definitions and router assembly for the PeopleOps API.

pub mod admin;
pub mod applications;
pub mod auth;
pub mod calendar;
pub mod dashboard;
pub mod departments;
pub mod employees;
pub mod evaluations;
pub mod health;
pub mod recruitment;
pub mod reports;
pub mod training;

use axum::http::{header, HeaderValue, Method};
use axum::middleware as axum_middleware;
use axum::routing::{get, post, put};
use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::middleware::rate_limit::{self, RateLimiter};
use crate::AppState;

const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Assemble the full application router, shared by `main` and the tests.
pub fn router(state: AppState) -> Router {
    let cors = match state.config.frontend_url.parse::<HeaderValue>() {
        Ok(origin) => CorsLayer::new().allow_origin(origin).allow_credentials(true),
        Err(_) => CorsLayer::new().allow_origin(Any),
    }
    .allow_methods([
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::DELETE,
        Method::OPTIONS,
    ])
    .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    // Stricter bucket for registration, a general one for everything else.
    let register_routes = Router::new()
        .route("/auth/register", post(auth::register))
        .route_layer(axum_middleware::from_fn_with_state(
            RateLimiter::for_auth(),
            rate_limit::limit,
        ));

    let api = Router::new()
        .merge(register_routes)
        .route("/auth/me", get(auth::me))
        .route(
            "/departments",
            get(departments::list).post(departments::create),
        )
        .route(
            "/departments/{id}",
            get(departments::get_by_id)
                .put(departments::update)
                .delete(departments::delete),
        )
        .route("/employees", get(employees::list).post(employees::create))
        .route("/min-employees", get(employees::list_min))
        .route(
            "/employees/{id}",
            get(employees::get_by_id)
                .put(employees::update)
                .delete(employees::delete),
        )
        .route(
            "/employees/{employee_id}/evaluations",
            get(evaluations::list_by_employee),
        )
        .route(
            "/recruitment",
            get(recruitment::list).post(recruitment::create),
        )
        .route(
            "/recruitment/{id}",
            get(recruitment::get_by_id)
                .put(recruitment::update)
                .delete(recruitment::delete),
        )
        .route(
            "/recruitment/{recruitment_id}/applications",
            get(applications::list_for_recruitment).post(applications::create),
        )
        .route(
            "/applications/{id}",
            get(applications::get_by_id).put(applications::update_status),
        )
        .route("/training", get(training::list).post(training::create))
        .route(
            "/training/{id}",
            get(training::get_by_id)
                .put(training::update)
                .delete(training::delete),
        )
        .route(
            "/training/{program_id}/enrollments",
            get(training::list_enrollments).post(training::create_enrollment),
        )
        .route(
            "/enrollments/{id}",
            put(training::update_enrollment).delete(training::delete_enrollment),
        )
        .route(
            "/evaluations",
            get(evaluations::list).post(evaluations::create),
        )
        .route(
            "/evaluations/{id}",
            get(evaluations::get_by_id)
                .put(evaluations::update)
                .delete(evaluations::delete),
        )
        .route(
            "/calendar/events",
            get(calendar::list).post(calendar::create),
        )
        .route(
            "/calendar/events/{id}",
            put(calendar::update).delete(calendar::delete),
        )
        .route("/dashboard/stats", get(dashboard::stats))
        .route("/dashboard/upcoming", get(dashboard::upcoming))
        .route("/dashboard/notifications", get(dashboard::notifications))
        .route("/dashboard/tasks", get(dashboard::tasks))
        .route("/dashboard/overview", get(dashboard::overview))
        .route("/dashboard/sync", post(dashboard::sync))
        .route("/dashboard/appoint-hr", post(dashboard::appoint_hr))
        .route("/admin/users", get(admin::list_users))
        .route("/admin/appoint-hr", post(admin::appoint_hr))
        .route("/reports/{report_name}", get(reports::get_report))
        .layer(axum_middleware::from_fn_with_state(
            RateLimiter::for_api(),
            rate_limit::limit,
        ));

    Router::new()
        .route("/health/live", get(health::live))
        .route("/health/ready", get(health::ready))
        .nest("/api/v1", api)
        .nest_service(
            "/public/reports",
            ServeDir::new(&state.config.reports_dir),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(CompressionLayer::new())
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .with_state(state)
}
