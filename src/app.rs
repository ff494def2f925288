use axum::{
    http::{header, HeaderValue},
    response::Response,
    routing::{get, post},
    Router,
};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::handlers;
use crate::routes;
use crate::state::AppState;

const CACHE_CONTROL_SUCCESS: &str = "public,max-age=10";

/// Successful student responses may be cached by intermediaries for 10 seconds
fn cache_hint(response: &Response) -> Option<HeaderValue> {
    response
        .status()
        .is_success()
        .then(|| HeaderValue::from_static(CACHE_CONTROL_SUCCESS))
}

/// Build the full application router
pub fn router(state: AppState) -> Router {
    let student_routes = Router::new()
        .route(
            routes::STUDENTS,
            post(handlers::create_handler).put(handlers::update_handler),
        )
        .route(routes::STUDENTS_ALL, get(handlers::list_handler))
        .route(routes::STUDENTS_SEED, post(handlers::seed_handler))
        .route(
            routes::STUDENT_ITEM,
            get(handlers::get_handler).delete(handlers::delete_handler),
        )
        .layer(SetResponseHeaderLayer::if_not_present(
            header::CACHE_CONTROL,
            cache_hint,
        ));

    Router::new()
        .route(routes::HEALTH, get(handlers::health_handler))
        .merge(student_routes)
        .merge(SwaggerUi::new(routes::SWAGGER_UI).url(routes::OPENAPI_JSON, ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
