use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method},
    middleware,
    routing::{delete, get, patch, post},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::config::{AppConfig, SecurityConfig};
use crate::database::WorkoutStore;
use crate::handlers::{exercises, root, sets, shell, workout_exercises, workouts};
use crate::middleware::{validate_set_middleware, validate_workout_exercise_middleware};

/// Shared handler state; the store handle is opened in `main` and closed on shutdown
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn WorkoutStore>,
    pub max_request_size_bytes: usize,
}

impl AppState {
    pub fn new(store: Arc<dyn WorkoutStore>, config: &AppConfig) -> Self {
        Self {
            store,
            max_request_size_bytes: config.api.max_request_size_bytes,
        }
    }
}

/// Assemble the full router with global middleware
pub fn app(state: AppState, config: &AppConfig) -> Router {
    let mut router = Router::new()
        // Public
        .route("/", get(root::greeting))
        .route("/health", get(root::health))
        .route("/app", get(shell::app_shell))
        // Resources
        .merge(workout_routes())
        .merge(exercise_routes())
        .merge(workout_exercise_routes(state.clone()))
        .merge(set_routes(state.clone()))
        .layer(DefaultBodyLimit::max(config.api.max_request_size_bytes))
        .with_state(state);

    if config.security.enable_cors {
        router = router.layer(cors_layer(&config.security));
    }
    if config.api.enable_request_logging {
        router = router.layer(TraceLayer::new_for_http());
    }

    router
}

fn workout_routes() -> Router<AppState> {
    Router::new()
        .route("/workouts", get(workouts::list).post(workouts::create))
        .route("/workouts/:id", get(workouts::detail).delete(workouts::delete))
        .route("/workouts/:id/exercises", get(workouts::exercises))
        .route("/workouts/:id/notes", patch(workouts::update_notes))
}

fn exercise_routes() -> Router<AppState> {
    Router::new().route("/exercises", get(exercises::list))
}

fn workout_exercise_routes(state: AppState) -> Router<AppState> {
    // The guard wraps only the POST; DELETE carries no body to validate
    Router::new()
        .route(
            "/workout_exercises",
            post(workout_exercises::create).route_layer(middleware::from_fn_with_state(
                state,
                validate_workout_exercise_middleware,
            )),
        )
        .route("/workout_exercises/:id", delete(workout_exercises::delete))
}

fn set_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        "/sets",
        post(sets::create)
            .route_layer(middleware::from_fn_with_state(state, validate_set_middleware)),
    )
}

fn cors_layer(security: &SecurityConfig) -> CorsLayer {
    if security.cors_origins.iter().any(|origin| origin == "*") {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = security
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
}
