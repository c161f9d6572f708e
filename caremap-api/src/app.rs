/// Application state and router builder
///
/// Defines the shared application state and builds the Axum router with all
/// routes and middleware.
///
/// # Example
///
/// ```no_run
/// use caremap_api::{app::{AppState, build_router}, config::Config};
/// use sqlx::PgPool;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let pool = PgPool::connect(&config.database.url).await?;
/// let state = AppState::new(pool, config);
/// let app = build_router(state);
/// # Ok(())
/// # }
/// ```

use crate::middleware::security::SecurityHeadersLayer;
use crate::{config::Config, error::ApiError};
use axum::{
    extract::Request,
    http::{header, HeaderValue, Method},
    middleware::Next,
    response::Response,
    routing::{delete, get, post, put},
    Router,
};
use caremap_shared::auth::{jwt, middleware as auth};
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

/// Shared application state
///
/// Cloned for each request handler via Axum's `State` extractor. Both
/// fields are cheap to clone (pool is internally reference-counted, config
/// is behind an Arc).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: PgPool,

    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates new application state
    pub fn new(db: PgPool, config: Config) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }

    /// Gets JWT secret for token operations
    pub fn jwt_secret(&self) -> &str {
        &self.config.jwt.secret
    }
}

/// Builds the complete Axum router with all routes and middleware
///
/// # Routes
///
/// ```text
/// /
/// ├── /health                       # Health check (public)
/// └── /v1/
///     ├── /auth/                    # Public
///     │   ├── POST /register
///     │   ├── POST /login
///     │   └── POST /refresh
///     ├── /patients/                # JWT, ownership-scoped
///     │   ├── GET    /              # List own patients
///     │   ├── POST   /              # Create patient
///     │   ├── GET    /:id
///     │   ├── PUT    /:id
///     │   └── DELETE /:id
///     ├── /doctors/                 # JWT, globally visible
///     │   ├── GET    /
///     │   ├── POST   /
///     │   ├── GET    /:id
///     │   ├── PUT    /:id
///     │   └── DELETE /:id
///     └── /mappings/                # JWT, scoped via owned patients
///         ├── GET    /              # List own mappings
///         ├── POST   /              # Assign doctor to patient
///         ├── GET    /:patient_id   # Doctors mapped to a patient
///         └── DELETE /:id
/// ```
pub fn build_router(state: AppState) -> Router {
    use crate::routes;

    let health_routes = Router::new().route("/health", get(routes::health::health_check));

    // Public, no auth required
    let auth_routes = Router::new()
        .route("/register", post(routes::auth::register))
        .route("/login", post(routes::auth::login))
        .route("/refresh", post(routes::auth::refresh));

    let patient_routes = Router::new()
        .route("/", get(routes::patients::list_patients))
        .route("/", post(routes::patients::create_patient))
        .route("/:id", get(routes::patients::get_patient))
        .route("/:id", put(routes::patients::update_patient))
        .route("/:id", delete(routes::patients::delete_patient));

    let doctor_routes = Router::new()
        .route("/", get(routes::doctors::list_doctors))
        .route("/", post(routes::doctors::create_doctor))
        .route("/:id", get(routes::doctors::get_doctor))
        .route("/:id", put(routes::doctors::update_doctor))
        .route("/:id", delete(routes::doctors::delete_doctor));

    // GET /:id takes a patient id and returns that patient's doctors;
    // DELETE /:id takes a mapping id
    let mapping_routes = Router::new()
        .route("/", get(routes::mappings::list_mappings))
        .route("/", post(routes::mappings::create_mapping))
        .route(
            "/:id",
            get(routes::mappings::get_patient_doctors).delete(routes::mappings::delete_mapping),
        );

    // Resource routes all require a valid access token
    let protected_routes = Router::new()
        .nest("/patients", patient_routes)
        .nest("/doctors", doctor_routes)
        .nest("/mappings", mapping_routes)
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            jwt_auth_layer,
        ));

    let v1_routes = Router::new()
        .nest("/auth", auth_routes)
        .merge(protected_routes);

    let cors = if state.config.api.cors_origins.contains(&"*".to_string()) {
        CorsLayer::permissive()
    } else {
        let origins: Vec<HeaderValue> = state
            .config
            .api
            .cors_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
            .allow_credentials(true)
            .max_age(std::time::Duration::from_secs(3600))
    };

    Router::new()
        .merge(health_routes)
        .nest("/v1", v1_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors)
        .layer(SecurityHeadersLayer::new(state.config.api.production))
        .with_state(state)
}

/// JWT authentication middleware layer
///
/// Validates the Bearer token from the Authorization header and injects an
/// `AuthContext` into request extensions for handlers to consume.
async fn jwt_auth_layer(
    state: axum::extract::State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = auth::bearer_token(req.headers())?;

    let claims = jwt::validate_access_token(token, state.jwt_secret())?;

    let auth_context = auth::AuthContext::from_jwt(claims.sub);
    req.extensions_mut().insert(auth_context);

    Ok(next.run(req).await)
}
