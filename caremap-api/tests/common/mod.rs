/// Common test utilities for integration tests
///
/// Shared infrastructure: test database setup, test user creation, JWT
/// token generation, and request helpers.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use caremap_api::app::{build_router, AppState};
use caremap_api::config::Config;
use caremap_shared::auth::jwt::{create_token, Claims, TokenType};
use caremap_shared::auth::password::hash_password;
use caremap_shared::models::user::{CreateUser, User};
use sqlx::PgPool;
use tower::Service as _;
use uuid::Uuid;

/// Test context containing all necessary resources
pub struct TestContext {
    pub db: PgPool,
    pub app: axum::Router,
    pub config: Config,
    pub user: User,
    pub jwt_token: String,
}

impl TestContext {
    /// Creates a new test context with a migrated database and one
    /// registered user holding a valid access token
    pub async fn new() -> anyhow::Result<Self> {
        let config = Config::from_env()?;

        let db = PgPool::connect(&config.database.url).await?;

        // Migrations live in the shared crate; path is relative to this
        // crate's Cargo.toml
        sqlx::migrate!("../caremap-shared/migrations").run(&db).await?;

        let (user, jwt_token) = create_test_user(&db, &config).await?;

        let state = AppState::new(db.clone(), config.clone());
        let app = build_router(state);

        Ok(TestContext {
            db,
            app,
            config,
            user,
            jwt_token,
        })
    }

    /// Creates an additional user with its own token (for isolation tests)
    pub async fn create_second_user(&self) -> anyhow::Result<(User, String)> {
        create_test_user(&self.db, &self.config).await
    }

    /// Cleans up test data
    ///
    /// Deleting the user cascades to its patients and their mappings.
    pub async fn cleanup(&self) -> anyhow::Result<()> {
        sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(self.user.id)
            .execute(&self.db)
            .await?;
        Ok(())
    }
}

async fn create_test_user(db: &PgPool, config: &Config) -> anyhow::Result<(User, String)> {
    let user = User::create(
        db,
        CreateUser {
            email: format!("test-{}@example.com", Uuid::new_v4()),
            password_hash: hash_password("integration7pass")?,
            name: "Test User".to_string(),
        },
    )
    .await?;

    let claims = Claims::new(user.id, TokenType::Access);
    let token = create_token(&claims, &config.jwt.secret)?;

    Ok((user, token))
}

/// Sends a request and returns the status plus parsed JSON body
pub async fn send_request(
    ctx: &TestContext,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> anyhow::Result<(StatusCode, serde_json::Value)> {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }

    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))?,
        None => builder.body(Body::empty())?,
    };

    let response = ctx.app.clone().call(request).await?;
    let status = response.status();

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes)?
    };

    Ok((status, json))
}

/// Creates a patient through the API, returning its id
pub async fn create_test_patient(
    ctx: &TestContext,
    token: &str,
    name: &str,
) -> anyhow::Result<Uuid> {
    let (status, body) = send_request(
        ctx,
        "POST",
        "/v1/patients",
        Some(token),
        Some(serde_json::json!({
            "name": name,
            "age": 42,
            "gender": "other"
        })),
    )
    .await?;

    anyhow::ensure!(status == StatusCode::OK, "create patient failed: {}", body);
    Ok(body["id"].as_str().unwrap().parse()?)
}

/// Creates a doctor through the API, returning its id
pub async fn create_test_doctor(
    ctx: &TestContext,
    name: &str,
    specialization: &str,
) -> anyhow::Result<Uuid> {
    let (status, body) = send_request(
        ctx,
        "POST",
        "/v1/doctors",
        Some(&ctx.jwt_token),
        Some(serde_json::json!({
            "name": name,
            "specialization": specialization
        })),
    )
    .await?;

    anyhow::ensure!(status == StatusCode::OK, "create doctor failed: {}", body);
    Ok(body["id"].as_str().unwrap().parse()?)
}
