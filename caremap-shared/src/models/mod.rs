/// Database models for CareMap
///
/// Each model owns its CRUD operations against the PostgreSQL pool.
///
/// # Models
///
/// - `user`: accounts that authenticate and own patients
/// - `doctor`: globally visible doctor records
/// - `patient`: patient records, scoped to their creating user
/// - `mapping`: patient ↔ doctor assignments with pair uniqueness
///
/// # Example
///
/// ```no_run
/// use caremap_shared::models::user::{User, CreateUser};
/// use caremap_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
///
/// let user = User::create(&pool, CreateUser {
///     email: "reception@clinic.example".to_string(),
///     password_hash: "$argon2id$...".to_string(),
///     name: "Front Desk".to_string(),
/// }).await?;
/// # Ok(())
/// # }
/// ```

pub mod doctor;
pub mod mapping;
pub mod patient;
pub mod user;
