/// Authentication utilities for CareMap
///
/// # Modules
///
/// - [`password`]: Argon2id password hashing and strength validation
/// - [`jwt`]: JWT token generation and validation
/// - [`middleware`]: Request auth context and bearer-token extraction
///
/// Passwords are hashed with Argon2id and never stored in plaintext. API
/// authentication uses HS256-signed JWTs carrying the user id; verification
/// uses constant-time comparison throughout.

pub mod jwt;
pub mod middleware;
pub mod password;
