/// API route handlers, organized by resource
///
/// - `health`: health check endpoint
/// - `auth`: registration, login, token refresh
/// - `patients`: ownership-scoped patient CRUD
/// - `doctors`: globally visible doctor CRUD
/// - `mappings`: patient ↔ doctor assignments and the per-patient doctor lookup

use serde::Deserialize;

pub mod auth;
pub mod doctors;
pub mod health;
pub mod mappings;
pub mod patients;

/// Pagination query parameters shared by list endpoints
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Pagination {
    /// Maximum number of records to return (default 50, capped at 200)
    #[serde(default = "default_limit")]
    pub limit: i64,

    /// Number of records to skip
    #[serde(default)]
    pub offset: i64,
}

fn default_limit() -> i64 {
    50
}

impl Pagination {
    /// Clamps limit and offset to sane bounds
    pub fn clamped(self) -> Self {
        Self {
            limit: self.limit.clamp(1, 200),
            offset: self.offset.max(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_defaults() {
        let p: Pagination = serde_json::from_str("{}").unwrap();
        assert_eq!(p.limit, 50);
        assert_eq!(p.offset, 0);
    }

    #[test]
    fn test_pagination_clamped() {
        let p = Pagination {
            limit: 5000,
            offset: -3,
        }
        .clamped();
        assert_eq!(p.limit, 200);
        assert_eq!(p.offset, 0);

        let p = Pagination {
            limit: 0,
            offset: 10,
        }
        .clamped();
        assert_eq!(p.limit, 1);
        assert_eq!(p.offset, 10);
    }
}
