//! Pagination query parameters

use serde::{Deserialize, Serialize};

/// Skip/limit pagination parameters for list endpoints
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct PaginationParams {
    /// Number of records to skip
    #[serde(default)]
    pub skip: u64,

    /// Maximum number of records to return
    #[serde(default = "default_limit")]
    pub limit: u64,
}

fn default_limit() -> u64 {
    10
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: default_limit(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_query() {
        let params: PaginationParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params.skip, 0);
        assert_eq!(params.limit, 10);
    }
}
