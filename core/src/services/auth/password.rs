//! bcrypt password hashing

use kolo_shared::config::SecurityConfig;

use crate::errors::{DomainError, DomainResult};

/// Hashes and verifies passwords with bcrypt at a configured cost factor
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    rounds: u32,
}

impl PasswordHasher {
    /// Create a hasher with an explicit cost factor
    pub fn new(rounds: u32) -> Self {
        Self { rounds }
    }

    /// Hashes a plaintext password
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The bcrypt hash
    /// * `Err(DomainError)` - Hashing failed
    pub fn hash_password(&self, password: &str) -> DomainResult<String> {
        bcrypt::hash(password, self.rounds).map_err(|e| DomainError::Internal {
            message: format!("Password hashing failed: {}", e),
        })
    }

    /// Checks a plaintext password against a stored hash
    pub fn verify_password(&self, password: &str, hash: &str) -> DomainResult<bool> {
        bcrypt::verify(password, hash).map_err(|e| DomainError::Internal {
            message: format!("Password verification failed: {}", e),
        })
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::from(&SecurityConfig::default())
    }
}

impl From<&SecurityConfig> for PasswordHasher {
    fn from(config: &SecurityConfig) -> Self {
        Self {
            rounds: config.number_of_rounds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // cost 4 is the bcrypt minimum, keeps the tests fast
    fn hasher() -> PasswordHasher {
        PasswordHasher::new(4)
    }

    #[test]
    fn test_hash_and_verify() {
        let hasher = hasher();
        let hash = hasher.hash_password("hunter2!").unwrap();

        assert_ne!(hash, "hunter2!");
        assert!(hasher.verify_password("hunter2!", &hash).unwrap());
        assert!(!hasher.verify_password("hunter3!", &hash).unwrap());
    }

    #[test]
    fn test_hashes_are_salted() {
        let hasher = hasher();
        let a = hasher.hash_password("same-password").unwrap();
        let b = hasher.hash_password("same-password").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_verify_against_garbage_hash_fails() {
        let hasher = hasher();
        assert!(hasher.verify_password("anything", "not-a-bcrypt-hash").is_err());
    }
}
