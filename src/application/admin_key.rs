use secrecy::{ExposeSecret, SecretString};
use sha2::{Digest, Sha256};

use crate::app_error::{AppError, AppResult};

/// The shared admin secret gating raw exports.
///
/// Only the SHA-256 digest is kept. An unset or empty secret yields a gate
/// that rejects every candidate.
#[derive(Clone)]
pub struct AdminKey {
    digest: Option<[u8; 32]>,
}

impl AdminKey {
    pub fn new(secret: Option<&SecretString>) -> Self {
        let digest = secret
            .map(|s| s.expose_secret())
            .filter(|s| !s.is_empty())
            .map(hash_key);
        Self { digest }
    }

    pub fn disabled() -> Self {
        Self { digest: None }
    }

    pub fn is_configured(&self) -> bool {
        self.digest.is_some()
    }

    pub fn verify(&self, candidate: Option<&str>) -> AppResult<()> {
        let (Some(expected), Some(candidate)) = (self.digest.as_ref(), candidate) else {
            return Err(AppError::Unauthorized);
        };
        if hash_key(candidate) == *expected {
            Ok(())
        } else {
            Err(AppError::Unauthorized)
        }
    }
}

impl std::fmt::Debug for AdminKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminKey")
            .field("configured", &self.is_configured())
            .finish()
    }
}

fn hash_key(raw: &str) -> [u8; 32] {
    Sha256::digest(raw.as_bytes()).into()
}
