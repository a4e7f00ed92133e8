use super::password_hasher::PasswordHasher;
use bcrypt::{hash, verify};

/// Work factor the backend's stored hashes were written with. Fixed on
/// purpose: reset hashes must stay interchangeable with registration hashes.
const BCRYPT_COST: u32 = 10;

pub struct BcryptHasher;

impl PasswordHasher for BcryptHasher {
    fn hash_password(&self, password: &str) -> Result<String, String> {
        hash(password, BCRYPT_COST).map_err(|e| e.to_string())
    }

    fn verify_password(&self, password: &str, hashed: &str) -> Result<bool, String> {
        verify(password, hashed).map_err(|e| e.to_string())
    }
}
