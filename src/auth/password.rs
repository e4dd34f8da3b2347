/**
 * Password Hashing
 *
 * This module wraps bcrypt for one-way password hashing and verification.
 *
 * # Security
 *
 * - Hashing uses a fixed work factor of 10 rounds, which costs tens of
 *   milliseconds per call on current hardware
 * - The salt is generated per hash by bcrypt and embedded in the output
 * - Verification is timing-safe inside bcrypt
 * - `verify_password` never errors: a malformed stored hash simply fails
 *   verification, so callers have exactly one failure signal
 */

use bcrypt::BcryptError;

/// bcrypt work factor. 2^10 rounds, matching what the user records in the
/// database were created with.
pub const HASH_COST: u32 = 10;

/// Hash a plaintext password for storage
///
/// # Arguments
///
/// * `plain` - The plaintext password
///
/// # Returns
///
/// The salted bcrypt hash, or an error if hashing fails (which only
/// happens when the RNG is unavailable, not for any particular input)
pub fn hash_password(plain: &str) -> Result<String, BcryptError> {
    bcrypt::hash(plain, HASH_COST)
}

/// Verify a plaintext candidate against a stored hash
///
/// Returns `false` for any mismatch, including a malformed stored hash.
/// Callers must treat `false` as the only failure signal; there is no way
/// to distinguish "wrong password" from "corrupt hash" here, by intent.
pub fn verify_password(plain: &str, stored_hash: &str) -> bool {
    bcrypt::verify(plain, stored_hash).unwrap_or(false)
}
