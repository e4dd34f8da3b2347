/**
 * Token Issuance and Verification
 *
 * This module mints and verifies the signed bearer tokens that carry a
 * user's identity between requests. Tokens are standard compact JWTs
 * (HS256) whose payload is the user's serializable identity plus a
 * subject claim equal to the user id.
 *
 * # Key Handling
 *
 * The signing secret is process-wide configuration. [`AuthKeys`] is built
 * once at startup from the secret and the configured token lifetime, and
 * shared read-only through application state. The secret is never rotated
 * at runtime.
 *
 * # Verification
 *
 * Verification is purely cryptographic plus an expiry check: there is no
 * persisted session record and no revocation list. Expiry is checked with
 * zero leeway, so a token is valid in `[iat, iat + lifetime)` and rejected
 * from the expiry instant onward.
 */

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::users::model::UserIdentity;

/// Default token lifetime: one day.
pub const DEFAULT_LIFETIME: Duration = Duration::from_secs(24 * 60 * 60);

/// JWT claims structure
///
/// The payload of every issued token: the user's serializable identity
/// fields plus the standard `sub`, `iat`, and `exp` claims.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user id
    pub sub: String,
    /// Username
    pub username: String,
    /// First name
    #[serde(rename = "firstName", default)]
    pub first_name: String,
    /// Last name
    #[serde(rename = "lastName", default)]
    pub last_name: String,
    /// Issued at (Unix timestamp)
    pub iat: u64,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
}

impl Claims {
    /// Decode the claims back into an identity usable by handlers
    ///
    /// Fails only if the `sub` claim is not a well-formed UUID, which
    /// means the token was not minted by this server.
    pub fn into_identity(self) -> Result<UserIdentity, uuid::Error> {
        Ok(UserIdentity {
            user_id: Uuid::parse_str(&self.sub)?,
            username: self.username,
            first_name: self.first_name,
            last_name: self.last_name,
        })
    }
}

/// Signing and verification keys, built once at startup
///
/// Both keys are derived from the same shared secret. The struct also
/// carries the configured token lifetime and the validation rules used
/// on every verify call.
pub struct AuthKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    lifetime: Duration,
}

impl AuthKeys {
    /// Build keys from the server secret and token lifetime
    pub fn new(secret: &str, lifetime: Duration) -> Self {
        // Zero leeway: a token is rejected from the moment its expiry
        // timestamp is reached.
        let mut validation = Validation::default();
        validation.leeway = 0;

        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            lifetime,
        }
    }

    /// Mint a signed token for an authenticated identity
    ///
    /// The token expires `lifetime` after issuance.
    pub fn issue_token(
        &self,
        identity: &UserIdentity,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        self.issue_token_at(identity, unix_now())
    }

    /// Mint a token with an explicit issuance time
    ///
    /// Used by `issue_token` and by tests that need control over expiry.
    pub fn issue_token_at(
        &self,
        identity: &UserIdentity,
        iat: u64,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let claims = Claims {
            sub: identity.user_id.to_string(),
            username: identity.username.clone(),
            first_name: identity.first_name.clone(),
            last_name: identity.last_name.clone(),
            iat,
            exp: iat + self.lifetime.as_secs(),
        };

        encode(&Header::default(), &claims, &self.encoding)
    }

    /// Verify a token's signature and expiry, returning its claims
    pub fn verify_token(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let data = decode::<Claims>(token, &self.decoding, &self.validation)?;
        Ok(data.claims)
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity() -> UserIdentity {
        UserIdentity {
            user_id: Uuid::new_v4(),
            username: "alice".to_string(),
            first_name: "Alice".to_string(),
            last_name: "Liddell".to_string(),
        }
    }

    fn keys() -> AuthKeys {
        AuthKeys::new("test-secret", DEFAULT_LIFETIME)
    }

    #[test]
    fn test_issue_and_verify() {
        let keys = keys();
        let identity = identity();
        let token = keys.issue_token(&identity).unwrap();

        let claims = keys.verify_token(&token).unwrap();
        assert_eq!(claims.sub, identity.user_id.to_string());
        assert_eq!(claims.username, "alice");
        assert_eq!(claims.first_name, "Alice");
        assert_eq!(claims.last_name, "Liddell");
        assert_eq!(claims.exp, claims.iat + DEFAULT_LIFETIME.as_secs());
    }

    #[test]
    fn test_token_is_three_segments() {
        let token = keys().issue_token(&identity()).unwrap();
        assert_eq!(token.split('.').count(), 3);
    }

    #[test]
    fn test_claims_resolve_to_identity() {
        let keys = keys();
        let identity = identity();
        let token = keys.issue_token(&identity).unwrap();

        let resolved = keys.verify_token(&token).unwrap().into_identity().unwrap();
        assert_eq!(resolved.user_id, identity.user_id);
        assert_eq!(resolved.username, identity.username);
    }

    #[test]
    fn test_expired_token_fails() {
        let keys = keys();
        // Issued two lifetimes ago, so it expired a full lifetime before now.
        let iat = unix_now() - 2 * DEFAULT_LIFETIME.as_secs();
        let token = keys.issue_token_at(&identity(), iat).unwrap();

        let err = keys.verify_token(&token).unwrap_err();
        assert!(matches!(
            err.kind(),
            jsonwebtoken::errors::ErrorKind::ExpiredSignature
        ));
    }

    #[test]
    fn test_token_valid_just_before_expiry() {
        let keys = keys();
        // Expires sixty seconds from now.
        let iat = unix_now() + 60 - DEFAULT_LIFETIME.as_secs();
        let token = keys.issue_token_at(&identity(), iat).unwrap();
        assert!(keys.verify_token(&token).is_ok());
    }

    #[test]
    fn test_wrong_secret_fails() {
        let token = keys().issue_token(&identity()).unwrap();
        let other = AuthKeys::new("other-secret", DEFAULT_LIFETIME);
        assert!(other.verify_token(&token).is_err());
    }

    #[test]
    fn test_tampered_payload_fails() {
        let keys = keys();
        let token = keys.issue_token(&identity()).unwrap();
        let parts: Vec<&str> = token.split('.').collect();

        // Flip one character of the payload segment.
        let mut payload: Vec<char> = parts[1].chars().collect();
        payload[0] = if payload[0] == 'A' { 'B' } else { 'A' };
        let tampered: String = payload.into_iter().collect();

        let forged = format!("{}.{}.{}", parts[0], tampered, parts[2]);
        assert!(keys.verify_token(&forged).is_err());
    }

    #[test]
    fn test_tampered_signature_fails() {
        let keys = keys();
        let token = keys.issue_token(&identity()).unwrap();
        let parts: Vec<&str> = token.split('.').collect();

        let mut sig: Vec<char> = parts[2].chars().collect();
        sig[0] = if sig[0] == 'A' { 'B' } else { 'A' };
        let tampered: String = sig.into_iter().collect();

        let forged = format!("{}.{}.{}", parts[0], parts[1], tampered);
        assert!(keys.verify_token(&forged).is_err());
    }

    #[test]
    fn test_garbage_token_fails() {
        assert!(keys().verify_token("invalid.token.here").is_err());
        assert!(keys().verify_token("").is_err());
    }
}
