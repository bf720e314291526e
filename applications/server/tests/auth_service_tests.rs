//! Authentication service tests
//! Tests JWT generation, password hashing, token validation
mod common;

use openmusic_core::UserId;
use openmusic_server::services::auth::AuthService;

fn create_test_auth_service() -> AuthService {
    AuthService::new(common::TEST_SECRET.to_string(), 1, 1).with_bcrypt_cost(4)
}

/// Test password hashing produces valid bcrypt hashes
#[test]
fn test_password_hashing() {
    let auth_service = create_test_auth_service();

    let password = "MySecurePassword123!";
    let hash = auth_service.hash_password(password).unwrap();

    // Verify hash format (bcrypt starts with $2b$ or $2a$)
    assert!(hash.starts_with("$2b$") || hash.starts_with("$2a$"));

    // Verify the hash is different each time (salt is random)
    let hash2 = auth_service.hash_password(password).unwrap();
    assert_ne!(hash, hash2, "Hashes should differ due to random salt");
}

/// Test password verification with invalid hash format
#[test]
fn test_password_verification_invalid_hash() {
    let auth_service = create_test_auth_service();

    let result = auth_service.verify_password("password", "not-a-valid-hash");
    assert!(result.is_err(), "Invalid hash should return error");
}

/// Test token validation with invalid signature
#[test]
fn test_token_validation_invalid_signature() {
    let auth_service = create_test_auth_service();

    // Create a token with different secret
    let other_auth = AuthService::new("different-secret".to_string(), 1, 1);
    let user_id = UserId::new("user-123");
    let token = other_auth.create_access_token(&user_id).unwrap();

    let result = auth_service.verify_access_token(&token);
    assert!(result.is_err(), "Token with wrong signature should fail validation");
}

/// Test token validation with malformed token
#[test]
fn test_token_validation_malformed() {
    let auth_service = create_test_auth_service();

    assert!(auth_service.verify_access_token("not.a.valid.jwt.token").is_err());
    assert!(auth_service.verify_access_token("").is_err());
}

/// Claims carry the subject and the configured lifetime
#[test]
fn test_claims_carry_subject_and_lifetime() {
    let auth_service = create_test_auth_service();
    let user_id = UserId::new("user-123");

    let token = auth_service.create_access_token(&user_id).unwrap();
    let claims = auth_service.verify_token(&token).unwrap();

    assert_eq!(claims.exp - claims.iat, 3600);
    assert_eq!(claims.sub, "user-123");
}
