use std::sync::Arc;

use argon2::password_hash::{SaltString, rand_core::OsRng};
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use async_trait::async_trait;
use chrono::Utc;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use sea_orm::DbErr;
use thiserror::Error;
use tracing::{debug, info};

use crate::config::JwtConfig;
use crate::utils::models::{AuthenticatedUser, CreateUser, IssuedToken, TokenPayload, User};
use crate::utils::repository::UserRepository;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Please enter valid credentials")]
    InvalidCredentials,
    #[error("Signature has expired")]
    SignatureExpired,
    #[error("Error decoding signature")]
    DecodeSignature,
    #[error("Invalid payload")]
    InvalidPayload,
    #[error("Refresh has expired")]
    RefreshExpired,
    #[error("User is disabled")]
    UserDisabled,
    #[error("User already exists")]
    UserAlreadyExists,
    #[error("Password hashing error: {0}")]
    PasswordHash(String),
    #[error("Token encoding error: {0}")]
    TokenEncoding(String),
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

type Result<T> = std::result::Result<T, AuthError>;

/// Issues, verifies and refreshes JSON Web Tokens for user accounts.
#[async_trait]
pub trait AuthService: Send + Sync + std::fmt::Debug {
    /// Exchanges a username and password for a signed token.
    async fn token_auth(&self, username: &str, password: &str) -> Result<IssuedToken>;

    /// Checks the signature and expiry of a token and returns its payload.
    async fn verify_token(&self, token: &str) -> Result<TokenPayload>;

    /// Issues a new token for a still-valid one, keeping its original issue time.
    ///
    /// # Errors
    /// `RefreshExpired` once the refresh window measured from `origIat` has passed.
    async fn refresh_token(&self, token: &str) -> Result<IssuedToken>;

    /// Verifies a token and resolves it to an existing, active user.
    async fn authenticate(&self, token: &str) -> Result<AuthenticatedUser>;

    /// Creates a user with an argon2-hashed password.
    async fn create_user(&self, username: &str, password: &str) -> Result<User>;
}

pub struct LocalAuthService {
    user_repo: Arc<dyn UserRepository>,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expiration_secs: i64,
    refresh_expiration_secs: i64,
}

impl std::fmt::Debug for LocalAuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalAuthService")
            .field("user_repo", &self.user_repo)
            .field("expiration_secs", &self.expiration_secs)
            .field("refresh_expiration_secs", &self.refresh_expiration_secs)
            .finish_non_exhaustive()
    }
}

impl LocalAuthService {
    pub fn new(user_repo: Arc<dyn UserRepository>, config: JwtConfig) -> Self {
        Self {
            user_repo,
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            expiration_secs: config.expiration_secs as i64,
            refresh_expiration_secs: config.refresh_expiration_secs as i64,
        }
    }

    fn issue(&self, username: String, orig_iat: i64) -> Result<IssuedToken> {
        let now = Utc::now().timestamp();
        let payload = TokenPayload {
            username,
            exp: now + self.expiration_secs,
            orig_iat,
        };

        let token = encode(&Header::new(Algorithm::HS256), &payload, &self.encoding_key)
            .map_err(|e| AuthError::TokenEncoding(e.to_string()))?;

        Ok(IssuedToken {
            token,
            refresh_expires_in: orig_iat + self.refresh_expiration_secs,
            payload,
        })
    }

    fn decode_payload(&self, token: &str) -> Result<TokenPayload> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        decode::<TokenPayload>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::SignatureExpired,
                ErrorKind::Json(_) | ErrorKind::MissingRequiredClaim(_) => {
                    AuthError::InvalidPayload
                }
                _ => AuthError::DecodeSignature,
            })
    }

    fn hash_password(password: &str) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AuthError::PasswordHash(e.to_string()))
    }

    fn password_matches(password: &str, stored_hash: &str) -> bool {
        match PasswordHash::new(stored_hash) {
            Ok(parsed) => Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok(),
            Err(_) => false,
        }
    }
}

#[async_trait]
impl AuthService for LocalAuthService {
    async fn token_auth(&self, username: &str, password: &str) -> Result<IssuedToken> {
        let user = self
            .user_repo
            .find_by_username(username)
            .await?
            .filter(|user| user.is_active)
            .ok_or(AuthError::InvalidCredentials)?;

        if !Self::password_matches(password, &user.password_hash) {
            debug!("Rejected credentials for {}", username);
            return Err(AuthError::InvalidCredentials);
        }

        let issued = self.issue(user.username, Utc::now().timestamp())?;
        info!("Issued token for {}", issued.payload.username);
        Ok(issued)
    }

    async fn verify_token(&self, token: &str) -> Result<TokenPayload> {
        self.decode_payload(token)
    }

    async fn refresh_token(&self, token: &str) -> Result<IssuedToken> {
        let payload = self.decode_payload(token)?;

        if payload.orig_iat + self.refresh_expiration_secs < Utc::now().timestamp() {
            return Err(AuthError::RefreshExpired);
        }

        debug!("Refreshing token for {}", payload.username);
        self.issue(payload.username, payload.orig_iat)
    }

    async fn authenticate(&self, token: &str) -> Result<AuthenticatedUser> {
        let payload = self.decode_payload(token)?;

        let user = self
            .user_repo
            .find_by_username(&payload.username)
            .await?
            .ok_or(AuthError::InvalidPayload)?;

        if !user.is_active {
            return Err(AuthError::UserDisabled);
        }

        Ok(AuthenticatedUser {
            user_id: user.id,
            username: user.username,
        })
    }

    async fn create_user(&self, username: &str, password: &str) -> Result<User> {
        if self.user_repo.find_by_username(username).await?.is_some() {
            return Err(AuthError::UserAlreadyExists);
        }

        let password_hash = Self::hash_password(password)?;
        let user = self
            .user_repo
            .create(CreateUser {
                username: username.to_string(),
                password_hash,
                is_active: true,
            })
            .await?;

        info!("Created user {} ({})", user.username, user.id);
        Ok(user)
    }
}
