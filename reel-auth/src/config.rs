use confique::Config;

/// Token signing settings.
#[derive(Debug, Clone, Config)]
pub struct JwtConfig {
    #[config(env = "JWT_SECRET")]
    pub secret: String,

    /// Lifetime of an issued token, in seconds.
    #[config(env = "JWT_EXPIRATION_SECS", default = 300)]
    pub expiration_secs: u64,

    /// How long after the original issue a token may still be refreshed, in seconds.
    #[config(env = "JWT_REFRESH_EXPIRATION_SECS", default = 604800)]
    pub refresh_expiration_secs: u64,
}

impl JwtConfig {
    /// Default lifetimes with the given secret.
    pub fn with_secret(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            expiration_secs: 300,
            refresh_expiration_secs: 7 * 24 * 60 * 60,
        }
    }
}
