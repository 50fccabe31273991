use std::env;
use std::path::PathBuf;

/// Default multipart body limit (10 MiB)
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct Config {
    // Database
    pub database_url: String,
    pub database_max_connections: u32,

    // JWT
    pub jwt_secret: String,
    pub jwt_expiration_hours: i64,

    // Uploads
    pub upload_dir: PathBuf,
    pub max_upload_bytes: usize,

    // Seed account, created on startup when a password is set
    pub bootstrap_admin_email: String,
    pub bootstrap_admin_password: Option<String>,

    // Server
    pub host: String,
    pub port: u16,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::load(SecretPolicy::Required)
    }

    /// Configuration for offline tools that never issue tokens.
    /// `JWT_SECRET` may be absent.
    pub fn from_env_for_tools() -> Result<Self, ConfigError> {
        Self::load(SecretPolicy::Optional)
    }

    fn load(secret: SecretPolicy) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if exists

        Ok(Self {
            // Database
            database_url: match env::var("DATABASE_URL") {
                Ok(url) => url,
                Err(_) => database_url_from_parts(),
            },
            database_max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .map_err(|_| ConfigError::Invalid("DATABASE_MAX_CONNECTIONS"))?,

            // JWT
            jwt_secret: jwt_secret(env::var("JWT_SECRET").ok(), secret)?,
            jwt_expiration_hours: env::var("JWT_EXPIRATION_HOURS")
                .unwrap_or_else(|_| "24".to_string())
                .parse()
                .map_err(|_| ConfigError::Invalid("JWT_EXPIRATION_HOURS"))?,

            // Uploads
            upload_dir: env::var("UPLOAD_DIR")
                .unwrap_or_else(|_| "uploads".to_string())
                .into(),
            max_upload_bytes: match env::var("MAX_UPLOAD_BYTES") {
                Ok(value) => value
                    .parse()
                    .map_err(|_| ConfigError::Invalid("MAX_UPLOAD_BYTES"))?,
                Err(_) => DEFAULT_MAX_UPLOAD_BYTES,
            },

            bootstrap_admin_email: env::var("BOOTSTRAP_ADMIN_EMAIL")
                .unwrap_or_else(|_| "webmaster@localhost".to_string()),
            bootstrap_admin_password: env::var("BOOTSTRAP_ADMIN_PASSWORD")
                .ok()
                .filter(|p| !p.is_empty()),

            // Server
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .map_err(|_| ConfigError::Invalid("PORT"))?,
            log_format: match env::var("LOG_FORMAT").as_deref() {
                Ok("json") => LogFormat::Json,
                Ok("pretty") | Err(_) => LogFormat::Pretty,
                Ok(_) => return Err(ConfigError::Invalid("LOG_FORMAT")),
            },
        })
    }

    /// Get server address as "host:port"
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SecretPolicy {
    Required,
    Optional,
}

fn jwt_secret(value: Option<String>, policy: SecretPolicy) -> Result<String, ConfigError> {
    match (value.filter(|v| !v.is_empty()), policy) {
        (Some(secret), _) => Ok(secret),
        (None, SecretPolicy::Optional) => Ok(String::new()),
        (None, SecretPolicy::Required) => Err(ConfigError::Missing("JWT_SECRET")),
    }
}

/// Assemble a Postgres URL from the individual DB_* variables
fn database_url_from_parts() -> String {
    let host = env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string());
    let name = env::var("DB_NAME").unwrap_or_else(|_| "redline_db".to_string());
    let user = env::var("DB_USER").unwrap_or_else(|_| "postgres".to_string());
    let password = env::var("DB_PASSWORD").unwrap_or_default();

    if password.is_empty() {
        format!("postgres://{}@{}/{}", user, host, name)
    } else {
        format!("postgres://{}:{}@{}/{}", user, password, host, name)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid environment variable: {0}")]
    Invalid(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jwt_secret_required_for_server() {
        assert!(matches!(
            jwt_secret(None, SecretPolicy::Required),
            Err(ConfigError::Missing("JWT_SECRET"))
        ));
        assert!(jwt_secret(Some(String::new()), SecretPolicy::Required).is_err());
        assert_eq!(
            jwt_secret(Some("s3cret".to_string()), SecretPolicy::Required).unwrap(),
            "s3cret"
        );
    }

    #[test]
    fn test_jwt_secret_optional_for_tools() {
        assert_eq!(jwt_secret(None, SecretPolicy::Optional).unwrap(), "");
        assert_eq!(
            jwt_secret(Some("s3cret".to_string()), SecretPolicy::Optional).unwrap(),
            "s3cret"
        );
    }
}
