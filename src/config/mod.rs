use std::env;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub database_max_connections: u32,
    pub database_connect_attempts: u32,
    pub host: String,
    pub port: u16,
    pub auth_token_secret: String,
    pub frontend_url: String,
    pub public_base_url: String,
    pub reports_dir: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, env::VarError> {
        Ok(Self {
            database_url: env::var("DATABASE_URL")?,
            database_max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .unwrap_or(10),
            database_connect_attempts: env::var("DATABASE_CONNECT_ATTEMPTS")
                .unwrap_or_else(|_| "5".to_string())
                .parse()
                .unwrap_or(5),
            host: env::var("BACKEND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("BACKEND_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .unwrap_or(3000),
            auth_token_secret: env::var("AUTH_TOKEN_SECRET")?,
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            public_base_url: env::var("PUBLIC_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            reports_dir: env::var("REPORTS_DIR")
                .unwrap_or_else(|_| "public/reports".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test: from_env reads process-global state, so env mutations
    // must not run concurrently with each other.
    #[test]
    fn from_env_defaults_and_required_vars() {
        env::remove_var("DATABASE_URL");
        env::set_var("AUTH_TOKEN_SECRET", "test-secret");
        assert!(AppConfig::from_env().is_err());

        env::set_var("DATABASE_URL", "postgres://localhost/peopleops");
        env::remove_var("DATABASE_MAX_CONNECTIONS");
        env::remove_var("BACKEND_PORT");
        env::remove_var("REPORTS_DIR");

        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.database_max_connections, 10);
        assert_eq!(config.database_connect_attempts, 5);
        assert_eq!(config.port, 3000);
        assert_eq!(config.reports_dir, "public/reports");
    }
}
