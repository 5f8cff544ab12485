use std::env;
use std::time::Duration;

pub const DEFAULT_GEMINI_API_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent";

#[derive(Debug, Clone)]
pub struct Settings {
    // App
    pub app_name: String,
    pub app_version: String,
    pub environment: String,
    pub host: String,
    pub port: u16,

    // Gemini
    pub gemini_api_key: String,
    pub gemini_api_url: String,
    pub gemini_timeout: Option<u64>,

    // CORS
    pub cors_origins: String,

    // Frontend
    pub static_dir: String,

    // Logging
    pub log_level: String,
    pub log_format: String,
}

impl Settings {
    pub fn from_env() -> Self {
        Self {
            app_name: env::var("APP_NAME").unwrap_or("College Chatbot API".into()),
            app_version: env::var("APP_VERSION").unwrap_or("1.0.0".into()),
            environment: env::var("ENVIRONMENT").unwrap_or("development".into()),
            host: env::var("HOST").unwrap_or("0.0.0.0".into()),
            port: env::var("PORT")
                .unwrap_or("8080".into())
                .parse()
                .unwrap_or(8080),

            gemini_api_key: env::var("GEMINI_API_KEY").unwrap_or_default(),
            gemini_api_url: env::var("GEMINI_API_URL")
                .ok()
                .filter(|s| !s.is_empty())
                .unwrap_or(DEFAULT_GEMINI_API_URL.into()),
            gemini_timeout: parse_timeout(env::var("GEMINI_TIMEOUT").ok().as_deref()),

            cors_origins: env::var("CORS_ORIGINS").unwrap_or("*".into()),

            static_dir: env::var("STATIC_DIR").unwrap_or("static".into()),

            log_level: env::var("LOG_LEVEL").unwrap_or("info".into()),
            log_format: env::var("LOG_FORMAT").unwrap_or("json".into()),
        }
    }

    pub fn cors_origins_list(&self) -> Vec<String> {
        if self.cors_origins == "*" {
            return vec!["*".to_string()];
        }
        self.cors_origins
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// `None` leaves the reqwest default in place, which never times out.
    #[inline]
    pub fn gemini_timeout(&self) -> Option<Duration> {
        self.gemini_timeout.map(Duration::from_secs)
    }
}

/// Seconds from `GEMINI_TIMEOUT`. Unset, unparsable, or zero means no timeout.
fn parse_timeout(raw: Option<&str>) -> Option<u64> {
    raw.and_then(|s| s.trim().parse().ok()).filter(|secs| *secs > 0)
}
