use std::env;
use std::time::Duration;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Server host to bind to.
    pub host: String,
    /// Server port to bind to.
    pub port: u16,
    /// Event bus channel capacity.
    pub event_bus_capacity: usize,
    /// Deadline for a single rubric call.
    pub rubric_timeout: Duration,
    /// Maximum concurrent reviews inside a batch.
    pub batch_concurrency: usize,
    /// Object-store settings; `None` selects the local preview store.
    pub storage: Option<StorageSettings>,
    /// Log level (e.g., "info", "debug", "trace").
    pub log_level: String,
}

/// Settings for the configured object-store variant.
#[derive(Debug, Clone)]
pub struct StorageSettings {
    pub base_url: String,
    pub api_key: String,
    pub bucket: String,
}

impl AppConfig {
    /// Load configuration from environment variables with sensible defaults.
    pub fn from_env() -> Result<Self, env::VarError> {
        let storage = match env::var("STORAGE_URL") {
            Ok(base_url) => Some(StorageSettings {
                base_url,
                api_key: env::var("STORAGE_KEY")?,
                bucket: env::var("STORAGE_BUCKET").unwrap_or_else(|_| "materials".to_string()),
            }),
            Err(_) => None,
        };

        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3030".to_string())
                .parse()
                .expect("PORT must be a valid u16"),
            event_bus_capacity: env::var("EVENT_BUS_CAPACITY")
                .unwrap_or_else(|_| "1024".to_string())
                .parse()
                .expect("EVENT_BUS_CAPACITY must be a valid usize"),
            rubric_timeout: Duration::from_millis(
                env::var("RUBRIC_TIMEOUT_MS")
                    .unwrap_or_else(|_| "8000".to_string())
                    .parse()
                    .expect("RUBRIC_TIMEOUT_MS must be a valid u64"),
            ),
            batch_concurrency: env::var("BATCH_CONCURRENCY")
                .unwrap_or_else(|_| "4".to_string())
                .parse()
                .expect("BATCH_CONCURRENCY must be a valid usize"),
            storage,
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// Build the socket address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
