use std::env;
use std::path::PathBuf;

/// Runtime configuration, read once at startup.
pub struct Config {
    /// Base URL of the TaskDeck REST backend. Required.
    pub api_base_url: String,
    /// Directory holding the durable session files (token + user record).
    pub state_dir: PathBuf,
}

impl Config {
    /// Reads configuration from the environment (a `.env` file is loaded
    /// first if present).
    ///
    /// Panics if `TASKDECK_API_BASE_URL` is unset: there is nothing useful
    /// this client can do without a backend, so the failure is fatal rather
    /// than recoverable.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self {
            api_base_url: env::var("TASKDECK_API_BASE_URL")
                .expect("TASKDECK_API_BASE_URL must be set"),
            state_dir: env::var("TASKDECK_STATE_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".taskdeck")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env() {
        // Set the required environment variable
        env::set_var("TASKDECK_API_BASE_URL", "http://localhost:8000/api");

        let config = Config::from_env();

        assert_eq!(config.api_base_url, "http://localhost:8000/api");
        assert_eq!(config.state_dir, PathBuf::from(".taskdeck"));

        // Test custom state dir
        env::set_var("TASKDECK_STATE_DIR", "/tmp/taskdeck-test");

        let config = Config::from_env();

        assert_eq!(config.state_dir, PathBuf::from("/tmp/taskdeck-test"));

        env::remove_var("TASKDECK_STATE_DIR");
    }
}
