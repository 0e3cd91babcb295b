// src/config.rs

use std::env;
use std::time::Duration;

use dotenvy::dotenv;

/// Number of MCQs requested from the feedback generator per question.
pub const MCQS_PER_QUESTION: usize = 5;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub rust_log: String,
    pub port: u16,
    /// Where the empty-state "Back to home" action sends the browser.
    pub dashboard_path: String,
    /// Pause before answering the "Back to home" action, so the client can show its loading state.
    pub redirect_delay: Duration,
    pub allowed_origins: Vec<String>,
    /// Practice sessions unused for this long are discarded.
    pub practice_idle_ttl: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let database_url = env::var("DATABASE_URL")
            .expect("DATABASE_URL must be set");

        let rust_log = env::var("RUST_LOG")
            .unwrap_or_else(|_| "info".to_string());

        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);

        let dashboard_path = env::var("DASHBOARD_PATH")
            .unwrap_or_else(|_| "/dashboard".to_string());

        let redirect_delay = env::var("REDIRECT_DELAY_MS")
            .ok()
            .and_then(|ms| ms.parse().ok())
            .map(Duration::from_millis)
            .unwrap_or(Duration::from_millis(1400));

        let allowed_origins = env::var("ALLOWED_ORIGINS")
            .map(|raw| parse_origins(&raw))
            .unwrap_or_else(|_| {
                vec![
                    "http://localhost:3000".to_string(),
                    "http://127.0.0.1:3000".to_string(),
                ]
            });

        let practice_idle_ttl = env::var("PRACTICE_IDLE_SECS")
            .ok()
            .and_then(|secs| secs.parse::<u64>().ok())
            .filter(|&secs| secs > 0)
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(30 * 60));

        Self {
            database_url,
            rust_log,
            port,
            dashboard_path,
            redirect_delay,
            allowed_origins,
            practice_idle_ttl,
        }
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origins_are_trimmed_and_blank_entries_dropped() {
        let origins = parse_origins(" http://a.test ,,http://b.test, ");
        assert_eq!(origins, vec!["http://a.test", "http://b.test"]);
    }
}
