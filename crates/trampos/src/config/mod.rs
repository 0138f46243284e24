use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;

use crate::quiz::matching::{MatchPolicy, MatchStrategy, ResultShape, UnknownShape, UnknownStrategy};
use crate::quiz::scoring::DEFAULT_TOP_SUBTYPES;
use crate::quiz::service::QuizSettings;
use crate::quiz::validation::CatalogPolicy;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub quiz: QuizConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            quiz: QuizConfig::load()?,
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Sessions kept in memory before the oldest ones are evicted.
pub const DEFAULT_MAX_SESSIONS: usize = 10_000;

/// Matching policy, catalog policy, and persistence location for the quiz.
#[derive(Debug, Clone)]
pub struct QuizConfig {
    pub settings: QuizSettings,
    /// Directory holding admin snapshots; edits stay in memory when unset.
    pub data_dir: Option<PathBuf>,
    pub max_sessions: usize,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            settings: QuizSettings::default(),
            data_dir: None,
            max_sessions: DEFAULT_MAX_SESSIONS,
        }
    }
}

impl QuizConfig {
    fn load() -> Result<Self, ConfigError> {
        let top_subtypes =
            positive_var::<usize>("TRAMPOS_TOP_SUBTYPES")?.unwrap_or(DEFAULT_TOP_SUBTYPES);

        let strategy = match non_empty_var("TRAMPOS_MATCH_STRATEGY") {
            Some(raw) => raw
                .parse::<MatchStrategy>()
                .map_err(ConfigError::InvalidStrategy)?,
            None => MatchStrategy::default(),
        }
        .with_top_subtypes(top_subtypes);

        let mut shape = match non_empty_var("TRAMPOS_RESULT_SHAPE") {
            Some(raw) => raw.parse::<ResultShape>().map_err(ConfigError::InvalidShape)?,
            None => ResultShape::default(),
        };
        if let Some(limit) = positive_var::<usize>("TRAMPOS_RESULT_LIMIT")? {
            shape = shape.with_limit(limit);
        }

        let dominant_boost = number_var::<u32>("TRAMPOS_DOMINANT_BOOST")?.unwrap_or(0);
        let catalog = number_var::<usize>("TRAMPOS_MIN_OWN_TYPE")?
            .map(CatalogPolicy::new)
            .unwrap_or_default();
        let seed = number_var::<u64>("TRAMPOS_SEED")?;
        let data_dir = non_empty_var("TRAMPOS_DATA_DIR").map(PathBuf::from);
        let max_sessions =
            positive_var::<usize>("TRAMPOS_MAX_SESSIONS")?.unwrap_or(DEFAULT_MAX_SESSIONS);

        Ok(Self {
            settings: QuizSettings {
                matching: MatchPolicy {
                    strategy,
                    dominant_boost,
                    shape,
                },
                catalog,
                seed,
            },
            data_dir,
            max_sessions,
        })
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

const WHOLE_NUMBER: &str = "a whole number";
const POSITIVE_NUMBER: &str = "a positive whole number";

fn parse_var<T: FromStr>(
    name: &'static str,
    expected: &'static str,
) -> Result<Option<T>, ConfigError> {
    non_empty_var(name)
        .map(|value| {
            value.parse::<T>().map_err(|_| ConfigError::InvalidNumber {
                name,
                expected,
                value,
            })
        })
        .transpose()
}

fn number_var<T: FromStr>(name: &'static str) -> Result<Option<T>, ConfigError> {
    parse_var(name, WHOLE_NUMBER)
}

fn positive_var<T>(name: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr + PartialEq + Default + ToString,
{
    match parse_var::<T>(name, POSITIVE_NUMBER)? {
        Some(value) if value == T::default() => Err(ConfigError::InvalidNumber {
            name,
            expected: POSITIVE_NUMBER,
            value: value.to_string(),
        }),
        other => Ok(other),
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidStrategy(UnknownStrategy),
    InvalidShape(UnknownShape),
    InvalidNumber {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidStrategy(err) => write!(
                f,
                "TRAMPOS_MATCH_STRATEGY must be top_subtypes, own_type_coverage or related_coverage ({err})"
            ),
            ConfigError::InvalidShape(err) => write!(
                f,
                "TRAMPOS_RESULT_SHAPE must be flat, per_tier or paged ({err})"
            ),
            ConfigError::InvalidNumber {
                name,
                expected,
                value,
            } => write!(f, "{name} must be {expected}, got '{value}'"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort | ConfigError::InvalidNumber { .. } => None,
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidStrategy(err) => Some(err),
            ConfigError::InvalidShape(err) => Some(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    const QUIZ_VARS: [&str; 9] = [
        "TRAMPOS_MATCH_STRATEGY",
        "TRAMPOS_TOP_SUBTYPES",
        "TRAMPOS_DOMINANT_BOOST",
        "TRAMPOS_RESULT_SHAPE",
        "TRAMPOS_RESULT_LIMIT",
        "TRAMPOS_MIN_OWN_TYPE",
        "TRAMPOS_SEED",
        "TRAMPOS_DATA_DIR",
        "TRAMPOS_MAX_SESSIONS",
    ];

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("APP_ENV");
        env::remove_var("APP_HOST");
        env::remove_var("APP_PORT");
        env::remove_var("APP_LOG_LEVEL");
        for name in QUIZ_VARS {
            env::remove_var(name);
        }
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.telemetry.log_level, "info");

        let settings = config.quiz.settings;
        assert_eq!(settings.matching.strategy, MatchStrategy::TopSubtypes { n: 4 });
        assert_eq!(settings.matching.dominant_boost, 0);
        assert_eq!(
            settings.matching.shape,
            ResultShape::PerTier {
                cap: 4,
                prefer_dominant: true
            }
        );
        assert_eq!(settings.catalog.min_own_type_subtypes, 2);
        assert_eq!(settings.seed, None);
        assert!(config.quiz.data_dir.is_none());
        assert_eq!(config.quiz.max_sessions, DEFAULT_MAX_SESSIONS);
    }

    #[test]
    fn accepts_localhost_host() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_HOST", "localhost");
        let config = AppConfig::load().expect("config loads");
        let addr = config.server.socket_addr().expect("localhost resolves");
        assert_eq!(addr, SocketAddr::new(IpAddr::from([127, 0, 0, 1]), 3000));
    }

    #[test]
    fn quiz_settings_follow_environment() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("TRAMPOS_MATCH_STRATEGY", "own-type-coverage");
        env::set_var("TRAMPOS_RESULT_SHAPE", "paged");
        env::set_var("TRAMPOS_RESULT_LIMIT", "8");
        env::set_var("TRAMPOS_DOMINANT_BOOST", "1");
        env::set_var("TRAMPOS_MIN_OWN_TYPE", "0");
        env::set_var("TRAMPOS_SEED", "42");
        env::set_var("TRAMPOS_DATA_DIR", "/tmp/trampos");
        env::set_var("TRAMPOS_MAX_SESSIONS", "250");

        let config = AppConfig::load().expect("config loads");
        let settings = config.quiz.settings;
        assert_eq!(settings.matching.strategy, MatchStrategy::OwnTypeCoverage);
        assert_eq!(settings.matching.shape, ResultShape::Paged { page_size: 8 });
        assert_eq!(settings.matching.dominant_boost, 1);
        assert_eq!(settings.catalog.min_own_type_subtypes, 0);
        assert_eq!(settings.seed, Some(42));
        assert_eq!(config.quiz.data_dir, Some(PathBuf::from("/tmp/trampos")));
        assert_eq!(config.quiz.max_sessions, 250);
        reset_env();
    }

    #[test]
    fn rejects_unknown_strategy_and_zero_limits() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("TRAMPOS_MATCH_STRATEGY", "astrology");
        let err = AppConfig::load().expect_err("unknown strategy rejected");
        assert!(matches!(err, ConfigError::InvalidStrategy(_)));

        reset_env();
        env::set_var("TRAMPOS_TOP_SUBTYPES", "0");
        let err = AppConfig::load().expect_err("zero top subtypes rejected");
        assert!(matches!(
            err,
            ConfigError::InvalidNumber {
                name: "TRAMPOS_TOP_SUBTYPES",
                ..
            }
        ));
        reset_env();
    }

    #[test]
    fn number_errors_describe_the_accepted_range() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("TRAMPOS_SEED", "abc");
        let err = AppConfig::load().expect_err("non-numeric seed rejected");
        assert_eq!(
            err.to_string(),
            "TRAMPOS_SEED must be a whole number, got 'abc'"
        );

        reset_env();
        env::set_var("TRAMPOS_DOMINANT_BOOST", "0");
        env::set_var("TRAMPOS_SEED", "0");
        let config = AppConfig::load().expect("zero boost and seed are valid");
        assert_eq!(config.quiz.settings.seed, Some(0));

        reset_env();
        env::set_var("TRAMPOS_MAX_SESSIONS", "0");
        let err = AppConfig::load().expect_err("zero session cap rejected");
        assert_eq!(
            err.to_string(),
            "TRAMPOS_MAX_SESSIONS must be a positive whole number, got '0'"
        );
        reset_env();
    }
}
