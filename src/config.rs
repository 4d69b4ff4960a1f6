use anyhow::Result;
use config::{Config, ConfigBuilder, Environment, File, builder::DefaultState};
use serde::Deserialize;

use crate::schemas::AppState;
use crate::session::SessionRegistry;

/// Optional configuration file, looked up in the working directory.
pub const CONFIG_FILE: &str = "plantmon";
/// Prefix of the environment variables that override settings,
/// e.g. `PLANTMON_SERVER__BIND_ADDRESS`.
pub const ENV_PREFIX: &str = "PLANTMON";

/// Application settings
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Settings {
    pub server: ServerSettings,
    pub session: SessionSettings,
    #[serde(default)]
    pub generator: GeneratorSettings,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ServerSettings {
    /// Format: IP:PORT
    pub bind_address: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SessionSettings {
    /// Idle time after which a session and its series are dropped
    pub ttl_secs: u64,
    /// Upper bound on concurrently cached sessions
    pub max_sessions: u64,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct GeneratorSettings {
    /// Fixed random seed; unset draws fresh entropy for every session
    pub seed: Option<u64>,
}

impl Settings {
    /// Loads settings from defaults, `plantmon.toml` and the environment.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::load_from(environment())
    }

    /// Layers `plantmon.toml` and then `environment` over the defaults.
    pub fn load_from(environment: Environment) -> Result<Self> {
        let settings = Self::with_defaults()?
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(environment)
            .build()?
            .try_deserialize()?;

        tracing::debug!(?settings, "Configuration loaded");
        Ok(settings)
    }

    /// Settings built from the defaults alone.
    pub fn defaults() -> Result<Self> {
        Ok(Self::with_defaults()?.build()?.try_deserialize()?)
    }

    fn with_defaults() -> Result<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .set_default("server.bind_address", "0.0.0.0:3000")?
            .set_default("session.ttl_secs", 1800_i64)?
            .set_default("session.max_sessions", 1000_i64)?)
    }
}

/// The `PLANTMON_*` environment source, with `__` separating nested keys.
pub fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

/// Initialize application state from settings
pub fn initialize_app_state(settings: &Settings) -> AppState {
    let generator = compute::generator::default_generator(settings.generator.seed);
    tracing::info!(
        ttl_secs = settings.session.ttl_secs,
        max_sessions = settings.session.max_sessions,
        seed = ?generator.seed(),
        "Session registry initialized"
    );

    let sessions = SessionRegistry::new(generator, &settings.session);

    AppState { sessions }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::Map;

    fn env(vars: &[(&str, &str)]) -> Environment {
        let vars: Map<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        environment().source(Some(vars))
    }

    #[test]
    fn loads_without_file_or_environment() {
        let settings = Settings::load_from(env(&[])).unwrap();

        assert_eq!(settings, Settings::defaults().unwrap());
        assert_eq!(settings.generator, GeneratorSettings::default());
    }

    #[test]
    fn environment_overrides_defaults() {
        let settings = Settings::load_from(env(&[
            ("PLANTMON_SERVER__BIND_ADDRESS", "127.0.0.1:4000"),
            ("PLANTMON_SESSION__TTL_SECS", "90"),
            ("PLANTMON_GENERATOR__SEED", "7"),
        ]))
        .unwrap();

        assert_eq!(settings.server.bind_address, "127.0.0.1:4000");
        assert_eq!(settings.session.ttl_secs, 90);
        assert_eq!(settings.session.max_sessions, 1000);
        assert_eq!(settings.generator.seed, Some(7));
    }

    #[test]
    fn unprefixed_variables_are_ignored() {
        let settings = Settings::load_from(env(&[("SESSION__TTL_SECS", "5")])).unwrap();

        assert_eq!(settings.session.ttl_secs, 1800);
    }

    #[test]
    fn defaults_are_complete() {
        let settings = Settings::defaults().unwrap();

        assert_eq!(settings.server.bind_address, "0.0.0.0:3000");
        assert_eq!(settings.session.ttl_secs, 1800);
        assert_eq!(settings.session.max_sessions, 1000);
        assert_eq!(settings.generator.seed, None);
    }

    #[test]
    fn explicit_values_override_defaults() {
        let settings: Settings = Settings::with_defaults()
            .unwrap()
            .set_override("generator.seed", 99_i64)
            .unwrap()
            .set_override("server.bind_address", "127.0.0.1:8080")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.generator.seed, Some(99));
        assert_eq!(settings.server.bind_address, "127.0.0.1:8080");
        assert_eq!(settings.session.ttl_secs, 1800);
    }
}
