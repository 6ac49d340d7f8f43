mod basic;
mod client;
mod quiz;

pub use basic::BasicConfig;
pub use client::ClientConfig;
pub use quiz::QuizConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use gyan_schema::LoginCredentials;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration managed by Figment.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Process-level settings (see `basic` table in config.toml).
    #[serde(default)]
    pub basic: BasicConfig,

    /// Backend location and transport settings (see `client` table).
    #[serde(default)]
    pub client: ClientConfig,

    /// Login credentials used by the binary. Never compiled in.
    /// TOML: `credentials.identifier`, `credentials.password`.
    /// Env: `GYAN_CREDENTIALS__IDENTIFIER`, `GYAN_CREDENTIALS__PASSWORD`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credentials: Option<LoginCredentials>,

    /// Quiz the binary requests (see `quiz` table).
    #[serde(default)]
    pub quiz: QuizConfig,
}

const DEFAULT_CONFIG_FILE: &str = "config.toml";
const ENV_PREFIX: &str = "GYAN_";

impl Config {
    /// Builds a Figment that merges defaults, `config.toml` and `GYAN_*` env vars, in that order.
    ///
    /// Nested keys are separated by `__` in env var names, e.g. `GYAN_CLIENT__BASE_URL`.
    pub fn figment() -> Figment {
        let figment = Figment::new().merge(Serialized::defaults(Config::default()));
        let figment = if PathBuf::from(DEFAULT_CONFIG_FILE).is_file() {
            figment.merge(Toml::file(DEFAULT_CONFIG_FILE))
        } else {
            figment
        };
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    pub fn load() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::QuizEndpoint;
    use figment::Jail;
    use gyan_schema::Difficulty;

    #[test]
    fn defaults_without_sources() {
        Jail::expect_with(|_jail| {
            let cfg = Config::load()?;
            assert_eq!(cfg.client.base_url.as_str(), "http://127.0.0.1:5000/");
            assert_eq!(cfg.client.timeout_secs, None);
            assert_eq!(cfg.basic.loglevel, "info");
            assert!(cfg.credentials.is_none());
            assert_eq!(cfg.quiz.endpoint, QuizEndpoint::Generate);
            Ok(())
        });
    }

    #[test]
    fn toml_then_env_layering() {
        Jail::expect_with(|jail| {
            jail.create_file(
                DEFAULT_CONFIG_FILE,
                r#"
                [client]
                base_url = "http://backend.internal:8080"
                timeout_secs = 15

                [credentials]
                identifier = "Sudip"
                password = "from-file"

                [quiz]
                topic = "Compiler Design"
                num_questions = 7
                difficulty = "hard"
                endpoint = "new"
                "#,
            )?;
            jail.set_env("GYAN_CREDENTIALS__PASSWORD", "from-env");
            jail.set_env("GYAN_BASIC__LOGLEVEL", "debug");

            let cfg = Config::load()?;
            assert_eq!(cfg.client.base_url.as_str(), "http://backend.internal:8080/");
            assert_eq!(cfg.client.timeout_secs, Some(15));
            assert_eq!(cfg.basic.loglevel, "debug");

            let creds = cfg.credentials.expect("credentials configured");
            assert_eq!(creds.identifier, "Sudip");
            assert_eq!(creds.password, "from-env");

            let request = cfg.quiz.request();
            assert_eq!(request.topic, "Compiler Design");
            assert_eq!(request.num_questions.get(), 7);
            assert_eq!(request.difficulty, Difficulty::Hard);
            assert_eq!(cfg.quiz.endpoint, QuizEndpoint::New);
            Ok(())
        });
    }

    #[test]
    fn zero_questions_is_rejected() {
        Jail::expect_with(|jail| {
            jail.set_env("GYAN_QUIZ__NUM_QUESTIONS", "0");
            assert!(Config::load().is_err());
            Ok(())
        });
    }
}
