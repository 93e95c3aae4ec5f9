//! # Configuration
//!
//! Settings are layered with the `config` crate, lowest priority first:
//!
//! 1. built-in defaults ([`Settings::default`])
//! 2. the optional file `config/storefront.{toml,yaml,json,..}`
//! 3. environment variables prefixed `STOREFRONT`, nested with `__`
//!    (e.g. `STOREFRONT__SERVER__PORT=9000`)

use crate::product_actor::CatalogSettings;
use config::{ConfigError, Environment, File, Source};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::time::Duration;

pub const DEFAULT_CONFIG_FILE: &str = "config/storefront";
const ENV_PREFIX: &str = "STOREFRONT";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub server: ServerConfig,
    pub actors: ActorConfig,
    pub catalog: CatalogConfig,
    pub pricing: PricingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActorConfig {
    /// Mailbox size of every actor; senders wait when it is full.
    pub mailbox_capacity: usize,
}

impl Default for ActorConfig {
    fn default() -> Self {
        Self {
            mailbox_capacity: 32,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Simulated storage delay inside each reservation, in milliseconds.
    pub reserve_latency_ms: u64,
}

impl CatalogConfig {
    pub fn context(&self) -> CatalogSettings {
        CatalogSettings {
            reserve_latency: Duration::from_millis(self.reserve_latency_ms),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingConfig {
    pub discounts: Vec<DiscountRule>,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            discounts: DiscountRule::defaults(),
        }
    }
}

/// A percentage discount unlocked by `code`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscountRule {
    pub code: String,
    pub percent: Decimal,
}

impl DiscountRule {
    pub fn new(code: impl Into<String>, percent: Decimal) -> Self {
        Self {
            code: code.into(),
            percent,
        }
    }

    pub fn defaults() -> Vec<DiscountRule> {
        vec![
            DiscountRule::new("SAVE10", Decimal::TEN),
            DiscountRule::new("SAVE20", Decimal::from(20)),
        ]
    }
}

impl Settings {
    /// Loads defaults, then `config/storefront.*` if present, then the environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(File::with_name(DEFAULT_CONFIG_FILE).required(false))
    }

    /// Same layering as [`Settings::load`] with `file` in place of the default file.
    pub fn load_with<S>(file: S) -> Result<Self, ConfigError>
    where
        S: Source + Send + Sync + 'static,
    {
        let settings = config::Config::builder()
            .add_source(config::Config::try_from(&Settings::default())?)
            .add_source(file)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings: Settings = settings.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.actors.mailbox_capacity == 0 {
            return Err(ConfigError::Message(
                "actors.mailbox_capacity must be at least 1".to_string(),
            ));
        }
        if let Some(rule) = self
            .pricing
            .discounts
            .iter()
            .find(|r| r.percent.is_sign_negative() || r.percent > Decimal::ONE_HUNDRED)
        {
            return Err(ConfigError::Message(format!(
                "discount {} must be between 0 and 100 percent, got {}",
                rule.code, rule.percent
            )));
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| ConfigError::Message(format!("invalid server address: {}", e)))
    }
}
