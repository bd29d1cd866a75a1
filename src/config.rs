use std::{env, time::Duration};

use bindisa_contact::Directory;
use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
    #[serde(default)]
    pub contact: ContactConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Contact page behavior and the company details it shows.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ContactConfig {
    pub submit_delay_ms: u64,
    /// Idle time after which a visit is dropped.
    pub visit_ttl_secs: u64,
    pub sweep_interval_secs: u64,
    pub phone: String,
    pub email: String,
    pub office: String,
    pub postal_code: String,
    pub cin: String,
    pub map_query_url: String,
    pub map_embed_url: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        let directory = Directory::default();

        Self {
            submit_delay_ms: 1500,
            visit_ttl_secs: 1800,
            sweep_interval_secs: 60,
            phone: directory.phone,
            email: directory.email,
            office: directory.office,
            postal_code: directory.postal_code,
            cin: directory.cin,
            map_query_url: directory.map_query_url,
            map_embed_url: directory.map_embed_url,
        }
    }
}

impl ContactConfig {
    pub fn directory(&self) -> Directory {
        Directory {
            phone: self.phone.to_owned(),
            email: self.email.to_owned(),
            office: self.office.to_owned(),
            postal_code: self.postal_code.to_owned(),
            cin: self.cin.to_owned(),
            map_query_url: self.map_query_url.to_owned(),
            map_embed_url: self.map_embed_url.to_owned(),
        }
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    pub fn visit_ttl(&self) -> Duration {
        Duration::from_secs(self.visit_ttl_secs)
    }

    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
            },
            observability: ObservabilityConfig::default(),
            contact: ContactConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (BINDISA__SERVER__PORT, BINDISA__CONTACT__PHONE, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Optional, missing file is not an error
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("BINDISA")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if self.contact.submit_delay_ms == 0 {
            return Err("Contact submit_delay_ms must be greater than 0".to_string());
        }
        if self.contact.visit_ttl_secs == 0 || self.contact.sweep_interval_secs == 0 {
            return Err(
                "Contact visit_ttl_secs and sweep_interval_secs must be greater than 0".to_string(),
            );
        }
        if self.contact.phone.trim().is_empty() || self.contact.email.trim().is_empty() {
            return Err("Contact phone and email must be set".to_string());
        }
        Ok(())
    }
}
