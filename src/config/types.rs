//! The configuration structs used to build the AppConfig, and their impls.
use std::{net::SocketAddr, time::Duration};

use secrecy::SecretString;
use serde::{Deserialize, Deserializer};
use serde_aux::field_attributes::deserialize_string_from_number;
use strum_macros::AsRefStr;

use crate::config::ConfigError;
use crate::subscriber_client::DEFAULT_BASE_URL;

// ###################################
// ->   STRUCTS
// ###################################
#[derive(AsRefStr, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Local,
    Production,
}

#[derive(Deserialize, Clone, Debug)]
pub struct AppConfig {
    pub net_config: NetConfig,
    pub mailerlite_config: MailerLiteConfig,
    /// A bare `group_id = 42` in a TOML file arrives as an integer.
    #[serde(deserialize_with = "deserialize_string_from_number")]
    pub group_id: String,
    #[serde(deserialize_with = "deserialize_secret_from_number")]
    pub mailerlite_api_token: SecretString,
}

#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct NetConfig {
    pub host: [u8; 4],
    pub app_port: u16,
}

#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct MailerLiteConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    pub timeout_millis: Option<u64>,
}

/// The group and the API token every subscription is filed under.
#[derive(Clone, Debug)]
pub struct ProviderCredentials {
    pub group_id: String,
    pub api_token: SecretString,
}

// ###################################
// ->   IMPLs
// ###################################
impl AppConfig {
    pub fn credentials(&self) -> ProviderCredentials {
        ProviderCredentials {
            group_id: self.group_id.clone(),
            api_token: self.mailerlite_api_token.clone(),
        }
    }
}

impl NetConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::from((self.host, self.app_port))
    }
}

impl MailerLiteConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_millis.map(Duration::from_millis)
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn deserialize_secret_from_number<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
where
    D: Deserializer<'de>,
{
    deserialize_string_from_number(deserializer).map(SecretString::from)
}

// ###################################
// ->   TRY FROMs
// ###################################
impl TryFrom<String> for Environment {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_ascii_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            _ => Err(Self::Error::StringToEnvironmentFail(value)),
        }
    }
}
