//! Session configuration.

use crate::ratelimit::RateLimitConfig;
use crate::sasl::SaslMechanism;

/// Credentials for one SASL mechanism, chosen up front by the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SaslConfig {
    Plain { username: String, password: String },
    External,
}

impl SaslConfig {
    #[must_use]
    pub fn mechanism(&self) -> SaslMechanism {
        match self {
            SaslConfig::Plain { .. } => SaslMechanism::Plain,
            SaslConfig::External => SaslMechanism::External,
        }
    }
}

/// Immutable session parameters, fixed for the lifetime of one engine.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "config-toml", derive(serde::Deserialize))]
pub struct SessionConfig {
    pub server: String,
    #[cfg_attr(feature = "config-toml", serde(default = "default_port"))]
    pub port: u16,
    #[cfg_attr(feature = "config-toml", serde(default = "default_use_tls"))]
    pub use_tls: bool,
    pub nick: String,
    #[cfg_attr(feature = "config-toml", serde(default))]
    pub username: Option<String>,
    #[cfg_attr(feature = "config-toml", serde(default))]
    pub realname: Option<String>,
    #[cfg_attr(feature = "config-toml", serde(default))]
    pub password: Option<String>,
    #[cfg_attr(feature = "config-toml", serde(skip))]
    pub sasl: Option<SaslConfig>,
    #[cfg_attr(feature = "config-toml", serde(default))]
    pub requested_caps: Vec<String>,
    #[cfg_attr(feature = "config-toml", serde(default = "default_ping_timeout"))]
    pub ping_timeout_secs: u64,
    #[cfg_attr(feature = "config-toml", serde(default))]
    pub rate_limit: RateLimitConfig,
}

#[cfg(feature = "config-toml")]
impl<'de> serde::Deserialize<'de> for RateLimitConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Raw {
            #[serde(default = "default_messages_per_window")]
            messages_per_window: u32,
            #[serde(default = "default_window_seconds")]
            window_seconds: u64,
        }
        let raw = Raw::deserialize(deserializer)?;
        Ok(RateLimitConfig {
            messages_per_window: raw.messages_per_window,
            window_seconds: raw.window_seconds,
        })
    }
}

fn default_port() -> u16 {
    6697
}

fn default_use_tls() -> bool {
    true
}

fn default_ping_timeout() -> u64 {
    120
}

#[cfg(feature = "config-toml")]
fn default_messages_per_window() -> u32 {
    5
}

#[cfg(feature = "config-toml")]
fn default_window_seconds() -> u64 {
    2
}

impl SessionConfig {
    /// Construct a config with the documented defaults: port 6697, TLS on,
    /// 120s ping timeout, 5 messages per 2s rate limit, no SASL/caps.
    #[must_use]
    pub fn new(server: impl Into<String>, nick: impl Into<String>) -> Self {
        Self {
            server: server.into(),
            port: default_port(),
            use_tls: default_use_tls(),
            nick: nick.into(),
            username: None,
            realname: None,
            password: None,
            sasl: None,
            requested_caps: Vec::new(),
            ping_timeout_secs: default_ping_timeout(),
            rate_limit: RateLimitConfig::default(),
        }
    }

    /// The username to register with: explicit value, else the nick.
    #[must_use]
    pub fn effective_username(&self) -> &str {
        self.username.as_deref().unwrap_or(&self.nick)
    }

    /// The realname to register with: explicit value, else the nick.
    #[must_use]
    pub fn effective_realname(&self) -> &str {
        self.realname.as_deref().unwrap_or(&self.nick)
    }

    /// Whether SASL is configured *and* requested as a capability — the
    /// condition that defers NICK/USER until SASL resolves.
    #[must_use]
    pub fn sasl_active(&self) -> bool {
        self.sasl.is_some() && self.requested_caps.iter().any(|c| c == "sasl")
    }

    /// Parse a [`SessionConfig`] from TOML text.
    #[cfg(feature = "config-toml")]
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}
