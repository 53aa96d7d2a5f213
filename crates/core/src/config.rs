use serde::Deserialize;

/// Root application configuration. Loaded from environment variables
/// with the prefix `STOREFRONT__`.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Name of the ad tier active at startup.
    #[serde(default = "default_tier")]
    pub tier: String,
    #[serde(default)]
    pub ads: AdsConfig,
    #[serde(default)]
    pub injection: InjectionConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AdsConfig {
    /// Fixed interval of the periodic popup trigger.
    #[serde(default = "default_popup_interval_secs")]
    pub popup_interval_secs: u64,
    /// Honor per-creative `show_once` and `frequency_mins` hints via the
    /// session frequency ledger.
    #[serde(default = "default_session_frequency")]
    pub session_frequency: bool,
}

/// Opt-in switches for the content injection stages. Both default to off;
/// the presentation layer enables them explicitly.
#[derive(Debug, Clone, Deserialize)]
pub struct InjectionConfig {
    #[serde(default)]
    pub visible: bool,
    #[serde(default)]
    pub invisible: bool,
}

fn default_tier() -> String {
    "heavy".to_string()
}
fn default_popup_interval_secs() -> u64 {
    30
}
fn default_session_frequency() -> bool {
    true
}

impl Default for AdsConfig {
    fn default() -> Self {
        Self {
            popup_interval_secs: default_popup_interval_secs(),
            session_frequency: default_session_frequency(),
        }
    }
}

impl Default for InjectionConfig {
    fn default() -> Self {
        Self {
            visible: false,
            invisible: false,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tier: default_tier(),
            ads: AdsConfig::default(),
            injection: InjectionConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder().add_source(
            config::Environment::with_prefix("STOREFRONT")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }
}
