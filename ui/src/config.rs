use serde::Deserialize;
use std::env::vars;
use zetable_states::SelectAllPolicy;

/// Prefix of the environment variables read by [`DemoConfig::init`].
pub const ENV_PREFIX: &str = "ZETABLE_";

/// Table options for the demo page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    pub show_checkboxes: bool,
    pub show_total: bool,
    /// Total shown in the summary row. `None` means the sample row count.
    pub total_length: Option<i64>,
    pub label: String,
    pub scrollable: bool,
    pub loading: bool,
    pub select_all_policy: SelectAllPolicy,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            show_checkboxes: false,
            show_total: false,
            total_length: None,
            label: "users".to_owned(),
            scrollable: true,
            loading: false,
            select_all_policy: SelectAllPolicy::default(),
        }
    }
}

// An intermediate struct for deserializing environment variables
// where every field is optional.
#[derive(Debug, Default, Deserialize)]
struct RawDemoConfig {
    show_checkboxes: Option<bool>,
    show_total: Option<bool>,
    total_length: Option<i64>,
    label: Option<String>,
    scrollable: Option<bool>,
    loading: Option<bool>,
    select_all_policy: Option<SelectAllPolicy>,
}

impl DemoConfig {
    /// Reads `ZETABLE_*` environment variables and applies defaults.
    pub fn init() -> anyhow::Result<Self> {
        log::info!("Loading demo configuration from environment variables");
        Self::from_vars(vars())
    }

    /// Builds the config from `(name, value)` pairs. Names without the
    /// `ZETABLE_` prefix are ignored.
    pub fn from_vars<K, V>(vars: impl IntoIterator<Item = (K, V)>) -> anyhow::Result<Self>
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let scoped: Vec<(String, String)> = vars
            .into_iter()
            .filter_map(|(key, value)| {
                key.as_ref()
                    .strip_prefix(ENV_PREFIX)
                    .map(|name| (name.to_owned(), value.into()))
            })
            .collect();

        let raw: RawDemoConfig = serde_env::from_iter(scoped)?;
        Ok(Self::from_raw(raw))
    }

    fn from_raw(raw: RawDemoConfig) -> Self {
        let defaults = Self::default();
        let RawDemoConfig {
            show_checkboxes,
            show_total,
            total_length,
            label,
            scrollable,
            loading,
            select_all_policy,
        } = raw;

        let label = match label {
            Some(label) => label,
            None => {
                log::debug!("LABEL not set, defaulting to {}", defaults.label);
                defaults.label
            }
        };

        Self {
            show_checkboxes: show_checkboxes.unwrap_or(defaults.show_checkboxes),
            show_total: show_total.unwrap_or(defaults.show_total),
            total_length,
            label,
            scrollable: scrollable.unwrap_or(defaults.scrollable),
            loading: loading.unwrap_or(defaults.loading),
            select_all_policy: select_all_policy.unwrap_or(defaults.select_all_policy),
        }
    }
}
