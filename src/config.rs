use crate::error::ConfigError;
use leptos::logging::log;
use serde::{Deserialize, Serialize};
use std::env;

/// Id of the `<script type="application/json">` element that carries the server's
/// config to the hydrating client.
pub const CONFIG_ELEMENT_ID: &str = "wallet-config";

/// What revoking a review does to the collaboration it was issued for.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum RevocationPolicy {
    /// Put the matching collaboration back to pending so it can be reviewed again.
    #[default]
    ReopenCollaboration,
    /// Leave the collaboration marked as issued.
    KeepIssued,
}

impl RevocationPolicy {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "reopen" | "reopen_collaboration" => Some(Self::ReopenCollaboration),
            "keep" | "keep_issued" => Some(Self::KeepIssued),
            _ => None,
        }
    }
}

/// Settings for the wallet demo, provided to every component through context.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct WalletConfig {
    /// Employer identity used when issuing reviews and listing "Reviews I've Issued".
    pub employer_name: String,
    /// Owner of the freelancer profile.
    pub freelancer_name: String,
    /// Freelancer returned by the mock QR scan.
    pub qr_freelancer_name: String,
    /// Names shown in the header for each view.
    pub freelancer_display_name: String,
    pub employer_display_name: String,
    /// Jobs completed before the wallet started tracking reviews.
    pub jobs_completed_base: u32,
    /// Number of reviews the profile was seeded with.
    pub seed_review_count: u32,
    pub profile_base_url: String,
    pub revocation: RevocationPolicy,
    pub toast_duration_ms: u32,
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            employer_name: "HashMasters".to_string(),
            freelancer_name: "Alice".to_string(),
            qr_freelancer_name: "Alice".to_string(),
            freelancer_display_name: "Ana Carolina".to_string(),
            employer_display_name: "Innovate Corp".to_string(),
            jobs_completed_base: 32,
            seed_review_count: 5,
            profile_base_url: "https://trustfolio.dev/p".to_string(),
            revocation: RevocationPolicy::default(),
            toast_duration_ms: 4000,
        }
    }
}

impl WalletConfig {
    /// Parses a JSON document; missing fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: WalletConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults overridden by `WALLET_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup("WALLET_EMPLOYER_NAME") {
            config.employer_name = value;
        }
        if let Some(value) = lookup("WALLET_FREELANCER_NAME") {
            config.qr_freelancer_name = value.clone();
            config.freelancer_name = value;
        }
        if let Some(value) = lookup("WALLET_JOBS_COMPLETED_BASE") {
            config.jobs_completed_base =
                value.trim().parse().map_err(|_| ConfigError::InvalidEnv {
                    key: "WALLET_JOBS_COMPLETED_BASE",
                    value: value.clone(),
                })?;
        }
        if let Some(value) = lookup("WALLET_PROFILE_BASE_URL") {
            config.profile_base_url = value;
        }
        if let Some(value) = lookup("WALLET_REVOCATION") {
            config.revocation =
                RevocationPolicy::parse(&value).ok_or_else(|| ConfigError::InvalidEnv {
                    key: "WALLET_REVOCATION",
                    value: value.clone(),
                })?;
        }

        config.validate()?;
        log!(
            "[CONFIG] employer={}, freelancer={}, revocation={:?}",
            config.employer_name,
            config.freelancer_name,
            config.revocation
        );
        Ok(config)
    }

    /// JSON for a `<script>` element. `</` is escaped so no value can close the element.
    pub fn to_embedded_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?.replace("</", "<\\/"))
    }

    /// Config embedded by the server in the page being hydrated, or the defaults
    /// when the element is missing or unreadable.
    #[cfg(feature = "hydrate")]
    pub fn from_document() -> Self {
        use leptos::logging::warn;

        let raw = gloo_utils::document()
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|element| element.text_content());
        match raw.map(|raw| Self::from_json(&raw)) {
            Some(Ok(config)) => config,
            Some(Err(err)) => {
                warn!("[CONFIG] Embedded config rejected: {}", err);
                Self::default()
            }
            None => {
                warn!("[CONFIG] No embedded config, using defaults");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("employer_name", &self.employer_name),
            ("freelancer_name", &self.freelancer_name),
            ("qr_freelancer_name", &self.qr_freelancer_name),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::Invalid(format!("{field} must not be blank")));
            }
        }
        if !(self.profile_base_url.starts_with("https://")
            || self.profile_base_url.starts_with("http://"))
        {
            return Err(ConfigError::Invalid(format!(
                "profile_base_url must be an http(s) URL, got {}",
                self.profile_base_url
            )));
        }
        Ok(())
    }

    /// Shareable link to the freelancer's public profile.
    pub fn profile_link(&self) -> String {
        let slug = self.freelancer_name.trim().to_lowercase();
        format!(
            "{}/{}",
            self.profile_base_url.trim_end_matches('/'),
            urlencoding::encode(&slug)
        )
    }
}
