//! `.env` file parsing and tier-based required-variable validation.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

pub const ENV_FILE_NAME: &str = ".env";
pub const ENV_EXAMPLE_FILE_NAME: &str = ".env.example";

/// Required variables per deployment tier. Each tier's list extends the
/// previous one; production adds exactly `CONTACT_EMAIL` beyond staging.
const DEVELOPMENT_VARS: &[&str] = &[
    "NODE_ENV",
    "SITE_NAME",
    "DEFAULT_LANGUAGE",
    "SUPPORTED_LANGUAGES",
];

const STAGING_VARS: &[&str] = &[
    "NODE_ENV",
    "SITE_URL",
    "SITE_NAME",
    "DEFAULT_LANGUAGE",
    "SUPPORTED_LANGUAGES",
];

const PRODUCTION_VARS: &[&str] = &[
    "NODE_ENV",
    "SITE_URL",
    "SITE_NAME",
    "DEFAULT_LANGUAGE",
    "SUPPORTED_LANGUAGES",
    "CONTACT_EMAIL",
];

/// Variables that are reported when present but never required.
pub const OPTIONAL_VARS: &[&str] = &[
    "GOOGLE_ANALYTICS_ID",
    "FACEBOOK_PIXEL_ID",
    "HOTJAR_ID",
    "MAILER_LITE_API_KEY",
    "FORMSPREE_ENDPOINT",
    "API_BASE_URL",
];

/// Deployment tier, selected by the `NODE_ENV` value in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Development,
    Staging,
    Production,
}

impl Tier {
    /// Unrecognized or absent values fall back to `Development`.
    pub fn from_node_env(value: Option<&str>) -> Self {
        match value {
            Some("staging") => Tier::Staging,
            Some("production") => Tier::Production,
            _ => Tier::Development,
        }
    }

    pub fn required_vars(&self) -> &'static [&'static str] {
        match self {
            Tier::Development => DEVELOPMENT_VARS,
            Tier::Staging => STAGING_VARS,
            Tier::Production => PRODUCTION_VARS,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Development => "development",
            Tier::Staging => "staging",
            Tier::Production => "production",
        }
    }
}

/// Key/value store parsed from a `.env` file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvStore {
    vars: HashMap<String, String>,
}

impl EnvStore {
    /// Load `<root>/.env`. A missing file yields an empty store; any other
    /// read failure is an error.
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(ENV_FILE_NAME);
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Ok(Self::parse(&content))
    }

    /// Parse `.env` content line by line.
    ///
    /// Blank lines and `#` comments are skipped, as are lines without `=` or
    /// with an empty key. The first `=` splits key from value; further `=`
    /// characters belong to the value. One matching pair of surrounding
    /// quotes is stripped from the value. Later duplicates win.
    pub fn parse(content: &str) -> Self {
        let mut vars = HashMap::new();

        for line in content.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let Some((key, value)) = trimmed.split_once('=') else {
                continue;
            };
            let key = key.trim();
            if key.is_empty() {
                continue;
            }
            vars.insert(key.to_string(), strip_quotes(value).to_string());
        }

        Self { vars }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.vars.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn tier(&self) -> Tier {
        Tier::from_node_env(self.get("NODE_ENV"))
    }
}

/// Strip one matching pair of surrounding single or double quotes.
/// Unmatched or absent quotes leave the value unchanged.
fn strip_quotes(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if first == last && (first == b'"' || first == b'\'') {
            return &value[1..value.len() - 1];
        }
    }
    value
}

/// Outcome of the tier-based required-variable check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    /// Required variables with a non-empty value, paired with that value.
    pub present: Vec<(String, String)>,
    /// Required variables that are absent or empty.
    pub missing: Vec<String>,
    /// Optional variables that exist in the store, paired with their value.
    pub optional_present: Vec<(String, String)>,
}

impl ValidationResult {
    pub fn is_ok(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Classify the store's contents against `tier`'s required list and the
/// fixed optional list. A required variable must have a non-empty value;
/// an optional variable counts on key existence alone.
pub fn validate(store: &EnvStore, tier: Tier) -> ValidationResult {
    let mut result = ValidationResult::default();

    for &name in tier.required_vars() {
        match store.get(name) {
            Some(value) if !value.is_empty() => {
                result.present.push((name.to_string(), value.to_string()));
            }
            _ => result.missing.push(name.to_string()),
        }
    }

    for &name in OPTIONAL_VARS {
        if let Some(value) = store.get(name) {
            result
                .optional_present
                .push((name.to_string(), value.to_string()));
        }
    }

    result
}

/// Starter `.env.example` content: every production-tier required variable
/// plus the optional integrations, all left blank.
pub fn example_template() -> String {
    let mut out = String::new();
    out.push_str("# duosite environment configuration\n");
    out.push_str("# Copy this file to .env and fill in the values for your deployment tier.\n\n");
    out.push_str("NODE_ENV=development\n");
    for &name in PRODUCTION_VARS {
        if name != "NODE_ENV" {
            out.push_str(name);
            out.push_str("=\n");
        }
    }
    out.push_str("\n# Optional integrations\n");
    for &name in OPTIONAL_VARS {
        out.push_str(name);
        out.push_str("=\n");
    }
    out
}
