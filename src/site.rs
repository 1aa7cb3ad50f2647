//! Runtime site configuration.
//!
//! `SiteConfig` is built once at startup and passed by reference; there is no
//! global singleton. Merge order is fixed: built-in defaults, then process
//! environment variables with a recognized prefix, then page-meta overrides.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

/// Environment variable prefixes that may override defaults.
pub const ENV_PREFIXES: &[&str] = &["SITE_", "CONTACT_", "DEFAULT_"];

/// Meta tags named `env:<key>` carry page-level configuration.
pub const META_PREFIX: &str = "env:";

const DEFAULTS: &[(&str, &str)] = &[
    ("NODE_ENV", "production"),
    ("SITE_URL", "https://equiparent.app"),
    ("SITE_NAME", "Equi-Parents Bilingual Platform"),
    (
        "SITE_DESCRIPTION",
        "A bilingual co-parenting platform to simplify managing agreements, \
         time, and communication between separated parents",
    ),
    ("DEFAULT_LANGUAGE", "en"),
    ("SUPPORTED_LANGUAGES", "en,es"),
    ("TIMEZONE", "America/Santiago"),
    ("CONTACT_EMAIL", "contact@equiparent.app"),
    ("SUPPORT_EMAIL", "support@equiparent.app"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    values: HashMap<String, String>,
}

impl SiteConfig {
    /// Merge defaults with overrides. Environment entries are filtered to
    /// the recognized prefixes; meta entries are taken as-is and win last.
    pub fn load<E, M>(env: E, meta: M) -> Self
    where
        E: IntoIterator<Item = (String, String)>,
        M: IntoIterator<Item = (String, String)>,
    {
        let mut values: HashMap<String, String> = DEFAULTS
            .iter()
            .map(|&(k, v)| (k.to_string(), v.to_string()))
            .collect();

        for (key, value) in env {
            if ENV_PREFIXES.iter().any(|prefix| key.starts_with(prefix)) {
                values.insert(key, value);
            }
        }

        values.extend(meta);

        Self { values }
    }

    /// Build from the real process environment plus meta overrides.
    pub fn from_process_env<M>(meta: M) -> Self
    where
        M: IntoIterator<Item = (String, String)>,
    {
        Self::load(std::env::vars(), meta)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    pub fn site_url(&self) -> Option<&str> {
        self.get("SITE_URL")
    }

    pub fn contact_email(&self) -> Option<&str> {
        self.get("CONTACT_EMAIL")
    }

    pub fn support_email(&self) -> Option<&str> {
        self.get("SUPPORT_EMAIL")
    }

    pub fn default_language(&self) -> Option<&str> {
        self.get("DEFAULT_LANGUAGE")
    }

    pub fn supported_languages(&self) -> Vec<&str> {
        self.get_or("SUPPORTED_LANGUAGES", "en,es")
            .split(',')
            .collect()
    }

    pub fn is_development(&self) -> bool {
        self.get("NODE_ENV") == Some("development")
    }

    pub fn is_production(&self) -> bool {
        self.get("NODE_ENV") == Some("production")
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::load(std::iter::empty(), std::iter::empty())
    }
}

static META_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?is)<meta\b[^>]*>").unwrap());
static META_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)name\s*=\s*["']([^"']+)["']"#).unwrap());
static META_CONTENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)content\s*=\s*["']([^"']*)["']"#).unwrap());

/// Extract `env:`-prefixed meta overrides from an HTML document.
///
/// Keys are upper-cased with the prefix stripped; attribute order within the
/// tag does not matter.
pub fn meta_overrides(html: &str) -> Vec<(String, String)> {
    META_TAG
        .find_iter(html)
        .filter_map(|tag| {
            let tag = tag.as_str();
            let name = META_NAME.captures(tag)?.get(1)?.as_str();
            let key = name.strip_prefix(META_PREFIX)?;
            let content = META_CONTENT.captures(tag)?.get(1)?.as_str();
            Some((key.to_uppercase(), content.to_string()))
        })
        .collect()
}
