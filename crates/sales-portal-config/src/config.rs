// crates/sales-portal-config/src/config.rs
// ============================================================================
// Module: Sales Portal Configuration
// Description: Configuration loading, environment overrides, and validation.
// Purpose: Provide strict, fail-closed settings for test data and validation.
// Dependencies: serde, toml, url, serde_json
// ============================================================================

//! ## Overview
//! Configuration is loaded from a TOML file with a hard size limit and strict
//! field checking. A missing default file yields built-in defaults pointing
//! at a local backend; an explicitly named file must exist. Environment
//! variables override file values through [`SalesPortalConfig::apply_env_overrides`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;
use url::Url;

use crate::endpoints::Endpoints;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
const DEFAULT_CONFIG_NAME: &str = "sales-portal.toml";
/// Environment variable used to override the config path.
pub const CONFIG_ENV_VAR: &str = "SALES_PORTAL_CONFIG";
/// Environment variable overriding the API base URL.
pub const API_URL_ENV_VAR: &str = "SALES_PORTAL_API_URL";
/// Environment variable overriding the UI base URL.
pub const UI_URL_ENV_VAR: &str = "SALES_PORTAL_URL";
/// Environment variable overriding the login name.
pub const USER_NAME_ENV_VAR: &str = "USER_NAME";
/// Environment variable overriding the password.
pub const USER_PASSWORD_ENV_VAR: &str = "USER_PASSWORD";
/// Environment variable overriding manager ids (JSON array of strings).
pub const MANAGER_IDS_ENV_VAR: &str = "MANAGER_IDS";
/// Maximum configuration file size in bytes.
const MAX_CONFIG_FILE_SIZE: usize = 1024 * 1024;
/// Maximum total path length.
const MAX_TOTAL_PATH_LENGTH: usize = 4096;
/// Maximum length of a single path component.
const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Hard cap on products per generated order.
const MAX_PRODUCTS_PER_ORDER_LIMIT: usize = 100;
/// Hard cap on the delivery day offset magnitude.
const MAX_DELIVERY_OFFSET_DAYS: i64 = 3650;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration loading or validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Configuration Model
// ============================================================================

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SalesPortalConfig {
    /// Manager user ids available for assignment tests.
    #[serde(default)]
    pub manager_ids: Vec<String>,
    /// Backend locations.
    #[serde(default)]
    pub api: ApiConfig,
    /// Login credentials.
    #[serde(default)]
    pub credentials: CredentialsConfig,
    /// Data generator settings.
    #[serde(default)]
    pub generators: GeneratorConfig,
    /// Validation audit settings.
    #[serde(default)]
    pub audit: AuditConfig,
}

impl SalesPortalConfig {
    /// Loads configuration from disk using the default resolution rules.
    ///
    /// Resolution order: explicit `path`, then `SALES_PORTAL_CONFIG`, then
    /// `sales-portal.toml` in the working directory. Only the last may be
    /// absent, in which case defaults are used.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (resolved, required) = resolve_path(path)?;
        validate_path(&resolved)?;
        let bytes = match fs::read(&resolved) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound && !required => {
                return Ok(Self::default());
            }
            Err(err) => return Err(ConfigError::Io(err.to_string())),
        };
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        Self::from_toml_str(content)
    }

    /// Parses and validates configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when parsing or validation fails.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration, applies process environment overrides, and validates.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading, overriding, or validation fails.
    pub fn from_env(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Applies overrides from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when `MANAGER_IDS` is not a JSON array of strings.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|key| env::var(key).ok())
    }

    /// Applies overrides from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when `MANAGER_IDS` is not a JSON array of strings.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(API_URL_ENV_VAR) {
            self.api.base_url = value;
        }
        if let Some(value) = lookup(UI_URL_ENV_VAR) {
            self.api.ui_url = value;
        }
        if let Some(value) = lookup(USER_NAME_ENV_VAR) {
            self.credentials.username = value;
        }
        if let Some(value) = lookup(USER_PASSWORD_ENV_VAR) {
            self.credentials.password = value;
        }
        if let Some(value) = lookup(MANAGER_IDS_ENV_VAR) {
            self.manager_ids = serde_json::from_str(&value).map_err(|err| {
                ConfigError::Invalid(format!("{MANAGER_IDS_ENV_VAR} must be a json array: {err}"))
            })?;
        }
        Ok(())
    }

    /// Validates the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.api.validate()?;
        self.credentials.validate()?;
        self.generators.validate()?;
        self.audit.validate()?;
        if self.manager_ids.iter().any(|id| id.trim().is_empty()) {
            return Err(ConfigError::Invalid("manager_ids must be non-empty".to_string()));
        }
        Ok(())
    }

    /// Returns endpoint builders for the configured API base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when the base URL is invalid.
    pub fn endpoints(&self) -> Result<Endpoints, ConfigError> {
        Endpoints::new(&self.api.base_url)
    }
}

/// Backend locations.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ApiConfig {
    /// API base URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// UI base URL.
    #[serde(default = "default_ui_url")]
    pub ui_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            ui_url: default_ui_url(),
        }
    }
}

impl ApiConfig {
    /// Validates both URLs.
    fn validate(&self) -> Result<(), ConfigError> {
        parse_http_url("api.base_url", &self.base_url)?;
        parse_http_url("api.ui_url", &self.ui_url)?;
        Ok(())
    }
}

/// Login credentials.
#[derive(Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CredentialsConfig {
    /// Login name.
    #[serde(default = "default_username")]
    pub username: String,
    /// Password.
    #[serde(default = "default_password")]
    pub password: String,
}

impl Default for CredentialsConfig {
    fn default() -> Self {
        Self {
            username: default_username(),
            password: default_password(),
        }
    }
}

impl fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl CredentialsConfig {
    /// Validates that both values are present.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.username.trim().is_empty() {
            return Err(ConfigError::Invalid("credentials.username must be non-empty".to_string()));
        }
        if self.password.is_empty() {
            return Err(ConfigError::Invalid("credentials.password must be non-empty".to_string()));
        }
        Ok(())
    }
}

/// Data generator settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Minimum products sampled per generated order.
    #[serde(default = "default_min_products")]
    pub min_products_per_order: usize,
    /// Maximum products sampled per generated order.
    #[serde(default = "default_max_products")]
    pub max_products_per_order: usize,
    /// Days from today for generated delivery dates.
    #[serde(default = "default_delivery_days_offset")]
    pub delivery_days_offset: i64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min_products_per_order: default_min_products(),
            max_products_per_order: default_max_products(),
            delivery_days_offset: default_delivery_days_offset(),
        }
    }
}

impl GeneratorConfig {
    /// Validates the product range and date offset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a bound is out of range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_products_per_order == 0 {
            return Err(ConfigError::Invalid(
                "generators.min_products_per_order must be greater than zero".to_string(),
            ));
        }
        if self.min_products_per_order > self.max_products_per_order {
            return Err(ConfigError::Invalid(
                "generators.min_products_per_order must not exceed max_products_per_order"
                    .to_string(),
            ));
        }
        if self.max_products_per_order > MAX_PRODUCTS_PER_ORDER_LIMIT {
            return Err(ConfigError::Invalid(format!(
                "generators.max_products_per_order must be at most {MAX_PRODUCTS_PER_ORDER_LIMIT}"
            )));
        }
        if self.delivery_days_offset.abs() > MAX_DELIVERY_OFFSET_DAYS {
            return Err(ConfigError::Invalid(format!(
                "generators.delivery_days_offset must be within {MAX_DELIVERY_OFFSET_DAYS} days"
            )));
        }
        Ok(())
    }
}

/// Validation audit sink selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditSinkKind {
    /// JSON lines on stderr.
    Stderr,
    /// JSON lines appended to a file.
    File,
    /// Audit disabled.
    #[default]
    None,
}

/// Validation audit settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AuditConfig {
    /// Sink kind.
    #[serde(default)]
    pub sink: AuditSinkKind,
    /// Audit log path (JSON lines), required for the file sink.
    #[serde(default)]
    pub path: Option<String>,
}

impl AuditConfig {
    /// Validates audit configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(path) = &self.path {
            validate_path_string("audit.path", path)?;
        }
        if self.sink == AuditSinkKind::File && self.path.is_none() {
            return Err(ConfigError::Invalid("audit.path is required for the file sink".to_string()));
        }
        Ok(())
    }
}

// ============================================================================
// SECTION: Defaults
// ============================================================================

/// Default API base URL.
fn default_base_url() -> String {
    "http://localhost:8686".to_string()
}

/// Default UI base URL.
fn default_ui_url() -> String {
    "http://localhost:8585".to_string()
}

/// Default login name.
fn default_username() -> String {
    "admin@example.com".to_string()
}

/// Default password.
fn default_password() -> String {
    "admin123".to_string()
}

/// Default minimum products per order.
const fn default_min_products() -> usize {
    1
}

/// Default maximum products per order.
const fn default_max_products() -> usize {
    5
}

/// Default delivery day offset.
const fn default_delivery_days_offset() -> i64 {
    7
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Resolves the config path; the flag is true when the file must exist.
fn resolve_path(path: Option<&Path>) -> Result<(PathBuf, bool), ConfigError> {
    if let Some(path) = path {
        return Ok((path.to_path_buf(), true));
    }
    if let Ok(env_path) = env::var(CONFIG_ENV_VAR) {
        if env_path.len() > MAX_TOTAL_PATH_LENGTH {
            return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
        }
        return Ok((PathBuf::from(env_path), true));
    }
    Ok((PathBuf::from(DEFAULT_CONFIG_NAME), false))
}

/// Validates the resolved path against length limits.
fn validate_path(path: &Path) -> Result<(), ConfigError> {
    let text = path.to_string_lossy();
    if text.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
    }
    for component in path.components() {
        let value = component.as_os_str().to_string_lossy();
        if value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid("config path component too long".to_string()));
        }
    }
    Ok(())
}

/// Validates a path string against length constraints.
fn validate_path_string(field: &str, value: &str) -> Result<(), ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::Invalid(format!("{field} must be non-empty")));
    }
    if trimmed.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid(format!("{field} exceeds max length")));
    }
    for component in Path::new(trimmed).components() {
        if component.as_os_str().len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid(format!("{field} path component too long")));
        }
    }
    Ok(())
}

/// Parses an absolute `http` or `https` URL.
pub(crate) fn parse_http_url(field: &str, value: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(value.trim())
        .map_err(|err| ConfigError::Invalid(format!("{field} is not a valid url: {err}")))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::Invalid(format!("{field} must use http or https")));
    }
    if url.host_str().is_none() {
        return Err(ConfigError::Invalid(format!("{field} must include a host")));
    }
    Ok(url)
}
