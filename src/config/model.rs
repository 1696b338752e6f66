//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box.

use serde::{Deserialize, Serialize};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub webhook: WebhookConfig,
    #[serde(default)]
    pub redirect: RedirectConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where submissions are posted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookConfig {
    #[serde(default = "default_webhook_url")]
    pub url: String,
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            url: default_webhook_url(),
        }
    }
}

/// Confirmation page shown after a successful submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedirectConfig {
    #[serde(default = "default_redirect_url")]
    pub url: String,
    #[serde(default = "default_redirect_delay_ms")]
    pub delay_ms: u64,
    /// Hand the URL to the platform's opener in addition to printing it.
    #[serde(default = "default_true")]
    pub open_browser: bool,
}

impl Default for RedirectConfig {
    fn default() -> Self {
        Self {
            url: default_redirect_url(),
            delay_ms: default_redirect_delay_ms(),
            open_browser: true,
        }
    }
}

/// UI timing settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_toast_duration_ms")]
    pub toast_duration_ms: u64,
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            toast_duration_ms: default_toast_duration_ms(),
            tick_ms: default_tick_ms(),
        }
    }
}

/// Diagnostic log file settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    /// `tracing` filter directive, overridden by `RUST_LOG`.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            log_dir: default_log_dir(),
            level: default_log_level(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_webhook_url() -> String {
    "https://script.google.com/macros/s/AKfycbxaVKcOpJkChLPsMCcMuR5Y1XNR5iWBCguyntQFQYVwaxJ0_PsXGYlE5U1DWWJDufxl2Q/exec".to_string()
}
fn default_redirect_url() -> String {
    "https://sites.google.com/klebcadwd.com/udgosh".to_string()
}
fn default_redirect_delay_ms() -> u64 {
    2000
}
fn default_toast_duration_ms() -> u64 {
    4000
}
fn default_tick_ms() -> u64 {
    50 // 20 FPS
}
fn default_log_dir() -> String {
    "~/.local/share/udgosh/logs".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}
