use std::collections::HashMap;

use serde::Deserialize;

use crate::check::target::PageLocation;

/// Messages the check flows render. Defaults are English; deployments feed
/// localized strings through the site config.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusMessages {
    #[serde(default = "default_testing")]
    pub testing: String,

    #[serde(default = "default_success")]
    pub success: String,

    #[serde(default = "default_failure")]
    pub failure: String,
}

impl Default for StatusMessages {
    fn default() -> Self {
        Self {
            testing: default_testing(),
            success: default_success(),
            failure: default_failure(),
        }
    }
}

fn default_testing() -> String {
    "Testing clean URLs...".to_string()
}

fn default_success() -> String {
    "Your server has been successfully tested to support this feature.".to_string()
}

fn default_failure() -> String {
    "Your system configuration does not currently support this feature.".to_string()
}

/// Which check flow a page runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckVariant {
    /// Settings-page check against the `admin/settings/clean-urls` path.
    Settings,
    /// Install-wizard check against the sibling `node` path.
    Install,
}

/// One page a check is triggered from.
#[derive(Debug, Clone, Deserialize)]
pub struct PageConfig {
    /// Scheme without the trailing colon. Defaults to "http".
    #[serde(default = "default_scheme")]
    pub scheme: String,

    /// Host of the probed site, including the port when non-default.
    pub host: String,

    /// Request path of the page the check runs on. Defaults to "/".
    #[serde(default = "default_path")]
    pub path: String,

    /// Which flow to run from this page.
    pub check: CheckVariant,
}

fn default_scheme() -> String {
    "http".to_string()
}

fn default_path() -> String {
    "/".to_string()
}

impl PageConfig {
    pub fn location(&self) -> PageLocation {
        PageLocation::new(&self.scheme, &self.host, &self.path)
    }
}

/// A site's pages plus the messages its checks render.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub messages: StatusMessages,

    pub pages: Vec<PageConfig>,
}

/// Keyed by display name, which is also the console output label.
pub type Config = HashMap<String, SiteConfig>;
