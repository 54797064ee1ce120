use url::Url;

/// Path under the probed site that only answers when rewriting works.
const SETTINGS_PROBE_SUFFIX: &str = "admin/settings/clean-urls";
/// Leaf probed by the install wizard, one directory above the wizard page.
const INSTALL_PROBE_LEAF: &str = "node";

/// The probing page's own location, as a browser would report it.
#[derive(Debug, Clone)]
pub struct PageLocation {
    /// Scheme without the trailing colon, e.g. "https".
    pub scheme: String,
    /// Host, including the port when non-default.
    pub host: String,
    /// Request path of the current page, normally "/"-prefixed.
    pub path: String,
}

impl PageLocation {
    pub fn new(
        scheme: impl Into<String>,
        host: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            scheme: scheme.into(),
            host: host.into(),
            path: path.into(),
        }
    }
}

/// Target probed from the settings page: the page's own path with the
/// clean-urls admin path appended verbatim. No separator is inserted and the
/// path is not normalized; a page path without a trailing `/` is probed
/// as-is. That concatenation is a compatibility contract with the servers
/// this check was written against.
pub fn settings_target(page: &PageLocation) -> Result<Url, url::ParseError> {
    Url::parse(&format!(
        "{}://{}{}{}",
        page.scheme, page.host, page.path, SETTINGS_PROBE_SUFFIX
    ))
}

/// Target probed from the install wizard: the wizard page's parent directory
/// with `node` appended. Everything after the path's last `/` is dropped; a
/// path without any `/` is kept unchanged.
pub fn install_target(page: &PageLocation) -> Result<Url, url::ParseError> {
    let parent = match page.path.rfind('/') {
        Some(idx) => &page.path[..=idx],
        None => page.path.as_str(),
    };
    Url::parse(&format!(
        "{}://{}{}{}",
        page.scheme, page.host, parent, INSTALL_PROBE_LEAF
    ))
}
