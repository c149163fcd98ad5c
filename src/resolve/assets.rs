/// Rewrites document-relative asset paths into URLs the host renderer can fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetResolver {
    asset_base_url: String,
    logo_base_url: String,
}

impl AssetResolver {
    /// Create a resolver from the two base URLs.
    pub fn new(asset_base_url: impl Into<String>, logo_base_url: impl Into<String>) -> Self {
        Self {
            asset_base_url: asset_base_url.into(),
            logo_base_url: logo_base_url.into(),
        }
    }

    /// URL for an uploaded asset (images, narration audio).
    ///
    /// An empty path stays empty so callers can tell "no asset" apart from the bare base URL.
    pub fn asset_url(&self, path: &str) -> String {
        if path.is_empty() {
            return String::new();
        }
        join_url(&self.asset_base_url, path)
    }

    /// URL of the SVG for a named logo.
    pub fn logo_url(&self, name: &str) -> String {
        join_url(&self.logo_base_url, &format!("{name}.svg"))
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
#[path = "../../tests/unit/resolve/assets.rs"]
mod tests;
