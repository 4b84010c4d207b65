//! Release metadata as returned by the GitHub releases endpoint.
//!
//! Only the fields used for resolution and download are modelled; unknown
//! fields in the response are ignored.

use semver::Version;
use serde::Deserialize;

use crate::core::version::coerce;

/// A release asset. Does not contain all fields.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Asset {
    /// API URL of the asset
    pub url: String,
    /// Direct download URL, when the provider supplies one
    #[serde(default)]
    pub browser_download_url: String,
    pub name: String,
    #[serde(default)]
    pub content_type: String,
    #[serde(default)]
    pub size: u64,
}

impl Asset {
    /// URL to stream the asset bytes from.
    pub fn download_url(&self) -> &str {
        if self.browser_download_url.is_empty() {
            &self.url
        } else {
            &self.browser_download_url
        }
    }
}

/// A release. Does not contain all fields.
///
/// See the GitHub [docs](https://docs.github.com/en/rest/releases/releases#list-releases)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Release {
    pub tag_name: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
    /// Assets in provider order
    #[serde(default)]
    pub assets: Vec<Asset>,
}

impl Release {
    /// The tag coerced to a semantic version, if it contains one.
    pub fn version(&self) -> Option<Version> {
        coerce(&self.tag_name)
    }

    /// Display name, falling back to the tag.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or(&self.tag_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_github_release() {
        let json = r#"{
            "tag_name": "v1.2.0",
            "name": "Release 1.2.0",
            "draft": false,
            "created_at": "2024-01-01T00:00:00Z",
            "published_at": "2024-01-02T00:00:00Z",
            "assets": [{
                "url": "https://api.github.com/repos/o/r/releases/assets/1",
                "browser_download_url": "https://github.com/o/r/releases/download/v1.2.0/app-linux-amd64.tar.gz",
                "name": "app-linux-amd64.tar.gz",
                "content_type": "application/gzip",
                "size": 1024,
                "download_count": 7
            }]
        }"#;

        let release: Release = serde_json::from_str(json).unwrap();
        assert_eq!(release.tag_name, "v1.2.0");
        assert_eq!(release.display_name(), "Release 1.2.0");
        assert_eq!(release.version(), Some(Version::new(1, 2, 0)));
        assert_eq!(release.assets.len(), 1);
        assert_eq!(release.assets[0].size, 1024);
        assert!(release.assets[0].download_url().starts_with("https://github.com/"));
    }

    #[test]
    fn test_null_name_and_missing_fields() {
        let json = r#"{"tag_name": "nightly", "name": null, "published_at": null}"#;
        let release: Release = serde_json::from_str(json).unwrap();
        assert_eq!(release.display_name(), "nightly");
        assert!(release.version().is_none());
        assert!(release.assets.is_empty());
    }

    #[test]
    fn test_download_url_falls_back_to_api_url() {
        let asset = Asset {
            url: "https://api.github.com/repos/o/r/releases/assets/9".to_string(),
            browser_download_url: String::new(),
            name: "app.zip".to_string(),
            content_type: String::new(),
            size: 0,
        };
        assert_eq!(asset.download_url(), asset.url);
    }
}
