//! HTTP client for the GitHub releases API

use std::path::{Path, PathBuf};

use crate::config::ClientConfig;
use crate::core::version::VersionConstraint;
use crate::download;
use crate::error::{Error, Result};
use crate::resolve::select_release;

use super::types::Release;

/// Blocking client for listing, resolving and downloading releases.
///
/// Cheap to clone; holds no per-call state.
#[derive(Clone)]
pub struct GithubClient {
    config: ClientConfig,
    agent: ureq::Agent,
}

impl GithubClient {
    pub fn new(config: ClientConfig) -> Self {
        let mut builder = ureq::AgentBuilder::new().user_agent(&config.user_agent);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Self {
            agent: builder.build(),
            config,
        }
    }

    /// Create an API request with the JSON accept header and client identifier.
    fn api_request(&self, url: &str) -> ureq::Request {
        self.agent
            .get(url)
            .set("Accept", "application/vnd.github.v3+json")
            .set("User-Agent", &self.config.user_agent)
    }

    /// Fetch the first page of releases for `repo` ("owner/name").
    ///
    /// Only page 1 is requested, so repositories with more releases than one
    /// page have their older releases unreachable. A repository without
    /// releases yields an empty list.
    pub fn list_releases(&self, repo: &str) -> Result<Vec<Release>> {
        let url = self.config.releases_url(repo);

        let response = self.api_request(&url).call().map_err(|e| Error::Network {
            repo: repo.to_string(),
            cause: describe_api_error(repo, e),
        })?;

        response
            .into_json::<Vec<Release>>()
            .map_err(|e| Error::InvalidResponse {
                repo: repo.to_string(),
                cause: e.to_string(),
            })
    }

    /// Resolve the release of `repo` matching `constraint` (`latest` or a semver range).
    ///
    /// The constraint is validated before the release list is requested.
    pub fn resolve_release(&self, repo: &str, constraint: &str) -> Result<Release> {
        let constraint = VersionConstraint::parse(constraint)?;
        let releases = self.list_releases(repo)?;
        select_release(releases, &constraint, repo)
    }

    /// Stream `url` into `directory/file_name`; see [`download::download_asset`].
    pub fn download_asset(
        &self,
        url: &str,
        file_name: &str,
        directory: Option<&Path>,
        progress: Option<&mut dyn FnMut(usize)>,
    ) -> Result<PathBuf> {
        download::download_asset(&self.agent, url, file_name, directory, progress)
    }
}

/// Turn a ureq error into a message, naming common GitHub failures.
fn describe_api_error(repo: &str, err: ureq::Error) -> String {
    match err {
        ureq::Error::Status(403, _) => "GitHub API returned 403 Forbidden".to_string(),
        ureq::Error::Status(404, _) => format!("repository '{}' not found", repo),
        ureq::Error::Status(code, _) => format!("GitHub API returned HTTP {}", code),
        ureq::Error::Transport(t) => t.to_string(),
    }
}
