//! Resolve, match and download in one call

use std::path::{Path, PathBuf};

use crate::core::version::LATEST;
use crate::error::Result;
use crate::github::GithubClient;
use crate::matcher::match_asset;
use crate::platform::{host_arch, host_platform};

/// Parameters of a full release download.
///
/// Defaults: `latest`, current working directory, host platform and arch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseRequest<'a> {
    pub repo: &'a str,
    pub constraint: &'a str,
    pub directory: Option<&'a Path>,
    pub platform: &'a str,
    pub arch: &'a str,
}

impl<'a> ReleaseRequest<'a> {
    pub fn new(repo: &'a str) -> Self {
        Self {
            repo,
            constraint: LATEST,
            directory: None,
            platform: host_platform(),
            arch: host_arch(),
        }
    }

    pub fn constraint(mut self, constraint: &'a str) -> Self {
        self.constraint = constraint;
        self
    }

    pub fn directory(mut self, directory: &'a Path) -> Self {
        self.directory = Some(directory);
        self
    }

    pub fn platform(mut self, platform: &'a str) -> Self {
        self.platform = platform;
        self
    }

    pub fn arch(mut self, arch: &'a str) -> Self {
        self.arch = arch;
        self
    }
}

impl GithubClient {
    /// Resolve the release, pick the asset and download it.
    ///
    /// Stops at the first failing stage.
    pub fn download_release(
        &self,
        request: &ReleaseRequest<'_>,
        progress: Option<&mut dyn FnMut(usize)>,
    ) -> Result<PathBuf> {
        let release = self.resolve_release(request.repo, request.constraint)?;
        let asset = match_asset(&release, request.platform, request.arch)?;
        self.download_asset(
            asset.download_url(),
            &asset.name,
            request.directory,
            progress,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults() {
        let request = ReleaseRequest::new("o/r");
        assert_eq!(request.constraint, "latest");
        assert_eq!(request.directory, None);
        assert_eq!(request.platform, host_platform());
        assert_eq!(request.arch, host_arch());
    }

    #[test]
    fn test_request_builder() {
        let dir = Path::new("/tmp");
        let request = ReleaseRequest::new("o/r")
            .constraint("^1.0")
            .directory(dir)
            .platform("linux")
            .arch("x64");
        assert_eq!(request.constraint, "^1.0");
        assert_eq!(request.directory, Some(dir));
        assert_eq!(request.platform, "linux");
        assert_eq!(request.arch, "x64");
    }
}
