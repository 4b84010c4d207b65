//! Asset selection by platform and architecture
//!
//! Asset names carry platform and architecture as free-form substrings
//! (`app-linux-amd64.tar.gz`, `tool_Darwin_arm64.zip`, `app-win64.zip`), so
//! matching is a heuristic substring test rather than structured parsing:
//!
//! - an asset matches when its name contains both `platform` and `arch`
//! - both tests are case-sensitive; an empty string matches every name
//! - an x64 arch (`x64`, `x86_64`, `amd64`) is reduced to `64`, the token
//!   shared by `amd64`, `x86_64`, `linux64`, `win64` and friends
//! - when several assets match, the last one in release order wins

use crate::error::{Error, Result};
use crate::github::{Asset, Release};
use crate::platform::{host_arch, host_platform};

/// Spellings of x86-64 reduced to their common token before matching
const X64_SPELLINGS: [&str; 3] = ["x64", "x86_64", "amd64"];

fn normalize_arch(arch: &str) -> &str {
    if X64_SPELLINGS.contains(&arch) {
        "64"
    } else {
        arch
    }
}

/// Find the asset of `release` built for `platform` and `arch`.
pub fn match_asset<'a>(release: &'a Release, platform: &str, arch: &str) -> Result<&'a Asset> {
    let needle = normalize_arch(arch);

    release
        .assets
        .iter()
        .rev()
        .find(|asset| asset.name.contains(platform) && asset.name.contains(needle))
        .ok_or_else(|| Error::NoMatch {
            platform: platform.to_string(),
            arch: arch.to_string(),
        })
}

/// [`match_asset`] for the running host.
pub fn match_host_asset(release: &Release) -> Result<&Asset> {
    match_asset(release, host_platform(), host_arch())
}
