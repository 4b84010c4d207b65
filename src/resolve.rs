//! Version resolution over a release list
//!
//! Tags are coerced to semantic versions; releases whose tag does not coerce
//! are skipped. Among the remaining releases the greatest version allowed by
//! the constraint is selected. Selecting by semver ordering rather than list
//! position means an unsorted or partially sorted provider response still
//! yields the newest release.
//!
//! When several releases coerce to the same version (e.g. `v1.0.0` and
//! `1.0.0-final`), the one listed first by the provider is returned.

use semver::Version;

use crate::core::version::VersionConstraint;
use crate::error::{Error, Result};
use crate::github::Release;

/// Select the release matching `constraint` from a provider-ordered list.
///
/// `repo` is only used for error messages.
pub fn select_release(
    mut releases: Vec<Release>,
    constraint: &VersionConstraint,
    repo: &str,
) -> Result<Release> {
    let candidates: Vec<(usize, Version)> = releases
        .iter()
        .enumerate()
        .filter_map(|(idx, release)| release.version().map(|v| (idx, v)))
        .filter(|(_, version)| constraint.matches(version))
        .collect();

    let Some(idx) = greatest_first(&candidates) else {
        return Err(match constraint {
            VersionConstraint::Latest => Error::NoReleases(repo.to_string()),
            VersionConstraint::Range { raw, .. } => Error::Unsatisfied(raw.clone()),
        });
    };

    Ok(releases.swap_remove(idx))
}

/// Index of the greatest version; ties keep the earliest entry.
fn greatest_first(candidates: &[(usize, Version)]) -> Option<usize> {
    let mut best: Option<&(usize, Version)> = None;
    for candidate in candidates {
        match best {
            Some((_, version)) if *version >= candidate.1 => {}
            _ => best = Some(candidate),
        }
    }
    best.map(|(idx, _)| *idx)
}
