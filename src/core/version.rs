//! Tag coercion and version constraints
//!
//! Release tags are free-form (`v1.2.3`, `release-2.0`, `nightly-2024.01`).
//! [`coerce`] extracts the first `major[.minor[.patch]]` numeric run so the
//! tag can be compared with semver rules:
//!
//! ```
//! use release_dl::coerce;
//!
//! assert_eq!(coerce("v1.2.3").unwrap().to_string(), "1.2.3");
//! assert_eq!(coerce("release-2.0").unwrap().to_string(), "2.0.0");
//! assert!(coerce("nightly").is_none());
//! ```
//!
//! Constraints are either `latest` or a range in the npm-style grammar
//! release tooling usually publishes with. Each range is rewritten into
//! one or more [`VersionReq`] before matching:
//!
//! ```text
//! latest            any version, the greatest wins
//! 1.2.3, v1.2.3     exactly 1.2.3            (=1.2.3)
//! 1.2               any 1.2.x                (=1.2)
//! 1.x, *            wildcards
//! ^1.0              >=1.0.0, <2.0.0
//! ~1.4              >=1.4.0, <1.5.0
//! >=1.2.0 <2.0.0    intersection             (>=1.2.0, <2.0.0)
//! 1.2 - 1.5         inclusive hyphen range   (>=1.2, <=1.5)
//! ^1 || ^2          union, any side may match
//! ```

use semver::{Version, VersionReq};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Token selecting the newest release.
pub const LATEST: &str = "latest";

/// Leniently extract a semantic version from a tag name.
///
/// The first run of digits not preceded by another digit starts the match.
/// Up to three dot-separated numeric components are read; missing minor or
/// patch components default to zero. Prerelease and build suffixes are
/// dropped, so `v1.2.3-rc.1` coerces to `1.2.3`.
pub fn coerce(tag: &str) -> Option<Version> {
    let bytes = tag.as_bytes();
    (0..bytes.len())
        .filter(|&i| bytes[i].is_ascii_digit() && (i == 0 || !bytes[i - 1].is_ascii_digit()))
        .find_map(|i| parse_numeric_triple(&tag[i..]))
}

/// Parse `major[.minor[.patch]]` from the start of `s`.
fn parse_numeric_triple(s: &str) -> Option<Version> {
    let mut parts = [0u64; 3];
    let mut rest = s;

    for (idx, slot) in parts.iter_mut().enumerate() {
        if idx > 0 {
            match rest.strip_prefix('.') {
                Some(r) if r.starts_with(|c: char| c.is_ascii_digit()) => rest = r,
                _ => break,
            }
        }
        let end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        // Overflowing components make the whole candidate invalid
        *slot = rest[..end].parse().ok()?;
        rest = &rest[end..];
    }

    Some(Version::new(parts[0], parts[1], parts[2]))
}

/// A parsed version constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionConstraint {
    /// Any version; the greatest one is selected
    Latest,
    /// `||`-separated alternatives, with the string they were parsed from
    Range {
        alternatives: Vec<VersionReq>,
        raw: String,
    },
}

impl VersionConstraint {
    /// Parse `latest` or a range.
    ///
    /// Anything else fails with [`Error::InvalidRange`] naming the input.
    pub fn parse(constraint: &str) -> Result<Self> {
        if constraint == LATEST {
            return Ok(Self::Latest);
        }

        let invalid = || Error::InvalidRange(constraint.to_string());
        let alternatives = constraint
            .split("||")
            .map(|alt| {
                let req = translate_alternative(alt).ok_or_else(invalid)?;
                VersionReq::parse(&req).map_err(|_| invalid())
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::Range {
            alternatives,
            raw: constraint.to_string(),
        })
    }

    pub fn matches(&self, version: &Version) -> bool {
        match self {
            Self::Latest => true,
            Self::Range { alternatives, .. } => alternatives.iter().any(|req| req.matches(version)),
        }
    }

    pub fn is_latest(&self) -> bool {
        matches!(self, Self::Latest)
    }
}

impl Default for VersionConstraint {
    fn default() -> Self {
        Self::Latest
    }
}

impl FromStr for VersionConstraint {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for VersionConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Latest => write!(f, "{}", LATEST),
            Self::Range { raw, .. } => write!(f, "{}", raw),
        }
    }
}

const OPERATOR_CHARS: &str = "<>=^~";

/// Rewrite one `||` alternative into `VersionReq` syntax.
///
/// Returns `None` when the alternative cannot be a range at all (dangling
/// operator, empty hyphen side); everything else is left to `VersionReq`.
fn translate_alternative(alt: &str) -> Option<String> {
    let alt = alt.trim();
    if alt.is_empty() {
        return Some("*".to_string());
    }

    if let Some((low, high)) = alt.split_once(" - ") {
        let (low, high) = (strip_v(low.trim()), strip_v(high.trim()));
        if low.is_empty() || high.is_empty() {
            return None;
        }
        // `<=` on a partial version covers the whole minor/major, as a hyphen range does
        return Some(format!(">={}, <={}", low, high));
    }

    let mut comparators = Vec::new();
    let mut pending_op: Option<&str> = None;

    for token in alt
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
    {
        let split = token
            .find(|c: char| !OPERATOR_CHARS.contains(c))
            .unwrap_or(token.len());
        let (op, version) = token.split_at(split);

        // ">= 1.2.0": the operator arrives as its own token
        let op = match (pending_op.take(), op) {
            (Some(pending), "") => pending,
            (Some(_), _) => return None,
            (None, op) => op,
        };
        if version.is_empty() {
            pending_op = Some(op);
            continue;
        }

        let version = strip_v(version);
        if op.is_empty() && !is_wildcard(version) {
            comparators.push(format!("={}", version));
        } else {
            comparators.push(format!("{}{}", op, version));
        }
    }

    if pending_op.is_some() || comparators.is_empty() {
        return None;
    }
    Some(comparators.join(", "))
}

fn strip_v(version: &str) -> &str {
    version
        .strip_prefix(|c: char| c == 'v' || c == 'V')
        .unwrap_or(version)
}

fn is_wildcard(version: &str) -> bool {
    version.split('.').any(|part| matches!(part, "*" | "x" | "X"))
}
