//! Resolve and download platform-specific GitHub release assets
//!
//! The crate answers three questions for an `owner/name` repository:
//!
//! 1. which release matches a version constraint (`latest` or a semver range),
//! 2. which asset of that release matches a platform/architecture pair,
//! 3. how to stream that asset to disk with per-chunk progress feedback.
//!
//! # Example
//!
//! ```no_run
//! use release_dl::{ClientConfig, GithubClient, ReleaseRequest};
//!
//! let client = GithubClient::new(ClientConfig::from_env());
//! let request = ReleaseRequest::new("BurntSushi/ripgrep").constraint("^14");
//! let path = client.download_release(&request, None)?;
//! println!("downloaded {}", path.display());
//! # Ok::<(), release_dl::Error>(())
//! ```
//!
//! # Stages
//!
//! - [`GithubClient::list_releases`] - first page of the releases endpoint
//! - [`GithubClient::resolve_release`] / [`select_release`] - version resolution
//! - [`match_asset`] - substring matching on asset names
//! - [`GithubClient::download_asset`] / [`download_asset`] - streaming download
//! - [`GithubClient::download_release`] - all of the above in sequence
//!
//! # Environment
//!
//! - `RELEASE_DL_API_BASE` - API base URL (default `https://api.github.com`)
//! - `RELEASE_DL_USER_AGENT` - client identifier sent with every request
//! - `RELEASE_DL_HTTP_TIMEOUT` - request timeout in seconds (5-300)

pub mod config;
pub mod core;
pub mod download;
pub mod error;
pub mod github;
pub mod matcher;
pub mod pipeline;
pub mod platform;
pub mod resolve;

pub use config::ClientConfig;
pub use crate::core::output;
pub use crate::core::version::{coerce, VersionConstraint};
pub use download::download_asset;
pub use error::{Error, Result};
pub use github::{Asset, GithubClient, Release};
pub use matcher::{match_asset, match_host_asset};
pub use pipeline::ReleaseRequest;
pub use platform::{host_arch, host_platform};
pub use resolve::select_release;
