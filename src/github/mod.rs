//! GitHub releases API access

mod client;
mod types;

pub use client::GithubClient;
pub use types::{Asset, Release};
