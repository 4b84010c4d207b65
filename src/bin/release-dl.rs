//! release-dl - fetch platform-specific GitHub release assets
//!
//! Usage:
//!   release-dl list <repo>                       List releases (first page)
//!   release-dl resolve <repo> [--range R]        Show the resolved release
//!   release-dl asset <repo> [--range R] ...      Show the matching asset
//!   release-dl download <repo> [--range R] ...   Download the matching asset

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use release_dl::{
    host_arch, host_platform, match_asset, output, ClientConfig, GithubClient, Release,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "release-dl")]
#[command(about = "Resolve and download platform-specific GitHub release assets")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Releases API base URL
    #[arg(long, global = true, env = "RELEASE_DL_API_BASE")]
    api_base: Option<String>,

    /// HTTP timeout in seconds (clamped to 5-300)
    #[arg(long, global = true, env = "RELEASE_DL_HTTP_TIMEOUT")]
    timeout: Option<u64>,
}

#[derive(Args)]
struct Selection {
    /// Repository in "owner/name" form
    repo: String,

    /// Version constraint: "latest" or a semver range such as "^1.0"
    #[arg(short, long, default_value = "latest")]
    range: String,
}

#[derive(Args)]
struct Target {
    /// Platform substring to match (empty matches any)
    #[arg(short, long, default_value_t = host_platform().to_string())]
    platform: String,

    /// Architecture substring to match (empty matches any)
    #[arg(short, long, default_value_t = host_arch().to_string())]
    arch: String,
}

#[derive(Subcommand)]
enum Commands {
    /// List releases of a repository
    List {
        /// Repository in "owner/name" form
        repo: String,
    },

    /// Show the release matching a version constraint
    Resolve {
        #[command(flatten)]
        selection: Selection,
    },

    /// Show the asset matching a platform and architecture
    Asset {
        #[command(flatten)]
        selection: Selection,

        #[command(flatten)]
        target: Target,
    },

    /// Download the asset matching a platform and architecture
    Download {
        #[command(flatten)]
        selection: Selection,

        #[command(flatten)]
        target: Target,

        /// Destination directory (current directory if not specified)
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// Do not show a progress bar
        #[arg(short, long)]
        quiet: bool,
    },
}

fn main() {
    if let Err(e) = run() {
        output::failure(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let client = create_client(cli.api_base.as_deref(), cli.timeout);

    match cli.command {
        Commands::List { repo } => {
            let releases = client
                .list_releases(&repo)
                .with_context(|| format!("Failed to list releases of {}", repo))?;

            if releases.is_empty() {
                output::note(&format!("{} has no releases", repo));
            } else {
                output::note(&format!("{} release(s) of {}", releases.len(), repo));
                for release in &releases {
                    print_release_line(release);
                }
            }
        }

        Commands::Resolve { selection } => {
            let release = resolve(&client, &selection)?;
            print_release_line(&release);
            for asset in &release.assets {
                output::asset_line(&asset.name, asset.size);
            }
        }

        Commands::Asset { selection, target } => {
            let release = resolve(&client, &selection)?;
            let asset = match_asset(&release, &target.platform, &target.arch)?;
            output::asset_line(&asset.name, asset.size);
            output::detail(asset.download_url());
        }

        Commands::Download {
            selection,
            target,
            dir,
            quiet,
        } => {
            output::heading(&format!("Downloading {}", selection.repo));

            output::stage("resolve");
            let release = resolve(&client, &selection)?;
            output::detail(&format!("{} ({})", release.display_name(), release.tag_name));

            output::stage("match");
            let asset = match_asset(&release, &target.platform, &target.arch)?;
            output::detail(&asset.name);

            output::stage("download");
            let path = if quiet {
                client.download_asset(asset.download_url(), &asset.name, dir.as_deref(), None)?
            } else {
                let bar = output::transfer_bar(&asset.name, asset.size);
                let mut on_chunk = |len: usize| bar.inc(len as u64);
                let result = client.download_asset(
                    asset.download_url(),
                    &asset.name,
                    dir.as_deref(),
                    Some(&mut on_chunk),
                );
                bar.finish_and_clear();
                result?
            };

            output::done(&format!("{} saved to {}", asset.name, path.display()));
        }
    }

    Ok(())
}

fn create_client(api_base: Option<&str>, timeout: Option<u64>) -> GithubClient {
    let mut config = ClientConfig::from_env();
    if let Some(base) = api_base {
        config = config.with_api_base(base);
    }
    if let Some(secs) = timeout {
        config = config.with_timeout_secs(secs);
    }
    GithubClient::new(config)
}

fn resolve(client: &GithubClient, selection: &Selection) -> Result<Release> {
    client
        .resolve_release(&selection.repo, &selection.range)
        .with_context(|| format!("Failed to resolve {} {}", selection.repo, selection.range))
}

fn print_release_line(release: &Release) {
    let published = release.published_at.as_deref().unwrap_or("unpublished");
    let version = release.version();
    let detail = match &version {
        Some(v) => format!(
            "{} [{}] {} asset(s), {}",
            release.display_name(),
            v,
            release.assets.len(),
            published
        ),
        None => format!(
            "{} (no semver tag) {} asset(s), {}",
            release.display_name(),
            release.assets.len(),
            published
        ),
    };
    output::release_line(&release.tag_name, &detail, version.is_some());
}
