//! CLI administration tool for tilda-cf-purge.
//!
//! Runs the same lookups and purge as the webhook, without going through
//! HTTP. Handy for checking credentials or purging a page by hand.
//!
//! # Usage
//!
//! ```bash
//! # Purge a page
//! cargo run --bin admin -- purge --project-id 123 --page-id 456
//!
//! # Resolve a project's custom domain
//! cargo run --bin admin -- domain 123
//!
//! # Resolve the Cloudflare zone of a domain
//! cargo run --bin admin -- zone example.com
//!
//! # Validate configuration
//! cargo run --bin admin -- config
//! ```
//!
//! # Environment Variables
//!
//! Same as the server, see [`tilda_cf_purge::config`].

use tilda_cf_purge::config::{self, Config};
use tilda_cf_purge::domain::entities::PurgeOutcome;
use tilda_cf_purge::state::AppState;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;

/// CLI tool for managing tilda-cf-purge.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Purge the Cloudflare cache of a Tilda page
    Purge {
        /// Tilda project ID
        #[arg(long)]
        project_id: String,

        /// Tilda page ID
        #[arg(long)]
        page_id: String,
    },

    /// Resolve the custom domain of a Tilda project
    Domain {
        /// Tilda project ID
        project_id: String,
    },

    /// Resolve the Cloudflare zone serving a domain
    Zone {
        /// Domain name, e.g. example.com
        domain: String,
    },

    /// Validate configuration and print a summary
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    match cli.command {
        Commands::Purge {
            project_id,
            page_id,
        } => purge(&config, &project_id, &page_id).await?,
        Commands::Domain { project_id } => domain(&config, &project_id).await?,
        Commands::Zone { domain } => zone(&config, &domain).await?,
        Commands::Config => show_config(&config),
    }

    Ok(())
}

/// Runs the full purge pipeline once and prints the report.
///
/// # Output Format
///
/// ```text
/// 🧹 Purge page 456 of project 123
///
///   Domain: example.com
///   Zone:   023e105f4ecef8ad9ca31a8372d0c353
///   URLs:
///     https://example.com/page456.html
///     https://example.com/about
///
/// ✅ Cache purged
/// ```
async fn purge(config: &Config, project_id: &str, page_id: &str) -> Result<()> {
    println!(
        "{}",
        format!("🧹 Purge page {} of project {}", page_id, project_id)
            .bright_blue()
            .bold()
    );
    println!();

    let state = AppState::from_config(config)?;
    let report = state
        .purge_service
        .purge_page(project_id, page_id)
        .await
        .map_err(|e| anyhow::anyhow!("Purge failed: {}", e))?;

    println!("  Domain: {}", report.domain.cyan());
    println!("  Zone:   {}", report.zone_id.to_string().bright_black());
    println!("  URLs:");
    for url in &report.urls {
        println!("    {}", url.bright_white());
    }
    println!();

    match report.outcome {
        PurgeOutcome::Purged => {
            println!("{}", "✅ Cache purged".green().bold());
        }
        PurgeOutcome::Rejected { status, errors } => {
            println!(
                "{}",
                format!("❌ Cloudflare rejected the purge (HTTP {})", status)
                    .red()
                    .bold()
            );
            for error in &errors {
                println!("    {}", error.yellow());
            }
            anyhow::bail!("purge rejected by Cloudflare");
        }
    }
    println!();

    Ok(())
}

/// Prints the custom domain of a Tilda project.
async fn domain(config: &Config, project_id: &str) -> Result<()> {
    let state = AppState::from_config(config)?;

    let domain = state
        .purge_service
        .project_domain(project_id)
        .await
        .map_err(|e| anyhow::anyhow!("Lookup failed: {}", e))?;

    println!("  Project: {}", project_id.bright_black());
    println!("  Domain:  {}", domain.cyan().bold());

    Ok(())
}

/// Prints the Cloudflare zone serving a domain.
async fn zone(config: &Config, domain: &str) -> Result<()> {
    let state = AppState::from_config(config)?;

    let zone_id = state
        .purge_service
        .zone_for_domain(domain)
        .await
        .map_err(|e| anyhow::anyhow!("Lookup failed: {}", e))?;

    println!("  Domain: {}", domain.cyan());
    println!("  Zone:   {}", zone_id.to_string().bright_white().bold());

    Ok(())
}

/// Prints the validated configuration with secrets masked.
fn show_config(config: &Config) {
    println!("{}", "⚙️  Configuration".bright_blue().bold());
    println!();
    println!("  Listen:            {}", config.listen_addr.cyan());
    println!("  Tilda API:         {}", config.cms_api_url.cyan());
    println!(
        "  Tilda public key:  {}",
        config::mask_secret(&config.cms_public_key).bright_black()
    );
    println!(
        "  Tilda secret key:  {}",
        config::mask_secret(&config.cms_secret_key).bright_black()
    );
    println!("  Cloudflare API:    {}", config.cdn_api_url.cyan());
    println!(
        "  Cloudflare token:  {}",
        config::mask_secret(&config.cdn_api_token).bright_black()
    );
    println!("  Upstream timeout:  {}s", config.upstream_timeout_secs);
    println!("  Strict purge:      {}", config.strict_purge);
    println!();
    println!("{}", "✅ Configuration is valid".green().bold());
}
