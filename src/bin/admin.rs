//! CLI administration tool for shortlink.
//!
//! Works directly against the PostgreSQL store, without going through the
//! HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # List every link, newest first
//! cargo run --bin admin -- links list
//!
//! # Create a link with a generated or custom code
//! cargo run --bin admin -- links create https://example.com/docs
//! cargo run --bin admin -- links create https://example.com/docs --code docs -y
//!
//! # Show where a code points
//! cargo run --bin admin -- links resolve docs
//!
//! # Database diagnostics
//! cargo run --bin admin -- db check
//! cargo run --bin admin -- db migrate
//! ```
//!
//! # Environment Variables
//!
//! Same as the server: `DATABASE_URL` (or the `DB_*` components) and
//! `BASE_URL` for printed short URLs.

use shortlink::application::services::{AllocationService, ResolutionService};
use shortlink::config::{self, Config, StorageBackend};
use shortlink::error::LinkError;
use shortlink::infrastructure::persistence::PgLinkRepository;
use shortlink::server::connect_database;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing shortlink.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage short links
    Links {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Link management subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// List all links, newest first
    List,

    /// Create a new link
    Create {
        /// Target URL the short link redirects to
        target_url: String,

        /// Custom code (generated if omitted)
        #[arg(short, long)]
        code: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Show the target of a code
    Resolve {
        /// Short code to look up
        code: String,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Apply pending migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    if config.storage_backend != StorageBackend::Postgres {
        anyhow::bail!("The admin tool only works with STORAGE_BACKEND=postgres");
    }

    let pool = connect_database(&config).await?;

    match cli.command {
        Commands::Links { action } => handle_link_action(action, &config, pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches link management commands.
async fn handle_link_action(action: LinkAction, config: &Config, pool: PgPool) -> Result<()> {
    let repo = Arc::new(PgLinkRepository::new(Arc::new(pool)));
    let resolution = ResolutionService::new(repo.clone(), config.base_url.as_str());

    match action {
        LinkAction::List => list_links(&resolution).await,
        LinkAction::Create {
            target_url,
            code,
            yes,
        } => {
            let allocation = AllocationService::new(repo);
            create_link(&allocation, &resolution, target_url, code, yes).await
        }
        LinkAction::Resolve { code } => resolve_link(&resolution, &code).await,
    }
}

/// Lists all links in a table.
///
/// ```text
/// Links
///
///   ID   Code       Created              Target
///   ─────────────────────────────────────────────────────────────
///   2    docs       2025-01-15 10:30     https://example.com/docs
/// ```
async fn list_links(resolution: &ResolutionService<PgLinkRepository>) -> Result<()> {
    println!("{}", "Links".bright_blue().bold());
    println!();

    let links = resolution
        .list_links()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list links: {}", e))?;

    if links.is_empty() {
        println!("{}", "  No links found".yellow());
        println!();
        println!(
            "  Create one with: {} admin -- links create <url>",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<5} {:<12} {:<20} {}",
        "ID".bright_white().bold(),
        "Code".bright_white().bold(),
        "Created".bright_white().bold(),
        "Target".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for (link, _) in &links {
        println!(
            "  {:<5} {:<12} {:<20} {}",
            link.id.to_string().bright_black(),
            link.code.cyan(),
            link.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            link.target_url
        );
    }

    println!();
    println!("  Total: {}", links.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Creates a link after an optional confirmation prompt.
async fn create_link(
    allocation: &AllocationService<PgLinkRepository>,
    resolution: &ResolutionService<PgLinkRepository>,
    target_url: String,
    code: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "Create Link".bright_blue().bold());
    println!();
    println!("  Target: {}", target_url.cyan());
    match code {
        Some(ref c) => println!("  Code:   {}", c.cyan()),
        None => println!("  Code:   {}", "(generated)".bright_black()),
    }
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this link?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    let link = match allocation.create_link(&target_url, code.as_deref()).await {
        Ok(link) => link,
        Err(LinkError::DuplicateCode(code)) => {
            anyhow::bail!("Code '{}' is already taken", code)
        }
        Err(e) => return Err(e).context("Failed to create link"),
    };

    println!("{}", "Link created".green().bold());
    println!();
    println!("  Code:      {}", link.code.bright_yellow().bold());
    println!(
        "  Short URL: {}",
        resolution.short_url(&link.code).bright_cyan()
    );
    println!();

    Ok(())
}

/// Prints the target and short URL of a code.
async fn resolve_link(resolution: &ResolutionService<PgLinkRepository>, code: &str) -> Result<()> {
    match resolution.resolve(code).await {
        Ok(link) => {
            println!("  Code:      {}", link.code.cyan());
            println!("  Target:    {}", link.target_url.bright_white());
            println!("  Short URL: {}", resolution.short_url(&link.code));
            println!(
                "  Created:   {}",
                link.created_at.format("%Y-%m-%d %H:%M:%S").to_string().bright_black()
            );
            Ok(())
        }
        Err(LinkError::NotFound(_)) => {
            println!("{}", format!("  No link with code '{}'", code).yellow());
            Ok(())
        }
        Err(e) => Err(e).context("Failed to resolve code"),
    }
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("{}", "Database connection OK".green().bold());
            println!("  PostgreSQL: {}", version.bright_white());
        }
        DbAction::Migrate => {
            println!("{}", "Applying migrations...".bright_blue());

            sqlx::migrate!("./migrations")
                .run(pool)
                .await
                .context("Failed to run migrations")?;

            println!("{}", "Migrations up to date".green().bold());
        }
    }

    Ok(())
}
