//! CLI administration tool for link-shortener.
//!
//! Provides commands for database maintenance and link management without
//! going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Apply pending migrations
//! cargo run --bin admin -- db migrate
//!
//! # Shorten URLs
//! cargo run --bin admin -- link shorten https://example.com https://example.org
//!
//! # Show clicks of a link
//! cargo run --bin admin -- link status q8Zk3mWx0aLp --limit 20
//!
//! # Delete a link
//! cargo run --bin admin -- link delete q8Zk3mWx0aLp
//! ```
//!
//! # Environment Variables
//!
//! Same as the server, see [`link_shortener::config`].

use link_shortener::application::services::LinkService;
use link_shortener::config::{self, Config};
use link_shortener::infrastructure::persistence;
use link_shortener::state::AppState;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::process::ExitCode;
use std::sync::Arc;

/// CLI tool for managing link-shortener.
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
    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },

    /// Manage short links
    Link {
        #[command(subcommand)]
        action: LinkAction,
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

/// Link management subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// Shorten one or more URLs (all-or-nothing)
    Shorten {
        #[arg(required = true)]
        urls: Vec<String>,
    },

    /// Show the clicks of a link, newest first
    Status {
        code: String,

        /// Maximum number of clicks to show
        #[arg(short, long, default_value_t = 10)]
        limit: i64,

        /// Number of newest clicks to skip
        #[arg(short, long, default_value_t = 0)]
        offset: i64,
    },

    /// Soft-delete a link
    Delete {
        code: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    let pool = persistence::connect(&config)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Db { action } => handle_db_action(action, pool, &config).await,
        Commands::Link { action } => {
            let state = AppState::postgres(Arc::new(pool), &config);
            handle_link_action(action, &state.link_service).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Handles database commands.
///
/// `db check` exits with a failure status when the store is down.
async fn handle_db_action(action: DbAction, pool: PgPool, config: &Config) -> Result<ExitCode> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            let state = AppState::postgres(Arc::new(pool), config);
            if state.link_service.ping().await {
                println!("{}", "✅ Database: OK".green().bold());
                Ok(ExitCode::SUCCESS)
            } else {
                println!("{}", "❌ Database: DOWN".red().bold());
                Ok(ExitCode::FAILURE)
            }
        }
        DbAction::Migrate => {
            println!("{}", "🛠  Applying migrations...".bright_blue());

            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .context("Failed to migrate")?;

            println!("{}", "✅ Migrations applied".green().bold());
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Dispatches link management commands.
async fn handle_link_action(action: LinkAction, service: &LinkService) -> Result<()> {
    match action {
        LinkAction::Shorten { urls } => shorten_links(service, urls).await,
        LinkAction::Status {
            code,
            limit,
            offset,
        } => show_status(service, &code, limit, offset).await,
        LinkAction::Delete { code, yes } => delete_link(service, &code, yes).await,
    }
}

async fn shorten_links(service: &LinkService, urls: Vec<String>) -> Result<()> {
    println!("{}", "🔗 Shorten URLs".bright_blue().bold());
    println!();

    let short_urls = service
        .shorten_batch(&urls)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to shorten: {}", e))?;

    for (url, short_url) in urls.iter().zip(&short_urls) {
        println!("  {} {}", short_url.bright_yellow().bold(), url.bright_black());
    }
    println!();

    Ok(())
}

/// Prints the clicks of a link.
///
/// # Output Format
///
/// ```text
/// 📊 Clicks of q8Zk3mWx0aLp
///
///   Visited              Client
///   ──────────────────────────────────────────────────────────────
///   2024-01-15 10:30:12  [127.0.0.1:50312]: curl/8.5.0
///
///   Count: 1
/// ```
async fn show_status(service: &LinkService, code: &str, limit: i64, offset: i64) -> Result<()> {
    println!("{} {}", "📊 Clicks of".bright_blue().bold(), code.cyan());
    println!();

    let clicks = service
        .status(code, limit, offset)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?;

    if clicks.is_empty() {
        println!("{}", "  No clicks found".yellow());
        println!();
        return Ok(());
    }

    println!(
        "  {:<20} {}",
        "Visited".bright_white().bold(),
        "Client".bright_white().bold()
    );
    println!("  {}", "─".repeat(62).bright_black());

    for click in &clicks {
        println!(
            "  {:<20} {}",
            click
                .created_at
                .format("%Y-%m-%d %H:%M:%S")
                .to_string()
                .bright_black(),
            click.client_descriptor
        );
    }

    println!();
    println!("  Count: {}", clicks.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Soft-deletes a link after confirmation (default: No).
async fn delete_link(service: &LinkService, code: &str, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑  Delete Link".bright_blue().bold());
    println!();

    let link = service
        .lookup(code)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
        .context("Link not found")?;

    if link.is_deleted {
        println!("{}", "⚠️  This link is already deleted".yellow());
        return Ok(());
    }

    println!("  Code: {}", link.short_code.cyan());
    println!("  URL:  {}", link.original_url.bright_white());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this link?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    service
        .remove(code)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete link: {}", e))?;

    println!("{}", "✅ Link deleted".green().bold());
    println!();

    Ok(())
}
