//! CLI administration tool for gsite-redirect.
//!
//! Lets operators check how a site resolves and manage cached destinations
//! without going through the HTTP service.
//!
//! # Usage
//!
//! ```bash
//! # Probe both hosting schemes for a site (cache untouched)
//! cargo run --bin admin -- probe marketing
//!
//! # Resolve like the service does (cache first, writes back)
//! cargo run --bin admin -- resolve marketing
//!
//! # Inspect or evict a cached destination
//! cargo run --bin admin -- cache get marketing
//! cargo run --bin admin -- cache evict marketing
//!
//! # Print the effective configuration
//! cargo run --bin admin -- config
//! ```
//!
//! # Environment Variables
//!
//! Same as the service; `SITES_DOMAIN` is required. Cache commands are only
//! meaningful with Redis configured, since the in-memory cache lives inside
//! the server process.

use gsite_redirect::application::services::{ResolvedFrom, ResolverService};
use gsite_redirect::config::{self, Config, mask_connection_string};
use gsite_redirect::domain::SiteKey;
use gsite_redirect::infrastructure::cache::{CacheService, NullCache};
use gsite_redirect::server::{build_cache, build_resolver};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use std::sync::Arc;

/// CLI tool for managing gsite-redirect.
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
    /// Probe both candidate URLs for a site without using the cache
    Probe {
        /// Site name, as used in /s/<site>
        site: String,
    },

    /// Resolve a site through the cache, probing on a miss
    Resolve {
        /// Site name, as used in /s/<site>
        site: String,
    },

    /// Manage cached destinations
    Cache {
        #[command(subcommand)]
        action: CacheAction,
    },

    /// Print the effective configuration
    Config,
}

/// Cache management subcommands.
#[derive(Subcommand)]
enum CacheAction {
    /// Show the cached destination for a site
    Get { site: String },

    /// Remove the cached destination for a site
    Evict {
        site: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env().context("Invalid configuration")?;

    match cli.command {
        Commands::Probe { site } => {
            let key = parse_key(&site)?;
            let resolver = build_resolver(&config, Arc::new(NullCache::new()))?;
            probe(&resolver, &key).await;
        }
        Commands::Resolve { site } => {
            let key = parse_key(&site)?;
            let cache = build_cache(&config).await;
            let resolver = build_resolver(&config, cache)?;
            resolve(&resolver, &key).await;
        }
        Commands::Cache { action } => {
            if !config.is_redis_enabled() {
                println!(
                    "{}",
                    "⚠️  Redis is not configured; showing this process's empty in-memory cache"
                        .yellow()
                );
            }
            let cache = build_cache(&config).await;
            handle_cache_action(action, cache).await?;
        }
        Commands::Config => show_config(&config),
    }

    Ok(())
}

fn parse_key(site: &str) -> Result<SiteKey> {
    SiteKey::parse(site).with_context(|| format!("'{}' is not a usable site name", site))
}

/// Probes both candidates and shows which one the service would choose.
async fn probe(resolver: &ResolverService, key: &SiteKey) {
    println!("{} {}", "🔎 Probing".bright_blue().bold(), key.as_str().cyan());
    println!();

    let reports = resolver.probe_all(key).await;

    for report in &reports {
        let status = match report.status {
            Some(code) if report.is_live() => code.to_string().green(),
            Some(code) => code.to_string().yellow(),
            None => "error".red(),
        };
        println!(
            "  {:<8} {}  {}",
            report.candidate.scheme.as_str(),
            status,
            report.candidate.url
        );
    }

    println!();
    match reports.iter().find(|r| r.is_live()) {
        Some(live) => println!(
            "{} {}",
            "✅ Would redirect to".green().bold(),
            live.candidate.url.bright_white()
        ),
        None => println!("{}", "❌ Would answer 404".red().bold()),
    }
}

/// Runs the full resolution path, including the cache write-back.
async fn resolve(resolver: &ResolverService, key: &SiteKey) {
    match resolver.resolve(key).await {
        Some(destination) => {
            let source = match destination.from {
                ResolvedFrom::Cache => "cache".to_string(),
                ResolvedFrom::Probe(scheme) => format!("{} probe", scheme),
            };
            println!(
                "{} {} {}",
                "✅".green(),
                destination.url.bright_white(),
                format!("(from {})", source).dimmed()
            );
        }
        None => println!("{}", "❌ Unable to locate Google site".red().bold()),
    }
}

/// Dispatches cache management commands.
async fn handle_cache_action(action: CacheAction, cache: Arc<dyn CacheService>) -> Result<()> {
    match action {
        CacheAction::Get { site } => {
            let key = parse_key(&site)?;
            let cached = cache
                .get_destination(key.as_str())
                .await
                .map_err(|e| anyhow::anyhow!("Failed to read cache: {}", e))?;

            match cached {
                Some(url) => println!("  {} -> {}", key.as_str().cyan(), url.bright_white()),
                None => println!("  {} {}", key.as_str().cyan(), "not cached".dimmed()),
            }
        }
        CacheAction::Evict { site, yes } => {
            let key = parse_key(&site)?;

            if !yes {
                let confirmed = Confirm::new()
                    .with_prompt(format!("Evict cached destination for '{}'?", key))
                    .default(false)
                    .interact()?;

                if !confirmed {
                    println!("{}", "❌ Cancelled".red());
                    return Ok(());
                }
            }

            let removed = cache
                .invalidate(key.as_str())
                .await
                .map_err(|e| anyhow::anyhow!("Failed to evict: {}", e))?;

            if removed {
                println!("{}", "✅ Cache entry removed".green().bold());
            } else {
                println!("{}", "Nothing cached for this site".dimmed());
            }
        }
    }

    Ok(())
}

fn show_config(config: &Config) {
    println!("{}", "⚙️  Configuration".bright_blue().bold());
    println!();
    println!("  Domain:        {}", config.sites_domain.cyan());
    println!("  Legacy base:   {}", config.legacy_base_url);
    println!("  Current base:  {}", config.current_base_url);
    println!("  Listen:        {}", config.listen_addr);

    let cache = match (&config.redis_url, config.cache_enabled) {
        (_, false) => "disabled".to_string(),
        (Some(url), true) => format!("redis {}", mask_connection_string(url)),
        (None, true) => format!("in-memory ({} entries)", config.cache_max_entries),
    };
    println!("  Cache:         {}", cache);
    println!("  Cache TTL:     {}s", config.cache_ttl_seconds);
    println!("  Probe timeout: {}s", config.probe_timeout_seconds);
    println!(
        "  Rate limit:    1 req / {}s, burst {}",
        config.rate_limit_period_seconds, config.rate_limit_burst
    );
}
