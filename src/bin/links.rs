//! Command-line tool for checking social links.
//!
//! Lets content editors and developers see how the site will render a set
//! of social links without starting the HTTP service.
//!
//! # Usage
//!
//! ```bash
//! # Resolve a CMS export (array of entries or `{ "links": [...] }`)
//! cargo run --bin links -- resolve links.json
//!
//! # Same, as JSON for the rendering layer
//! cargo run --bin links -- resolve links.json --json
//!
//! # Detect a single URL
//! cargo run --bin links -- detect "https://music.youtube.com/channel/1"
//!
//! # List known platforms
//! cargo run --bin links -- platforms
//! ```
//!
//! # Environment Variables
//!
//! - `PLATFORM_PRECEDENCE` (optional): default for `--precedence`
//! - `PLATFORM_MATCH_MODE` (optional): default for `--match-mode`

use social_links::application::services::LinkResolver;
use social_links::domain::entities::{GENERIC_LINK, Matcher, ResolvedLink, SocialLinkEntry};
use social_links::domain::{MatchMode, PlatformRegistry, Precedence};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// CLI tool for resolving social links.
#[derive(Parser)]
#[command(name = "links")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Print JSON instead of a table
    #[arg(long, global = true)]
    json: bool,

    /// How domain patterns are matched: substring or host
    #[arg(long, global = true, env = "PLATFORM_MATCH_MODE", default_value = "substring")]
    match_mode: MatchMode,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve entries from a JSON file
    Resolve {
        /// Path to the JSON file
        file: PathBuf,

        /// Which source wins on conflict: detected or manual
        #[arg(long, env = "PLATFORM_PRECEDENCE", default_value = "detected")]
        precedence: Precedence,
    },

    /// Detect the platform of a URL
    Detect {
        /// URL to classify
        url: String,
    },

    /// List known platforms in detection order
    Platforms,
}

/// Accepted shapes of an entries file.
#[derive(Deserialize)]
#[serde(untagged)]
enum EntriesFile {
    List(Vec<SocialLinkEntry>),
    Wrapped { links: Vec<SocialLinkEntry> },
}

impl EntriesFile {
    fn into_entries(self) -> Vec<SocialLinkEntry> {
        match self {
            EntriesFile::List(entries) | EntriesFile::Wrapped { links: entries } => entries,
        }
    }
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let registry = Arc::new(PlatformRegistry::default().with_match_mode(cli.match_mode));

    match cli.command {
        Commands::Resolve { file, precedence } => {
            let resolver = LinkResolver::new(registry, precedence);
            handle_resolve(&resolver, &file, cli.json)?
        }
        Commands::Detect { url } => handle_detect(&registry, &url, cli.json)?,
        Commands::Platforms => handle_platforms(&registry, cli.json)?,
    }

    Ok(())
}

fn handle_resolve(resolver: &LinkResolver, file: &Path, json: bool) -> Result<()> {
    let raw = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let entries = serde_json::from_str::<EntriesFile>(&raw)
        .with_context(|| format!("{} is not a list of social links", file.display()))?
        .into_entries();

    let links = resolver.resolve_all(&entries);

    if json {
        println!("{}", serde_json::to_string_pretty(&links)?);
        return Ok(());
    }

    println!("{}", "🔗 Resolved Links".bright_blue().bold());
    println!();
    print_links(&links);
    println!();

    let dropped = entries.len() - links.len();
    println!(
        "{} {} resolved, {} dropped (no URL)",
        "Summary:".bold(),
        links.len().to_string().green(),
        if dropped > 0 {
            dropped.to_string().yellow()
        } else {
            dropped.to_string().normal()
        }
    );

    Ok(())
}

fn print_links(links: &[ResolvedLink]) {
    if links.is_empty() {
        println!("{}", "No renderable links".yellow());
        return;
    }

    println!(
        "{:<16} {:<20} {}",
        "Platform".bold(),
        "Label".bold(),
        "URL".bold()
    );
    println!("{}", "─".repeat(72).dimmed());

    for link in links {
        let platform = if link.platform_key == GENERIC_LINK {
            link.platform_key.dimmed()
        } else {
            link.platform_key.cyan()
        };
        println!("{:<16} {:<20} {}", platform, link.display_label, link.url);
    }
}

fn handle_detect(registry: &PlatformRegistry, url: &str, json: bool) -> Result<()> {
    let platform = registry.detect(url);

    if json {
        let value = serde_json::json!({
            "url": url,
            "platformKey": platform.map(|p| p.key),
            "label": platform.map(|p| p.label),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    match platform {
        Some(p) => println!("{} {} ({})", "✓".green(), p.label.bold(), p.key.cyan()),
        None => println!("{} No known platform for {}", "✗".yellow(), url),
    }

    Ok(())
}

fn handle_platforms(registry: &PlatformRegistry, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(registry.platforms())?);
        return Ok(());
    }

    println!("{}", "📋 Known Platforms".bright_blue().bold());
    println!();

    for (i, platform) in registry.platforms().iter().enumerate() {
        let matchers = platform
            .matchers
            .iter()
            .map(|m| match m {
                Matcher::Domain(d) => d.to_string(),
                Matcher::HostContains(s) => format!("*{s}*"),
                Matcher::Scheme(s) => format!("{s}:"),
            })
            .collect::<Vec<_>>()
            .join(", ");

        println!(
            "{:>3}. {:<16} {:<16} {}",
            i + 1,
            platform.key.cyan(),
            platform.label,
            matchers.dimmed()
        );
    }

    Ok(())
}
