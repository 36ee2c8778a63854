// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::fs;

use anyhow::{bail, Context, Result};
use clap::Parser;

use unisearch::{Category, Key, KeyOutcome, Site};

mod cli;
use cli::display::{self, faint, paint, strong, Role};
use cli::logging::{self, Verbosity};
use cli::{Cli, Commands, SiteArgs};

fn main() {
    let cli = Cli::parse();
    logging::init(Verbosity::from_flags(cli.verbose, cli.quiet), cli.no_color);
    if cli.no_color {
        display::disable_colors();
    }

    if let Err(e) = run(cli.command) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Index { site, output } => run_index(&site, output.as_deref()),
        Commands::Search { site, query } => run_search(&site, &query),
        Commands::Navigate { site, keys, query } => run_navigate(&site, &keys, &query),
        Commands::Inspect { input } => run_inspect(&input),
    }
}

fn load(args: &SiteArgs) -> Result<(Site, unisearch::Locale)> {
    let site = Site::load(&args.input)
        .with_context(|| format!("Failed to load site from {}", args.input))?;
    let locale = site.locale(args.locale.as_deref())?;
    Ok((site, locale))
}

fn run_index(args: &SiteArgs, output: Option<&str>) -> Result<()> {
    let (site, locale) = load(args)?;
    let index = site.build_index(&locale)?;
    let json = serde_json::to_string_pretty(&index)?;

    match output {
        Some(path) => {
            fs::write(path, json).with_context(|| format!("Failed to write {}", path))?;
            eprintln!(
                "✓ {} entries ({}) → {}",
                index.len(),
                locale,
                path
            );
        }
        None => println!("{}", json),
    }
    Ok(())
}

fn run_search(args: &SiteArgs, query: &str) -> Result<()> {
    let (site, locale) = load(args)?;
    let mut overlay = site.overlay(&locale)?;
    overlay.open();
    overlay.set_query(query);
    display::print_render_model(&overlay.render_model());
    Ok(())
}

fn run_navigate(args: &SiteArgs, keys: &[String], query: &str) -> Result<()> {
    let (site, locale) = load(args)?;
    let mut overlay = site.overlay(&locale)?;
    overlay.open();
    overlay.set_query(query);

    for name in keys {
        let Some(key) = Key::from_name(name.trim()) else {
            bail!("Unknown key '{}' (expected down, up, enter or esc)", name);
        };
        match overlay.handle_key(key) {
            KeyOutcome::Selected(position) => {
                let title = overlay
                    .results()
                    .flat_get(position)
                    .map(|e| e.title.as_str())
                    .unwrap_or_default();
                println!("{:<6} → {} {}", name, position, paint(Role::Heading, title));
            }
            KeyOutcome::Activated(activation) => {
                println!(
                    "{:<6} → navigate {}",
                    name,
                    strong(Role::Target, &activation.target)
                );
                return Ok(());
            }
            KeyOutcome::Closed => {
                println!("{:<6} → closed", name);
                return Ok(());
            }
            KeyOutcome::Ignored => {
                println!("{:<6} → {}", name, faint("ignored"));
            }
        }
    }

    display::print_render_model(&overlay.render_model());
    Ok(())
}

fn run_inspect(input: &str) -> Result<()> {
    let site =
        Site::load(input).with_context(|| format!("Failed to load site from {}", input))?;
    if site.locales().is_empty() {
        bail!("Manifest lists no locales");
    }

    display::section_top(&format!("{} (default {})", input, site.default_locale()));
    for locale in site.locales() {
        let index = site.build_index(&locale)?;
        let counts: Vec<String> = Category::ALL
            .iter()
            .map(|c| format!("{} {:>4}", c, index.count(*c)))
            .collect();
        display::row(&format!(
            " {:<4} {}  {}  {}",
            strong(Role::Accent, locale.as_str()),
            counts.join("  "),
            paint(Role::Muted, &format!("total {:>4}", index.len())),
            paint(Role::Muted, &format!("version {}", index.version)),
        ));
    }
    display::section_bot();
    Ok(())
}
