// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

use std::env;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use keyspell::config::{validate_config, ConfigEvent, ConfigWatcher};
use keyspell::music::TablePreference;
use keyspell::notation::{chromatic_names, Language};
use keyspell::{KeyRecord, LayoutRequest, ScaleLibrary};
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("keyspell - Keyboard note naming");
    println!();
    println!("Usage: keyspell [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --list-scales                     List available scales");
    println!("  --tables                          Print the chromatic name tables");
    println!("  --layout <ROOT> <SCALE> [AMBITUS] Print the keys of a scale (default 13 keys)");
    println!("      --notation <ID>               Add a notation to --layout (repeatable)");
    println!("  --config <FILE>                   Print the layout described by a config file");
    println!("  --watch <FILE>                    Like --config, reprinting on every change");
    println!("  --help                            Show this help message");
}

fn print_scales() {
    for name in ScaleLibrary::new().available_scales() {
        println!("{}", name);
    }
}

fn print_tables() {
    for language in Language::ALL {
        for preference in [
            TablePreference::Sharp,
            TablePreference::Flat,
            TablePreference::DoubleFlat,
        ] {
            let names = chromatic_names(language, preference);
            println!(
                "{:<8} {:<12} {}",
                format!("{:?}", language),
                preference.to_string(),
                names.join(" ")
            );
        }
    }
}

fn print_keys(keys: &[KeyRecord]) {
    for key in keys {
        let marker = if key.is_in_scale { "*" } else { " " };
        let names: Vec<String> = key
            .names
            .iter()
            .map(|n| format!("{}={}", n.notation, n.label))
            .collect();
        println!(
            "{} {:>3} {:<6} {:<5} {}",
            marker,
            key.index,
            key.sample_key(),
            key.piano_key_color.to_string(),
            names.join("  ")
        );
    }
}

fn print_layout(args: &[String]) -> Result<()> {
    if args.len() < 2 {
        return Err(anyhow!("--layout requires a root note and a scale name"));
    }
    let root = &args[0];
    let scale = &args[1];
    let mut ambitus = 13u32;
    let mut notations: Vec<String> = Vec::new();

    let mut rest = args[2..].iter();
    while let Some(arg) = rest.next() {
        if arg == "--notation" {
            let id = rest
                .next()
                .ok_or_else(|| anyhow!("--notation requires a notation id"))?;
            notations.push(id.clone());
        } else {
            ambitus = arg
                .parse()
                .map_err(|_| anyhow!("Invalid ambitus: {}", arg))?;
        }
    }
    if notations.is_empty() {
        notations.push("English".to_string());
    }

    let recipe = ScaleLibrary::new()
        .get(scale)
        .ok_or_else(|| anyhow!("Unknown scale '{}' (try --list-scales)", scale))?;
    let mut request = LayoutRequest::new(recipe, root.as_str(), ambitus);
    request.notation_list = notations;

    let keys = request.build()?;
    print_keys(&keys);
    Ok(())
}

fn print_config(path: &Path) -> Result<()> {
    let config = validate_config(path)?;
    let keys = config.to_request()?.build()?;
    let yaml = serde_yaml::to_string(&keys).context("Failed to serialize layout")?;
    print!("{}", yaml);
    Ok(())
}

fn watch_config(path: &Path) -> Result<()> {
    print_config(path)?;
    let watcher = ConfigWatcher::new(path, None)?;
    println!("# watching {:?} (press Ctrl+C to stop)", watcher.watched_path());

    while let Some(event) = watcher.recv() {
        match event {
            ConfigEvent::Reloaded(config) => match config.to_request() {
                Ok(request) => match request.build() {
                    Ok(keys) => print_keys(&keys),
                    Err(e) => tracing::warn!("layout failed: {}", e),
                },
                Err(e) => tracing::warn!("config rejected: {:#}", e),
            },
            ConfigEvent::Error(message) => tracing::warn!("{}", message),
            ConfigEvent::FileCreated(path) | ConfigEvent::FileDeleted(path) => {
                tracing::info!(?path, "config directory changed");
            }
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!("keyspell - Keyboard note naming");
        println!("Run with --help for usage information");
        return Ok(());
    }

    match args[1].as_str() {
        "--list-scales" => {
            print_scales();
        }
        "--tables" => {
            print_tables();
        }
        "--layout" => {
            print_layout(&args[2..])?;
        }
        "--config" | "--watch" => {
            if args.len() < 3 {
                eprintln!("Error: {} requires a config file", args[1]);
                std::process::exit(1);
            }
            let path = Path::new(&args[2]);
            if args[1] == "--watch" {
                watch_config(path)?;
            } else {
                print_config(path)?;
            }
        }
        "--help" | "-h" => {
            print_usage();
        }
        _ => {
            eprintln!("Unknown option: {}", args[1]);
            print_usage();
            std::process::exit(1);
        }
    }

    Ok(())
}
