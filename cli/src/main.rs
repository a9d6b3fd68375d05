use base64::{engine::general_purpose, Engine};
use clap::{Parser, Subcommand};
use dumpster_core::core::{
    parse_info2_file, parse_recycle_bin_file, parse_toml_data, parse_toml_file,
};
use log::{info, LevelFilter};
use serde::Serialize;
use simplelog::{Config, SimpleLogger};
use std::process::exit;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Full path to TOML collector
    #[clap(short, long, value_parser)]
    toml: Option<String>,

    /// Base64 encoded TOML file
    #[clap(short, long, value_parser)]
    data: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Parse a single `$I` metadata file
    Metadata {
        /// Path to the `$I` file
        path: String,
    },
    /// Parse a legacy `INFO2` index
    Info2 {
        /// Path to the `INFO2` file
        path: String,
    },
}

fn main() {
    let args = Args::parse();

    if let Some(command) = args.command {
        let _ = SimpleLogger::init(LevelFilter::Warn, Config::default());
        let status = match command {
            Commands::Metadata { path } => match parse_recycle_bin_file(&path) {
                Ok(result) => print_json(&result),
                Err(err) => {
                    eprintln!("[dumpster] Failed to parse {path}: {err}");
                    false
                }
            },
            Commands::Info2 { path } => match parse_info2_file(&path) {
                Ok(result) => print_json(&result),
                Err(err) => {
                    eprintln!("[dumpster] Failed to parse {path}: {err}");
                    false
                }
            },
        };
        if !status {
            exit(1);
        }
        return;
    }

    println!("[dumpster] Starting dumpster collection!");
    if let Some(toml) = args.toml {
        if !toml.is_empty() {
            match parse_toml_file(&toml) {
                Ok(_) => info!("[dumpster] Collection success"),
                Err(err) => {
                    println!("[dumpster] Failed to collect artifacts: {err:?}");
                    exit(1);
                }
            }
        }
    } else if let Some(data) = args.data {
        if !data.is_empty() {
            let toml_data = match general_purpose::STANDARD.decode(&data) {
                Ok(results) => results,
                Err(err) => {
                    println!(
                        "[dumpster] Failed to base64 decode TOML collector {data}, error: {err:?}",
                    );
                    exit(1);
                }
            };
            match parse_toml_data(&toml_data) {
                Ok(_) => info!("[dumpster] Collection success"),
                Err(err) => {
                    println!("[dumpster] Failed to collect artifacts: {err:?}");
                    exit(1);
                }
            }
        }
    } else {
        println!("[dumpster] No TOML file or data provided!");
        return;
    }
    println!("[dumpster] Finished dumpster collection!");
}

/// Print parsed entries as pretty JSON to stdout
fn print_json<T: Serialize>(data: &T) -> bool {
    match serde_json::to_string_pretty(data) {
        Ok(value) => {
            println!("{value}");
            true
        }
        Err(err) => {
            eprintln!("[dumpster] Failed to serialize results: {err:?}");
            false
        }
    }
}
