use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use cleanco::scanner::{read_names, scan_name_files};
use cleanco::{BatchReport, CleanedName, Cleaner, Config, CountryScope, MatchFlags, TermTable};
use tracing::warn;
use tracing_subscriber::EnvFilter;

const OUTPUT_DIR: &str = "output";

#[derive(Parser)]
#[command(
    name = "cleanco",
    about = "Strip legal-form terms from company names"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the base name of each NAME
    Clean {
        #[arg(required = true)]
        names: Vec<String>,
        #[command(flatten)]
        options: CleanOptions,
        /// Print input/output pairs as JSON
        #[arg(long)]
        json: bool,
    },
    /// Clean every .txt name list under DIR → OUTPUT/*.json
    Batch {
        dir: PathBuf,
        #[command(flatten)]
        options: CleanOptions,
        #[arg(long, default_value = OUTPUT_DIR)]
        output: PathBuf,
    },
    /// Print the prepared term table, longest terms first
    Terms {
        /// ISO code or country name, e.g. "FI" or "Finland"
        #[arg(long)]
        country: Option<String>,
    },
}

#[derive(Args)]
struct CleanOptions {
    /// ISO code or country name, e.g. "FI" or "Finland"
    #[arg(long)]
    country: Option<String>,
    /// Keep leading legal forms
    #[arg(long)]
    no_prefix: bool,
    /// Keep trailing legal forms
    #[arg(long)]
    no_suffix: bool,
    /// Also strip legal forms inside the name
    #[arg(long)]
    middle: bool,
    /// JSON config file; the options above override it
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Clean {
            names,
            options,
            json,
        } => run_clean(&names, &options, json),
        Command::Batch {
            dir,
            options,
            output,
        } => run_batch(&dir, &options, &output),
        Command::Terms { country } => {
            run_terms(country.as_deref());
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// The cleaner, flags and country for a run: config file first, then
/// command-line overrides.
fn prepare(options: &CleanOptions) -> cleanco::Result<(Cleaner, MatchFlags, Option<String>)> {
    let mut config = match &options.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if options.country.is_some() {
        config.country = options.country.clone();
    }
    if options.no_prefix {
        config.flags.prefix = false;
    }
    if options.no_suffix {
        config.flags.suffix = false;
    }
    if options.middle {
        config.flags.middle = true;
    }

    warn_if_unknown(config.country.as_deref());
    Ok((config.cleaner()?, config.flags, config.country))
}

fn warn_if_unknown(country: Option<&str>) {
    if let Some(c) = country {
        if matches!(CountryScope::resolve(Some(c)), CountryScope::Unknown) {
            warn!("unknown country {c:?}: matching against the terms of every country");
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
//  OUTPUT FILE HELPERS
// ═══════════════════════════════════════════════════════════════════════

fn output_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(name)
}

fn write_json<T: serde::Serialize>(dir: &Path, name: &str, data: &T) -> cleanco::Result<()> {
    let path = output_path(dir, name);
    let json = serde_json::to_string_pretty(data)?;
    std::fs::write(&path, &json)?;
    eprintln!("  {} ({} bytes)", path.display(), json.len());
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════
//  CLEAN MODE: names from the command line → stdout
// ═══════════════════════════════════════════════════════════════════════

fn run_clean(names: &[String], options: &CleanOptions, json: bool) -> cleanco::Result<()> {
    let (cleaner, flags, _) = prepare(options)?;

    let cleaned: Vec<CleanedName> = names
        .iter()
        .map(|name| CleanedName {
            input: name.clone(),
            output: cleaner.basename(name, flags),
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&cleaned)?);
    } else {
        for c in &cleaned {
            println!("{}", c.output);
        }
    }
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════
//  BATCH MODE: name lists on disk → one JSON report per list
// ═══════════════════════════════════════════════════════════════════════

fn run_batch(dir: &Path, options: &CleanOptions, output: &Path) -> cleanco::Result<()> {
    let (cleaner, flags, country) = prepare(options)?;

    eprintln!("Scanning {} ...", dir.display());
    let files = scan_name_files(dir);
    if files.is_empty() {
        warn!("no .txt name lists under {}", dir.display());
        return Ok(());
    }
    eprintln!("Found {} name lists", files.len());

    std::fs::create_dir_all(output)?;

    let mut total = 0;
    let mut changed = 0;
    for file in &files {
        let names = read_names(&file.path)?
            .into_iter()
            .map(|input| {
                let output = cleaner.basename(&input, flags);
                CleanedName { input, output }
            })
            .collect();
        let report = BatchReport::new(
            file.path.display().to_string(),
            country.clone(),
            flags,
            names,
        );
        total += report.total;
        changed += report.changed;
        write_json(output, &file.report_name, &report)?;
    }

    eprintln!(
        "\nCleaned {total} names ({changed} changed) from {} lists",
        files.len()
    );
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════
//  TERMS MODE: print the prepared term table
// ═══════════════════════════════════════════════════════════════════════

fn run_terms(country: Option<&str>) {
    warn_if_unknown(country);
    let table = TermTable::for_country(country);
    for term in &table {
        println!("{}", term.parts().join(" "));
    }
    eprintln!("\nTotal: {} terms", table.len());
}
