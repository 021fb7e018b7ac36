use anyhow::{Context, Result, bail};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Instant;

use distrikml::config::{self, FileConfig};
use distrikml::discover::find_kml_files;
use distrikml::domain::PolyStyle;
use distrikml::pipeline::{SlugTracker, normalize_kml_file};

/// Normalize district boundary KML files into styled web-ready KML
///
/// Reads every .kml file under the input directory, extracts polygon
/// boundaries (namespace-agnostic), resolves a display name per file, and
/// writes one styled KML document per input named after the feature's slug.
///
/// Examples:
///   # Use the default data/distritos -> web/kml layout next to the binary
///   distrikml
///
///   # Explicit directories
///   distrikml -i boundaries/ -o site/kml/
///
///   # Use a config file
///   distrikml --config my-settings.toml
#[derive(Parser, Debug)]
#[command(name = "distrikml")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to config file (optional, auto-searches distrikml.toml if not provided)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Input directory with district KML files (defaults to data/distritos next to the executable)
    #[arg(short = 'i', long)]
    input: Option<PathBuf>,

    /// Output directory for normalized KML files (defaults to web/kml next to the executable)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let total_start = Instant::now();

    let file_config = if let Some(ref config_path) = args.config {
        if config_path.exists() {
            let contents = std::fs::read_to_string(config_path)
                .context(format!("Failed to read config file: {:?}", config_path))?;
            Some(toml::from_str(&contents).context("Failed to parse config file")?)
        } else {
            bail!("Config file not found: {:?}", config_path);
        }
    } else {
        FileConfig::load()
    };

    let resolved = config::resolve(
        args.input.clone(),
        args.output.clone(),
        args.verbose,
        file_config.as_ref(),
    );
    let input_dir = resolved.input_dir;
    let output_dir = resolved.output_dir;
    let verbose = resolved.verbose;

    println!("distrikml - District KML Normalizer");
    println!("===================================");
    println!();

    if verbose {
        println!("Configuration:");
        println!("  Input: {}", input_dir.display());
        println!("  Output: {}", output_dir.display());
        println!();
    }

    let spinner = create_spinner("Scanning for KML files...");
    let files = match find_kml_files(&input_dir) {
        Ok(files) => files,
        Err(e) => {
            spinner.finish_and_clear();
            return Err(e.into());
        }
    };
    spinner.finish_with_message(format!(
        "Found {} KML file(s) in {}",
        files.len(),
        input_dir.display()
    ));

    std::fs::create_dir_all(&output_dir).context(format!(
        "Failed to create output directory: {:?}",
        output_dir
    ))?;

    let style = PolyStyle::district();
    let mut written = 0usize;
    let mut slugs = SlugTracker::new();

    for path in &files {
        match normalize_kml_file(path, &output_dir, &style) {
            Ok(normalized) => {
                if let Some(previous) = slugs.record(&normalized) {
                    eprintln!(
                        "Warning: {} overwrote the output of {} (both slugify to '{}')",
                        normalized.source_path.display(),
                        previous.display(),
                        normalized.slug
                    );
                }
                println!("Wrote {}", normalized.output_path.display());
                written += 1;
            }
            Err(e) => {
                eprintln!("Warning: skipping {}: {}", path.display(), e);
            }
        }
    }

    println!();
    println!(
        "Done. {} file(s) normalized into {} [{:.1}s]",
        written,
        output_dir.display(),
        total_start.elapsed().as_secs_f32()
    );

    Ok(())
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}
