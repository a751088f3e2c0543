use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};

mod cli;

use pixelframe::batch::{self, Manifest};
use pixelframe::border::{self, Dimensions, Pass, BLOCK_SIZE};
use pixelframe::launcher::{self, LaunchConfig};
use pixelframe::palette_tools;
use pixelframe::style::Style;

fn main() -> Result<()> {
    let args = cli::Args::parse();

    match args.command {
        cli::Command::Generate { width, height, output, ref style, out_dir, verbose } => {
            generate(width, height, output, style, out_dir, verbose)
        }
        cli::Command::Batch { ref manifest, ref style, ref out_dir } => {
            run_batch(manifest, style.as_deref(), out_dir.as_deref())
        }
        cli::Command::PaletteCard { ref style, ref output } => {
            let style = Style::resolve(style)?;
            palette_tools::generate_palette_card(&style, output)
        }
        cli::Command::Dev { no_open, url, dir, command } => {
            let mut config = LaunchConfig {
                working_dir: dir,
                default_url: url,
                open_browser: !no_open,
                ..LaunchConfig::default()
            };
            if !command.is_empty() {
                config.command = command;
            }
            dev(&config)
        }
    }
}

fn generate(
    width: u32,
    height: u32,
    output: Option<String>,
    style: &str,
    out_dir: Option<PathBuf>,
    verbose: bool,
) -> Result<()> {
    println!("Generating {}x{} border...", width, height);

    let style = Style::resolve(style)?;
    let palette = style.palette()?;
    let image = border::generate_border(width, height, &palette)?;

    if verbose {
        let dims = Dimensions::normalize(width, height)?;
        print_layout(&dims, &style.name);
    }

    let out_dir = out_dir.unwrap_or_else(|| PathBuf::from("."));
    fs::create_dir_all(&out_dir)
        .with_context(|| format!("Failed to create output directory: {}", out_dir.display()))?;

    let filename = output.unwrap_or_else(|| border::default_filename(width, height));
    let path = out_dir.join(filename);
    image
        .save(&path)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    let shown = fs::canonicalize(&path).unwrap_or(path);
    println!("Saved to: {}", shown.display());

    Ok(())
}

fn print_layout(dims: &Dimensions, style_name: &str) {
    let layout = dims.layout();
    eprintln!("Style: {}", style_name);
    eprintln!(
        "Canvas: {}x{}px ({}x{} blocks)",
        dims.width(),
        dims.height(),
        layout.block_width,
        layout.block_height
    );
    eprintln!(
        "Outer frame: columns {}..{}, rows {}..{}",
        layout.outer_left, layout.outer_right, layout.top_bar, layout.bottom_bar
    );
    eprintln!(
        "Inner frame: columns {}..{}, rows {}..{}",
        layout.inner_left, layout.inner_right, layout.top_fill, layout.bottom_fill
    );

    let interior = layout.interior();
    match (interior.first(), interior.last()) {
        (Some(first), Some(last)) => {
            let widest = interior.iter().map(|span| span.len()).max().unwrap_or(0);
            eprintln!(
                "Transparent interior: block rows {}..{}, up to {} blocks wide ({}px)",
                first.row,
                last.row,
                widest,
                widest * BLOCK_SIZE as i32
            );
        }
        _ => eprintln!("Transparent interior: none at this size"),
    }

    let passes: Vec<&str> = Pass::ORDER.iter().map(|p| p.name()).collect();
    eprintln!("Passes: {}", passes.join(", "));
}

fn run_batch(manifest_path: &Path, style_override: Option<&str>, out_dir: Option<&Path>) -> Result<()> {
    let manifest = Manifest::load(manifest_path)?;

    let style_name = style_override
        .or(manifest.style.as_deref())
        .unwrap_or("orange");
    let style = Style::resolve(style_name)?;

    let manifest_dir = manifest_path.parent().unwrap_or_else(|| Path::new("."));
    let out_dir = manifest.output_dir(manifest_dir, out_dir);

    eprintln!(
        "Generating {} borders into {} (style: {})",
        manifest.borders.len(),
        out_dir.display(),
        style.name
    );

    let outcomes = batch::run_batch(&manifest.borders, &style.palette()?, &out_dir)?;

    let mut failed = 0;
    eprintln!("\nGenerated files:");
    for outcome in &outcomes {
        match outcome.result {
            Ok(ref path) => eprintln!("  ✓ {}", path.display()),
            Err(ref e) => {
                failed += 1;
                eprintln!("  ✗ {}x{}: {:#}", outcome.spec.width, outcome.spec.height, e);
            }
        }
    }

    if failed > 0 {
        anyhow::bail!("{} of {} borders failed", failed, outcomes.len());
    }

    Ok(())
}

fn dev(config: &LaunchConfig) -> Result<()> {
    println!("Starting development server...");
    println!("{}", "=".repeat(50));

    let runtime = tokio::runtime::Runtime::new()?;
    let outcome = runtime.block_on(launcher::run(config))?;

    if !outcome.interrupted {
        eprintln!("Dev server stopped.");
    }

    Ok(())
}
