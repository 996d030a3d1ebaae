use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mosaic_core::Rgb;
use tilemosaic::assets::{AssetCategory, AssetLoader};
use tilemosaic::models::{load_palette, AppConfig};
use tilemosaic::services::MosaicService;

#[derive(Parser)]
#[command(name = "tilemosaic")]
#[command(about = "Turn images into round tile mosaic plans")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Reduce a PNG image to a grid of tile colors
    Pixelate {
        /// Input PNG file
        #[arg(short, long)]
        input: PathBuf,

        /// Tile edge length in pixels (default from config)
        #[arg(short, long)]
        diameter: Option<u32>,

        /// Resize bound: maximum width (default from config)
        #[arg(long)]
        max_width: Option<u32>,

        /// Resize bound: maximum height (default from config)
        #[arg(long)]
        max_height: Option<u32>,

        /// Snap tile colors to this palette file (YAML or JSON)
        #[arg(short, long)]
        palette: Option<PathBuf>,

        /// Snap tile colors to the configured catalog
        #[arg(long)]
        catalog: bool,

        /// Keep the image at its original size
        #[arg(long)]
        no_resize: bool,

        /// Report format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,

        /// Write the report to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Find the catalog color closest to a hex color
    Match {
        /// Query color, e.g. "#3a7bd5"
        hex: String,

        /// Palette file to search (default: configured catalog)
        #[arg(short, long)]
        palette: Option<PathBuf>,
    },
    /// List the catalog colors
    Palette {
        /// Palette file to list (default: configured catalog)
        #[arg(short, long)]
        palette: Option<PathBuf>,
    },
    /// Extract the embedded config and palettes for customization
    Init {
        /// Overwrite existing files
        #[arg(long, short)]
        force: bool,

        /// List embedded assets without extracting
        #[arg(long)]
        list: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Yaml,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so reports can be piped
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tilemosaic=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    match cli.command {
        Some(Commands::Pixelate {
            input,
            diameter,
            max_width,
            max_height,
            palette,
            catalog,
            no_resize,
            format,
            output,
        }) => run_pixelate_command(PixelateArgs {
            input,
            diameter,
            max_width,
            max_height,
            palette,
            catalog,
            no_resize,
            format,
            output,
        }),
        Some(Commands::Match { hex, palette }) => run_match_command(&hex, palette),
        Some(Commands::Palette { palette }) => run_palette_command(palette),
        Some(Commands::Init { force, list }) => run_init_command(force, list),
        None => {
            run_status_command();
            Ok(())
        }
    }
}

struct PixelateArgs {
    input: PathBuf,
    diameter: Option<u32>,
    max_width: Option<u32>,
    max_height: Option<u32>,
    palette: Option<PathBuf>,
    catalog: bool,
    no_resize: bool,
    format: OutputFormat,
    output: Option<PathBuf>,
}

/// Load config and pick the palette file
///
/// Palette precedence: command line flag, `PALETTE_FILE`, config file entry,
/// embedded catalog.
fn load_settings(palette_flag: Option<PathBuf>) -> (AssetLoader, AppConfig) {
    let mut loader = AssetLoader::from_env();
    let config = AppConfig::load_from_assets(&loader);

    if loader.palette_file().is_none() {
        let configured = config.palette_path(&loader.config_dir());
        loader = loader.with_palette_file(configured);
    }

    (loader.with_palette_file(palette_flag), config)
}

fn run_pixelate_command(args: PixelateArgs) -> anyhow::Result<()> {
    let snap = args.catalog || args.palette.is_some();
    let (loader, config) = load_settings(args.palette);

    let bounds = if args.no_resize {
        None
    } else {
        Some((
            args.max_width.unwrap_or(config.bounds.max_width),
            args.max_height.unwrap_or(config.bounds.max_height),
        ))
    };

    let mut service = MosaicService::new(&config).with_bounds(bounds);
    if let Some(diameter) = args.diameter {
        service = service.with_diameter(diameter);
    }
    if snap {
        let palette = load_palette(&loader).context("Failed to load palette")?;
        tracing::info!(source = %loader.palette_source(), colors = palette.len(), "Using palette");
        service = service.with_palette(palette);
    }

    let report = service
        .render_file(&args.input)
        .with_context(|| format!("Failed to pixelate {}", args.input.display()))?;

    let rendered = match args.format {
        OutputFormat::Json => report.to_json()?,
        OutputFormat::Yaml => report.to_yaml()?,
    };

    match args.output {
        Some(path) => {
            std::fs::write(&path, rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!(
                path = %path.display(),
                tiles = report.tiles.len(),
                "Wrote mosaic report"
            );
        }
        None => println!("{rendered}"),
    }

    Ok(())
}

fn run_match_command(hex: &str, palette_flag: Option<PathBuf>) -> anyhow::Result<()> {
    let (loader, _) = load_settings(palette_flag);
    let palette = load_palette(&loader).context("Failed to load palette")?;

    let query: Rgb = hex
        .parse()
        .with_context(|| format!("Invalid color {hex:?}"))?;

    let Some(best) = palette.closest(query) else {
        anyhow::bail!("No match: palette {} has no colors", loader.palette_source());
    };

    println!(
        "{query} -> {} {} (distance {:.2})",
        best.entry.hex,
        best.entry.name.as_deref().unwrap_or("(unnamed)"),
        best.distance
    );
    Ok(())
}

fn run_palette_command(palette_flag: Option<PathBuf>) -> anyhow::Result<()> {
    let (loader, _) = load_settings(palette_flag);
    let palette = load_palette(&loader).context("Failed to load palette")?;

    println!("Palette: {} ({} colors)\n", loader.palette_source(), palette.len());
    for (i, entry) in palette.entries().iter().enumerate() {
        println!(
            "  {i:>3}  {}  {}",
            entry.hex,
            entry.name.as_deref().unwrap_or("")
        );
    }
    Ok(())
}

fn run_init_command(force: bool, list: bool) -> anyhow::Result<()> {
    if list {
        println!("Embedded assets:\n");
        println!("Config:");
        for f in AssetLoader::list_embedded(AssetCategory::Config) {
            println!("  {f}");
        }
        println!("\nPalettes:");
        for f in AssetLoader::list_embedded(AssetCategory::Palettes) {
            println!("  {f}");
        }
        return Ok(());
    }

    let loader = AssetLoader::from_env();
    let report = loader.init(&[AssetCategory::Config, AssetCategory::Palettes], force)?;

    if !report.written.is_empty() {
        println!("Extracted {} files:", report.written.len());
        for f in &report.written {
            println!("  + {f}");
        }
    }

    if !report.skipped.is_empty() {
        println!("\nSkipped {} existing files (use --force to overwrite):", report.skipped.len());
        for f in &report.skipped {
            println!("  - {f}");
        }
    }

    Ok(())
}

fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let config_file = std::env::var("CONFIG_FILE").ok();
    let palette_file = std::env::var("PALETTE_FILE").ok();

    println!("Tilemosaic v{VERSION}");
    println!("Round tile mosaics from images\n");

    println!("Environment Variables:");
    println!(
        "  CONFIG_FILE  = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );
    println!(
        "  PALETTE_FILE = {}",
        palette_file.as_deref().unwrap_or("(not set)")
    );

    let (loader, config) = load_settings(None);

    println!("\nAsset Sources:");
    println!("  Config:  {}", loader.config_source());
    match load_palette(&loader) {
        Ok(palette) => println!(
            "  Palette: {} ({} colors)",
            loader.palette_source(),
            palette.len()
        ),
        Err(e) => println!("  Palette: {} (error: {e})", loader.palette_source()),
    }

    println!("\nSettings:");
    println!(
        "  Tile:    diameter {}, height {}",
        config.tile.diameter, config.tile.height
    );
    println!(
        "  Bounds:  {}x{}",
        config.bounds.max_width, config.bounds.max_height
    );

    println!("\nRun 'tilemosaic --help' for commands.");
}
