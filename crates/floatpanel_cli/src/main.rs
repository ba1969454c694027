//! Floatpanel CLI
//!
//! Preview, create and validate surface configurations.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use floatpanel_core::Size;
use floatpanel_surface::{SurfaceConfig, SurfaceView};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod preview;

const DEFAULT_CONFIG: &str = "floatpanel.toml";

#[derive(Parser)]
#[command(name = "floatpanel")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Floating panel surface tools", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Lay out a surface and print its frames, silhouette and paint commands
    Preview {
        /// Surface config file (defaults are used when omitted)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Surface width in points
        #[arg(long, default_value = "375")]
        width: f32,

        /// Surface height in points
        #[arg(long, default_value = "600")]
        height: f32,

        /// Override the config's corner radius
        #[arg(short = 'r', long)]
        corner_radius: Option<f32>,

        /// Also list every recorded draw command
        #[arg(long)]
        commands: bool,
    },

    /// Write a config file with the default appearance
    Init {
        /// Output path
        #[arg(default_value = DEFAULT_CONFIG)]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Validate a config file
    Check {
        /// Config file
        #[arg(default_value = DEFAULT_CONFIG)]
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    match cli.command {
        Commands::Preview {
            config,
            width,
            height,
            corner_radius,
            commands,
        } => cmd_preview(
            config.as_deref(),
            Size::new(width, height),
            corner_radius,
            commands,
        ),

        Commands::Init { path, force } => cmd_init(&path, force),

        Commands::Check { path } => cmd_check(&path),
    }
}

fn load_config(path: &Path) -> Result<SurfaceConfig> {
    SurfaceConfig::load(path).with_context(|| format!("Failed to load {}", path.display()))
}

fn cmd_preview(
    config: Option<&Path>,
    size: Size,
    corner_radius: Option<f32>,
    show_commands: bool,
) -> Result<()> {
    if !(size.width.is_finite() && size.height.is_finite()) || size.width < 0.0 || size.height < 0.0 {
        anyhow::bail!("Invalid surface size {}x{}", size.width, size.height);
    }

    let mut config = match config {
        Some(path) => load_config(path)?,
        None => SurfaceConfig::default(),
    };
    if let Some(radius) = corner_radius {
        config.corner_radius = radius;
    }

    let mut surface = SurfaceView::from_config(&config)?;
    surface.layout(size);

    print!("{}", preview::render(&mut surface, show_commands));
    Ok(())
}

fn cmd_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    let text = SurfaceConfig::default().to_toml_string()?;
    fs::write(path, text).with_context(|| format!("Failed to write {}", path.display()))?;

    info!("Wrote default surface config to {}", path.display());
    Ok(())
}

fn cmd_check(path: &Path) -> Result<()> {
    let config = load_config(path)?;

    info!(
        "{} is valid (corner radius {}, bottom overflow {}, badge {})",
        path.display(),
        config.corner_radius,
        config.bottom_overflow,
        if config.estimate_badge { "on" } else { "off" }
    );
    if !config.capabilities.non_rect_clip {
        info!("Path clipping disabled: content must clip itself to the rounded corners");
    }

    Ok(())
}
