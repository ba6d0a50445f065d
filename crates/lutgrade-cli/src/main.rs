//! lutgrade - generate .cube color LUTs and preview them on images.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "lutgrade")]
#[command(author, version, about = "Generate .cube color LUTs and preview them on images")]
#[command(long_about = "
Generates 3D color lookup tables from grading parameters or an explicit
3x4 color matrix, writes them as .cube files, and renders CPU previews.

Examples:
  lutgrade generate -o warm.cube --brightness 0.05 --hue -10
  lutgrade generate --size 16 --contrast 1.4            # .cube to stdout
  lutgrade generate -o bw.cube --saturation 0
  lutgrade generate -o swap.cube --matrix 0,0,1,0,0,1,0,0,1,0,0,0
  lutgrade generate -o look.cube --preset grade.yaml
  lutgrade preview -i photo.png -o graded.png -l warm.cube --intensity 0.8
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a .cube LUT from grading parameters or a color matrix
    #[command(visible_alias = "gen")]
    Generate(GenerateArgs),

    /// Apply a .cube LUT to an image (CPU preview)
    #[command(visible_alias = "p")]
    Preview(PreviewArgs),
}

#[derive(Args)]
struct GenerateArgs {
    /// Output .cube path (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// LUT title written to the header
    #[arg(short, long, default_value = "")]
    title: String,

    /// Lattice size per axis
    #[arg(short, long, default_value = "32")]
    size: usize,

    /// Additive brightness (0 = no change)
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    brightness: f32,

    /// Contrast around mid-gray (1 = no change)
    #[arg(long, default_value = "1", allow_hyphen_values = true)]
    contrast: f32,

    /// Per-channel gamma (1 = no change)
    #[arg(long, default_value = "1", allow_hyphen_values = true)]
    gamma: f32,

    /// Hue rotation in degrees
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    hue: f32,

    /// Saturation factor (1 = no change, 0 = grayscale)
    #[arg(long, default_value = "1", allow_hyphen_values = true)]
    saturation: f32,

    /// YAML file with grading settings (overrides the grading flags)
    #[arg(long, conflicts_with = "matrix")]
    preset: Option<PathBuf>,

    /// 12 comma-separated values of a row-major 3x4 color matrix
    /// (overrides the grading flags)
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    matrix: Option<Vec<f32>>,
}

#[derive(Args)]
struct PreviewArgs {
    /// Input image
    #[arg(short, long)]
    input: PathBuf,

    /// Output image
    #[arg(short, long)]
    output: PathBuf,

    /// .cube LUT file (empty file renders the source unmodified)
    #[arg(short, long)]
    lut: PathBuf,

    /// Blend factor between source and graded image
    #[arg(long, default_value = "1")]
    intensity: f32,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Generate(args) => commands::generate::run(args, cli.verbose),
        Commands::Preview(args) => commands::preview::run(args, cli.verbose),
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let fallback = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
