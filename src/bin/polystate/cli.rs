use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "polystate",
    about = "State spaces and transition matrices for the stochastic lattice polymer model",
    version,
    author,
    before_help = crate::display::banner_for_help(),
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Enumerate all chain conformations for a link count
    #[command(visible_alias = "s")]
    States(StatesArgs),

    /// Build the generator matrix for a link count and rates
    #[command(visible_alias = "m")]
    Matrix(MatrixArgs),
}

#[derive(Args)]
pub struct StatesArgs {
    /// Number of links in the chain
    #[arg(value_name = "LINK_COUNT")]
    pub link_count: u32,

    /// Output file for the state listing (stdout if omitted)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Suppress progress output (for scripting)
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Args)]
pub struct MatrixArgs {
    /// Number of links in the chain
    #[arg(value_name = "LINK_COUNT")]
    pub link_count: u32,

    /// Hopping rate for interior moves (reptation, hernias, barrier crossing)
    #[arg(value_name = "H")]
    pub h: f64,

    /// End-reaction rate for the chain-end moves
    #[arg(value_name = "C")]
    pub c: f64,

    /// Export the matrix to a file instead of printing a preview
    #[arg(short = 'o', long = "out", value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// Export format (inferred from the extension if not specified)
    #[arg(long = "outfmt", value_name = "FORMAT")]
    pub output_format: Option<MatrixOutputFormat>,

    /// Suppress progress output (for scripting)
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum MatrixOutputFormat {
    /// Grayscale PGM image of rate magnitudes
    Pgm,
    /// Sparse matrix JSON with exact rate round-trip
    Json,
}

pub fn parse() -> Cli {
    Cli::parse()
}
