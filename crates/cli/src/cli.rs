//! Command line arguments

// standard library
use std::path::PathBuf;

// external crates
use clap::{Args, Parser, Subcommand};

/// Small utilities for nuclear and plasma physics analysis
#[derive(Parser, Debug)]
#[command(version, about, propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose logging (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Spectrum-averaged cross sections for a two-column table
    Average(AverageArgs),
    /// Fast averages and fast/thermal ratios for the reference actinides
    Survey(SurveyArgs),
    /// Compare solver drift velocities with the Haddad measurements
    Drift(DriftArgs),
    /// Atom fractions of a NaCl-UCl3 fuel salt
    Salt(SaltArgs),
    /// MCNP plane surface through three points
    Plane(PlaneArgs),
}

#[derive(Args, Debug)]
pub struct AverageArgs {
    /// Energy (eV) and cross section (b) columns
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Spectrum parameters as JSON
    #[arg(long, value_name = "JSON")]
    pub params: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct SurveyArgs {
    /// Read `<isotope>.txt` tables from a directory instead of the web
    #[arg(long, value_name = "DIR")]
    pub offline: Option<PathBuf>,

    /// Seconds between requests to the data service
    #[arg(long, default_value_t = 10.0, value_name = "SECONDS")]
    pub delay: f64,

    /// Spectrum parameters as JSON
    #[arg(long, value_name = "JSON")]
    pub params: Option<PathBuf>,

    /// Write results as tab separated values
    #[arg(short, long, value_name = "TSV")]
    pub output: Option<PathBuf>,

    /// Write results as JSON
    #[arg(long, value_name = "PATH")]
    pub json: Option<PathBuf>,

    /// Keep a copy of every fetched table in a directory
    #[arg(long, value_name = "DIR", conflicts_with = "offline")]
    pub save: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct DriftArgs {
    /// Solver executable or launcher
    #[arg(long, default_value = "bolsigminus.exe", value_name = "PATH")]
    pub exe: PathBuf,

    /// Extra arguments passed before the input file, e.g. for a launcher
    #[arg(long = "arg", value_name = "ARG", allow_hyphen_values = true)]
    pub args: Vec<String>,

    /// Input template with placeholders
    #[arg(long, default_value = "input-reference.dat", value_name = "PATH")]
    pub template: PathBuf,

    /// Directory the solver runs in
    #[arg(long, default_value = ".", value_name = "DIR")]
    pub workdir: PathBuf,

    /// Directory for the comparison files
    #[arg(long, default_value = ".", value_name = "DIR")]
    pub outdir: PathBuf,

    /// Gas temperature (K)
    #[arg(long, default_value_t = nphys_bolsig::GAS_TEMPERATURE, value_name = "K")]
    pub temperature: f64,
}

#[derive(Args, Debug)]
pub struct SaltArgs {
    /// NaCl percentage of the mixture
    pub nacl: f64,

    /// U235 enrichment (w%)
    pub enrichment: f64,
}

#[derive(Args, Debug)]
pub struct PlaneArgs {
    /// First point on the plane
    #[arg(long, num_args = 3, required = true, allow_negative_numbers = true, value_names = ["X", "Y", "Z"])]
    pub p1: Vec<f64>,

    /// Second point on the plane
    #[arg(long, num_args = 3, required = true, allow_negative_numbers = true, value_names = ["X", "Y", "Z"])]
    pub p2: Vec<f64>,

    /// Third point on the plane
    #[arg(long, num_args = 3, required = true, allow_negative_numbers = true, value_names = ["X", "Y", "Z"])]
    pub p3: Vec<f64>,

    /// Point on the preferred side of the surface
    #[arg(long, num_args = 3, allow_negative_numbers = true, value_names = ["X", "Y", "Z"])]
    pub test: Option<Vec<f64>>,

    /// Surface number for the MCNP card
    #[arg(long, default_value_t = 1)]
    pub id: u32,
}
