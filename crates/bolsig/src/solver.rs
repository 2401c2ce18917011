//! Running the Boltzmann solver

// standard library
use std::io::ErrorKind;
use std::path::PathBuf;
use std::process::Command;

// crate modules
use crate::error::{Error, Result};
use crate::input::{render_input, Conditions};
use crate::parsers::parse_mobility;

// external crates
use log::{debug, trace};

/// Anything that can provide the reduced electron mobility for a set of conditions
///
/// The [BolsigRunner] drives the real solver executable, but tests and other
/// tools can supply their own implementation.
pub trait MobilitySolver {
    /// Reduced mobility `μN` (1/m/V/s)
    fn mobility(&self, conditions: &Conditions) -> Result<f64>;
}

/// File names and locations used to drive the solver
#[derive(Debug, Clone, PartialEq)]
pub struct BolsigConfig {
    /// Solver executable, or a launcher such as `wine`
    pub executable: PathBuf,
    /// Arguments passed before the input file name
    pub args: Vec<String>,
    /// Reference input with placeholders
    pub template: PathBuf,
    /// Directory the solver runs in
    pub workdir: PathBuf,
    /// Name of the generated input file
    pub input_name: String,
    /// Name of the output file written by the solver
    pub output_name: String,
}

impl Default for BolsigConfig {
    fn default() -> Self {
        Self {
            executable: PathBuf::from("bolsigminus.exe"),
            args: Vec::new(),
            template: PathBuf::from("input-reference.dat"),
            workdir: PathBuf::from("."),
            input_name: "bolsig-pyFC.dat".to_string(),
            output_name: "bolsigcalc.dat".to_string(),
        }
    }
}

/// Runs the solver executable once per set of conditions
///
/// Every call renders the template, writes it to the input file in the working
/// directory, removes any old output file, runs the solver with the input file
/// name as its last argument, then reads the mobility from the new output file.
///
/// ```rust, no_run
/// # use nphys_bolsig::{BolsigConfig, BolsigRunner, Conditions, Mixture, MobilitySolver};
/// let runner = BolsigRunner::new(BolsigConfig::default()).unwrap();
///
/// let mobility = runner.mobility(&Conditions {
///     gas_temperature: 293.0,
///     reduced_field: 1.0,
///     mixture: Mixture { argon: 0.99, nitrogen: 0.01 },
/// });
/// ```
#[derive(Debug, Clone)]
pub struct BolsigRunner {
    config: BolsigConfig,
    template: String,
}

impl BolsigRunner {
    /// Read the template and prepare a runner
    pub fn new(config: BolsigConfig) -> Result<Self> {
        let template = std::fs::read_to_string(&config.template)?;
        Ok(Self { config, template })
    }

    /// Configuration in use
    pub fn config(&self) -> &BolsigConfig {
        &self.config
    }

    fn input_path(&self) -> PathBuf {
        self.config.workdir.join(&self.config.input_name)
    }

    fn output_path(&self) -> PathBuf {
        self.config.workdir.join(&self.config.output_name)
    }

    /// Remove output left by a previous run
    fn clear_output(&self) -> Result<()> {
        match std::fs::remove_file(self.output_path()) {
            Err(e) if e.kind() != ErrorKind::NotFound => Err(e.into()),
            _ => Ok(()),
        }
    }

    fn run(&self) -> Result<()> {
        let output = Command::new(&self.config.executable)
            .args(&self.config.args)
            .arg(&self.config.input_name)
            .current_dir(&self.config.workdir)
            .output()?;

        trace!("{}", String::from_utf8_lossy(&output.stdout));

        if !output.status.success() {
            return Err(Error::SolverFailed {
                status: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(())
    }
}

impl MobilitySolver for BolsigRunner {
    fn mobility(&self, conditions: &Conditions) -> Result<f64> {
        let input = render_input(&self.template, conditions);
        std::fs::write(self.input_path(), input)?;

        debug!(
            "Running solver at E/N = {} Td, {}",
            conditions.reduced_field, conditions.mixture
        );
        self.clear_output()?;
        self.run()?;

        let path = self.output_path();
        let output = match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(Error::NoSolverOutput { path })
            }
            Err(e) => return Err(e.into()),
        };
        parse_mobility(&output)
    }
}
