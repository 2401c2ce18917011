//! Integration tests for drift velocity comparisons

use nphys_bolsig::{
    compare, compare_all, drift_velocity, haddad_reference, render_input, Conditions, Error,
    Mixture, MobilitySolver, ReferenceSeries, Result, GAS_TEMPERATURE,
};
use rstest::{fixture, rstest};

/// Solver returning the same reduced mobility everywhere
struct ConstantSolver(f64);

impl MobilitySolver for ConstantSolver {
    fn mobility(&self, _: &Conditions) -> Result<f64> {
        Ok(self.0)
    }
}

/// Solver that gives up above a field strength
struct LimitedSolver(f64);

impl MobilitySolver for LimitedSolver {
    fn mobility(&self, conditions: &Conditions) -> Result<f64> {
        if conditions.reduced_field > self.0 {
            Err(Error::MobilityNotFound)
        } else {
            Ok(1.0e24)
        }
    }
}

#[fixture]
fn series() -> ReferenceSeries {
    ReferenceSeries {
        mixture: Mixture {
            argon: 0.99,
            nitrogen: 0.01,
        },
        reduced_field: vec![0.1, 1.0, 5.0],
        drift_velocity: vec![1.5, 3.0, 4.5],
        output_name: "test.out".to_string(),
    }
}

#[rstest]
fn units_are_consistent(series: ReferenceSeries) {
    let points = compare(&ConstantSolver(1.0e24), &series, GAS_TEMPERATURE).unwrap();

    assert_eq!(points.len(), 3);
    for (point, (field, measured)) in points
        .iter()
        .zip(series.reduced_field.iter().zip(&series.drift_velocity))
    {
        assert_eq!(point.reduced_field, *field);
        assert!((point.computed - 1.0e3 * field).abs() < 1e-9);
        assert!((point.reference - measured * 1e3).abs() < 1e-9);
    }
}

#[rstest]
fn solver_failure_stops_comparison(series: ReferenceSeries) {
    let result = compare(&LimitedSolver(2.0), &series, GAS_TEMPERATURE);
    assert!(matches!(result, Err(Error::MobilityNotFound)));
}

#[test]
fn drift_velocity_conversion() {
    assert_eq!(drift_velocity(0.0, 10.0), 0.0);
    assert!((drift_velocity(5.0e23, 4.0) - 2.0e3).abs() < 1e-9);
}

#[test]
fn comparison_files_written_per_series() {
    let dir = tempfile::tempdir().unwrap();
    let reference = haddad_reference();

    let results = compare_all(
        &ConstantSolver(1.0e24),
        &reference,
        GAS_TEMPERATURE,
        dir.path(),
    )
    .unwrap();
    assert_eq!(results.len(), 3);

    for (series, points) in reference.iter().zip(&results) {
        let text = std::fs::read_to_string(dir.path().join(&series.output_name)).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        // no header, one line per field strength
        assert_eq!(lines.len(), points.len());
        let first: Vec<f64> = lines[0]
            .split('\t')
            .map(|v| v.parse().unwrap())
            .collect();
        assert_eq!(first.len(), 3);
        assert_eq!(first[0], series.reduced_field[0]);
    }
}

#[test]
fn reference_template_has_every_placeholder() {
    let template = include_str!("../data/input-template.dat");
    let conditions = Conditions {
        gas_temperature: 293.0,
        reduced_field: 2.5,
        mixture: Mixture {
            argon: 0.95,
            nitrogen: 0.05,
        },
    };

    let input = render_input(template, &conditions);
    for placeholder in ["ReducedElectricField", "GasTemp", "ArRat", "NRat"] {
        assert!(!input.contains(placeholder), "{placeholder} left in input");
    }
    assert!(input.contains("2.5  / Electric field"));
    assert!(input.contains("0.95 0.05 / Gas composition"));
}

#[cfg(unix)]
mod runner {
    use super::*;
    use nphys_bolsig::{BolsigConfig, BolsigRunner};
    use std::path::Path;

    /// Runner using `sh <script>` in place of the real solver
    fn runner(dir: &Path, script: &str) -> BolsigRunner {
        let script_path = dir.join("solver.sh");
        std::fs::write(&script_path, script).unwrap();

        let template_path = dir.join("template.dat");
        std::fs::write(&template_path, "ReducedElectricField GasTemp ArRat NRat\n").unwrap();

        BolsigRunner::new(BolsigConfig {
            executable: "sh".into(),
            args: vec![script_path.display().to_string()],
            template: template_path,
            workdir: dir.to_path_buf(),
            ..Default::default()
        })
        .unwrap()
    }

    fn conditions() -> Conditions {
        Conditions {
            gas_temperature: 293.0,
            reduced_field: 0.5,
            mixture: Mixture {
                argon: 0.99,
                nitrogen: 0.01,
            },
        }
    }

    #[test]
    fn mobility_from_solver_output() {
        let dir = tempfile::tempdir().unwrap();
        let runner = runner(
            dir.path(),
            "read field temp ar n < \"$1\"\n\
             printf 'E/N (Td) Mobility *N (1/m/V/s)\\n %s 1.5E+24\\n' \"$field\" > bolsigcalc.dat\n",
        );

        let mobility = runner.mobility(&conditions()).unwrap();
        assert_eq!(mobility, 1.5e24);

        let input = std::fs::read_to_string(dir.path().join("bolsig-pyFC.dat")).unwrap();
        assert_eq!(input, "0.5 293 0.99 0.01\n");
    }

    #[test]
    fn failed_run_reported() {
        let dir = tempfile::tempdir().unwrap();
        let runner = runner(dir.path(), "echo 'no cross sections' >&2\nexit 2\n");

        let result = runner.mobility(&conditions());
        assert!(matches!(
            result,
            Err(Error::SolverFailed { status: Some(2), ref stderr }) if stderr == "no cross sections"
        ));
    }

    #[test]
    fn output_from_earlier_run_not_reused() {
        let dir = tempfile::tempdir().unwrap();
        // only the first run writes any output
        let runner = runner(
            dir.path(),
            "if [ ! -e ran ]; then\n\
               touch ran\n\
               printf 'E/N (Td) Mobility *N (1/m/V/s)\\n 0.1 1.5E+24\\n' > bolsigcalc.dat\n\
             fi\n",
        );

        let first = Conditions {
            reduced_field: 0.1,
            ..conditions()
        };
        let second = Conditions {
            reduced_field: 5.0,
            ..conditions()
        };

        assert_eq!(runner.mobility(&first).unwrap(), 1.5e24);
        assert!(matches!(
            runner.mobility(&second),
            Err(Error::NoSolverOutput { ref path }) if path.ends_with("bolsigcalc.dat")
        ));
    }

    #[test]
    fn missing_template() {
        let dir = tempfile::tempdir().unwrap();
        let result = BolsigRunner::new(BolsigConfig {
            template: dir.path().join("missing.dat"),
            ..Default::default()
        });
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
