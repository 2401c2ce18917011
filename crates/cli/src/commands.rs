//! Implementation of each subcommand

// standard library
use std::time::Duration;

// crate modules
use crate::cli::{AverageArgs, DriftArgs, PlaneArgs, SaltArgs, SurveyArgs};
use crate::error::{CliError, Result};

// nphys modules
use nphys_bolsig::{compare_all, haddad_reference, BolsigConfig, BolsigRunner};
use nphys_plane::{Plane, Sense};
use nphys_salt::salt_composition;
use nphys_spectrum::{CrossSectionTable, SpectrumParameters};
use nphys_utils::ValueExt;
use nphys_xsdata::{
    reference_isotopes, survey as run_survey, write_json, write_tsv, DataProvider,
    DirectoryProvider, MirroredProvider, NuchartClient, SurveyConfig,
};

// external crates
use log::info;

/// Spectrum parameters from an optional JSON file
fn load_parameters(path: Option<&std::path::Path>) -> Result<SpectrumParameters> {
    match path {
        Some(p) => {
            info!("Reading spectrum parameters from {}", p.display());
            Ok(SpectrumParameters::from_json(p)?)
        }
        None => Ok(SpectrumParameters::default()),
    }
}

pub fn average(args: AverageArgs) -> Result<()> {
    let params = load_parameters(args.params.as_deref())?;

    info!("Reading {}", args.file.display());
    let table = CrossSectionTable::from_file(&args.file)?;
    let average = table.average(&params)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&average)?);
    } else {
        println!("{average}");
    }

    Ok(())
}

pub fn survey(args: SurveyArgs, progress: bool) -> Result<()> {
    let delay =
        Duration::try_from_secs_f64(args.delay).map_err(|_| CliError::InvalidDelay(args.delay))?;

    let config = SurveyConfig {
        delay,
        params: load_parameters(args.params.as_deref())?,
        progress,
    };

    let provider: Box<dyn DataProvider> = match (args.offline, args.save) {
        (Some(dir), _) => Box::new(DirectoryProvider::new(dir)),
        (None, Some(dir)) => Box::new(MirroredProvider::new(NuchartClient::default(), dir)),
        (None, None) => Box::new(NuchartClient::default()),
    };

    let records = run_survey(provider.as_ref(), &reference_isotopes(), &config)?;

    println!(
        "{:<8}{:<10}{:>14}{:>14}{:>14}",
        "Isotope", "Library", "Fast (b)", "Thermal (b)", "Fast/thermal"
    );
    for r in &records {
        println!(
            "{:<8}{:<10}{:>14}{:>14}{:>14}{}",
            r.isotope,
            r.library.to_string(),
            r.fast.sci(5, 2),
            r.thermal.sci(5, 2),
            r.ratio.sci(5, 2),
            if r.highlight { " *" } else { "" }
        );
    }

    if let Some(path) = args.output {
        info!("Writing {}", path.display());
        write_tsv(&records, path)?;
    }

    if let Some(path) = args.json {
        info!("Writing {}", path.display());
        write_json(&records, path)?;
    }

    Ok(())
}

pub fn drift(args: DriftArgs) -> Result<()> {
    let runner = BolsigRunner::new(BolsigConfig {
        executable: args.exe,
        args: args.args,
        template: args.template,
        workdir: args.workdir,
        ..Default::default()
    })?;

    std::fs::create_dir_all(&args.outdir).map_err(nphys_bolsig::Error::from)?;

    let series = haddad_reference();
    let results = compare_all(&runner, &series, args.temperature, &args.outdir)?;

    for (s, points) in series.iter().zip(&results) {
        let mean = points
            .iter()
            .map(|p| p.relative_difference().abs())
            .sum::<f64>()
            / points.len() as f64;

        println!(
            "{:<20} {} mean |difference| {:.2}%",
            s.mixture.to_string(),
            s.output_name,
            100.0 * mean
        );
    }

    Ok(())
}

pub fn salt(args: SaltArgs) -> Result<()> {
    println!("{}", salt_composition(args.nacl, args.enrichment)?);
    Ok(())
}

/// Three coordinates from the command line
fn point(values: &[f64]) -> Result<[f64; 3]> {
    <[f64; 3]>::try_from(values).map_err(|_| CliError::InvalidPoint(values.len()))
}

pub fn plane(args: PlaneArgs) -> Result<()> {
    let plane = Plane::through(point(&args.p1)?, point(&args.p2)?, point(&args.p3)?)?;

    println!("{plane}");
    println!("{}", plane.mcnp_card(args.id));

    if let Some(test) = args.test {
        match plane.sense(point(&test)?) {
            Sense::OnSurface => println!("The point is on the surface"),
            sense => println!("The surface has {sense} sign"),
        }
    }

    Ok(())
}
