//! Integration tests for spectrum-weighted cross sections

use nphys_spectrum::{
    spectrum_average, spectrum_average_with, Error, FastShape, SpectrumParameters,
};
use rstest::{fixture, rstest};

#[fixture]
fn energy() -> Vec<f64> {
    vec![1e-5, 1.0, 1e3, 1e5, 1e6, 2e6]
}

#[fixture]
fn xs() -> Vec<f64> {
    vec![3.0, 2.0, 1.5, 1.0, 0.8, 0.5]
}

#[rstest]
fn reference_scenario(energy: Vec<f64>, xs: Vec<f64>) {
    let average = spectrum_average(&energy, &xs).unwrap();

    assert!(average.fast.is_finite());
    assert!(average.ratio.is_finite());
    assert!(average.fast >= 0.5 && average.fast <= 3.0);
    assert!(average.thermal >= 0.5 && average.thermal <= 3.0);
    assert_eq!(average.ratio, average.fast / average.thermal);
}

#[rstest]
fn repeated_calls_are_identical(energy: Vec<f64>, xs: Vec<f64>) {
    let first = spectrum_average(&energy, &xs).unwrap();
    let second = spectrum_average(&energy, &xs).unwrap();

    assert_eq!(first.fast.to_bits(), second.fast.to_bits());
    assert_eq!(first.ratio.to_bits(), second.ratio.to_bits());
}

#[rstest]
#[case(vec![1e-5, 1.0, 1e3, 1e5, 1e6, 2e6])] // coarse
#[case(vec![1e-3, 0.0253, 0.5, 10.0, 1e4, 5e5, 1e6, 1.5e6, 1.0e7])] // uneven
#[case((0..=200).map(|i| 10f64.powf(-5.0 + i as f64 * 0.06)).collect())] // log spaced
fn constant_cross_section_averages_to_itself(#[case] energy: Vec<f64>) {
    let xs = vec![1.0; energy.len()];
    let average = spectrum_average(&energy, &xs).unwrap();

    assert!((average.fast - 1.0).abs() < 1e-12);
    assert!((average.ratio - 1.0).abs() < 1e-12);
}

#[rstest]
fn results_are_non_negative_for_non_negative_input() {
    let energy: Vec<f64> = (0..=120).map(|i| 10f64.powf(-5.0 + i as f64 * 0.1)).collect();
    // 1/v like absorber with a flat fast tail
    let xs: Vec<f64> = energy.iter().map(|e| 1.0 + 10.0 / e.sqrt()).collect();

    let average = spectrum_average(&energy, &xs).unwrap();
    assert!(average.fast.is_finite() && average.fast >= 0.0);
    assert!(average.ratio.is_finite() && average.ratio >= 0.0);
    // threshold-free 1/v shape is much larger in the thermal group
    assert!(average.ratio < 1.0);
}

#[rstest]
fn mismatched_lengths_fail(energy: Vec<f64>) {
    let energy = &energy[..5];
    let xs = [3.0, 2.0, 1.5, 1.0];

    let result = spectrum_average(energy, &xs);
    assert!(matches!(result, Err(Error::LengthMismatch { energy: 5, xs: 4 })));
}

#[rstest]
#[case(vec![1.0, 2.0, 2.0], 2)] // repeated point
#[case(vec![1.0, 0.5, 2.0], 1)] // decreasing
fn unordered_grids_fail(#[case] energy: Vec<f64>, #[case] expected: usize) {
    let xs = vec![1.0; energy.len()];
    let result = spectrum_average(&energy, &xs);
    assert!(matches!(result, Err(Error::NotStrictlyIncreasing { index }) if index == expected));
}

#[rstest]
#[case(vec![0.0, 1.0, 2.0], 0.0)]
#[case(vec![-1.0, 1.0, 2.0], -1.0)]
fn non_positive_grids_fail(#[case] energy: Vec<f64>, #[case] expected: f64) {
    let xs = vec![1.0; energy.len()];
    let result = spectrum_average(&energy, &xs);
    assert!(matches!(result, Err(Error::NonPositiveEnergy { value }) if value == expected));
}

#[rstest]
#[case(vec![])]
#[case(vec![1.0])]
fn short_grids_fail(#[case] energy: Vec<f64>) {
    let xs = vec![1.0; energy.len()];
    let result = spectrum_average(&energy, &xs);
    assert!(matches!(
        result,
        Err(Error::TooFewPoints {
            minimum_required: 2,
            ..
        })
    ));
}

#[rstest]
fn fast_constants_change_the_fast_average(energy: Vec<f64>, xs: Vec<f64>) {
    let params = SpectrumParameters {
        fast: FastShape::u235(),
        ..Default::default()
    };

    let default = spectrum_average(&energy, &xs).unwrap();
    let u235 = spectrum_average_with(&energy, &xs, &params).unwrap();

    assert_ne!(default.fast, u235.fast);
    assert_eq!(default.thermal, u235.thermal);
}
