//! Regression against the reference image pair.
//!
//! Drop `left.png` and `right.png` into `tests/fixtures/` and run with
//! `cargo test -- --ignored`.

use std::path::PathBuf;

use img_compare_rs::image_compare::{AccumulationStart, ComparisonConfig, ImageComparator};

const EXPECTED_SAMPLES: usize = 7_372_800;
const EXPECTED_LEADING: [u8; 4] = [88, 81, 71, 87];
const EXPECTED_STD_DEV: f64 = 18.013210727944;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn check(accumulation: AccumulationStart) {
    let config = ComparisonConfig::builder().accumulation(accumulation).build();
    let report = ImageComparator::new(config)
        .compare_files(fixture("left.png"), fixture("right.png"))
        .unwrap();

    assert_eq!(report.sample_count, EXPECTED_SAMPLES);
    assert_eq!(report.leading_samples, EXPECTED_LEADING);
    let relative = (report.std_dev() - EXPECTED_STD_DEV).abs() / EXPECTED_STD_DEV;
    assert!(relative < 1e-6, "std dev {} off by {:e}", report.std_dev(), relative);
}

#[test]
#[ignore = "requires tests/fixtures/left.png and right.png"]
fn reference_pair_from_first_sample() {
    check(AccumulationStart::FirstSample);
}

#[test]
#[ignore = "requires tests/fixtures/left.png and right.png"]
fn reference_pair_skipping_first_sample() {
    check(AccumulationStart::SkipFirst);
}
