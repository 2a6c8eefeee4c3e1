use anyhow::Context;
use img_compare_rs::image_compare::{ComparisonConfig, ImageComparator};
use img_compare_rs::logger;

use tracing::{error, info};

const DEFAULT_LEFT: &str = "left.png";
const DEFAULT_RIGHT: &str = "right.png";

fn main() -> anyhow::Result<()> {
    logger::init();

    let mut args = std::env::args().skip(1);
    let left = args.next().unwrap_or_else(|| DEFAULT_LEFT.to_string());
    let right = args.next().unwrap_or_else(|| DEFAULT_RIGHT.to_string());

    info!("Starting img_compare...");

    let comparator = ImageComparator::new(ComparisonConfig::default());
    info!("Accumulation: {:?}", comparator.config().accumulation);

    let report = match comparator.compare_files(&left, &right) {
        Ok(report) => report,
        Err(e) => {
            error!("Comparison failed: {}", e);
            return Err(e).with_context(|| format!("comparing {left} with {right}"));
        }
    };

    println!("RGB values of first four elements: {:?}", report.leading_samples);
    println!("Length of left samples: {}", report.sample_count);
    println!("SD of differences: {}", report.std_dev());

    Ok(())
}
