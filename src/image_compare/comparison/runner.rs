use std::path::Path;

use tracing::{info, instrument, warn};

use crate::image_compare::{
    common::error::{ComparisonError, Result},
    comparison::{ComparisonConfig, ComparisonReport, ComparisonTimings, Timer},
    decode::{AutoDecoder, DecodedImage, ImageDecoder},
    samples::flatten,
    statistics::summarize_differences,
};

pub struct ImageComparator<D: ImageDecoder> {
    decoder: D,
    config: ComparisonConfig,
}

impl ImageComparator<AutoDecoder> {
    pub fn new(config: ComparisonConfig) -> Self {
        Self {
            decoder: AutoDecoder,
            config,
        }
    }
}

impl<D: ImageDecoder + Sync> ImageComparator<D> {
    pub fn with_decoder(decoder: D, config: ComparisonConfig) -> Self {
        Self { decoder, config }
    }

    #[instrument(skip(self, left_path, right_path))]
    pub fn compare_files<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        left_path: P,
        right_path: Q,
    ) -> Result<ComparisonReport> {
        let left_path = left_path.as_ref();
        let right_path = right_path.as_ref();

        info!(
            left = %left_path.display(),
            right = %right_path.display(),
            "Comparing files"
        );

        let mut timings = ComparisonTimings::new();

        let timer = Timer::start("read");
        let (left_data, right_data) = {
            let _span = tracing::info_span!("read_input_files").entered();
            (read_input(left_path)?, read_input(right_path)?)
        };
        timings.record(timer);

        let timer = Timer::start("decode");
        let (left, right) = self.decode_pair(&left_data, &right_data);
        let left = left.map_err(|e| attach_path(e, left_path))?;
        let right = right.map_err(|e| attach_path(e, right_path))?;
        timings.record(timer);

        self.compare_decoded(&left, &right, timings)
    }

    #[instrument(
        skip(self, left_data, right_data),
        fields(left_size = left_data.len(), right_size = right_data.len())
    )]
    pub fn compare(&self, left_data: &[u8], right_data: &[u8]) -> Result<ComparisonReport> {
        let mut timings = ComparisonTimings::new();

        let timer = Timer::start("decode");
        let (left, right) = self.decode_pair(left_data, right_data);
        let (left, right) = (left?, right?);
        timings.record(timer);

        self.compare_decoded(&left, &right, timings)
    }

    pub fn compare_images(
        &self,
        left: &DecodedImage,
        right: &DecodedImage,
    ) -> Result<ComparisonReport> {
        self.compare_decoded(left, right, ComparisonTimings::new())
    }

    pub fn config(&self) -> &ComparisonConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ComparisonConfig) {
        self.config = config;
    }

    /// Both results are available on return, whether decoded sequentially or not.
    fn decode_pair(
        &self,
        left: &[u8],
        right: &[u8],
    ) -> (Result<DecodedImage>, Result<DecodedImage>) {
        let _span = tracing::info_span!("decode", concurrent = self.config.concurrent_decode)
            .entered();

        if !self.config.concurrent_decode {
            return (self.decoder.decode(left), self.decoder.decode(right));
        }

        std::thread::scope(|scope| {
            let right_handle = scope.spawn(move || self.decoder.decode(right));
            let left_result = self.decoder.decode(left);
            let right_result = right_handle
                .join()
                .unwrap_or_else(|payload| std::panic::resume_unwind(payload));
            (left_result, right_result)
        })
    }

    fn validate_dimensions(&self, left: &DecodedImage, right: &DecodedImage) -> Result<()> {
        if left.dimensions() != right.dimensions() {
            warn!(
                "Image dimensions differ: {}x{} vs {}x{}",
                left.width(),
                left.height(),
                right.width(),
                right.height()
            );
            return Err(ComparisonError::DimensionMismatch {
                left_width: left.width(),
                left_height: left.height(),
                right_width: right.width(),
                right_height: right.height(),
            });
        }
        Ok(())
    }

    fn compare_decoded(
        &self,
        left: &DecodedImage,
        right: &DecodedImage,
        mut timings: ComparisonTimings,
    ) -> Result<ComparisonReport> {
        {
            let _span = tracing::info_span!("validate_dimensions",
                width = left.width(),
                height = left.height()
            ).entered();
            self.validate_dimensions(left, right)?;
        }

        let timer = Timer::start("flatten");
        let (left_samples, right_samples) = {
            let _span = tracing::info_span!("flatten").entered();
            (flatten(left), flatten(right))
        };
        timings.record(timer);

        let timer = Timer::start("statistic");
        let summary = {
            let _span = tracing::info_span!("difference_statistic").entered();
            summarize_differences(
                left_samples.as_slice(),
                right_samples.as_slice(),
                self.config.accumulation,
            )?
        };
        timings.record(timer);

        let leading_samples = left_samples.head(self.config.preview_len).to_vec();

        info!(samples = ?leading_samples, "Leading samples of left image");
        info!(length = left_samples.len(), "Flattened sample count");
        info!(
            std_dev = summary.std_dev(),
            terms = summary.terms,
            "Comparison complete"
        );
        timings.log_summary();

        Ok(ComparisonReport {
            width: left.width(),
            height: left.height(),
            sample_count: left_samples.len(),
            leading_samples,
            summary,
            timings,
        })
    }
}

fn read_input(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path)
        .map_err(|e| ComparisonError::InputReadError(format!("{}: {}", path.display(), e)))
}

fn attach_path(error: ComparisonError, path: &Path) -> ComparisonError {
    match error {
        ComparisonError::DecodeError(msg) => {
            ComparisonError::DecodeError(format!("{}: {}", path.display(), msg))
        }
        ComparisonError::UnsupportedFormat(msg) => {
            ComparisonError::UnsupportedFormat(format!("{}: {}", path.display(), msg))
        }
        other => other,
    }
}
