use std::path::{Path, PathBuf};

use crate::artifact::FileSink;
use crate::carrier::PixelBuffer;
use crate::result::Result;
use crate::search::{sweep, SweepOptions, SweepSummary};
use crate::SweepError;

pub fn prepare() -> SweepApi {
    SweepApi::default()
}

#[derive(Default, Debug)]
pub struct SweepApi {
    secret_media: Option<PathBuf>,
    output_folder: Option<PathBuf>,
    options: SweepOptions,
}

impl SweepApi {
    /// Use the given sweep options
    pub fn with_options(mut self, options: SweepOptions) -> Self {
        self.options = options;
        self
    }

    /// Limit the sweep to bit depths up to `max_bit_depth` (1..=8)
    pub fn with_max_bit_depth(mut self, max_bit_depth: u8) -> Self {
        self.options.max_bit_depth = max_bit_depth;
        self
    }

    /// This is the image suspected to contain hidden data
    pub fn from_secret_file(mut self, secret_image: impl AsRef<Path>) -> Self {
        self.secret_media = Some(secret_image.as_ref().to_path_buf());
        self
    }

    /// This is the folder where extracted artifacts will be saved to
    pub fn into_output_folder(mut self, output_folder: impl AsRef<Path>) -> Self {
        self.output_folder = Some(output_folder.as_ref().to_path_buf());
        self
    }

    /// Execute the exhaustive sweep and block until it is finished
    pub fn execute(self) -> Result<SweepSummary> {
        let Some(secret_media) = self.secret_media else {
            return Err(SweepError::CarrierNotSet);
        };
        let Some(output_folder) = self.output_folder else {
            return Err(SweepError::TargetNotSet);
        };

        let buffer = PixelBuffer::from_file(&secret_media)?;
        std::fs::create_dir_all(&output_folder)?;
        let mut sink = FileSink::new(output_folder);

        Ok(sweep(&buffer, &self.options, &mut sink))
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use crate::SweepError;

    #[test]
    fn should_require_a_carrier() {
        let result = crate::api::sweep::prepare()
            .into_output_folder("/tmp")
            .execute();

        match result.err() {
            Some(SweepError::CarrierNotSet) => (),
            _ => panic!(),
        }
    }

    #[test]
    fn should_require_an_output_folder() {
        let result = crate::api::sweep::prepare()
            .from_secret_file("some-image.png")
            .execute();

        match result.err() {
            Some(SweepError::TargetNotSet) => (),
            _ => panic!(),
        }
    }

    #[test]
    fn illustrate_api_usage() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let carrier = temp_dir.path().join("carrier.png");
        image::RgbaImage::from_fn(16, 16, |x, y| image::Rgba([x as u8, y as u8, 0, 255]))
            .save(&carrier)
            .expect("Failed to save carrier image");

        let summary = crate::api::sweep::prepare()
            .from_secret_file(&carrier)
            .into_output_folder(temp_dir.path().join("out"))
            .with_max_bit_depth(1)
            .execute()
            .expect("Failed to sweep the carrier image");

        assert_eq!(summary.attempts, 7 * 2 * 2);
    }
}
