use std::path::Path;

pub use image::RgbaImage;

use crate::error::SweepError;
use crate::result::Result;

/// a decoded carrier image, normalized to a flat row-major sample vector
///
/// Every pixel holds `channel_count` unsigned 8 bit samples. The buffer is
/// immutable for the duration of a sweep and shared by reference across
/// all extraction attempts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    samples: Vec<u8>,
    channel_count: usize,
}

impl PixelBuffer {
    /// Builds a buffer from raw samples. The channel count must be in
    /// 1..=4 and divide the sample vector evenly.
    pub fn new(samples: Vec<u8>, channel_count: usize) -> Result<Self> {
        if !(1..=4).contains(&channel_count) {
            return Err(SweepError::InvalidChannelCount(channel_count));
        }
        if samples.len() % channel_count != 0 {
            return Err(SweepError::MalformedBuffer(samples.len(), channel_count));
        }

        Ok(Self {
            samples,
            channel_count,
        })
    }

    /// Loads and decodes a carrier image file, normalized to RGBA.
    pub fn from_file(f: &Path) -> Result<Self> {
        let Some(ext) = f.extension() else {
            return Err(SweepError::UnsupportedMedia);
        };
        let ext = ext.to_string_lossy().to_lowercase();
        match ext.as_str() {
            "png" | "jpg" | "jpeg" | "gif" | "bmp" => Ok(image::open(f)
                .map_err(|_e| SweepError::InvalidImageMedia)?
                .to_rgba8()
                .into()),
            _ => Err(SweepError::UnsupportedMedia),
        }
    }

    pub fn channel_count(&self) -> usize {
        self.channel_count
    }

    pub fn pixel_count(&self) -> usize {
        self.samples.len() / self.channel_count
    }

    /// iterates pixels in scan order, each as a `channel_count` long slice
    pub fn pixels(&self) -> impl Iterator<Item = &[u8]> {
        self.samples.chunks_exact(self.channel_count)
    }

    /// iterates a single channel plane in scan order,
    /// `None` for channel indices the buffer does not have
    pub fn plane(&self, channel: usize) -> Option<impl Iterator<Item = u8> + '_> {
        if channel >= self.channel_count {
            return None;
        }

        Some(
            self.samples
                .iter()
                .skip(channel)
                .step_by(self.channel_count)
                .copied(),
        )
    }
}

impl From<RgbaImage> for PixelBuffer {
    fn from(img: RgbaImage) -> Self {
        Self {
            samples: img.into_raw(),
            channel_count: 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::prepare_5x5_image;

    #[test]
    fn should_normalize_an_rgba_image_to_4_channels() {
        let buffer: PixelBuffer = prepare_5x5_image().into();

        assert_eq!(buffer.channel_count(), 4);
        assert_eq!(buffer.pixel_count(), 25);
        assert_eq!(buffer.pixels().next().unwrap(), &[0, 1, 2, 3]);
    }

    #[test]
    fn should_iterate_a_single_plane_in_scan_order() {
        let buffer = PixelBuffer::new(vec![10, 11, 20, 21, 30, 31], 2).unwrap();

        let plane: Vec<u8> = buffer.plane(1).unwrap().collect();
        assert_eq!(plane, vec![11, 21, 31]);
    }

    #[test]
    fn should_yield_no_plane_for_channels_the_buffer_does_not_have() {
        let buffer = PixelBuffer::new(vec![1, 2, 3], 3).unwrap();

        assert!(buffer.plane(3).is_none());
    }

    #[test]
    fn should_reject_invalid_channel_counts() {
        match PixelBuffer::new(vec![1, 2], 0).err() {
            Some(SweepError::InvalidChannelCount(0)) => (),
            _ => panic!(),
        }
        match PixelBuffer::new(vec![1, 2, 3, 4, 5], 5).err() {
            Some(SweepError::InvalidChannelCount(5)) => (),
            _ => panic!(),
        }
    }

    #[test]
    fn should_reject_samples_not_divisible_by_channel_count() {
        match PixelBuffer::new(vec![1, 2, 3], 2).err() {
            Some(SweepError::MalformedBuffer(3, 2)) => (),
            _ => panic!(),
        }
    }

    #[test]
    fn should_reject_a_file_without_an_image_extension() {
        match PixelBuffer::from_file(Path::new("Cargo.toml")).err() {
            Some(SweepError::UnsupportedMedia) => (),
            _ => panic!(),
        }
    }

    #[test]
    fn should_reject_a_broken_image_file() {
        let dir = tempfile::tempdir().unwrap();
        let bogus = dir.path().join("not-an-image.png");
        std::fs::write(&bogus, b"certainly not a png").unwrap();

        match PixelBuffer::from_file(&bogus).err() {
            Some(SweepError::InvalidImageMedia) => (),
            _ => panic!(),
        }
    }
}
