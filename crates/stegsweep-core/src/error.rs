use thiserror::Error;

#[derive(Error, Debug)]
pub enum SweepError {
    /// Represents an unsupported carrier media. For example, a movie file is not supported
    #[error("Media format is not supported")]
    UnsupportedMedia,

    /// Represents an invalid carrier image media. For example, a broken PNG file
    #[error("Image media is invalid")]
    InvalidImageMedia,

    /// Represents a pixel buffer with a channel count outside of 1..=4
    #[error("Invalid channel count: {0}")]
    InvalidChannelCount(usize),

    /// Represents a sample vector whose length is not a multiple of the channel count
    #[error("Buffer of {0} samples is not divisible by {1} channels")]
    MalformedBuffer(usize, usize),

    #[error("No carrier media set")]
    CarrierNotSet,

    #[error("No output folder set")]
    TargetNotSet,

    /// Represents a failure to write an extracted artifact.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}
