//! # Stegsweep Core API
//!
//! Exhaustive steganalysis of raster images. The sweep enumerates every
//! combination of LSB bit depth, carrier channel subset, traversal order
//! and byte bit order, reassembles the candidate byte stream of each
//! combination and scans it for known file signatures. Every hit is
//! carved out and handed to an [`ArtifactSink`][sink].
//!
//! # Usage Example
//!
//! ```rust
//! use tempfile::tempdir;
//!
//! let out_dir = tempdir().expect("Failed to create temporary directory");
//! let carrier = out_dir.path().join("carrier.png");
//!
//! // a plain carrier image without any hidden payload
//! image::RgbaImage::from_fn(32, 32, |x, y| image::Rgba([x as u8, y as u8, 0, 255]))
//!     .save(&carrier)
//!     .expect("Failed to save carrier image");
//!
//! let summary = stegsweep_core::api::sweep::prepare()
//!     .from_secret_file(&carrier)
//!     .into_output_folder(out_dir.path())
//!     .with_max_bit_depth(2)
//!     .execute()
//!     .expect("Sweep failed");
//!
//! assert_eq!(summary.attempts, 2 * 7 * 2 * 2);
//! ```
//!
//! [sink]: ./artifact/trait.ArtifactSink.html

#![warn(clippy::redundant_else)]

pub mod api;
pub mod artifact;
pub mod assemble;
pub mod carrier;
pub mod carve;
pub mod commands;
pub mod error;
pub mod extract;
pub mod result;
pub mod search;
pub mod signature;

pub use crate::artifact::{Artifact, ArtifactSink, FileSink};
pub use crate::carrier::PixelBuffer;
pub use crate::error::SweepError;
pub use crate::extract::{BitOrder, Channel, ExtractionConfig, Traversal};
pub use crate::result::Result;
pub use crate::search::{Discovery, SweepOptions, SweepSummary, CHANNEL_CONFIGS};
pub use crate::signature::FileKind;
