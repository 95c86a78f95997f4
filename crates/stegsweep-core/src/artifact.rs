use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use crate::error::SweepError;
use crate::extract::ExtractionConfig;
use crate::result::Result;
use crate::signature::FileKind;

/// one extracted candidate payload, handed to an [`ArtifactSink`] exactly once
#[derive(Debug, PartialEq, Eq)]
pub struct Artifact<'d> {
    /// 1-based discovery counter, part of the collision-free file name
    pub index: usize,
    pub bytes: &'d [u8],
    pub kind: FileKind,
    pub config: ExtractionConfig,
    /// offset of the signature within the assembled byte stream
    pub start_offset: usize,
    /// detected end boundary, `None` when carved to the end of the stream
    pub end_offset: Option<usize>,
}

impl Artifact<'_> {
    /// Deterministic, collision-free output name. Two different attempts
    /// can never overwrite each other: the discovery index is unique and
    /// the config parameters are part of the name.
    pub fn file_name(&self) -> String {
        format!(
            "found_{}_{}LSB_{}_{}_{}.{}",
            self.index,
            self.config.bit_depth,
            self.config.channel_label(),
            self.config.traversal.name(),
            self.config.bit_order.name(),
            self.kind.extension()
        )
    }
}

/// persistence seam for extracted artifacts
pub trait ArtifactSink {
    fn store(&mut self, artifact: &Artifact<'_>) -> Result<()>;
}

/// stores artifacts as files in an output folder
#[derive(Debug)]
pub struct FileSink {
    folder: PathBuf,
}

impl FileSink {
    pub fn new(folder: impl Into<PathBuf>) -> Self {
        Self {
            folder: folder.into(),
        }
    }
}

impl ArtifactSink for FileSink {
    fn store(&mut self, artifact: &Artifact<'_>) -> Result<()> {
        let target = self.folder.join(artifact.file_name());
        let mut target =
            File::create(target).map_err(|source| SweepError::WriteError { source })?;

        target
            .write_all(artifact.bytes)
            .map_err(|source| SweepError::WriteError { source })
    }
}
