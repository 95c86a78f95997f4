use log::{debug, error, info};

use crate::artifact::{Artifact, ArtifactSink};
use crate::assemble::assemble;
use crate::carrier::PixelBuffer;
use crate::carve::carve;
use crate::extract::{extract, BitOrder, Channel, ExtractionConfig, Traversal};
use crate::signature::{scan, FileKind};

/// The fixed channel subsets every sweep tests, in order.
///
/// An ordered list on purpose: the position of a subset determines when
/// it is attempted, which in turn determines discovery indices.
pub const CHANNEL_CONFIGS: [&[Channel]; 7] = [
    &[Channel::Red, Channel::Green, Channel::Blue],
    &[Channel::Blue, Channel::Green, Channel::Red],
    &[Channel::Red, Channel::Green, Channel::Blue, Channel::Alpha],
    &[Channel::Red],
    &[Channel::Green],
    &[Channel::Blue],
    &[Channel::Alpha],
];

const BIT_ORDERS: [BitOrder; 2] = [BitOrder::MsbFirst, BitOrder::LsbFirst];
const TRAVERSALS: [Traversal; 2] = [Traversal::ByPlane, Traversal::ByPixel];

#[derive(Debug, Clone, Copy)]
pub struct SweepOptions {
    /// maximum bit depth to test, clamped to 1..=8
    pub max_bit_depth: u8,
}

impl Default for SweepOptions {
    fn default() -> Self {
        Self { max_bit_depth: 8 }
    }
}

/// metadata of one signature match, kept after the payload left through the sink
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Discovery {
    pub index: usize,
    pub kind: FileKind,
    pub config: ExtractionConfig,
    pub start_offset: usize,
    pub end_offset: Option<usize>,
    pub file_name: String,
    pub payload_len: usize,
}

impl Discovery {
    fn of(artifact: &Artifact<'_>) -> Self {
        Self {
            index: artifact.index,
            kind: artifact.kind,
            config: artifact.config.clone(),
            start_offset: artifact.start_offset,
            end_offset: artifact.end_offset,
            file_name: artifact.file_name(),
            payload_len: artifact.bytes.len(),
        }
    }
}

#[derive(Debug, Default)]
pub struct SweepSummary {
    /// number of parameter combinations tested
    pub attempts: usize,
    pub discoveries: Vec<Discovery>,
}

impl SweepSummary {
    pub fn found(&self) -> usize {
        self.discoveries.len()
    }
}

/// Runs the exhaustive parameter-space search over one carrier.
///
/// Enumerates bit depth, channel subset, bit order and traversal in a
/// fixed nested order. Each attempt is independent: extract, assemble,
/// scan, carve, then hand the artifact to the sink. Empty intermediate
/// results and scan misses just skip to the next combination. The sweep
/// never stops at the first hit: spurious signature matches are
/// expected, the user reviews all emitted artifacts. A sink failure is
/// reported for that artifact and the sweep continues.
pub fn sweep(
    buffer: &PixelBuffer,
    options: &SweepOptions,
    sink: &mut dyn ArtifactSink,
) -> SweepSummary {
    let max_bit_depth = options.max_bit_depth.clamp(1, 8);
    let mut summary = SweepSummary::default();

    for bit_depth in 1..=max_bit_depth {
        for channels in CHANNEL_CONFIGS {
            for bit_order in BIT_ORDERS {
                for traversal in TRAVERSALS {
                    summary.attempts += 1;
                    let config = ExtractionConfig {
                        bit_depth,
                        channels: channels.to_vec(),
                        traversal,
                        bit_order,
                    };
                    debug!("Testing: {config}");

                    let bits = extract(buffer, &config);
                    if bits.is_empty() {
                        continue;
                    }
                    let data = assemble(&bits, config.bit_order);
                    if data.is_empty() {
                        continue;
                    }

                    let Some(hit) = scan(&data) else {
                        continue;
                    };
                    let payload = carve(&data, hit.kind, hit.offset);

                    let artifact = Artifact {
                        index: summary.found() + 1,
                        bytes: payload.bytes,
                        kind: hit.kind,
                        config,
                        start_offset: hit.offset,
                        end_offset: payload.end_offset,
                    };
                    info!(
                        "Signature found! Seems to be a '{}' file at position {}",
                        hit.kind.extension(),
                        hit.offset
                    );

                    if let Err(e) = sink.store(&artifact) {
                        error!("Error saving artifact {}: {e}", artifact.file_name());
                    }
                    summary.discoveries.push(Discovery::of(&artifact));
                }
            }
        }
    }

    summary
}
