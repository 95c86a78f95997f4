use memchr::memmem;

use crate::signature::FileKind;

pub const JPEG_EOI: [u8; 2] = [0xFF, 0xD9];

/// a carved payload slice plus the detected end boundary, if any
#[derive(Debug, PartialEq, Eq)]
pub struct CarvedPayload<'d> {
    pub bytes: &'d [u8],
    /// exclusive end offset within the scanned data, `None` when the
    /// payload runs to the end of the data
    pub end_offset: Option<usize>,
}

/// Slices the payload of a detected file out of the scanned data.
///
/// The default policy carves from `start_offset` to the end of the data:
/// without parsing each format the true logical end is unknown, so the
/// blob is potentially oversized and left to the user to truncate. JPEG
/// is the exception, its `FF D9` end-of-image marker is searched at or
/// after the start and the slice ends right behind it; a JPEG without
/// the marker falls back to the default policy.
pub fn carve(data: &[u8], kind: FileKind, start_offset: usize) -> CarvedPayload<'_> {
    if kind == FileKind::Jpeg {
        if let Some(pos) = memmem::find(&data[start_offset..], &JPEG_EOI) {
            let end = start_offset + pos + JPEG_EOI.len();
            return CarvedPayload {
                bytes: &data[start_offset..end],
                end_offset: Some(end),
            };
        }
    }

    CarvedPayload {
        bytes: &data[start_offset..],
        end_offset: None,
    }
}
