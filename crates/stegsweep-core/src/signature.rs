use std::fmt;

use memchr::memmem;

/// file types recognizable by their magic bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Png,
    Jpeg,
    Pdf,
    Zip,
    Gif,
    Bmp,
    Wav,
    Mp3,
    SevenZip,
    Rar,
}

impl FileKind {
    /// extension used for extracted artifact files
    pub fn extension(self) -> &'static str {
        match self {
            FileKind::Png => "png",
            FileKind::Jpeg => "jpg",
            FileKind::Pdf => "pdf",
            FileKind::Zip => "zip",
            FileKind::Gif => "gif",
            FileKind::Bmp => "bmp",
            FileKind::Wav => "wav",
            FileKind::Mp3 => "mp3",
            FileKind::SevenZip => "7z",
            FileKind::Rar => "rar",
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension().to_uppercase())
    }
}

pub struct Signature {
    pub magic: &'static [u8],
    pub kind: FileKind,
}

/// Known file signatures in priority order.
///
/// The declaration order is a correctness requirement: when several
/// signatures occur in the same byte stream, the first table entry with
/// any occurrence wins (see [`scan`]), not the one with the smallest
/// offset.
pub const SIGNATURES: [Signature; 11] = [
    Signature {
        magic: b"\x89PNG\r\n\x1a\n",
        kind: FileKind::Png,
    },
    Signature {
        magic: b"\xFF\xD8\xFF",
        kind: FileKind::Jpeg,
    },
    Signature {
        magic: b"%PDF-",
        kind: FileKind::Pdf,
    },
    Signature {
        magic: b"PK\x03\x04",
        kind: FileKind::Zip,
    },
    Signature {
        magic: b"GIF87a",
        kind: FileKind::Gif,
    },
    Signature {
        magic: b"GIF89a",
        kind: FileKind::Gif,
    },
    Signature {
        magic: b"BM",
        kind: FileKind::Bmp,
    },
    // RIFF could also be an AVI container
    Signature {
        magic: b"RIFF",
        kind: FileKind::Wav,
    },
    Signature {
        magic: b"ID3",
        kind: FileKind::Mp3,
    },
    Signature {
        magic: b"7z\xBC\xAF\x27\x1C",
        kind: FileKind::SevenZip,
    },
    Signature {
        magic: b"Rar!\x1A\x07",
        kind: FileKind::Rar,
    },
];

/// the outcome of a successful signature scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanHit {
    pub kind: FileKind,
    pub offset: usize,
}

/// Scans `data` for the first signature, in table order.
pub fn scan(data: &[u8]) -> Option<ScanHit> {
    SIGNATURES.iter().find_map(|signature| {
        memmem::find(data, signature.magic).map(|offset| ScanHit {
            kind: signature.kind,
            offset,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_find_a_png_signature_with_its_offset() {
        let mut data = vec![0u8; 10];
        data.extend_from_slice(b"\x89PNG\r\n\x1a\n trailing");

        assert_eq!(
            scan(&data),
            Some(ScanHit {
                kind: FileKind::Png,
                offset: 10
            })
        );
    }

    #[test]
    fn should_prefer_table_order_over_smaller_offsets() {
        // ZIP occurs first in the data, PNG first in the table
        let mut data = b"PK\x03\x04 some zip entries ".to_vec();
        data.extend_from_slice(b"\x89PNG\r\n\x1a\n");

        let hit = scan(&data).unwrap();
        assert_eq!(hit.kind, FileKind::Png);
        assert_eq!(hit.offset, data.len() - 8);
    }

    #[test]
    fn should_report_the_first_occurrence_of_the_winning_signature() {
        let data = b"..BM....BM..".to_vec();

        assert_eq!(scan(&data).unwrap().offset, 2);
    }

    #[test]
    fn should_recognize_both_gif_variants() {
        assert_eq!(scan(b"..GIF87a..").unwrap().kind, FileKind::Gif);
        assert_eq!(scan(b"..GIF89a..").unwrap().kind, FileKind::Gif);
    }

    #[test]
    fn should_find_nothing_in_unremarkable_data() {
        assert_eq!(scan(&[0u8; 64]), None);
        assert_eq!(scan(b""), None);
    }
}
