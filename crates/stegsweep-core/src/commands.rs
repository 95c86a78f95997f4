use std::path::Path;

use crate::result::Result;
use crate::search::{SweepOptions, SweepSummary};

/// Sweeps `secret_media` for hidden files and stores every candidate
/// artifact in `output_folder`.
pub fn sweep(
    secret_media: &Path,
    output_folder: &Path,
    options: SweepOptions,
) -> Result<SweepSummary> {
    crate::api::sweep::prepare()
        .with_options(options)
        .from_secret_file(secret_media)
        .into_output_folder(output_folder)
        .execute()
}
