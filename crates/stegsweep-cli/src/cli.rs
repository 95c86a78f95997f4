use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct CliArgs {
    /// Image file suspected to contain hidden data
    #[arg(value_name = "image file")]
    pub image: PathBuf,

    /// Folder where extracted artifacts will be stored
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output folder",
        default_value = "."
    )]
    pub output_folder: PathBuf,

    /// Maximum number of least significant bits to test
    #[arg(
        long = "max-bits",
        value_name = "bits",
        default_value_t = 8,
        value_parser = clap::value_parser!(u8).range(1..=8)
    )]
    pub max_bits: u8,
}
