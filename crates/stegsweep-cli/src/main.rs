use clap::Parser;

use stegsweep_core::commands::sweep;
use stegsweep_core::{Discovery, Result, SweepOptions};

mod cli;
use cli::CliArgs;

fn main() -> Result<()> {
    env_logger::init();

    let args = CliArgs::parse();
    println!("Analyzing image: {}", args.image.display());

    let summary = sweep(
        &args.image,
        &args.output_folder,
        SweepOptions {
            max_bit_depth: args.max_bits,
        },
    )?;

    for discovery in &summary.discoveries {
        print_discovery_report(discovery);
    }
    print_summary(summary.found());

    Ok(())
}

fn print_discovery_report(discovery: &Discovery) {
    let config = &discovery.config;
    let channels = config
        .channels
        .iter()
        .map(|c| c.role_name())
        .collect::<Vec<_>>()
        .join(", ");

    println!();
    println!("{}", "=".repeat(60));
    println!("   DISCOVERY REPORT #{}", discovery.index);
    println!("{}", "=".repeat(60));
    println!();
    println!("[+] HIDING TECHNIQUE");
    println!("    - Bit Depth:        {} LSB", config.bit_depth);
    println!("    - Carrier Channels: {channels}");
    println!("    - Data Flow:        {}", config.traversal.description());
    println!("    - Byte Assembly:    {}", config.bit_order.description());
    println!();
    println!("[+] EXTRACTED FILE DATA");
    println!("    - Resulting File:   {}", discovery.file_name);
    println!("    - Identified Type:  {}", discovery.kind);
    println!("    - Payload Bytes:    {}", discovery.payload_len);
    if discovery.end_offset.is_none() {
        println!("    - Note:             end of payload not detected, carved to end of data");
    }
    println!("{}", "=".repeat(60));
}

fn print_summary(found: usize) {
    println!();
    println!("{}", "*".repeat(70));
    if found > 0 {
        println!("Exhaustive search finished. {found} potential file(s) found and saved.");
        println!("Please review the generated files to find the correct one.");
    } else {
        println!("Exhaustive search finished. No known file signatures found.");
    }
    println!("{}", "*".repeat(70));
}
