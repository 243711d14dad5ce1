use anyhow::{Context, Result};
use clap::{App, Arg};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

mod binder;
mod error;
mod generator;
mod parser;
mod stripper;

#[cfg(test)]
mod tests;

use binder::model::BindOptions;
use stripper::{RevmInterpreter, DEFAULT_GAS_LIMIT};

/// Name of the file written into the output directory.
pub const OUTPUT_FILE: &str = "evm.go";

#[derive(Debug, Clone)]
pub struct RunArgs {
    pub abi: PathBuf,
    pub bin: PathBuf,
    pub out: PathBuf,
    pub options: BindOptions,
    pub gas_limit: u64,
}

fn main() -> Result<()> {
    let default_gas = DEFAULT_GAS_LIMIT.to_string();
    let matches = App::new("evmbind")
        .version("0.1.0")
        .about("Generates Go bindings for EVM contracts")
        .arg(
            Arg::with_name("abi")
                .long("abi")
                .value_name("FILE")
                .help("Path to the ABI JSON file to bind against")
                .required(true)
                .takes_value(true),
        )
        .arg(
            Arg::with_name("bin")
                .long("bin")
                .value_name("FILE")
                .help("Path to the bytecode binary to bind against")
                .required(true)
                .takes_value(true),
        )
        .arg(
            Arg::with_name("pkg")
                .long("pkg")
                .value_name("NAME")
                .help("Name of the package to generate the bindings into")
                .required(true)
                .takes_value(true),
        )
        .arg(
            Arg::with_name("out")
                .long("out")
                .value_name("DIR")
                .help("Output directory")
                .required(true)
                .takes_value(true),
        )
        .arg(
            Arg::with_name("cr")
                .long("cr")
                .help("Remove creation code from the binary"),
        )
        .arg(
            Arg::with_name("gas-limit")
                .long("gas-limit")
                .value_name("GAS")
                .help("Gas available to the constructor when removing creation code")
                .default_value(&default_gas)
                .takes_value(true),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .help("Enable verbose logging"),
        )
        .get_matches();

    let log_level = if matches.is_present("verbose") {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(log_level).init();

    let gas_limit = matches
        .value_of("gas-limit")
        .unwrap_or(&default_gas)
        .parse::<u64>()
        .context("Invalid --gas-limit")?;

    // clap enforces the required flags
    let args = RunArgs {
        abi: PathBuf::from(matches.value_of("abi").unwrap_or_default()),
        bin: PathBuf::from(matches.value_of("bin").unwrap_or_default()),
        out: PathBuf::from(matches.value_of("out").unwrap_or_default()),
        options: BindOptions {
            package: matches.value_of("pkg").unwrap_or_default().to_string(),
            strip_constructor: matches.is_present("cr"),
        },
        gas_limit,
    };

    run(&args)?;
    Ok(())
}

/// Reads both inputs, builds and renders the bindings, then writes `evm.go`.
///
/// Nothing is written unless every step before the write succeeded.
pub fn run(args: &RunArgs) -> Result<PathBuf> {
    let abi_source = fs::read_to_string(&args.abi)
        .with_context(|| format!("Failed to read ABI file: {}", args.abi.display()))?;

    let bytecode = fs::read_to_string(&args.bin)
        .with_context(|| format!("Failed to read bytecode file: {}", args.bin.display()))?;

    let bytecode = bytecode.trim();
    let bytecode = bytecode.strip_prefix("0x").unwrap_or(bytecode);

    let interpreter = RevmInterpreter::new(args.gas_limit);
    let model = binder::bind(&abi_source, bytecode, &args.options, &interpreter)
        .with_context(|| format!("Failed to build bindings from {}", args.abi.display()))?;

    let source = generator::generate(&model);

    fs::create_dir_all(&args.out)
        .with_context(|| format!("Failed to create output directory: {}", args.out.display()))?;
    let output_file = Path::new(&args.out).join(OUTPUT_FILE);
    fs::write(&output_file, source)
        .with_context(|| format!("Failed to write output file: {}", output_file.display()))?;

    info!(
        "Generated {} binding(s) into {}",
        model.methods.len(),
        output_file.display()
    );

    Ok(output_file)
}
