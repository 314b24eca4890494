use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use blf::config::BLFConfig;
use blf::io::cli::Cli;
use blf::io::output::NestOutput;
use blf::opt::blf_optimizer::BLFOptimizer;
use blf::io;
use clap::Parser as ClapParser;
use log::{info, warn};

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            BLFConfig::default()
        }
        Some(config_file) => io::read_json(&config_file).context("incorrect config file format")?,
    };

    info!("[MAIN] Successfully parsed BLFConfig: {config:?}");

    let input_file_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .context("input file has no valid name")?
        .to_owned();

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!(
                "could not create solution folder: {}",
                args.solution_folder.display()
            )
        })?;
    }

    let ext_instance = io::read_instance(&args.input_file)?;
    let (options, parts) = sheetnest::io::import(&ext_instance)?;
    info!(
        "[MAIN] Nesting {} parts on {}x{} sheets (margin {}, spacing {})",
        parts.len(),
        options.sheet_width,
        options.sheet_height,
        options.margin,
        options.spacing
    );

    let result = BLFOptimizer::new(options, config).solve(&parts);

    let output = NestOutput {
        instance: ext_instance,
        solution: sheetnest::io::export(&result, &options),
        config,
    };
    let solution_path = args.solution_folder.join(format!("sol_{input_file_stem}.json"));
    io::write_json(&output, Path::new(&solution_path))?;

    Ok(())
}
