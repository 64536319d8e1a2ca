use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

/// Push: a simple file pushing utility.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// The name of the target
    #[arg(default_value = "all")]
    target: String,

    /// Name of the pushfile
    #[arg(short = 'f', long, default_value = "pushfile")]
    pushfile: PathBuf,

    /// Print the loaded targets and their commands instead of running them
    #[arg(short, long)]
    list: bool,
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::formatted_builder()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let cli = Cli::parse();

    let push_file = push_core::load(&cli.pushfile)?;

    if cli.list {
        print!("{push_file}");
        return Ok(());
    }

    let report = push_file
        .run_target(&cli.target)
        .with_context(|| format!("Could not push target `{}`", cli.target))?;

    if !report.is_clean() {
        eprintln!(
            "Push: {} output file(s) could not be written",
            report.output_failures.len()
        );
    }

    Ok(())
}
