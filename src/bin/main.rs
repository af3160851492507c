use clap::Parser;

use emi_engine::{compute_emis, CsvLoader};

/// A cli interface to the EMI engine
#[derive(Debug, Parser)]
#[clap(version)]
struct Args {
    /// The path to the loans CSV file
    filename: std::path::PathBuf,
    /// Reject data lines that don't match the header instead of truncating
    #[clap(long)]
    strict: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let loader = match args.strict {
        true => CsvLoader::new().strict(),
        false => CsvLoader::new(),
    };
    let mut dataset = loader.load(&args.filename)?;
    compute_emis(&mut dataset)?;
    dataset.write_csv(std::io::stdout())?;

    Ok(())
}
