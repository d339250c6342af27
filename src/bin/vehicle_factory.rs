use clap::{Parser, ValueEnum};
use oop_exercises::app::showroom;
use oop_exercises::config::LogFormat;
use oop_exercises::utils::logger;
use oop_exercises::Region;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum RegionArg {
    Us,
    Eu,
    All,
}

impl RegionArg {
    fn region(self) -> Option<Region> {
        match self {
            RegionArg::Us => Some(Region::Us),
            RegionArg::Eu => Some(Region::Eu),
            RegionArg::All => None,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "vehicle-factory")]
#[command(about = "Builds region-specific vehicles and starts their engines")]
struct Args {
    /// Which factories to run
    #[arg(short, long, value_enum, default_value = "all")]
    region: RegionArg,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init_logger(args.verbose, "info", LogFormat::Compact);

    tracing::debug!("Showroom args: {:?}", args);

    for message in showroom::start_engines(args.region.region()) {
        println!("{}", message);
    }

    Ok(())
}
