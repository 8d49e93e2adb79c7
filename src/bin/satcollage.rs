use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "satcollage", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build a collage PNG from 2 to 4 images.
    Build(BuildArgs),
    /// Print the timestamp label extracted from each filename.
    Timestamp(TimestampArgs),
}

#[derive(Parser, Debug)]
struct BuildArgs {
    /// Input images, placed row-major in the given order.
    #[arg(required = true)]
    images: Vec<PathBuf>,

    /// Satellite source shown in the title (default: SENTINEL 2).
    #[arg(long)]
    satellite: Option<String>,

    /// Orbit type shown in the title (default: GEOSTACJONARNA).
    #[arg(long)]
    orbit: Option<String>,

    /// Directory the collage is written to.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// JSON file overriding rendering settings.
    #[arg(long)]
    settings: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct TimestampArgs {
    /// Filenames to inspect (the files need not exist).
    #[arg(required = true)]
    names: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Build(args) => cmd_build(args),
        Command::Timestamp(args) => cmd_timestamp(args),
    }
}

fn cmd_build(args: BuildArgs) -> anyhow::Result<()> {
    let settings = match &args.settings {
        Some(path) => satcollage::CollageSettings::from_json_file(path)?,
        None => satcollage::CollageSettings::default(),
    };

    // Reject the selection before reading any file.
    let n = args.images.len();
    if !(satcollage::MIN_IMAGES..=satcollage::MAX_IMAGES).contains(&n) {
        anyhow::bail!(
            "select between {} and {} images (got {n})",
            satcollage::MIN_IMAGES,
            satcollage::MAX_IMAGES
        );
    }

    let images = args
        .images
        .iter()
        .map(|p| satcollage::SourceImage::from_path(p))
        .collect::<Result<Vec<_>, _>>()?;

    let mut request = satcollage::CollageRequest::new(images);
    request.satellite_source = args.satellite;
    request.orbit_type = args.orbit;

    let mut session = satcollage::CollageSession::new(settings)?;
    let result = session.build(&request)?;

    for cell in result.failed_cells() {
        if let satcollage::CellStatus::Placeholder { reason } = &cell.status {
            eprintln!("warning: {} could not be decoded: {reason}", cell.file_name);
        }
    }

    let path = result
        .save_to_dir(&args.out_dir)
        .with_context(|| "save collage")?;
    eprintln!("wrote {}", path.display());
    println!("{}", path.display());
    Ok(())
}

fn cmd_timestamp(args: TimestampArgs) -> anyhow::Result<()> {
    for name in &args.names {
        println!("{name}\t{}", satcollage::extract_timestamp(name));
    }
    Ok(())
}
