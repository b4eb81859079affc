use kml2json::process;
use std::error::Error;
use std::fs::File;
use std::io::stdout;
use std::path::PathBuf;
use structopt::StructOpt;

/// Summarize the contents of a KML document
#[derive(StructOpt)]
#[structopt(name = "kml2json")]
struct Cli {
    /// KML file to read
    #[structopt(parse(from_os_str))]
    file: PathBuf,
    /// Emit the features as a GeoJSON FeatureCollection instead of a summary
    #[structopt(long)]
    geojson: bool,
    /// Account nested LineString lengths to their GeometryCollection
    #[structopt(long)]
    strict: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Cli::from_args();
    let file = File::open(&args.file)?;
    let mut writer = stdout();
    process(file, &mut writer, args.geojson, args.strict)?;
    Ok(())
}
