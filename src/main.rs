use clap::Parser;
use log::info;
use std::{
    path::{Path, PathBuf},
    process::ExitCode,
};

/// Print the dominant colors of an image as #RRGGBB lines
#[derive(Parser)]
#[command(name = "mmcq", version)]
struct Options {
    /// The image to quantize
    image: PathBuf,

    /// How many times to bisect the pixels; prints 2^LEVELS colors
    #[arg(default_value_t = mmcq::DEFAULT_LEVELS, value_parser = mmcq::parse_levels)]
    levels: u32,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let Options { image, levels } = Options::parse();

    match run(&image, levels) {
        Ok(palette) => {
            print!("{palette}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("mmcq: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(path: &Path, levels: u32) -> mmcq::Result<mmcq::Palette> {
    let image = mmcq::open(path)?;
    info!("quantizing {} into {} colors", path.display(), 1usize << levels);

    mmcq::Palette::from_image(image).levels(levels).generate()
}
