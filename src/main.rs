use polars::prelude::*;
use polars_glimpse::{Engine, GlimpseExt, GlimpseOptions};
use std::env;
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("usage: polars-glimpse <file.csv> [max_width] [engine]");
        return ExitCode::FAILURE;
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &[String]) -> Result<(), Box<dyn Error>> {
    // Validate the options before touching the file.
    let mut options = GlimpseOptions::default();
    if let Some(width) = args.get(2) {
        options.max_width = width.parse()?;
    }
    if let Some(engine) = args.get(3) {
        options.engine = engine.parse::<Engine>()?;
    }

    let path = &args[1];
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(PathBuf::from(path)))?
        .finish()?;
    log::info!(
        "loaded {} rows of {} columns from {}",
        df.height(),
        df.width(),
        path
    );

    df.glimpse_with(&options).print();
    Ok(())
}
