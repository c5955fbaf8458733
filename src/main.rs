//Enable more cargo lint tests
#![warn(rust_2018_idioms)]
#![warn(clippy::disallowed_types)]

use std::fs;
use std::path::Path;

use log::{error, info, LevelFilter};
use simplelog::{Config, TermLogger, TerminalMode};

use srzip::compression::compress::compress;
use srzip::compression::decompress::decompress;
use srzip::tools::cli::{sropts_init, Mode};

fn main() -> Result<(), std::io::Error> {
    // Available log levels are Error, Warn, Info, Debug, Trace
    TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Stdout,
        simplelog::ColorChoice::AlwaysAnsi,
    )
    .unwrap();

    let opts = sropts_init();

    // The engine always refuses an existing output file. Overwriting is a
    // surface decision, so the force flag is resolved here.
    if opts.force_overwrite && Path::new(&opts.output).exists() {
        fs::remove_file(&opts.output)?;
    }

    //----- Figure out what we need to do and go do it
    let result = match opts.op_mode {
        Mode::Zip => compress(&opts.file, &opts.output),
        Mode::Unzip => decompress(&opts.file, &opts.output),
    };

    match &result {
        Ok(()) => info!("Done.\n"),
        Err(e) => error!("{}", e),
    }
    result
}
