use std::{fmt::Display, fmt::Formatter};

use clap::Parser;
use log::info;

/// Container extension written on compression and stripped on decompression.
pub const CONTAINER_EXT: &str = ".srr";

/// Zip or Unzip
#[derive(Debug)]
pub enum Mode {
    Zip,
    Unzip,
}
impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Resolved options handed to main after parsing the command line.
#[derive(Debug)]
pub struct SrOpts {
    /// Compress or decompress
    pub op_mode: Mode,
    /// Name of the file to read for input
    pub file: String,
    /// Name of the file to write
    pub output: String,
    /// Silently overwrite an existing output file with the same name
    pub force_overwrite: bool,
}

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "A block-sorting, context-mixing file compressor",
    long_about = None)]
pub struct Args {
    /// Filename of file to process
    #[clap()]
    filename: String,

    /// Perform compression on the input file (the default)
    #[clap(short = 'z', long = "zip")]
    compress: bool,

    /// Perform decompression on the input file
    #[clap(short = 'd', long = "decompress")]
    decompress: bool,

    /// Write output to this path instead of deriving it from the input name
    #[clap(short = 'o', long = "output")]
    output: Option<String>,

    /// Force overwriting the output file
    #[clap(short = 'f', long = "force")]
    force: bool,

    /// Sets verbosity. -v shows very little, -vvvv is chatty
    #[clap(short = 'v', parse(from_occurrences))]
    v: usize,
}

/// Copy command line settings into our internal structure and set the log
/// level, then report initialization status to the user.
pub fn sropts_init() -> SrOpts {
    let args = Args::parse();

    // An explicit -z wins; otherwise -d selects decompression
    let op_mode = if args.decompress && !args.compress {
        Mode::Unzip
    } else {
        Mode::Zip
    };

    // Default output name: append the container extension when zipping,
    // strip it when unzipping.
    let output = match (&args.output, &op_mode) {
        (Some(path), _) => path.clone(),
        (None, Mode::Zip) => format!("{}{}", args.filename, CONTAINER_EXT),
        (None, Mode::Unzip) => match args.filename.strip_suffix(CONTAINER_EXT) {
            Some(stem) => stem.to_string(),
            None => format!("{}.out", args.filename),
        },
    };

    // Set the log level
    match args.v {
        0 => log::set_max_level(log::LevelFilter::Warn),
        1 => log::set_max_level(log::LevelFilter::Info),
        2 => log::set_max_level(log::LevelFilter::Debug),
        _ => log::set_max_level(log::LevelFilter::Trace),
    };

    info!("---- srzip initialization start ----");
    info!("Verbosity set to {}", log::max_level());
    info!("Operational mode set to {}", op_mode);
    info!("Getting input from the file {}", args.filename);
    info!("Sending output to the file {}", output);
    if args.force {
        info!("Forcing file overwriting")
    };
    info!("---- srzip initialization end ----\n");

    SrOpts {
        op_mode,
        file: args.filename,
        output,
        force_overwrite: args.force,
    }
}
