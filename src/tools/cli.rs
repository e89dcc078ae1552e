use std::fmt::{Display, Formatter};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::Parser;
use log::{info, warn};

/// Verbosity of user information
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Quiet,
    Errors,
    Warnings,
    Info,
    Debug,
    Trace,
}

impl Verbosity {
    /// Map a count of `-v` flags onto a level. No flag means errors only.
    pub fn from_count(count: u64) -> Self {
        match count {
            0 => Verbosity::Errors,
            1 => Verbosity::Warnings,
            2 => Verbosity::Info,
            3 => Verbosity::Debug,
            _ => Verbosity::Trace,
        }
    }

    pub fn level_filter(self) -> log::LevelFilter {
        match self {
            Verbosity::Quiet => log::LevelFilter::Off,
            Verbosity::Errors => log::LevelFilter::Error,
            Verbosity::Warnings => log::LevelFilter::Warn,
            Verbosity::Info => log::LevelFilter::Info,
            Verbosity::Debug => log::LevelFilter::Debug,
            Verbosity::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Where the text to encode comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Arg(String),
    File(PathBuf),
    Stdin,
}

impl Display for Source {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::Arg(_) => write!(f, "the command line"),
            Source::File(path) => write!(f, "the file {}", path.display()),
            Source::Stdin => write!(f, "stdin"),
        }
    }
}

/// Define all user settable options to control program behavior
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffOpts {
    /// Where to read the input text
    pub source: Source,
    /// Strip spaces and newlines before encoding
    pub filter: bool,
    /// Print the code table
    pub show_table: bool,
    /// Print the tree outline
    pub show_tree: bool,
    /// Print only the encoded bits
    pub quiet: bool,
    /// Verbosity of user information
    pub verbose: Verbosity,
}

impl HuffOpts {
    pub fn new() -> Self {
        Self {
            source: Source::Stdin,
            filter: true,
            show_table: false,
            show_tree: false,
            quiet: false,
            verbose: Verbosity::Errors,
        }
    }

    /// Read the raw, unfiltered text from the configured source.
    pub fn read_text(&self) -> io::Result<String> {
        match &self.source {
            Source::Arg(text) => Ok(text.clone()),
            Source::File(path) => fs::read_to_string(path),
            Source::Stdin => {
                let mut text = String::new();
                io::stdin().read_to_string(&mut text)?;
                Ok(text)
            }
        }
    }
}

impl Default for HuffOpts {
    fn default() -> Self {
        Self::new()
    }
}

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "Huffman-encode a piece of text",
    long_about = "
    Builds a Huffman code for the symbols of the input text and prints the encoded bits
    along with the input size (in symbols) and the encoded size (in bytes).

    Spaces and newlines are stripped from the text before it is encoded unless
    --keep-whitespace is given."
)]
pub struct Args {
    /// Text to encode. Read from --input or stdin when absent.
    #[clap(conflicts_with = "input")]
    text: Option<String>,

    /// Read the text to encode from this file
    #[clap(short = 'i', long = "input", parse(from_os_str))]
    input: Option<PathBuf>,

    /// Keep spaces and newlines as symbols
    #[clap(short = 'k', long = "keep-whitespace")]
    keep_whitespace: bool,

    /// Print the code table, shortest codes first
    #[clap(short = 't', long = "table")]
    table: bool,

    /// Print the Huffman tree
    #[clap(short = 'T', long = "tree")]
    tree: bool,

    /// Print the encoded bits only
    #[clap(short = 'q', long = "quiet")]
    quiet: bool,

    /// Sets verbosity. -v shows warnings, -vvvv is chatty
    #[clap(short = 'v', parse(from_occurrences))]
    v: u64,
}

impl From<Args> for HuffOpts {
    fn from(args: Args) -> Self {
        let source = match (args.text, args.input) {
            (Some(text), _) => Source::Arg(text),
            (None, Some(path)) => Source::File(path),
            (None, None) => Source::Stdin,
        };
        Self {
            source,
            filter: !args.keep_whitespace,
            show_table: args.table,
            show_tree: args.tree,
            quiet: args.quiet,
            verbose: if args.quiet {
                Verbosity::Quiet
            } else {
                Verbosity::from_count(args.v)
            },
        }
    }
}

/// Put command line information from CLAP into our internal structure and set the log level.
pub fn huffopts_init() -> HuffOpts {
    let opts = HuffOpts::from(Args::parse());

    log::set_max_level(opts.verbose.level_filter());

    // Below we report initialization status to the user
    info!("---- Huffman Initialization Start ----");
    info!("Verbosity set to {}", log::max_level());
    info!("Getting input from {}", opts.source);
    if !opts.filter {
        warn!("Keeping spaces and newlines in the input");
    }
    info!("---- Huffman Initialization End ----");
    opts
}
