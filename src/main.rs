//Enable more cargo lint tests
#![warn(rust_2018_idioms)]
#![warn(clippy::disallowed_types)]

use std::io;
use std::process::exit;

use log::{info, LevelFilter};
use simplelog::{Config, TermLogger, TerminalMode};

use huffcode::tools::cli::{huffopts_init, HuffOpts};
use huffcode::tools::report::render_output;
use huffcode::{filter_spaces, HuffmanEncoding};

fn main() {
    // Available log levels are Error, Warn, Info, Debug, Trace. The command line narrows this.
    // Logs go to stderr so stdout carries only the results.
    if TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
    .is_err()
    {
        eprintln!("Could not start the terminal logger");
    }

    let options = huffopts_init();

    // Reported even with --quiet, which turns logging off.
    if let Err(e) = run(&options) {
        eprintln!("huffcode: {}", e);
        exit(1);
    }
    info!("Done.");
}

fn run(options: &HuffOpts) -> io::Result<()> {
    let raw = options.read_text()?;
    let text = if options.filter { filter_spaces(&raw) } else { raw };

    let enc = HuffmanEncoding::new(&text)?;
    print!("{}", render_output(&enc, options));
    Ok(())
}
