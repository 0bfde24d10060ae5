// src/bin/wordgraph.rs
use std::io::Write;

use clap::Parser;
use colored::Colorize;
use env_logger::Builder;
use log::LevelFilter;

use wordgraph_core::cli::{dispatch, Cli};
use wordgraph_core::exit::WordGraphExit;

fn main() -> WordGraphExit {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match dispatch::execute(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {e}", "error:".red().bold());
            WordGraphExit::for_anyhow(&e)
        }
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Error,
        1 => LevelFilter::Warn,
        2 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    Builder::new()
        .filter_level(level)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();
}
