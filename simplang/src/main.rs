use clap::Parser;
use console::style;
use log::{Level, LevelFilter};
use simplang::{run, Error, Mode};
use simplang_source::Source;
use std::{io, path::PathBuf, process};

#[derive(Debug, Parser)]
#[command(name = "simplang", version, about = "Lex, parse or evaluate a simplang expression")]
struct Cli {
    /// Source file to process.
    file: PathBuf,
    /// What to do with the file.
    #[arg(short, long, value_enum, default_value_t = Mode::Tree)]
    mode: Mode,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn setup_logger(verbose: u8) -> Result<(), fern::InitError> {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    fern::Dispatch::new()
        .format(|out, message, record| {
            let level = match record.level() {
                Level::Error => style("ERROR").red().bold(),
                Level::Warn => style("WARN ").yellow().bold(),
                Level::Info => style("INFO ").green().bold(),
                Level::Debug => style("DEBUG").blue().bold(),
                Level::Trace => style("TRACE").magenta().bold(),
            };
            out.finish(format_args!("{} [{}] {}", level, record.target(), message))
        })
        .level(level)
        .chain(io::stderr())
        .apply()?;
    Ok(())
}

fn run_file(cli: &Cli) -> Result<(), Error> {
    let source = Source::load(&cli.file)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(cli.mode, &source, &mut out)
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = setup_logger(cli.verbose) {
        eprintln!("{} cannot set up logging: {}", style("warning:").yellow().bold(), err);
    }

    if let Err(err) = run_file(&cli) {
        eprintln!("{} {}", style("error:").red().bold(), err);
        process::exit(1);
    }
}
