mod console_display;
mod error;
mod strategy;
mod weather;

use clap::Parser;
use console_display::ConsoleDisplay;
use error::DemoError;
use std::process;
use std::rc::Rc;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
struct CliArgs {
    /// Log registry and behaviour changes to stderr
    #[clap(long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(console: Rc<ConsoleDisplay>) -> Result<(), DemoError> {
    console.heading("** Strategy Pattern **")?;
    strategy::demo::run(&console)?;

    console.blank()?;
    console.heading("** Observer Pattern **")?;
    weather::station::run(console.clone())?;

    console.flush()?;

    Ok(())
}

fn main() {
    let args = CliArgs::parse();
    init_logging(args.verbose);

    let console = Rc::new(ConsoleDisplay::stdout());
    if let Err(e) = run(console) {
        error!("{}", e);
        process::exit(1);
    }
}
