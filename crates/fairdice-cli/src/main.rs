//! Interactive terminal frontend for the fairdice protocol.

mod app;
mod prompt;
mod render;

use std::process;

use clap::Parser;
use colored::Colorize;
use fairdice_core::{Die, Error};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(
    name = "fairdice",
    about = "Provably-fair game over non-transitive dice",
    version
)]
struct Cli {
    /// Dice specs, each exactly six non-negative integers, e.g. "2,2,4,4,9,9"
    #[arg(value_name = "DIE", required = true, num_args = 1..)]
    dice: Vec<String>,
}

fn main() {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("setting default subscriber failed");

    let cli = Cli::parse();
    let dice = match parse_dice(&cli.dice) {
        Ok(dice) => dice,
        Err(err) => {
            eprintln!("{} {err}", "error:".red().bold());
            eprintln!("example: fairdice 2,2,4,4,9,9 6,8,1,1,8,6 7,5,3,7,5,3");
            process::exit(2);
        }
    };

    if let Err(err) = app::App::new(dice).run() {
        eprintln!("{} {err}", "error:".red().bold());
        process::exit(1);
    }
}

/// Parse the startup dice specs: at least three, each exactly six
/// non-negative integers. Anything else is a fatal configuration error.
fn parse_dice(specs: &[String]) -> Result<Vec<Die>, Error> {
    if specs.len() < 3 {
        return Err(Error::InvalidConfiguration(format!(
            "need at least 3 dice specs, got {}",
            specs.len()
        )));
    }
    specs.iter().map(|spec| spec.parse()).collect()
}
