//! Fair Non-Transitive Dice
//!
//! Play one round against the computer with every random choice made by a
//! commit-reveal draw you can check afterwards.

mod console;
mod table;

use clap::{Parser, Subcommand};
use console::Console;
use dice_game_core::{
    Commitment, DiceSet, Die, ProbabilityMatrix, RngSource, Round, RoundError, SecretKey,
};
use std::error::Error;
use std::io;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(name = "dice-game")]
#[command(about = "Provably fair non-transitive dice against the computer")]
#[command(version)]
struct Cli {
    /// Verbose logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play one round
    Play {
        /// Dice as comma-separated faces, e.g. 2,2,4,4,9,9 (at least three)
        #[arg(value_name = "DIE")]
        dice: Vec<Die>,

        /// Print the round summary with every draw transcript as JSON
        #[arg(long, env = "DICE_GAME_JSON")]
        json: bool,
    },
    /// Print the win probability table for a set of dice
    Table {
        /// Dice as comma-separated faces
        #[arg(value_name = "DIE")]
        dice: Vec<Die>,
    },
    /// Check a disclosed key and value against a published HMAC
    Verify {
        /// Disclosed key (hex)
        #[arg(long)]
        key: SecretKey,
        /// Disclosed value
        #[arg(long)]
        value: u32,
        /// HMAC shown before your selection (hex)
        #[arg(long)]
        hmac: Commitment,
    },
}

fn init_logging(verbose: bool) -> Result<(), Box<dyn Error>> {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("dice_game={},dice_game_core={}", level, level))
    });
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn play(dice: Vec<Die>, json: bool) -> Result<(), Box<dyn Error>> {
    let round = Round::new(DiceSet::new(dice)?, RngSource::os());
    let help = table::render(round.dice(), &ProbabilityMatrix::compute(round.dice()));

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout(), help);
    info!(round = %round.id(), "starting round");

    match round.run(&mut console) {
        Ok(summary) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            }
            Ok(())
        }
        Err(RoundError::Aborted) => {
            info!("round abandoned");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

fn show_table(dice: Vec<Die>) -> Result<(), Box<dyn Error>> {
    let dice = DiceSet::new(dice)?;
    println!("{}", table::render(&dice, &ProbabilityMatrix::compute(&dice)));
    Ok(())
}

fn verify(key: &SecretKey, value: u32, hmac: &Commitment) -> Result<(), Box<dyn Error>> {
    if hmac.verify(key, value) {
        println!("OK: HMAC {} matches value {}", hmac, value);
        Ok(())
    } else {
        Err(format!("HMAC {} does not match value {} under the given key", hmac, value).into())
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.verbose) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    let result = match cli.command {
        Commands::Play { dice, json } => play(dice, json),
        Commands::Table { dice } => show_table(dice),
        Commands::Verify { key, value, hmac } => verify(&key, value, &hmac),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
