use anyhow::Context;
use clap::Parser;
use gem_rush_core::{GameSession, RevealOutcome, StakeOutcome};
use std::io::{self, BufRead, Write};

use args::Args;
use command::Command;

mod args;
mod command;
mod render;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(args.verbose.log_level_filter().as_str().to_ascii_lowercase())
    });
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let config = args.load_config()?;
    let seed = args.seed.unwrap_or_else(rand::random);
    log::debug!("seed: {}", seed);
    log::debug!("config: {:?}", config);

    let mut session = GameSession::with_placement(config.settings, config.placement, seed)
        .context("could not deal the first game")?;

    let mut out = io::stdout().lock();
    writeln!(out, "{}", command::HELP)?;
    render::draw(&mut out, session.state(), config.columns)?;

    for line in io::stdin().lock().lines() {
        let line = line.context("reading command")?;
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(command::ParseCommandError::Empty) => continue,
            Err(err) => {
                writeln!(out, "{err}")?;
                continue;
            }
        };

        match command {
            Command::Reveal(index) => match session.reveal_cell(index) {
                Ok(RevealOutcome::Gem) => writeln!(out, "Gem!")?,
                Ok(RevealOutcome::Ruby) => writeln!(out, "Ruby!")?,
                Ok(RevealOutcome::NoChange) => {
                    writeln!(out, "Nothing happens.")?;
                    continue;
                }
                Err(err) => {
                    writeln!(out, "{err}")?;
                    continue;
                }
            },
            Command::Stake(stake) => match session.set_stake(stake) {
                Ok(StakeOutcome::Changed) => {}
                Ok(StakeOutcome::NoChange) => {
                    writeln!(out, "The stake is locked until the next game.")?;
                    continue;
                }
                Err(err) => {
                    writeln!(out, "{err}")?;
                    continue;
                }
            },
            Command::NewGame => session.reset_game(),
            Command::Show => {}
            Command::Help => {
                writeln!(out, "{}", command::HELP)?;
                continue;
            }
            Command::Quit => break,
        }

        render::draw(&mut out, session.state(), config.columns)?;
    }

    log::debug!("Bye");
    Ok(())
}
