// src/bin/cli.rs
use color_eyre::eyre::eyre;
use mini_leaderboard::{cli::{self, Mode}, log};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    log::init();

    match cli::detect_mode().map_err(|e| eyre!("{e}"))? {
        Mode::Help => {
            println!("{}", cli::HELP);
            Ok(())
        }
        Mode::Run(opts) => cli::run(opts).map_err(|e| eyre!("{e}")),
    }
}
