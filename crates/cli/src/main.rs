use std::io::{self, BufRead, Write};

use anyhow::Context;

use farmstead_cli::{Command, execute};
use farmstead_farm::{FarmConfig, FarmManager};

fn prompt() -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    write!(stdout, "> ")?;
    stdout.flush()
}

fn main() -> anyhow::Result<()> {
    farmstead_observability::init();

    let config = FarmConfig::from_env();
    let mut farm = FarmManager::new(config).context("invalid farm configuration")?;
    tracing::info!(farm = farm.name(), "farm ready");

    println!("{} - type `help` for commands", farm.name());
    prompt()?;
    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read command")?;
        if !line.trim().is_empty() {
            match line.parse::<Command>() {
                Ok(Command::Quit) => break,
                Ok(command) => match execute(&mut farm, command) {
                    Ok(text) => println!("{text}"),
                    Err(e) => println!("Error: {e}"),
                },
                Err(e) => println!("Error: {e}"),
            }
        }
        prompt()?;
    }
    Ok(())
}
