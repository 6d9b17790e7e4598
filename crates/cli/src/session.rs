use farmstead_core::FarmEntity;
use farmstead_farm::{BatchOutcome, FarmManager};

use crate::command::{Command, CommandError, HELP};

fn summarize(verb: &str, outcome: &BatchOutcome) -> String {
    let mut out = format!("{verb}: {} ok, {} failed", outcome.succeeded.len(), outcome.failures.len());
    for failure in &outcome.failures {
        out.push_str(&format!("\n  - {} ({}): {}", failure.name, failure.id, failure.error));
    }
    out
}

/// Run one command against the farm and render the result.
///
/// `Quit` is handled by the caller's loop; executing it is a no-op.
pub fn execute(farm: &mut FarmManager, command: Command) -> Result<String, CommandError> {
    let text = match command {
        Command::AddAnimal { species, name } => {
            let id = farm.add_animal(species, &name)?;
            format!("Added {species} {name} (ID: {id}). {}", species.profile().sound)
        }
        Command::AddCrop { kind, name } => {
            let id = farm.add_crop(kind, &name)?;
            format!(
                "Added {kind} {name} (ID: {id}), matures after {} days of growth",
                kind.profile().maturity
            )
        }
        Command::Feed { target, amount } => {
            let id = farm.resolve(&target)?;
            farm.feed_animal(id, amount)?;
            let status = farm.entity(id).map(|e| e.status()).unwrap_or_default();
            format!("Fed {amount} units. {status}")
        }
        Command::FeedAll { amount } => summarize("Feed all", &farm.feed_all_animals(amount)?),
        Command::Produce { target } => {
            let id = farm.resolve(&target)?;
            let product = farm.produce_animal(id)?;
            format!("Produced {} units of {}", product.quantity(), product.name())
        }
        Command::ProduceAll => summarize("Produce all", &farm.produce_from_all_animals()),
        Command::Grow { target, days } => {
            let id = farm.resolve(&target)?;
            farm.grow_crop(id, days)?;
            let status = farm.entity(id).map(|e| e.status()).unwrap_or_default();
            format!("Grew {days} days. {status}")
        }
        Command::GrowAll { days } => summarize("Grow all", &farm.grow_all_crops(days)?),
        Command::Water { target } => {
            let id = farm.resolve(&target)?;
            farm.water_crop(id)?;
            format!("Watered {id}")
        }
        Command::WaterAll => summarize("Water all", &farm.water_all_crops()),
        Command::Harvest { target } => {
            let id = farm.resolve(&target)?;
            let product = farm.harvest_crop(id)?;
            format!("Harvested {} units of {}", product.quantity(), product.name())
        }
        Command::HarvestAll => summarize("Harvest all", &farm.harvest_all_mature_crops()),
        Command::Sell { product, quantity } => {
            let revenue = farm.sell_product(&product, quantity)?;
            format!(
                "Sold {quantity} units for K{revenue}. Total profit: K{}",
                farm.total_profit()
            )
        }
        Command::Day => {
            let summary = farm.simulate_day();
            let mut out = format!(
                "Day {} simulated: {} crop(s) grew, {} animal(s) auto-fed",
                summary.day,
                summary.crops_grown.len(),
                summary.auto_fed.succeeded.len()
            );
            for failure in &summary.auto_fed.failures {
                out.push_str(&format!("\n  Could not feed {}: {}", failure.name, failure.error));
            }
            out
        }
        Command::Report { json: false } => farm.report().to_string(),
        Command::Report { json: true } => farm
            .report()
            .to_json()
            .map_err(|e| CommandError::Render(e.to_string()))?,
        Command::Help => HELP.to_string(),
        Command::Quit => String::new(),
    };
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(farm: &mut FarmManager, line: &str) -> Result<String, CommandError> {
        execute(farm, line.parse()?)
    }

    #[test]
    fn full_session_by_name() {
        let mut farm = FarmManager::default();
        let added = run(&mut farm, "add-animal cow Bessie").unwrap();
        assert_eq!(added, "Added Cow Bessie (ID: ENT0001). Moooo!");

        run(&mut farm, "feed bessie 20").unwrap();
        assert_eq!(run(&mut farm, "produce Bessie").unwrap(), "Produced 10 units of Milk");
        assert_eq!(
            run(&mut farm, "sell milk 5").unwrap(),
            "Sold 5 units for K301.75. Total profit: K301.75"
        );
    }

    #[test]
    fn domain_errors_surface_as_command_errors() {
        let mut farm = FarmManager::default();
        run(&mut farm, "add-crop wheat W1").unwrap();
        let err = run(&mut farm, "harvest W1").unwrap_err();
        assert!(err.to_string().contains("not mature"));

        let err = run(&mut farm, "feed W1 5").unwrap_err();
        assert!(matches!(
            err,
            CommandError::Farm(farmstead_core::FarmError::WrongType { .. })
        ));
    }

    #[test]
    fn batch_commands_summarize() {
        let mut farm = FarmManager::default();
        run(&mut farm, "add-crop vegetables Patch").unwrap();
        assert_eq!(run(&mut farm, "grow-all 5").unwrap(), "Grow all: 1 ok, 0 failed");
        assert_eq!(run(&mut farm, "harvest-all").unwrap(), "Harvest all: 1 ok, 0 failed");
        assert!(run(&mut farm, "day").unwrap().starts_with("Day 1 simulated"));
        assert!(run(&mut farm, "report --json").unwrap().contains("\"farm_name\""));
    }
}
