//! Roll execution: the plain repeat loop and the repeat-until-target loop.

use bones_core::{ResultMode, RollConfig, Roller, SetResult};

use crate::Cli;
use crate::output::{self, LookupTable};

/// Build the roller from the parsed options and run the requested loop.
pub fn run(cli: &Cli) -> Result<(), String> {
    if cli.dice.is_empty() {
        return Ok(());
    }

    let pairs: Vec<(&str, &str)> = cli
        .dice
        .chunks(2)
        .map(|pair| (pair[0].as_str(), pair[1].as_str()))
        .collect();

    let config = RollConfig {
        explode: cli.explode,
        // Target rolls are always tallied, whatever else is set.
        mode: if cli.target.is_some() {
            Some(ResultMode::Tally)
        } else {
            cli.mode.map(ResultMode::from)
        },
        success: cli.success,
        rote: cli.rote,
        botch: cli.botch,
        seed: cli.seed,
    };

    let mut roller = Roller::new(&pairs, &config).map_err(|e| e.to_string())?;
    let table = match &cli.table {
        Some(path) => Some(LookupTable::load(path)?),
        None => None,
    };

    match cli.target {
        Some(target) => run_until_target(cli, &mut roller, target),
        None => run_repeats(cli, &mut roller, table.as_ref()),
    }
}

/// Roll the full specification a fixed number of times.
fn run_repeats(cli: &Cli, roller: &mut Roller, table: Option<&LookupTable>) -> Result<(), String> {
    let repeats = cli.repeats.unwrap_or(1);
    let mut all: Vec<Vec<SetResult>> = Vec::with_capacity(repeats as usize);

    for _ in 0..repeats {
        roller.do_roll();
        let results = roller.results().to_vec();

        if !cli.json {
            if cli.debug {
                output::print_raw(roller.raw_rolls());
            }
            for result in &results {
                output::print_result(result);
                if let Some(table) = table {
                    output::print_lookups(table, result);
                }
            }
            if cli.aggregate {
                output::print_total(output::grand_total(&results));
            }
        }
        all.push(results);
    }

    if cli.json {
        output::print_json(&all)?;
    } else if cli.aggregate && all.len() > 1 {
        output::print_summary_table(&all);
    }
    Ok(())
}

/// Roll until the accumulated tally reaches the target, bounded by
/// `--repeat` when given, then report how long it took.
fn run_until_target(cli: &Cli, roller: &mut Roller, target: i64) -> Result<(), String> {
    let mut tally: i64 = 0;
    let mut rolls: u64 = 0;

    if cli.aggregate && !cli.json {
        println!("Roll totals:");
    }

    while tally < target && cli.repeats.is_none_or(|cap| rolls < u64::from(cap)) {
        roller.do_roll();
        let results = roller.results().to_vec();
        let roll_total = output::grand_total(&results);

        if !cli.json {
            if cli.debug {
                output::print_raw(roller.raw_rolls());
            }
            if cli.aggregate {
                println!(" {roll_total}");
            }
        }

        tally += roll_total;
        rolls += 1;
    }

    if cli.json {
        output::print_target_json(target, rolls, tally)
    } else {
        println!("Target: {target}");
        println!(" Rolls: {rolls}");
        println!(" Tally: {tally}");
        Ok(())
    }
}
