//! Puzzle CLI - run registered puzzle solvers against local inputs

mod cli;
mod config;
mod error;
mod executor;
mod inputs;
mod output;

// Link puzzle-solutions so its solver plugins are registered
use puzzle_solutions as _;

use clap::Parser;
use cli::Args;
use config::Config;
use executor::Executor;
use output::OutputFormatter;
use puzzle_solver::RegistryBuilder;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(args) {
        Ok(0) => {}
        Ok(_) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Logs go to stderr so stdout carries only answers. `RUST_LOG` wins over
/// `--verbose`.
fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter_layer =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}

/// Returns the number of failed parts
fn run(args: Args) -> Result<usize, error::CliError> {
    let config = Config::from_args(args)?;
    let registry = build_registry(&config.tags)?;
    let formatter = OutputFormatter::new(config.quiet);

    if config.list {
        let solvers: Vec<_> = registry.iter_info().collect();
        formatter.print_listing(&solvers);
        return Ok(0);
    }

    let executor = Executor::new(registry, &config);

    let work_items = executor.collect_work_items();
    if work_items.is_empty() {
        println!("No solvers found matching the specified filters.");
        return Ok(0);
    }

    let missing = executor.missing_inputs(&work_items);
    if !missing.is_empty() && !config.quiet {
        println!("Missing {} input file(s):", missing.len());
        for work in &missing {
            println!("  - {}", executor.input_path(work.id).display());
        }
    }

    if !config.quiet {
        println!("Running {} solver(s)...", work_items.len());
    }

    let mut results = Vec::new();
    executor.execute(&work_items, |result| {
        formatter.print_result(&result);
        results.push(result);
    });
    formatter.print_summary(&results);

    Ok(results.iter().filter(|r| r.answer.is_err()).count())
}

/// Build registry with tag filtering
fn build_registry(tags: &[String]) -> Result<puzzle_solver::SolverRegistry, error::CliError> {
    let builder = RegistryBuilder::new();

    let builder = if tags.is_empty() {
        builder.register_all_plugins()?
    } else {
        builder.register_solver_plugins(|plugin| carries_all_tags(plugin.tags, tags))?
    };

    Ok(builder.build())
}

/// A solver is selected only when it carries every requested tag
fn carries_all_tags(solver_tags: &[&str], wanted: &[String]) -> bool {
    wanted.iter().all(|tag| solver_tags.contains(&tag.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(list: &[&str]) -> Vec<String> {
        list.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_tag_filter_requires_every_tag() {
        let solver_tags = ["ranges", "almanac"];

        assert!(carries_all_tags(&solver_tags, &tags(&["ranges"])));
        assert!(carries_all_tags(&solver_tags, &tags(&["ranges", "almanac"])));
        assert!(!carries_all_tags(&solver_tags, &tags(&["ranges", "grid"])));
        assert!(carries_all_tags(&solver_tags, &[]));
    }

    #[test]
    fn test_registry_filtered_by_tags() {
        let id = puzzle_solver::PuzzleId::new(2023, 5);

        let selected = build_registry(&tags(&["ranges", "almanac"])).unwrap();
        assert!(selected.contains(id));

        let excluded = build_registry(&tags(&["ranges", "grid"])).unwrap();
        assert!(!excluded.contains(id));
    }
}
