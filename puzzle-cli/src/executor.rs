//! Sequential executor for running selected solvers

use crate::config::Config;
use crate::error::ExecutorError;
use crate::inputs::InputSource;
use chrono::TimeDelta;
use puzzle_solver::{DynSolver, PuzzleId, SolverError, SolverRegistry};
use std::ops::RangeInclusive;
use tracing::{debug, info, warn};

/// Result from a single part
pub struct SolverResult {
    pub id: PuzzleId,
    pub part: u8,
    pub answer: Result<String, ExecutorError>,
    /// Parse time of the puzzle, reported on its first part only
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: TimeDelta,
}

/// A puzzle to run and the parts selected for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub id: PuzzleId,
    pub parts: RangeInclusive<u8>,
}

/// Runs work items one after another, in year/day/part order
pub struct Executor {
    registry: SolverRegistry,
    input: InputSource,
    year_filter: Option<u16>,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
}

impl Executor {
    pub fn new(registry: SolverRegistry, config: &Config) -> Self {
        Self {
            registry,
            input: config.input.clone(),
            year_filter: config.year_filter,
            day_filter: config.day_filter,
            part_filter: config.part_filter,
        }
    }

    /// Collect work items by filtering registry metadata
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        self.registry
            .iter_info()
            .filter(|info| self.year_filter.is_none_or(|y| info.id.year == y))
            .filter(|info| self.day_filter.is_none_or(|d| info.id.day == d))
            .map(|info| WorkItem {
                id: info.id,
                parts: self.filter_parts(info.parts),
            })
            .filter(|w| !w.parts.is_empty())
            .collect()
    }

    /// Filter parts based on the part filter and the solver's max parts
    #[allow(clippy::reversed_empty_ranges)]
    fn filter_parts(&self, max_parts: u8) -> RangeInclusive<u8> {
        match self.part_filter {
            Some(p) if p <= max_parts => p..=p,
            Some(_) => 1..=0, // Empty range - intentional
            None => 1..=max_parts,
        }
    }

    /// Work items whose input is not available
    pub fn missing_inputs<'a>(&self, work_items: &'a [WorkItem]) -> Vec<&'a WorkItem> {
        work_items
            .iter()
            .filter(|w| !self.input.contains(w.id))
            .collect()
    }

    pub fn input_path(&self, id: PuzzleId) -> std::path::PathBuf {
        self.input.path_for(id)
    }

    /// Run every work item, calling `on_result` as each part finishes
    pub fn execute<F>(&self, work_items: &[WorkItem], mut on_result: F)
    where
        F: FnMut(SolverResult),
    {
        for work in work_items {
            self.run_work_item(work, &mut on_result);
        }
    }

    fn run_work_item<F>(&self, work: &WorkItem, on_result: &mut F)
    where
        F: FnMut(SolverResult),
    {
        let input = match self.input.read(work.id) {
            Ok(input) => input,
            Err(e) => {
                warn!(puzzle = %work.id, error = %e, "skipping puzzle");
                let reason = e.to_string();
                for part in work.parts.clone() {
                    on_result(error_result(
                        work.id,
                        part,
                        ExecutorError::InputUnavailable(reason.clone()),
                    ));
                }
                return;
            }
        };

        info!(puzzle = %work.id, bytes = input.len(), "running solver");
        let mut solver = match self.registry.create_solver(work.id, &input) {
            Ok(solver) => solver,
            Err(e) => {
                warn!(puzzle = %work.id, error = %e, "solver creation failed");
                for part in work.parts.clone() {
                    let error = match &e {
                        SolverError::ParseError(parse) => SolverError::ParseError(parse.clone()),
                        _ => SolverError::NotFound(work.id),
                    };
                    on_result(error_result(work.id, part, error.into()));
                }
                return;
            }
        };

        let mut parse_duration = Some(solver.parse_duration());
        for part in work.parts.clone() {
            let mut result = solve_part(work.id, part, &mut *solver);
            result.parse_duration = parse_duration.take();
            on_result(result);
        }
    }
}

fn error_result(id: PuzzleId, part: u8, error: ExecutorError) -> SolverResult {
    SolverResult {
        id,
        part,
        answer: Err(error),
        parse_duration: None,
        solve_duration: TimeDelta::zero(),
    }
}

fn solve_part(id: PuzzleId, part: u8, solver: &mut dyn DynSolver) -> SolverResult {
    match solver.solve(part) {
        Ok(result) => {
            debug!(puzzle = %id, part, answer = %result.answer, "solved");
            SolverResult {
                id,
                part,
                solve_duration: result.duration(),
                answer: Ok(result.answer),
                parse_duration: None,
            }
        }
        Err(e) => SolverResult {
            id,
            part,
            answer: Err(SolverError::from(e).into()),
            parse_duration: None,
            solve_duration: TimeDelta::zero(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::inputs::InputSource;
    use puzzle_solver::RegistryBuilder;
    use tempfile::TempDir;

    const ALMANAC: &str = "seeds: 79 14 55 13

seed-to-soil map:
50 98 2
52 50 48
";

    fn config(input: InputSource, part_filter: Option<u8>) -> Config {
        Config {
            year_filter: Some(2023),
            day_filter: Some(5),
            part_filter,
            tags: Vec::new(),
            input,
            list: false,
            quiet: true,
        }
    }

    fn executor(config: &Config) -> Executor {
        let registry = RegistryBuilder::new()
            .register_solver_plugins(|plugin| plugin.id() == PuzzleId::new(2023, 5))
            .unwrap()
            .build();
        Executor::new(registry, config)
    }

    fn run(executor: &Executor) -> Vec<SolverResult> {
        let work_items = executor.collect_work_items();
        let mut results = Vec::new();
        executor.execute(&work_items, |result| results.push(result));
        results
    }

    #[test]
    fn test_work_items_respect_part_filter() {
        let temp = TempDir::new().unwrap();
        let source = InputSource::Dir(temp.path().to_path_buf());

        let all = executor(&config(source.clone(), None)).collect_work_items();
        assert_eq!(
            all,
            [WorkItem {
                id: PuzzleId::new(2023, 5),
                parts: 1..=2
            }]
        );

        let second = executor(&config(source, Some(2))).collect_work_items();
        assert_eq!(second[0].parts, 2..=2);
    }

    #[test]
    fn test_runs_parts_from_input_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("almanac.txt");
        std::fs::write(&path, ALMANAC).unwrap();

        let results = run(&executor(&config(InputSource::File(path), None)));

        let answers: Vec<_> = results
            .iter()
            .map(|r| (r.part, r.answer.as_ref().map(String::as_str).ok()))
            .collect();
        assert_eq!(answers, [(1, Some("13")), (2, Some("57"))]);
        assert!(results[0].parse_duration.is_some());
        assert!(results[1].parse_duration.is_none());
    }

    #[test]
    fn test_missing_input_reported_per_part() {
        let temp = TempDir::new().unwrap();
        let executor = executor(&config(InputSource::Dir(temp.path().to_path_buf()), None));

        let work_items = executor.collect_work_items();
        assert_eq!(executor.missing_inputs(&work_items).len(), 1);

        let results = run(&executor);
        assert_eq!(results.len(), 2);
        assert!(
            results
                .iter()
                .all(|r| matches!(r.answer, Err(ExecutorError::InputUnavailable(_))))
        );
    }

    #[test]
    fn test_parse_failure_reported_per_part() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("2023_day05.txt"), "no seeds here\n").unwrap();
        let executor = executor(&config(InputSource::Dir(temp.path().to_path_buf()), None));

        let results = run(&executor);
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| matches!(
            r.answer,
            Err(ExecutorError::Solver(SolverError::ParseError(_)))
        )));
    }
}
