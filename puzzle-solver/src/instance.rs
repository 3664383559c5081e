//! Solver instances with parse and solve timing

use crate::PuzzleId;
use crate::error::{ParseError, SolveError};
use crate::solver::{Solver, SolverExt};
use chrono::{DateTime, TimeDelta, Utc};

/// Answer for one part together with when solving started and finished
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub answer: String,
    pub solve_start: DateTime<Utc>,
    pub solve_end: DateTime<Utc>,
}

impl SolveResult {
    pub fn duration(&self) -> TimeDelta {
        self.solve_end - self.solve_start
    }
}

/// Parsed input for one puzzle, ready to solve any of its parts
pub struct SolverInstance<'a, S: Solver> {
    id: PuzzleId,
    shared: S::SharedData<'a>,
    parse_start: DateTime<Utc>,
    parse_end: DateTime<Utc>,
}

impl<'a, S: Solver> SolverInstance<'a, S> {
    /// Parse `input` and record how long parsing took
    pub fn new(id: PuzzleId, input: &'a str) -> Result<Self, ParseError> {
        let parse_start = Utc::now();
        let shared = S::parse(input)?;
        let parse_end = Utc::now();

        Ok(Self {
            id,
            shared,
            parse_start,
            parse_end,
        })
    }
}

/// Type-erased view of a [`SolverInstance`], so the registry can hand out
/// solvers of different concrete types.
///
/// ```no_run
/// use puzzle_solver::DynSolver;
///
/// fn run_all(mut solver: Box<dyn DynSolver + '_>) -> Result<(), Box<dyn std::error::Error>> {
///     println!("{} parsed in {}", solver.id(), solver.parse_duration());
///     for part in 1..=solver.parts() {
///         let result = solver.solve(part)?;
///         println!("Part {}: {} ({})", part, result.answer, result.duration());
///     }
///     Ok(())
/// }
/// ```
pub trait DynSolver {
    /// Solve `part`, timing the call
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError>;

    fn parse_start(&self) -> DateTime<Utc>;

    fn parse_end(&self) -> DateTime<Utc>;

    fn id(&self) -> PuzzleId;

    fn parts(&self) -> u8;

    fn parse_duration(&self) -> TimeDelta {
        self.parse_end() - self.parse_start()
    }
}

impl<'a, S: SolverExt> DynSolver for SolverInstance<'a, S> {
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError> {
        let solve_start = Utc::now();
        let answer = S::solve_part_checked_range(&mut self.shared, part)?;
        let solve_end = Utc::now();

        Ok(SolveResult {
            answer,
            solve_start,
            solve_end,
        })
    }

    fn parse_start(&self) -> DateTime<Utc> {
        self.parse_start
    }

    fn parse_end(&self) -> DateTime<Utc> {
        self.parse_end
    }

    fn id(&self) -> PuzzleId {
        self.id
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AocParser;

    struct Lines;

    impl AocParser for Lines {
        type SharedData<'a> = Vec<&'a str>;

        fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
            Ok(input.lines().collect())
        }
    }

    impl Solver for Lines {
        const PARTS: u8 = 1;

        fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
            match part {
                1 => Ok(shared.len().to_string()),
                _ => Err(SolveError::PartNotImplemented(part)),
            }
        }
    }

    #[test]
    fn test_instance_solves_and_times() {
        let mut instance = SolverInstance::<Lines>::new(PuzzleId::new(2023, 5), "a\nb\nc").unwrap();

        let result = instance.solve(1).unwrap();
        assert_eq!(result.answer, "3");
        assert!(result.duration() >= TimeDelta::zero());
        assert!(instance.parse_duration() >= TimeDelta::zero());
        assert_eq!(instance.id(), PuzzleId::new(2023, 5));
        assert_eq!(instance.parts(), 1);
    }

    #[test]
    fn test_instance_rejects_part_out_of_range() {
        let mut instance = SolverInstance::<Lines>::new(PuzzleId::new(2023, 5), "a").unwrap();

        assert!(matches!(instance.solve(0), Err(SolveError::PartOutOfRange(0))));
        assert!(matches!(instance.solve(2), Err(SolveError::PartOutOfRange(2))));
    }
}
