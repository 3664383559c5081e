//! Puzzle Solver Library
//!
//! A small, type-safe harness for puzzle solutions keyed by year and day.
//! Each puzzle parses its input once and then solves one or more parts
//! against the parsed data.
//!
//! # Overview
//!
//! This library provides:
//! - [`AocParser`] and [`PartSolver`] traits for parsing and per-part solving
//! - [`Solver`] for runtime part dispatch, usually derived with `#[derive(AocSolver)]`
//! - [`DynSolver`] instances that record parse and solve timing
//! - A [`SolverRegistry`] filled from plugins submitted by `#[derive(AutoRegisterSolver)]`
//!
//! # Quick Example
//!
//! ```
//! use puzzle_solver::{AocParser, AocSolver, ParseError, PartSolver, PuzzleId, RegisterableSolver,
//!     RegistryBuilder, SolveError};
//!
//! #[derive(AocSolver)]
//! #[aoc_solver(max_parts = 2)]
//! struct Totals;
//!
//! impl AocParser for Totals {
//!     type SharedData<'a> = Vec<i64>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         input
//!             .lines()
//!             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat(l.to_string())))
//!             .collect()
//!     }
//! }
//!
//! impl PartSolver<1> for Totals {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().sum::<i64>().to_string())
//!     }
//! }
//!
//! impl PartSolver<2> for Totals {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().product::<i64>().to_string())
//!     }
//! }
//!
//! let id = PuzzleId::new(2023, 1);
//! let registry = Totals.register_with(RegistryBuilder::new(), id, &[]).unwrap().build();
//!
//! let mut solver = registry.create_solver(id, "2\n3\n4").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "9");
//! assert_eq!(solver.solve(2).unwrap().answer, "24");
//! ```
//!
//! # Plugins
//!
//! ```ignore
//! #[derive(AocSolver, AutoRegisterSolver)]
//! #[aoc_solver(max_parts = 2)]
//! #[aoc(year = 2023, day = 5, tags = ["ranges"])]
//! struct Day5;
//! ```
//!
//! Linking the crate that defines `Day5` is enough for
//! [`RegistryBuilder::register_all_plugins`] to find it.

mod error;
mod instance;
mod registry;
mod solver;

pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use registry::{
    BASE_YEAR, DAYS_PER_YEAR, FactoryInfo, MAX_YEARS, PuzzleId, RegisterableSolver,
    RegistryBuilder, SolverFactory, SolverPlugin, SolverRegistry,
};
pub use solver::{AocParser, PartSolver, Solver, SolverExt};

// Used by the code `AutoRegisterSolver` generates
pub use inventory;

pub use puzzle_solver_macros::{AocSolver, AutoRegisterSolver};
