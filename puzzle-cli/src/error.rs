//! Error types for the CLI

use puzzle_solver::PuzzleId;
use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Input error: {0}")]
    Input(#[from] InputError),

    #[error("Registration error: {0}")]
    Registration(#[from] puzzle_solver::RegistrationError),
}

/// Reading puzzle inputs from disk
#[derive(Error, Debug)]
pub enum InputError {
    #[error("no input for {id} at {path}")]
    Missing { id: PuzzleId, path: String },

    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Failure of a single part during execution
#[derive(Error, Debug)]
pub enum ExecutorError {
    /// The input could not be loaded; repeated for every part of the puzzle
    #[error("input unavailable: {0}")]
    InputUnavailable(String),

    #[error(transparent)]
    Solver(#[from] puzzle_solver::SolverError),
}
