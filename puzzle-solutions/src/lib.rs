//! Puzzle solutions with automatic registration
//!
//! Solutions live under `my_solutions`, one module per year and day, and
//! register themselves with the `AutoRegisterSolver` derive macro. Reusable
//! algorithms shared by solutions live under `utils`.

pub mod utils;

#[cfg(feature = "my-solutions")]
pub mod my_solutions;
