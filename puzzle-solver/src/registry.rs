//! Solver registry for looking up puzzles and creating solver instances

use crate::error::{ParseError, RegistrationError, SolverError};
use crate::instance::{DynSolver, SolverInstance};
use std::collections::BTreeMap;
use std::fmt;

/// First puzzle year
pub const BASE_YEAR: u16 = 2015;
/// Number of years accepted, starting at [`BASE_YEAR`]
pub const MAX_YEARS: u16 = 20;
/// Days per year (1-25)
pub const DAYS_PER_YEAR: u8 = 25;

/// Identifies one puzzle by year and day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PuzzleId {
    pub year: u16,
    pub day: u8,
}

impl PuzzleId {
    pub const fn new(year: u16, day: u8) -> Self {
        Self { year, day }
    }

    /// Whether the year and day fall inside the supported calendar
    pub fn is_in_calendar(&self) -> bool {
        (BASE_YEAR..BASE_YEAR + MAX_YEARS).contains(&self.year)
            && (1..=DAYS_PER_YEAR).contains(&self.day)
    }
}

impl fmt::Display for PuzzleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{:02}", self.year, self.day)
    }
}

/// Creates a solver instance from raw input
pub type SolverFactory =
    Box<dyn for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError> + Send + Sync>;

/// Metadata about a registered solver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactoryInfo {
    pub id: PuzzleId,
    /// Number of parts the solver supports
    pub parts: u8,
    pub tags: &'static [&'static str],
}

struct SolverFactoryEntry {
    factory: SolverFactory,
    parts: u8,
    tags: &'static [&'static str],
}

/// Builder for an immutable [`SolverRegistry`], rejecting duplicate puzzles
///
/// ```
/// use puzzle_solver::{PuzzleId, RegistryBuilder};
///
/// let registry = RegistryBuilder::new()
///     .register_all_plugins()
///     .unwrap()
///     .build();
/// assert!(!registry.contains(PuzzleId::new(2015, 1)));
/// ```
pub struct RegistryBuilder {
    solvers: BTreeMap<PuzzleId, SolverFactoryEntry>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self {
            solvers: BTreeMap::new(),
        }
    }

    /// Register a factory for `id`
    ///
    /// # Returns
    /// * `Ok(Self)` - Builder with the solver registered, ready for chaining
    /// * `Err(RegistrationError)` - Duplicate puzzle, or one outside the calendar
    pub fn register<F>(
        mut self,
        id: PuzzleId,
        parts: u8,
        tags: &'static [&'static str],
        factory: F,
    ) -> Result<Self, RegistrationError>
    where
        F: for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError>
            + Send
            + Sync
            + 'static,
    {
        if !id.is_in_calendar() {
            return Err(RegistrationError::OutOfCalendar(id));
        }
        if self.solvers.contains_key(&id) {
            return Err(RegistrationError::DuplicateSolver(id));
        }
        self.solvers.insert(
            id,
            SolverFactoryEntry {
                factory: Box::new(factory),
                parts,
                tags,
            },
        );
        Ok(self)
    }

    /// Register every plugin submitted with `inventory::submit!`
    pub fn register_all_plugins(self) -> Result<Self, RegistrationError> {
        self.register_solver_plugins(|_| true)
    }

    /// Register the plugins for which `filter` returns `true`
    ///
    /// ```ignore
    /// // Only solvers tagged "ranges"
    /// let registry = RegistryBuilder::new()
    ///     .register_solver_plugins(|plugin| plugin.tags.contains(&"ranges"))?
    ///     .build();
    /// ```
    pub fn register_solver_plugins<F>(mut self, filter: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&SolverPlugin) -> bool,
    {
        for plugin in inventory::iter::<SolverPlugin>() {
            if filter(plugin) {
                self = plugin.solver.register_with(self, plugin.id(), plugin.tags)?;
            }
        }
        Ok(self)
    }

    pub fn build(self) -> SolverRegistry {
        SolverRegistry {
            solvers: self.solvers,
        }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable map from puzzle to solver factory, iterated in year/day order
pub struct SolverRegistry {
    solvers: BTreeMap<PuzzleId, SolverFactoryEntry>,
}

impl SolverRegistry {
    /// Parse `input` with the solver registered for `id`
    pub fn create_solver<'a>(
        &self,
        id: PuzzleId,
        input: &'a str,
    ) -> Result<Box<dyn DynSolver + 'a>, SolverError> {
        let entry = self.solvers.get(&id).ok_or(SolverError::NotFound(id))?;
        (entry.factory)(input).map_err(SolverError::ParseError)
    }

    pub fn iter_info(&self) -> impl Iterator<Item = FactoryInfo> + '_ {
        self.solvers.iter().map(|(id, entry)| FactoryInfo {
            id: *id,
            parts: entry.parts,
            tags: entry.tags,
        })
    }

    pub fn get_info(&self, id: PuzzleId) -> Option<FactoryInfo> {
        self.solvers.get(&id).map(|entry| FactoryInfo {
            id,
            parts: entry.parts,
            tags: entry.tags,
        })
    }

    pub fn contains(&self, id: PuzzleId) -> bool {
        self.solvers.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.solvers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.solvers.is_empty()
    }
}

/// Object-safe registration hook, so plugins of different solver types can
/// live in one `inventory` collection.
///
/// Every [`Solver`](crate::Solver) gets this through a blanket impl.
pub trait RegisterableSolver: Sync {
    fn register_with(
        &self,
        builder: RegistryBuilder,
        id: PuzzleId,
        tags: &'static [&'static str],
    ) -> Result<RegistryBuilder, RegistrationError>;

    fn parts(&self) -> u8;
}

impl<S> RegisterableSolver for S
where
    S: crate::solver::Solver + Sync + 'static,
{
    fn register_with(
        &self,
        builder: RegistryBuilder,
        id: PuzzleId,
        tags: &'static [&'static str],
    ) -> Result<RegistryBuilder, RegistrationError> {
        builder.register(id, S::PARTS, tags, move |input: &str| {
            let instance = SolverInstance::<S>::new(id, input)?;
            Ok(Box::new(instance))
        })
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}

/// A solver submitted for automatic registration
///
/// Normally produced by `#[derive(AutoRegisterSolver)]`; a manual submission
/// looks like:
///
/// ```ignore
/// puzzle_solver::inventory::submit! {
///     SolverPlugin { year: 2023, day: 5, solver: &Day5, tags: &["ranges"] }
/// }
/// ```
pub struct SolverPlugin {
    pub year: u16,
    pub day: u8,
    pub solver: &'static dyn RegisterableSolver,
    /// Free-form labels used for filtering, e.g. `"ranges"`
    pub tags: &'static [&'static str],
}

impl SolverPlugin {
    pub fn id(&self) -> PuzzleId {
        PuzzleId::new(self.year, self.day)
    }
}

inventory::collect!(SolverPlugin);
