//! Named pattern catalogue.

use indexmap::IndexMap;
use tessel_core::GridState;

use crate::catalogue;
use crate::edit::inject;
use crate::error::PatternError;
use crate::pattern::{Origin, Pattern};

/// Name-indexed collection of patterns, iterated in registration order.
///
/// # Examples
///
/// ```
/// use tessel_core::GridState;
/// use tessel_patterns::{Origin, PatternLibrary};
///
/// let library = PatternLibrary::builtin();
/// let mut grid = GridState::new(20, 40).unwrap();
/// library.inject_named(&mut grid, "glider_gun", Origin::new(1, 1)).unwrap();
/// assert_eq!(grid.population(), 36);
/// ```
#[derive(Clone, Debug, Default)]
pub struct PatternLibrary {
    patterns: IndexMap<String, Pattern>,
}

impl PatternLibrary {
    /// An empty library.
    pub fn new() -> Self {
        Self::default()
    }

    /// A library preloaded with every pattern in [`catalogue::BUILTIN`].
    pub fn builtin() -> Self {
        let mut library = Self::new();
        for pattern in catalogue::BUILTIN {
            library.register(pattern);
        }
        library
    }

    /// Add a pattern, returning any pattern previously registered under
    /// the same name.
    pub fn register(&mut self, pattern: Pattern) -> Option<Pattern> {
        self.patterns.insert(pattern.name().to_string(), pattern)
    }

    /// Look up a pattern by name.
    pub fn get(&self, name: &str) -> Option<&Pattern> {
        self.patterns.get(name)
    }

    /// Registered names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.patterns.keys().map(String::as_str)
    }

    /// Number of registered patterns.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Whether no patterns are registered.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Stamp the pattern called `name` at `origin`.
    ///
    /// # Errors
    ///
    /// [`PatternError::UnknownPattern`] if nothing is registered under
    /// `name`; otherwise whatever [`inject`] returns.
    pub fn inject_named(
        &self,
        grid: &mut GridState,
        name: &str,
        origin: impl Into<Origin>,
    ) -> Result<(), PatternError> {
        let pattern = self.get(name).ok_or_else(|| PatternError::UnknownPattern {
            name: name.to_string(),
        })?;
        inject(grid, pattern, origin)
    }
}
