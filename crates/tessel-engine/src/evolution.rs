//! Synchronous B3/S23 generation stepping.
//!
//! Every step reads exclusively from the current grid and writes
//! exclusively into a second buffer of identical shape, so no cell ever
//! observes a neighbour's next state. The two entry points differ only in
//! who owns the destination:
//!
//! - [`EvolutionEngine::step`] allocates a fresh grid and hands it back.
//! - [`EvolutionEngine::step_into`] overwrites a caller-provided spare
//!   buffer (ping-pong reuse, no allocation).

use tessel_core::{Cell, Generation, GridError, GridState};
use tessel_space::{BoundaryPolicy, NeighborCounter};

/// Per-step population accounting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepStats {
    /// Cells that went Dead -> Alive.
    pub births: usize,
    /// Cells that went Alive -> Dead.
    pub deaths: usize,
    /// Alive cells in the new generation.
    pub population: usize,
}

/// The B3/S23 rule table.
///
/// | current | live neighbours | next  |
/// |---------|-----------------|-------|
/// | Alive   | 2 or 3          | Alive |
/// | Alive   | <2 or >3        | Dead  |
/// | Dead    | 3               | Alive |
/// | Dead    | anything else   | Dead  |
#[inline]
pub fn next_state(current: Cell, live_neighbours: u8) -> Cell {
    match (current, live_neighbours) {
        (Cell::Alive, 2) | (Cell::Alive, 3) => Cell::Alive, // survival
        (Cell::Dead, 3) => Cell::Alive,                     // birth
        _ => Cell::Dead,
    }
}

/// Pure generation mapping: returns the successor of `grid` without
/// touching it.
pub fn evolve(grid: &GridState, counter: &NeighborCounter) -> GridState {
    // Same shape, all Dead.
    let mut next = grid.clone();
    next.clear();
    write_successor(grid, &mut next, counter);
    next
}

/// Fill `next` with the successor of `current`. Shapes must already match.
fn write_successor(
    current: &GridState,
    next: &mut GridState,
    counter: &NeighborCounter,
) -> StepStats {
    let cells = current.as_slice();
    let cols = current.cols() as usize;
    let mut stats = StepStats::default();
    next.fill_with(|r, c| {
        let now = cells[r as usize * cols + c as usize];
        let after = next_state(now, counter.count_alive(current, r, c));
        match (now, after) {
            (Cell::Dead, Cell::Alive) => stats.births += 1,
            (Cell::Alive, Cell::Dead) => stats.deaths += 1,
            _ => {}
        }
        if after.is_alive() {
            stats.population += 1;
        }
        after
    });
    stats
}

/// Advances grids one generation at a time under a fixed
/// [`BoundaryPolicy`], counting generations as it goes.
///
/// The engine holds no grid. Callers own the active grid and adopt the
/// one each step returns.
///
/// # Examples
///
/// ```
/// use tessel_core::{Cell, GridState};
/// use tessel_engine::EvolutionEngine;
/// use tessel_space::BoundaryPolicy;
///
/// let mut grid = GridState::new(5, 5).unwrap();
/// for c in 1..4 {
///     grid.set(2, c, Cell::Alive).unwrap();
/// }
/// let mut engine = EvolutionEngine::new(BoundaryPolicy::Clamped);
/// let next = engine.step(&grid);
/// assert_eq!(next.alive_cells(), vec![(1, 2), (2, 2), (3, 2)]);
/// assert_eq!(engine.generation().0, 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct EvolutionEngine {
    counter: NeighborCounter,
    generation: Generation,
}

impl EvolutionEngine {
    /// Create an engine at generation 0.
    pub fn new(boundary: BoundaryPolicy) -> Self {
        Self {
            counter: NeighborCounter::new(boundary),
            generation: Generation::default(),
        }
    }

    /// Boundary policy applied by every step.
    pub fn boundary(&self) -> BoundaryPolicy {
        self.counter.boundary()
    }

    /// The neighbour counter steps are computed with.
    pub fn counter(&self) -> &NeighborCounter {
        &self.counter
    }

    /// Number of steps taken since construction or the last reset.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Restart the generation count at 0.
    pub fn reset_generation(&mut self) {
        self.generation = Generation::default();
    }

    /// Compute the next generation into a freshly allocated grid.
    ///
    /// `grid` is not modified.
    pub fn step(&mut self, grid: &GridState) -> GridState {
        let next = evolve(grid, &self.counter);
        self.generation = self.generation.next();
        next
    }

    /// Compute the next generation of `current` into `next`, overwriting
    /// every cell of `next`.
    ///
    /// # Errors
    ///
    /// [`GridError::DimensionMismatch`] if the grids differ in shape; the
    /// generation count is not advanced.
    pub fn step_into(
        &mut self,
        current: &GridState,
        next: &mut GridState,
    ) -> Result<StepStats, GridError> {
        if current.dimensions() != next.dimensions() {
            return Err(GridError::DimensionMismatch {
                expected: current.dimensions(),
                actual: next.dimensions(),
            });
        }
        let stats = write_successor(current, next, &self.counter);
        self.generation = self.generation.next();
        Ok(stats)
    }
}
