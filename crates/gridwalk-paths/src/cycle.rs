//! Period detection for iterated state transitions, with jump-ahead.

use std::hash::Hash;

use indexmap::IndexSet;

/// Outcome of [`find_cycle`].
///
/// When no repeat was found within the budget, `final_value` is `None` and
/// both counters are zero.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CycleResult<T> {
    /// The state the sequence would hold after the requested number of
    /// iterations.
    pub final_value: Option<T>,
    /// 1-based iteration at which the repeating part first appears.
    pub cycle_start: usize,
    pub cycle_length: usize,
}

impl<T> CycleResult<T> {
    /// The "no cycle" result.
    pub fn none() -> Self {
        Self {
            final_value: None,
            cycle_start: 0,
            cycle_length: 0,
        }
    }

    #[inline]
    pub fn is_found(&self) -> bool {
        self.final_value.is_some()
    }
}

/// Apply `step` to `initial` up to `max_iterations` times, stopping at the
/// first repeated state, and project the state at iteration
/// `max_iterations` from the detected period.
///
/// States are numbered from 1 (the state after the first `step`); the
/// initial state itself is not recorded. Returns [`CycleResult::none`] if
/// no state repeats within the budget.
pub fn find_cycle<T, F>(initial: T, mut step: F, max_iterations: usize) -> CycleResult<T>
where
    T: Eq + Hash + Clone,
    F: FnMut(&T) -> T,
{
    let mut seen: IndexSet<T> = IndexSet::new();
    let mut current = initial;

    for iteration in 1..=max_iterations {
        current = step(&current);
        let (first, inserted) = seen.insert_full(current.clone());
        if inserted {
            continue;
        }

        let cycle_start = first + 1;
        let cycle_length = iteration - cycle_start;
        let offset = (max_iterations - cycle_start) % cycle_length;
        log::debug!(
            "cycle of length {cycle_length} starting at iteration {cycle_start}, \
             detected at iteration {iteration}"
        );
        return CycleResult {
            final_value: seen.get_index(cycle_start + offset - 1).cloned(),
            cycle_start,
            cycle_length,
        };
    }

    log::debug!("no cycle within {max_iterations} iterations");
    CycleResult::none()
}
