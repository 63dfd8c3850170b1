//! Canonical forms under block rotation.
//!
//! Each block of a state is a cyclic object: the slot it starts at carries no
//! information. The canonical form rotates every block so that its minimum
//! label comes first, keeping the cyclic order of the rest. Blocks are handled
//! independently; separators and block order never move.
//!
//! ```
//! use perm_census::canon::canonicalize;
//! use perm_census::partition::Partition;
//! use perm_census::state::State;
//!
//! let p = Partition::new([3, 2]).unwrap();
//! let s = State::from_labels(&p, &[3, 1, 2, 5, 4]).unwrap();
//! assert_eq!(canonicalize(&s, &p).to_string(), "(1, 2, 3)(4, 5)");
//! ```
//!
//! Blocks are *not* reordered among themselves.

use crate::partition::Partition;
use crate::state::State;

/// Returns the canonical representative of `state`.
pub fn canonicalize(state: &State, partition: &Partition) -> State {
    let mut state = state.clone();
    canonicalize_in_place(&mut state, partition);
    state
}

/// Rotates every block of `state` so that its minimum label is first.
///
/// # Panics
///
/// Panics if the state width does not match the partition.
pub fn canonicalize_in_place(state: &mut State, partition: &Partition) {
    assert_eq!(
        state.len(),
        partition.width(),
        "State width does not match the partition"
    );

    let symbols = state.symbols_mut();
    for span in partition.spans() {
        let block = &mut symbols[span];
        if let Some(shift) = min_position(block) {
            block.rotate_left(shift);
        }
    }
}

/// Checks whether `state` is already in canonical form.
pub fn is_canonical(state: &State, partition: &Partition) -> bool {
    partition
        .spans()
        .all(|span| min_position(&state.symbols()[span]).unwrap_or(0) == 0)
}

fn min_position<T: Ord>(block: &[T]) -> Option<usize> {
    block
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| a.cmp(b))
        .map(|(i, _)| i)
}
