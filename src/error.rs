//! Errors returned by the reconciler.

use std::fmt;

use thiserror::Error;

/// Which of the two snapshots an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Old,
    New,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return match self {
            Side::Old => f.write_str("old"),
            Side::New => f.write_str("new"),
        };
    }
}

/// Error returned by [`compute_edits`](crate::compute_edits) and friends.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReconcileError {
    /// Two items in one snapshot produced the same identity key.
    ///
    /// This is a caller error: identity keys must be unique per snapshot.
    #[error("duplicate identity in {side} snapshot at positions {first} and {second}")]
    DuplicateIdentity {
        side: Side,
        first: usize,
        second: usize,
    },

    /// An emitted edit addressed a position outside the list it applies to.
    ///
    /// The reconciler never produces this for valid input; seeing it means
    /// the edit script is inconsistent and was discarded.
    #[error("edit #{edit_index} addresses position {position} in a list of length {len}")]
    InvalidRange {
        edit_index: usize,
        position: usize,
        len: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_positions() {
        let err = ReconcileError::DuplicateIdentity {
            side: Side::New,
            first: 0,
            second: 3,
        };
        assert_eq!(
            err.to_string(),
            "duplicate identity in new snapshot at positions 0 and 3"
        );

        let err = ReconcileError::InvalidRange {
            edit_index: 2,
            position: 9,
            len: 4,
        };
        assert_eq!(
            err.to_string(),
            "edit #2 addresses position 9 in a list of length 4"
        );
    }
}
