//! Edit operations produced by the reference differs.
//!
//! Positions follow the same convention as `listdiff::Edit`: each one is
//! relative to the list at the moment the operation is applied.

/// A single list edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op<T> {
    Insert(usize, T),
    Remove(usize),
    /// Remove at the first position, then insert at the second.
    Move(usize, usize),
    Update(usize, T),
}

/// Apply `ops` to `items` in order.
///
/// Panics if an operation is out of range.
pub fn apply<T: Clone>(items: &mut Vec<T>, ops: &[Op<T>]) {
    for op in ops {
        match op {
            Op::Insert(pos, item) => items.insert(*pos, item.clone()),
            Op::Remove(pos) => {
                items.remove(*pos);
            }
            Op::Move(from, to) => {
                let item = items.remove(*from);
                items.insert(*to, item);
            }
            Op::Update(pos, item) => items[*pos] = item.clone(),
        }
    }
}

/// Count the moves in `ops`.
pub fn move_count<T>(ops: &[Op<T>]) -> usize {
    return ops.iter().filter(|op| matches!(op, Op::Move(..))).count();
}
