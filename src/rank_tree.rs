//! Fenwick tree over a fixed set of slots.
//!
//! Each slot is either live or empty. `rank(slot)` counts the live slots
//! strictly before `slot`, which is the list position an item in that slot
//! would occupy. Both updates and queries are O(log n).

pub struct RankTree {
    // 1-based Fenwick array; tree[0] is unused.
    tree: Vec<u32>,
    live: Vec<bool>,
}

impl RankTree {
    /// Create a tree whose live slots are given by `live`, in O(n).
    pub fn from_live(live: Vec<bool>) -> RankTree {
        let len = live.len();
        let mut tree = vec![0u32; len + 1];
        for i in 1..=len {
            tree[i] += live[i - 1] as u32;
            let parent = i + (i & i.wrapping_neg());
            if parent <= len {
                tree[parent] += tree[i];
            }
        }
        return RankTree { tree, live };
    }

    /// Number of live slots strictly before `slot`.
    pub fn rank(&self, slot: usize) -> usize {
        let mut sum = 0usize;
        let mut i = slot;
        while i > 0 {
            sum += self.tree[i] as usize;
            i -= i & i.wrapping_neg();
        }
        return sum;
    }

    /// Mark `slot` live. No-op if it already is.
    pub fn fill(&mut self, slot: usize) {
        if !self.live[slot] {
            self.live[slot] = true;
            self.add(slot, 1);
        }
    }

    /// Mark `slot` empty. No-op if it already is.
    pub fn clear(&mut self, slot: usize) {
        if self.live[slot] {
            self.live[slot] = false;
            self.add(slot, -1);
        }
    }

    fn add(&mut self, slot: usize, delta: i32) {
        let mut i = slot + 1;
        while i < self.tree.len() {
            self.tree[i] = self.tree[i].wrapping_add_signed(delta);
            i += i & i.wrapping_neg();
        }
    }
}
