//! AFL fuzz harness for the list reconciler.
//!
//! Each input is split into two byte lists, old and new. Bytes are item
//! keys; duplicates are dropped so every key is unique per list, and the
//! high bit of a key's first occurrence picks its content. The harness
//! checks the properties every edit script must have:
//! 1. Round trip: applying the script to old yields new
//! 2. Minimal moves: moves = common items - longest increasing run
//! 3. No moves at all when move detection is off, and the round trip
//!    still holds

use afl::fuzz;
use listdiff::lis::longest_increasing_len;
use listdiff::{FnCallback, ReconcileOptions, Reconciler};

#[derive(Debug, Clone, PartialEq)]
struct Item {
    key: u8,
    content: bool,
}

fn unique_items(bytes: &[u8]) -> Vec<Item> {
    let mut seen = [false; 128];
    let mut items = Vec::new();
    for &byte in bytes {
        let key = byte & 0x7f;
        if !seen[key as usize] {
            seen[key as usize] = true;
            items.push(Item {
                key,
                content: byte & 0x80 != 0,
            });
        }
    }
    return items;
}

fn main() {
    let callback = FnCallback::new(|i: &Item| i.key, |a: &Item, b: &Item| a == b);
    let with_moves = Reconciler::default();
    let without_moves = Reconciler::new(ReconcileOptions::new().detect_moves(false));

    fuzz!(|data: &[u8]| {
        let Some((&split, rest)) = data.split_first() else {
            return;
        };
        let split = (split as usize).min(rest.len());
        let old = unique_items(&rest[..split]);
        let new = unique_items(&rest[split..]);

        let script = with_moves
            .compute(&callback, &old, &new)
            .expect("unique keys never fail");
        let mut items = old.clone();
        script.apply_to(&mut items).expect("script in range");
        assert_eq!(items, new, "round trip failed: {:?}", script);

        let ranks: Vec<usize> = {
            let common_old: Vec<u8> = old
                .iter()
                .filter(|o| new.iter().any(|n| n.key == o.key))
                .map(|o| o.key)
                .collect();
            new.iter()
                .filter_map(|n| common_old.iter().position(|&k| k == n.key))
                .collect()
        };
        assert_eq!(
            script.counts().moves,
            ranks.len() - longest_increasing_len(&ranks),
            "move count not minimal"
        );

        let script = without_moves
            .compute(&callback, &old, &new)
            .expect("unique keys never fail");
        assert_eq!(script.counts().moves, 0);
        let mut items = old.clone();
        script.apply_to(&mut items).expect("script in range");
        assert_eq!(items, new);
    });
}
