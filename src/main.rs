//! Sleep tracker walkthrough.
//!
//! Drives a small in-memory sleep tracker through a night of recording,
//! rating and clearing, and prints the changes the list adapter reports
//! after every step. Set `RUST_LOG=listdiff=debug` to see the reconciler's
//! own log lines. Built with the `cli` feature.

use listdiff::{KeyedEq, ListAdapter, ListObserver, OneShot};
use tracing_subscriber::EnvFilter;

const HOUR_MS: i64 = 60 * 60 * 1000;

#[derive(Debug, Clone, PartialEq)]
struct SleepNight {
    night_id: u64,
    start_time_milli: i64,
    end_time_milli: i64,
    sleep_quality: i32,
}

fn quality_label(quality: i32) -> &'static str {
    return match quality {
        0 => "Very bad",
        1 => "Poor",
        2 => "So-so",
        3 => "OK",
        4 => "Pretty good",
        5 => "Excellent",
        _ => "--",
    };
}

/// Holds the nights newest first, plus the one-shot UI events.
#[derive(Default)]
struct SleepTracker {
    nights: Vec<SleepNight>,
    next_id: u64,
    clock: i64,
    show_snackbar: OneShot<()>,
    navigate_to_quality: OneShot<u64>,
}

impl SleepTracker {
    fn tonight(&self) -> Option<&SleepNight> {
        return self
            .nights
            .first()
            .filter(|n| n.end_time_milli == n.start_time_milli);
    }

    fn start(&mut self) {
        self.next_id += 1;
        self.nights.insert(0, SleepNight {
            night_id: self.next_id,
            start_time_milli: self.clock,
            end_time_milli: self.clock,
            sleep_quality: -1,
        });
    }

    fn stop(&mut self, hours: i64) {
        self.clock += hours * HOUR_MS;
        let clock = self.clock;
        let Some(id) = self.tonight().map(|n| n.night_id) else {
            return;
        };
        if let Some(night) = self.nights.iter_mut().find(|n| n.night_id == id) {
            night.end_time_milli = clock;
        }
        self.navigate_to_quality.emit(id);
    }

    fn rate(&mut self, night_id: u64, quality: i32) {
        if let Some(night) = self.nights.iter_mut().find(|n| n.night_id == night_id) {
            night.sleep_quality = quality;
        }
    }

    fn clear(&mut self) {
        self.nights.clear();
        self.show_snackbar.emit(());
    }
}

struct PrintObserver;

impl ListObserver for PrintObserver {
    fn on_inserted(&mut self, position: usize) {
        println!("    inserted at {}", position);
    }

    fn on_removed(&mut self, position: usize) {
        println!("    removed at {}", position);
    }

    fn on_moved(&mut self, from: usize, to: usize) {
        println!("    moved {} -> {}", from, to);
    }

    fn on_changed(&mut self, position: usize) {
        println!("    changed at {}", position);
    }
}

fn show<C: listdiff::ItemCallback<SleepNight>>(
    step: &str,
    tracker: &mut SleepTracker,
    adapter: &mut ListAdapter<SleepNight, C>,
) {
    println!("{}:", step);
    if let Err(err) = adapter.submit_list(tracker.nights.clone()) {
        eprintln!("    failed to update list: {}", err);
        return;
    }

    for position in 0..adapter.item_count() {
        if let Some(night) = adapter.item(position) {
            let hours = (night.end_time_milli - night.start_time_milli) / HOUR_MS;
            println!(
                "    [{}] night {}: {}h, {}",
                position,
                night.night_id,
                hours,
                quality_label(night.sleep_quality)
            );
        }
    }

    if let Some(night_id) = tracker.navigate_to_quality.take() {
        println!("    -> rate night {}", night_id);
    }
    if tracker.show_snackbar.take().is_some() {
        println!("    -> all your data is gone forever");
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut tracker = SleepTracker::default();
    let mut adapter: ListAdapter<SleepNight, _> =
        ListAdapter::new(KeyedEq::new(|n: &SleepNight| n.night_id));
    adapter.subscribe(Box::new(PrintObserver));

    tracker.start();
    show("start", &mut tracker, &mut adapter);

    tracker.stop(8);
    show("stop", &mut tracker, &mut adapter);

    tracker.rate(1, 4);
    show("rate", &mut tracker, &mut adapter);

    // Re-observing after the event was acknowledged must not navigate again.
    show("refresh", &mut tracker, &mut adapter);

    tracker.clock += 16 * HOUR_MS;
    tracker.start();
    tracker.stop(6);
    tracker.rate(2, 2);
    show("second night", &mut tracker, &mut adapter);

    tracker.clear();
    show("clear", &mut tracker, &mut adapter);
}
