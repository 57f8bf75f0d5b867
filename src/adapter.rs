//! A list adapter that keeps a visible list in sync with submitted lists.
//!
//! The adapter owns the current snapshot and a visible copy of it. Each
//! call to [`ListAdapter::submit_list`] reconciles the current snapshot
//! against the submitted one, applies the edits to the visible list, and
//! tells every subscribed [`ListObserver`] what changed, one edit at a time,
//! so a display can patch itself instead of redrawing.

use std::cell::RefCell;
use std::rc::Rc;

use smallvec::SmallVec;
use tracing::debug;

use crate::callback::ItemCallback;
use crate::edit::{Edit, EditScript};
use crate::error::ReconcileError;
use crate::reconcile::{ReconcileOptions, Reconciler};
use crate::snapshot::Snapshot;

/// A structural change reported to observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    Inserted(usize),
    Removed(usize),
    Moved { from: usize, to: usize },
    Changed(usize),
}

impl Notification {
    /// The notification observers receive for `edit`.
    pub fn from_edit<T>(edit: &Edit<T>) -> Notification {
        return match *edit {
            Edit::Insert { position, .. } => Notification::Inserted(position),
            Edit::Remove { position } => Notification::Removed(position),
            Edit::Move { from, to } => Notification::Moved { from, to },
            Edit::Update { position, .. } => Notification::Changed(position),
        };
    }
}

/// Receives changes to an adapter's visible list.
///
/// Positions are as described on [`Edit`]: relative to the list at the
/// moment the change happens.
pub trait ListObserver {
    fn on_inserted(&mut self, _position: usize) {}
    fn on_removed(&mut self, _position: usize) {}
    fn on_moved(&mut self, _from: usize, _to: usize) {}
    fn on_changed(&mut self, _position: usize) {}
}

fn dispatch(observer: &mut dyn ListObserver, notification: Notification) {
    match notification {
        Notification::Inserted(position) => observer.on_inserted(position),
        Notification::Removed(position) => observer.on_removed(position),
        Notification::Moved { from, to } => observer.on_moved(from, to),
        Notification::Changed(position) => observer.on_changed(position),
    }
}

/// An observer that records every notification.
///
/// Clones share the same log, so a clone can be handed to the adapter and
/// the original kept for inspection.
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    log: Rc<RefCell<Vec<Notification>>>,
}

impl RecordingObserver {
    pub fn new() -> RecordingObserver {
        return RecordingObserver::default();
    }

    pub fn notifications(&self) -> Vec<Notification> {
        return self.log.borrow().clone();
    }

    /// Return and forget everything recorded so far.
    pub fn drain(&self) -> Vec<Notification> {
        return std::mem::take(&mut *self.log.borrow_mut());
    }
}

impl ListObserver for RecordingObserver {
    fn on_inserted(&mut self, position: usize) {
        self.log.borrow_mut().push(Notification::Inserted(position));
    }

    fn on_removed(&mut self, position: usize) {
        self.log.borrow_mut().push(Notification::Removed(position));
    }

    fn on_moved(&mut self, from: usize, to: usize) {
        self.log.borrow_mut().push(Notification::Moved { from, to });
    }

    fn on_changed(&mut self, position: usize) {
        self.log.borrow_mut().push(Notification::Changed(position));
    }
}

/// Handle returned by [`ListAdapter::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Keeps a visible list in sync with the most recently submitted snapshot.
pub struct ListAdapter<T, C> {
    callback: C,
    reconciler: Reconciler,
    current: Snapshot<T>,
    visible: Vec<T>,
    observers: SmallVec<[(SubscriptionId, Box<dyn ListObserver>); 2]>,
    next_subscription: u64,
}

impl<T, C> ListAdapter<T, C>
where
    T: Clone,
    C: ItemCallback<T>,
{
    pub fn new(callback: C) -> ListAdapter<T, C> {
        return ListAdapter::with_options(callback, ReconcileOptions::default());
    }

    pub fn with_options(callback: C, options: ReconcileOptions) -> ListAdapter<T, C> {
        return ListAdapter {
            callback,
            reconciler: Reconciler::new(options),
            current: Snapshot::empty(),
            visible: Vec::new(),
            observers: SmallVec::new(),
            next_subscription: 0,
        };
    }

    /// Attach an observer. It sees every change from the next submission on.
    pub fn subscribe(&mut self, observer: Box<dyn ListObserver>) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, observer));
        return id;
    }

    /// Detach an observer. Returns false if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        return self.observers.len() != before;
    }

    pub fn subscriber_count(&self) -> usize {
        return self.observers.len();
    }

    /// Replace the list, notifying observers of the differences.
    ///
    /// Returns the edits that were applied. On error nothing changes and
    /// no observer is notified.
    pub fn submit_list(
        &mut self,
        list: impl Into<Snapshot<T>>,
    ) -> Result<EditScript<T>, ReconcileError> {
        let list = list.into();
        if list.ptr_eq(&self.current) {
            return Ok(EditScript::new());
        }

        let script = self
            .reconciler
            .compute(&self.callback, self.current.as_slice(), list.as_slice())?;
        script.apply_to(&mut self.visible)?;

        for edit in &script {
            let notification = Notification::from_edit(edit);
            for (_, observer) in self.observers.iter_mut() {
                dispatch(observer.as_mut(), notification);
            }
        }

        // Without updates the common items still hold their old content.
        self.visible.clone_from_slice(list.as_slice());

        debug!(
            edits = script.len(),
            items = list.len(),
            observers = self.observers.len(),
            "submitted list",
        );
        self.current = list;
        return Ok(script);
    }

    /// Item at `position` in the visible list.
    pub fn item(&self, position: usize) -> Option<&T> {
        return self.visible.get(position);
    }

    pub fn item_count(&self) -> usize {
        return self.visible.len();
    }

    /// The most recently submitted snapshot.
    pub fn current_list(&self) -> &Snapshot<T> {
        return &self.current;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::callback::KeyedEq;

    #[derive(Debug, Clone, PartialEq)]
    struct Night {
        id: u64,
        quality: i32,
    }

    fn night(id: u64, quality: i32) -> Night {
        return Night { id, quality };
    }

    fn adapter() -> ListAdapter<Night, impl ItemCallback<Night>> {
        return ListAdapter::new(KeyedEq::new(|n: &Night| n.id));
    }

    #[test]
    fn first_submission_inserts_everything() {
        let mut adapter = adapter();
        let recorder = RecordingObserver::new();
        adapter.subscribe(Box::new(recorder.clone()));

        adapter.submit_list(vec![night(1, 3), night(2, 4)]).unwrap();

        assert_eq!(adapter.item_count(), 2);
        assert_eq!(adapter.item(1), Some(&night(2, 4)));
        assert_eq!(
            recorder.notifications(),
            vec![Notification::Inserted(0), Notification::Inserted(1)]
        );
    }

    #[test]
    fn visible_list_tracks_submissions() {
        let mut adapter = adapter();
        adapter.submit_list(vec![night(1, 0), night(2, 0), night(3, 0)]).unwrap();
        adapter.submit_list(vec![night(3, 5), night(1, 0), night(4, 1)]).unwrap();

        let visible: Vec<Night> = (0..adapter.item_count())
            .map(|i| adapter.item(i).unwrap().clone())
            .collect();
        assert_eq!(visible, adapter.current_list().to_vec());
    }

    #[test]
    fn notifications_mirror_the_script() {
        let mut adapter = adapter();
        adapter.submit_list(vec![night(1, 0), night(2, 0)]).unwrap();

        let recorder = RecordingObserver::new();
        adapter.subscribe(Box::new(recorder.clone()));
        let script = adapter.submit_list(vec![night(2, 9), night(1, 0)]).unwrap();

        let expected: Vec<Notification> = script.iter().map(Notification::from_edit).collect();
        assert_eq!(recorder.drain(), expected);
        assert!(recorder.notifications().is_empty());
    }

    #[test]
    fn visible_list_takes_new_content_without_updates() {
        let options = ReconcileOptions::new().emit_updates(false);
        let mut adapter: ListAdapter<Night, _> =
            ListAdapter::with_options(KeyedEq::new(|n: &Night| n.id), options);
        let recorder = RecordingObserver::new();
        adapter.subscribe(Box::new(recorder.clone()));

        adapter.submit_list(vec![night(1, 0), night(2, 0)]).unwrap();
        recorder.drain();
        let script = adapter.submit_list(vec![night(2, 7), night(1, 5)]).unwrap();

        assert_eq!(script.counts().updates, 0);
        let heard = recorder.notifications();
        assert_eq!(heard.len(), 1);
        assert!(matches!(heard[0], Notification::Moved { .. }));
        for i in 0..adapter.item_count() {
            assert_eq!(adapter.item(i), adapter.current_list().get(i));
        }
        assert_eq!(adapter.item(1), Some(&night(1, 5)));
    }

    #[test]
    fn resubmitting_same_snapshot_is_a_no_op() {
        let mut adapter = adapter();
        let list = Snapshot::new(vec![night(1, 1)]);
        adapter.submit_list(list.clone()).unwrap();
        assert!(adapter.submit_list(list).unwrap().is_empty());
    }

    #[test]
    fn unsubscribed_observer_hears_nothing() {
        let mut adapter = adapter();
        let recorder = RecordingObserver::new();
        let id = adapter.subscribe(Box::new(recorder.clone()));

        assert!(adapter.unsubscribe(id));
        assert!(!adapter.unsubscribe(id));
        assert_eq!(adapter.subscriber_count(), 0);

        adapter.submit_list(vec![night(1, 1)]).unwrap();
        assert!(recorder.notifications().is_empty());
    }

    #[test]
    fn failed_submission_keeps_current_list() {
        let mut adapter = adapter();
        adapter.submit_list(vec![night(1, 1)]).unwrap();

        let err = adapter.submit_list(vec![night(2, 0), night(2, 1)]);
        assert!(matches!(err, Err(ReconcileError::DuplicateIdentity { .. })));
        assert_eq!(adapter.item_count(), 1);
        assert_eq!(adapter.current_list().to_vec(), vec![night(1, 1)]);
    }
}
