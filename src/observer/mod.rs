//! # Observer
//!
//! A [`Subject`] keeps an ordered list of [`Observer`] callbacks and calls them all when
//! it [fires](Subject::fire).
//!
//! ## Identity
//! Observers compare by identity of their shared callback: cloning an `Observer` gives a
//! handle that [`Subject::unsubscribe`] will recognise, while two observers built from
//! identical closures are still different observers.
//!
//! ## Mutation while firing
//! `fire` takes a snapshot of the list when the pass starts and releases the lock
//! before calling anything, so callbacks may subscribe or unsubscribe freely:
//! - observers subscribed during a pass are first called on the next pass
//! - observers unsubscribed during a pass are skipped for the rest of it, even when
//!   they are subscribed again before their turn
//!
//! ```rust
//! use pattern_catalog::observer::{Observer, Subject};
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//!
//! let calls = Arc::new(AtomicUsize::new(0));
//! let counter = Arc::clone(&calls);
//! let o1 = Observer::named("observer_1", || println!("Observer 1 Firing!"));
//! let o2 = Observer::named("observer_2", move || {
//!     counter.fetch_add(1, Ordering::SeqCst);
//! });
//!
//! let subject = Subject::new();
//! subject.subscribe(o1.clone());
//! subject.subscribe(o2);
//! subject.unsubscribe(&o1);
//!
//! assert_eq!(subject.fire(), 1);
//! assert_eq!(calls.load(Ordering::SeqCst), 1);
//! ```

use std::collections::HashSet;
use std::fmt::Debug;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, trace};

/// A named, shareable callback.
#[derive(Clone)]
pub struct Observer {
    name: Arc<str>,
    callback: Arc<dyn Fn() + Send + Sync>,
}

impl Observer {
    pub fn new(callback: impl Fn() + Send + Sync + 'static) -> Self {
        Self::named("anonymous", callback)
    }

    pub fn named(name: impl Into<String>, callback: impl Fn() + Send + Sync + 'static) -> Self {
        let name: String = name.into();
        Self {
            name: Arc::from(name),
            callback: Arc::new(callback),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Invokes the callback.
    pub fn notify(&self) {
        (self.callback)()
    }
}

impl PartialEq for Observer {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.callback, &other.callback)
    }
}

impl Eq for Observer {}

impl Debug for Observer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Observer").field(&self.name).finish()
    }
}

/// The "one" side of a one-to-many notification.
#[derive(Debug, Default)]
pub struct Subject {
    subscriptions: Mutex<Subscriptions>,
}

/// Subscription list plus the set of ids still live, so `fire` can tell a removed
/// entry from a re-added one in constant time.
#[derive(Debug, Default)]
struct Subscriptions {
    next_id: u64,
    entries: Vec<(u64, Observer)>,
    live: HashSet<u64>,
}

impl Subject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `observer`. Subscribing the same observer twice makes it fire twice.
    pub fn subscribe(&self, observer: Observer) {
        let mut subs = self.subscriptions();
        let id = subs.next_id;
        subs.next_id += 1;
        debug!(observer = observer.name(), id, size = subs.entries.len() + 1, "Subscribed");
        subs.entries.push((id, observer));
        subs.live.insert(id);
    }

    /// Removes every subscription of `observer` and returns how many were removed.
    pub fn unsubscribe(&self, observer: &Observer) -> usize {
        let mut subs = self.subscriptions();
        let Subscriptions { entries, live, .. } = &mut *subs;
        let before = entries.len();
        entries.retain(|(id, o)| {
            let keep = o != observer;
            if !keep {
                live.remove(id);
            }
            keep
        });
        let removed = before - entries.len();
        debug!(observer = observer.name(), removed, size = entries.len(), "Unsubscribed");
        removed
    }

    /// Calls every subscribed observer once per subscription, in subscription order.
    ///
    /// Returns the number of callbacks invoked.
    pub fn fire(&self) -> usize {
        let snapshot = self.subscriptions().entries.clone();
        debug!(size = snapshot.len(), "Firing");

        let mut invoked = 0;
        for (id, observer) in &snapshot {
            // A subscription removed mid-pass keeps its id out of `live` even if the
            // same observer is subscribed again under a new id.
            if !self.subscriptions().live.contains(id) {
                trace!(observer = observer.name(), id, "Skipped, unsubscribed during fire");
                continue;
            }
            trace!(observer = observer.name(), id, "Notify");
            observer.notify();
            invoked += 1;
        }
        invoked
    }

    pub fn len(&self) -> usize {
        self.subscriptions().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscriptions().entries.is_empty()
    }

    // The list stays consistent even if a callback panicked while another thread held
    // the lock, so poisoning is ignored.
    fn subscriptions(&self) -> MutexGuard<'_, Subscriptions> {
        self.subscriptions.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
