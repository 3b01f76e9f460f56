//! Subscriber registry and subscription handles.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use tracing::debug;

type Subscriber = Rc<dyn Fn()>;

/// Ordered, append-only list of subscribers (unless a handle releases one).
#[derive(Default)]
pub(crate) struct Subscribers {
    entries: RefCell<Vec<(u64, Subscriber)>>,
    next_id: Cell<u64>,
}

impl Subscribers {
    pub(crate) fn add(self: &Rc<Self>, callback: Subscriber) -> Subscription {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.entries.borrow_mut().push((id, callback));
        debug!(subscriber = id, "subscriber registered");

        Subscription {
            id,
            subscribers: Rc::downgrade(self),
        }
    }

    /// Copy of the current list; later additions or removals do not affect it.
    pub(crate) fn snapshot(&self) -> Vec<Subscriber> {
        self.entries
            .borrow()
            .iter()
            .map(|(_, callback)| Rc::clone(callback))
            .collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    fn remove(&self, id: u64) -> bool {
        let mut entries = self.entries.borrow_mut();
        let before = entries.len();
        entries.retain(|(entry, _)| *entry != id);
        entries.len() != before
    }
}

/// Handle for a registered subscriber.
///
/// Dropping the handle keeps the subscriber registered; call
/// [`Subscription::unsubscribe`] to release it.
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    subscribers: Weak<Subscribers>,
}

impl Subscription {
    /// Remove the subscriber from its store.
    ///
    /// Returns `false` if the store is gone. A dispatch already notifying
    /// subscribers still calls this one in its current pass.
    pub fn unsubscribe(self) -> bool {
        let Some(subscribers) = self.subscribers.upgrade() else {
            return false;
        };
        let removed = subscribers.remove(self.id);
        debug!(subscriber = self.id, removed, "subscriber released");
        removed
    }
}
