//! Window-level listener registrations
//!
//! A gesture that must keep tracking the pointer after it leaves the
//! viewport registers window-level listeners for its lifetime. Registrations
//! are handed out as [`ListenerGuard`]s which detach on drop, so every exit
//! path releases them.

use std::sync::Arc;

use parking_lot::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    /// Pointer movement anywhere in the window
    PointerMove,
    /// Pointer release anywhere in the window
    PointerUp,
    /// Key presses routed to the current selection
    Keyboard,
}

#[derive(Debug, Default)]
struct Registrations {
    next_id: u64,
    attached: Vec<(u64, ListenerKind)>,
}

/// Shared table of attached listeners
#[derive(Debug, Clone, Default)]
pub struct ListenerRegistry {
    inner: Arc<Mutex<Registrations>>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach one listener per kind; all are detached when the guard drops
    pub fn attach(&self, kinds: &[ListenerKind]) -> ListenerGuard {
        let mut inner = self.inner.lock();
        let mut ids = Vec::with_capacity(kinds.len());
        for kind in kinds {
            let id = inner.next_id;
            inner.next_id += 1;
            inner.attached.push((id, *kind));
            ids.push(id);
        }
        ListenerGuard {
            registry: self.clone(),
            ids,
        }
    }

    pub fn is_attached(&self, kind: ListenerKind) -> bool {
        self.inner.lock().attached.iter().any(|(_, k)| *k == kind)
    }

    /// Total number of live registrations
    pub fn len(&self) -> usize {
        self.inner.lock().attached.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn detach(&self, ids: &[u64]) {
        self.inner
            .lock()
            .attached
            .retain(|(id, _)| !ids.contains(id));
    }
}

/// Scoped listener registration
#[derive(Debug)]
pub struct ListenerGuard {
    registry: ListenerRegistry,
    ids: Vec<u64>,
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        self.registry.detach(&self.ids);
    }
}
