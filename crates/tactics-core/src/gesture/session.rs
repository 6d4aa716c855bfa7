//! A single pointer gesture's owned resources

use tracing::debug;

use super::listeners::{ListenerGuard, ListenerKind, ListenerRegistry};
use crate::board::Board;

/// Resources held from gesture start to gesture end: the nav-lock value to
/// restore and the window-level pointer listeners.
///
/// [`GestureSession::end`] is the only teardown path. The prior lock value
/// is captured once at start; toggles made while the gesture runs are
/// overwritten on release.
#[derive(Debug)]
pub struct GestureSession {
    prior_lock: bool,
    _listeners: ListenerGuard,
}

impl GestureSession {
    /// Acquire the nav lock and attach pointer listeners
    pub fn begin(board: &mut Board, registry: &ListenerRegistry) -> Self {
        let prior_lock = board.nav_locked();
        board.set_nav_lock(true);
        let listeners = registry.attach(&[ListenerKind::PointerMove, ListenerKind::PointerUp]);
        debug!("Gesture session started (prior lock: {})", prior_lock);
        Self {
            prior_lock,
            _listeners: listeners,
        }
    }

    /// Restore the nav lock and detach listeners
    pub fn end(self, board: &mut Board) {
        board.set_nav_lock(self.prior_lock);
        debug!("Gesture session ended (lock restored to {})", self.prior_lock);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_restores_prior_lock() {
        for prior in [false, true] {
            let mut board = Board::default();
            let registry = ListenerRegistry::new();
            board.set_nav_lock(prior);

            let session = GestureSession::begin(&mut board, &registry);
            assert!(board.nav_locked());
            assert_eq!(registry.len(), 2);

            session.end(&mut board);
            assert_eq!(board.nav_locked(), prior);
            assert!(registry.is_empty());
        }
    }

    #[test]
    fn test_dropped_session_still_detaches() {
        let mut board = Board::default();
        let registry = ListenerRegistry::new();
        {
            let _session = GestureSession::begin(&mut board, &registry);
            assert!(registry.is_attached(ListenerKind::PointerMove));
        }
        assert!(registry.is_empty());
    }
}
