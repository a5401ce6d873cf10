//! State-change notification.

use super::snapshot::SessionSnapshot;

/// Receives a fresh snapshot after every mutating session call.
///
/// Implemented for any `FnMut(&SessionSnapshot) + Send` closure.
pub trait StateObserver: Send {
    fn state_changed(&mut self, snapshot: &SessionSnapshot);
}

impl<F> StateObserver for F
where
    F: FnMut(&SessionSnapshot) + Send,
{
    fn state_changed(&mut self, snapshot: &SessionSnapshot) {
        self(snapshot)
    }
}
