/// A single captured content value.
///
/// Snapshots are created by an `Originator` and owned by a `History`
/// once saved. There is no way to change the wrapped value after
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot<C = String> {
    state: C,
}

impl<C> Snapshot<C> {
    /// Wraps `state` as given.
    pub fn new(state: C) -> Self {
        Self { state }
    }

    /// Returns the captured value.
    pub fn state(&self) -> &C {
        &self.state
    }

    /// Consumes the snapshot, yielding the captured value.
    pub fn into_state(self) -> C {
        self.state
    }
}

impl<C> From<C> for Snapshot<C> {
    fn from(state: C) -> Self {
        Self::new(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_returns_wrapped_value() {
        let snap = Snapshot::new("hello".to_string());
        assert_eq!(snap.state(), "hello");
    }

    #[test]
    fn test_into_state() {
        let snap = Snapshot::new(vec![1, 2, 3]);
        assert_eq!(snap.into_state(), vec![1, 2, 3]);
    }

    #[test]
    fn test_clone_is_independent_capture() {
        let snap = Snapshot::new(String::from("a"));
        let copy = snap.clone();
        drop(snap);
        assert_eq!(copy.state(), "a");
    }

    #[test]
    fn test_empty_content() {
        let snap: Snapshot = Snapshot::new(String::new());
        assert!(snap.state().is_empty());
    }

    #[test]
    fn test_from_value() {
        let snap: Snapshot<u32> = 7.into();
        assert_eq!(*snap.state(), 7);
    }
}
