use std::fmt;

use slotmap::{SlotMap, new_key_type};

new_key_type! {
    /// Handle returned by [`Observable::subscribe`].
    pub struct SubId;
}

/// A value that tells its subscribers when it changes.
///
/// Handlers receive `(old, new)` and run synchronously inside the mutating
/// call. Writing the value it already holds is a no-op: no handler runs.
pub struct Observable<T: 'static> {
    value: T,
    subs: SlotMap<SubId, Box<dyn Fn(&T, &T)>>,
}

impl<T: PartialEq> Observable<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            subs: SlotMap::with_key(),
        }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    /// Store `v`, notifying subscribers. Returns whether the value changed.
    pub fn set(&mut self, v: T) -> bool {
        if self.value == v {
            return false;
        }
        let old = std::mem::replace(&mut self.value, v);
        for s in self.subs.values() {
            s(&old, &self.value);
        }
        true
    }

    pub fn subscribe(&mut self, f: impl Fn(&T, &T) + 'static) -> SubId {
        self.subs.insert(Box::new(f))
    }

    pub fn unsubscribe(&mut self, id: SubId) -> bool {
        self.subs.remove(id).is_some()
    }
}

impl<T: PartialEq + Copy> Observable<T> {
    pub fn value(&self) -> T {
        self.value
    }
}

impl<T: PartialEq + Default> Default for Observable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observable")
            .field("value", &self.value)
            .field("subscribers", &self.subs.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn set_notifies_with_old_and_new() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut obs = Observable::new(1);
        let seen_clone = seen.clone();
        obs.subscribe(move |old, new| seen_clone.borrow_mut().push((*old, *new)));

        assert!(obs.set(5));
        assert!(obs.set(6));
        assert_eq!(*seen.borrow(), vec![(1, 5), (5, 6)]);
        assert_eq!(obs.value(), 6);
    }

    #[test]
    fn unchanged_value_is_silent() {
        let calls = Rc::new(RefCell::new(0));
        let mut obs = Observable::new(String::from("a"));
        let calls_clone = calls.clone();
        obs.subscribe(move |_, _| *calls_clone.borrow_mut() += 1);

        assert!(!obs.set("a".to_string()));
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let calls = Rc::new(RefCell::new(0));
        let mut obs = Observable::new(0);
        let calls_clone = calls.clone();
        let id = obs.subscribe(move |_, _| *calls_clone.borrow_mut() += 1);

        obs.set(1);
        assert!(obs.unsubscribe(id));
        assert!(!obs.unsubscribe(id));
        obs.set(2);
        assert_eq!(*calls.borrow(), 1);
    }
}
