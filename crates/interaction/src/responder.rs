//! User-registered event responders.

use crate::pointer::PointerInput;
use drawing::Interactive;
use smallvec::SmallVec;
use std::fmt;
use std::rc::Rc;

/// A user callback run when an event fires on a shape.
///
/// Responders are compared by identity: clones of the same `Responder` are
/// equal, two responders built from identical closures are not.
#[derive(Clone)]
pub struct Responder(Rc<dyn Fn(&mut dyn Interactive, &PointerInput)>);

impl Responder {
    pub fn new(f: impl Fn(&mut dyn Interactive, &PointerInput) + 'static) -> Self {
        Self(Rc::new(f))
    }

    pub fn call(&self, shape: &mut dyn Interactive, input: &PointerInput) {
        (self.0)(shape, input)
    }
}

impl PartialEq for Responder {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Responder {}

impl fmt::Debug for Responder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Responder({:p})", Rc::as_ptr(&self.0) as *const ())
    }
}

/// Insertion-ordered set of responders for one event kind.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResponderSet(SmallVec<[Responder; 2]>);

impl ResponderSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `responder` at the end. Returns false if it was already present.
    pub fn insert(&mut self, responder: &Responder) -> bool {
        if self.contains(responder) {
            return false;
        }
        self.0.push(responder.clone());
        true
    }

    /// Removes `responder`, keeping the order of the rest.
    /// Returns false if it wasn't present.
    pub fn remove(&mut self, responder: &Responder) -> bool {
        match self.0.iter().position(|r| r == responder) {
            Some(index) => {
                self.0.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, responder: &Responder) -> bool {
        self.0.iter().any(|r| r == responder)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Responder> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_equality() {
        let a = Responder::new(|_, _| {});
        let b = Responder::new(|_, _| {});
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }

    #[test]
    fn test_set_dedupes_and_keeps_order() {
        let a = Responder::new(|_, _| {});
        let b = Responder::new(|_, _| {});
        let c = Responder::new(|_, _| {});

        let mut set = ResponderSet::new();
        assert!(set.insert(&a));
        assert!(set.insert(&b));
        assert!(!set.insert(&a.clone()));
        assert!(set.insert(&c));
        assert_eq!(set.len(), 3);

        assert!(set.remove(&b));
        assert!(!set.remove(&b));
        let order: Vec<_> = set.iter().cloned().collect();
        assert_eq!(order, vec![a, c]);
    }
}
