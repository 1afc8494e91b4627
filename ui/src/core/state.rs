//! Shared state handle for the async drivers in `subscribe` and `navigation`.
//!
//! Components hand over a `Signal`; native tests use `Rc<RefCell<_>>`.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::{Readable, Signal, Writable};

pub trait SharedState<T: Clone>: Clone {
    /// Copy of the current value, without subscribing anything to it.
    fn snapshot(&self) -> T;

    fn replace(&mut self, value: T);

    /// Edit the value in place. Always counts as a write.
    fn update<R>(&mut self, f: impl FnOnce(&mut T) -> R) -> R {
        let mut value = self.snapshot();
        let out = f(&mut value);
        self.replace(value);
        out
    }
}

impl<T: Clone + 'static> SharedState<T> for Signal<T> {
    fn snapshot(&self) -> T {
        T::clone(&self.peek())
    }

    fn replace(&mut self, value: T) {
        self.set(value);
    }

    fn update<R>(&mut self, f: impl FnOnce(&mut T) -> R) -> R {
        self.with_mut(f)
    }
}

impl<T: Clone> SharedState<T> for Rc<RefCell<T>> {
    fn snapshot(&self) -> T {
        self.borrow().clone()
    }

    fn replace(&mut self, value: T) {
        *self.borrow_mut() = value;
    }

    fn update<R>(&mut self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut *self.borrow_mut())
    }
}
