//! Page scroll lock held while the checkout overlay is visible.

use dioxus::prelude::*;

/// Something whose scrolling can be suspended.
pub trait ScrollTarget {
    fn lock(&mut self);
    fn unlock(&mut self);
}

/// `document.body` of the host page.
#[derive(Debug, Default)]
pub struct DocumentScroll;

impl ScrollTarget for DocumentScroll {
    fn lock(&mut self) {
        let _ = document::eval("document.body.style.overflow = 'hidden';");
    }

    fn unlock(&mut self) {
        let _ = document::eval("document.body.style.overflow = '';");
    }
}

/// Guard over a [`ScrollTarget`]. Acquire and release are idempotent, and a
/// held lock is released when the guard is dropped.
#[derive(Debug)]
pub struct ScrollLock<T: ScrollTarget> {
    target: T,
    held: bool,
}

impl<T: ScrollTarget> ScrollLock<T> {
    pub fn new(target: T) -> Self {
        Self {
            target,
            held: false,
        }
    }

    /// Returns `true` only when this call took the lock.
    pub fn acquire(&mut self) -> bool {
        if self.held {
            return false;
        }
        self.target.lock();
        self.held = true;
        tracing::debug!("scroll lock acquired");
        true
    }

    /// Returns `true` only when this call gave the lock back.
    pub fn release(&mut self) -> bool {
        if !self.held {
            return false;
        }
        self.target.unlock();
        self.held = false;
        tracing::debug!("scroll lock released");
        true
    }

    /// Follow a visibility flag.
    pub fn sync(&mut self, visible: bool) {
        if visible {
            self.acquire();
        } else {
            self.release();
        }
    }

    pub fn is_held(&self) -> bool {
        self.held
    }
}

impl<T: ScrollTarget> Drop for ScrollLock<T> {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Default, Clone)]
    struct Counting {
        locks: Rc<Cell<u32>>,
        unlocks: Rc<Cell<u32>>,
    }

    impl ScrollTarget for Counting {
        fn lock(&mut self) {
            self.locks.set(self.locks.get() + 1);
        }

        fn unlock(&mut self) {
            self.unlocks.set(self.unlocks.get() + 1);
        }
    }

    #[test]
    fn double_open_locks_once_and_close_unlocks_once() {
        let probe = Counting::default();
        let mut lock = ScrollLock::new(probe.clone());

        assert!(lock.acquire());
        assert!(!lock.acquire());
        assert_eq!(probe.locks.get(), 1);

        assert!(lock.release());
        assert!(!lock.release());
        assert_eq!(probe.unlocks.get(), 1);
    }

    #[test]
    fn dropping_a_held_lock_releases_it() {
        let probe = Counting::default();
        {
            let mut lock = ScrollLock::new(probe.clone());
            lock.sync(true);
            assert!(lock.is_held());
        }
        assert_eq!(probe.locks.get(), 1);
        assert_eq!(probe.unlocks.get(), 1);
    }

    #[test]
    fn dropping_after_close_does_not_unlock_again() {
        let probe = Counting::default();
        {
            let mut lock = ScrollLock::new(probe.clone());
            lock.sync(true);
            lock.sync(false);
        }
        assert_eq!(probe.unlocks.get(), 1);
    }

    #[test]
    fn never_opened_never_touches_the_target() {
        let probe = Counting::default();
        drop(ScrollLock::new(probe.clone()));
        assert_eq!(probe.locks.get(), 0);
        assert_eq!(probe.unlocks.get(), 0);
    }
}
