use std::cell::Cell;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use pathlab_core::Grid;

/// Receives the grid after every search step so a caller can render it.
///
/// The grid is lent out read-only: observers look, they never repaint.
pub trait StepObserver {
    fn on_step(&mut self, grid: &Grid);
}

impl<F: FnMut(&Grid)> StepObserver for F {
    #[inline]
    fn on_step(&mut self, grid: &Grid) {
        self(grid)
    }
}

/// External stop request, polled at the top of every search iteration.
pub trait Cancellation {
    fn is_cancelled(&self) -> bool;
}

/// Never cancels.
#[derive(Clone, Copy, Debug, Default)]
pub struct Never;

impl Cancellation for Never {
    #[inline]
    fn is_cancelled(&self) -> bool {
        false
    }
}

impl Cancellation for AtomicBool {
    #[inline]
    fn is_cancelled(&self) -> bool {
        self.load(Ordering::Relaxed)
    }
}

impl Cancellation for Cell<bool> {
    #[inline]
    fn is_cancelled(&self) -> bool {
        self.get()
    }
}

impl<T: Cancellation + ?Sized> Cancellation for &T {
    #[inline]
    fn is_cancelled(&self) -> bool {
        (**self).is_cancelled()
    }
}

/// Cancellation decided by a closure, e.g. one that polls an input queue.
pub struct CancelFn<F>(pub F);

impl<F: Fn() -> bool> Cancellation for CancelFn<F> {
    #[inline]
    fn is_cancelled(&self) -> bool {
        (self.0)()
    }
}

/// A cloneable stop flag that may be raised from another thread or a
/// signal handler while the search runs.
#[derive(Clone, Debug, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Lower the flag so the next search can run.
    pub fn reset(&self) {
        self.0.store(false, Ordering::Relaxed);
    }
}

impl Cancellation for CancelFlag {
    #[inline]
    fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}
