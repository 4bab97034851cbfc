use core::cell::UnsafeCell;

/// Minimal wrapper to store non-`Sync` types in statics.
///
/// Safety: the target runs a single hart with no interrupts touching the
/// shim, so shared access never races.
pub struct Global<T> {
    inner: UnsafeCell<T>,
}

impl<T> Global<T> {
    pub const fn new(value: T) -> Self {
        Self {
            inner: UnsafeCell::new(value),
        }
    }

    /// # Safety
    /// Callers must ensure no other thread of control uses the value
    /// concurrently.
    pub unsafe fn get(&self) -> &T {
        unsafe { &*self.inner.get() }
    }
}

unsafe impl<T> Sync for Global<T> {}
