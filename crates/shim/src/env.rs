use core::ffi::c_char;
use core::ptr;

/// A null-terminated `char *[]` as newlib expects for `environ`.
#[repr(transparent)]
pub struct EnvList<const N: usize>([*const c_char; N]);

// Entries point at immutable, 'static data (or nothing at all).
unsafe impl<const N: usize> Sync for EnvList<N> {}

impl<const N: usize> EnvList<N> {
    /// Number of variables before the terminator.
    pub fn len(&self) -> usize {
        self.0.iter().take_while(|entry| !entry.is_null()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub const fn as_ptr(&self) -> *const *const c_char {
        self.0.as_ptr()
    }
}

/// The only environment this runtime offers: just the terminator.
pub static EMPTY_ENVIRONMENT: EnvList<1> = EnvList([ptr::null()]);
