use core::mem;

#[cfg(feature = "std")]
type Inner<T> = std::sync::Mutex<T>;
#[cfg(feature = "std")]
type Guard<'a, T> = std::sync::MutexGuard<'a, T>;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
type Inner<T> = spin::Mutex<T>;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
type Guard<'a, T> = spin::MutexGuard<'a, T>;

/// Lock around the game session. A poisoned lock is recovered, not
/// propagated.
pub struct Mutex<T>(Inner<T>);

impl<T> Mutex<T> {
    pub const fn new(value: T) -> Self {
        Self(Inner::new(value))
    }

    #[cfg(feature = "std")]
    pub fn lock(&self) -> Guard<'_, T> {
        self.0
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    #[cfg(all(not(feature = "std"), feature = "alloc"))]
    pub fn lock(&self) -> Guard<'_, T> {
        self.0.lock()
    }

    /// Swaps in a new value, returning the old one.
    pub fn replace(&self, value: T) -> T {
        mem::replace(&mut *self.lock(), value)
    }
}
