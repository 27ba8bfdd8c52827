//! An abstraction over `std::sync::Mutex` and `futures::lock::Mutex`, so
//! that the clients can lock their token in both the sync and the async
//! compilations of the crate.

use thiserror::Error;

#[derive(Debug, Error)]
#[error("failed to acquire lock")]
pub struct LockError;

#[cfg(feature = "__async")]
mod imp {
    pub use futures::lock::{Mutex, MutexGuard};
}

#[cfg(feature = "__sync")]
mod imp {
    pub use std::sync::{Mutex, MutexGuard};
}

#[derive(Debug, Default)]
pub struct Mutex<T: ?Sized>(imp::Mutex<T>);

impl<T> Mutex<T> {
    pub fn new(value: T) -> Self {
        Self(imp::Mutex::new(value))
    }
}

#[cfg(feature = "__async")]
impl<T: ?Sized> Mutex<T> {
    pub async fn lock(&self) -> Result<imp::MutexGuard<'_, T>, LockError> {
        Ok(self.0.lock().await)
    }
}

#[cfg(feature = "__sync")]
impl<T: ?Sized> Mutex<T> {
    pub fn lock(&self) -> Result<imp::MutexGuard<'_, T>, LockError> {
        self.0.lock().map_err(|_| LockError)
    }
}
