/*!
 * Observable application state.
 *
 * Each store is a value holder: readers take a snapshot or subscribe to
 * changes, writers replace the value or apply a functional update. Nothing
 * here persists; hydrating from and saving to the external key-value store is
 * the caller's business.
 */

use tokio::sync::watch;

pub mod settings;
pub mod update;
pub mod watch_progress;

pub use settings::{AppSettings, SettingsStore, SetupStatus, SetupStore};
pub use update::{UpdateState, UpdateStore};
pub use watch_progress::{WatchProgress, WatchProgressStore};

/// Observable value holder with reset support
#[derive(Debug)]
pub struct Store<T: Clone> {
    initial: T,
    sender: watch::Sender<T>,
}

impl<T: Clone> Store<T> {
    /// Create a store whose `reset` returns to `initial`
    pub fn new(initial: T) -> Self {
        let (sender, _) = watch::channel(initial.clone());
        Self { initial, sender }
    }

    /// Snapshot of the current value
    pub fn get(&self) -> T {
        self.sender.borrow().clone()
    }

    /// Read the current value without cloning it
    pub fn with<F, U>(&self, f: F) -> U
    where
        F: FnOnce(&T) -> U,
    {
        f(&*self.sender.borrow())
    }

    /// Replace the value
    pub fn set(&self, value: T) {
        self.sender.send_replace(value);
    }

    /// Apply a functional update to the value
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&T) -> T,
    {
        self.sender.send_modify(|value| {
            let next = f(value);
            *value = next;
        });
    }

    /// Restore the initial value
    pub fn reset(&self) {
        self.set(self.initial.clone());
    }

    /// Receiver notified on every change
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.sender.subscribe()
    }
}

impl<T: Clone + Default> Default for Store<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
