//! Browser `localStorage` glue.
//!
//! SYSTEM CONTEXT
//! ==============
//! Centralizes hydrate-only web-sys access so the session store never
//! repeats window/storage plumbing. Outside a browser every operation
//! reports storage unavailable.

#[cfg(test)]
#[path = "persistence_test.rs"]
mod persistence_test;

/// Read a raw string from `localStorage`.
#[must_use]
pub fn get_item(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Write a raw string to `localStorage`. Returns `false` when storage is
/// unavailable or rejects the write (e.g. quota exhausted).
pub fn set_item(key: &str, value: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return false;
        };
        storage.set_item(key, value).is_ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
        false
    }
}

/// Remove a key from `localStorage`.
pub fn remove_item(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}
