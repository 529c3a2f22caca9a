//! Per-route scroll offset persistence.

use super::config::SCROLL_POSITION_PREFIX;
use super::storage::{KeyValueStore, StorageError};

pub fn scroll_key(route: &str) -> String {
    format!("{SCROLL_POSITION_PREFIX}{route}")
}

/// Remember the vertical offset for `route`.
pub fn save_position(store: &dyn KeyValueStore, route: &str, y: f64) -> Result<(), StorageError> {
    let y = if y.is_finite() { y.max(0.0) } else { 0.0 };
    store.set(&scroll_key(route), &format!("{}", y.round() as i64))
}

/// The saved offset for `route`. Unreadable values are treated as absent.
pub fn restore_position(store: &dyn KeyValueStore, route: &str) -> Option<f64> {
    let raw = match store.get(&scroll_key(route)) {
        Ok(raw) => raw?,
        Err(err) => {
            tracing::warn!(%err, route, "couldn't read scroll position");
            return None;
        }
    };
    raw.trim().parse::<f64>().ok().filter(|y| y.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::storage::MemoryStore;

    #[test]
    fn positions_are_kept_per_route() {
        let store = MemoryStore::default();
        save_position(&store, "/turnusliste", 812.4).unwrap();
        save_position(&store, "/", 10.0).unwrap();
        assert_eq!(restore_position(&store, "/turnusliste"), Some(812.0));
        assert_eq!(restore_position(&store, "/"), Some(10.0));
        assert_eq!(restore_position(&store, "/favoritter"), None);
    }

    #[test]
    fn garbage_is_ignored() {
        let store = MemoryStore::default();
        store.set(&scroll_key("/"), "NaNpx").unwrap();
        assert_eq!(restore_position(&store, "/"), None);
    }
}
