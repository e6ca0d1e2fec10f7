//! localStorage-backed preferences.

use gloo_storage::{LocalStorage, Storage};

use crate::types::{AppError, AppResult};
use crate::workflow::PreferenceStore;

/// Preferences kept in the browser's localStorage.
///
/// Values are JSON-encoded by gloo, so a flag is stored as the bare
/// literal `true` or `false`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalPreferenceStore;

impl PreferenceStore for LocalPreferenceStore {
    fn load_flag(&self, key: &str) -> Option<bool> {
        LocalStorage::get::<bool>(key).ok()
    }

    fn save_flag(&self, key: &str, value: bool) -> AppResult<()> {
        LocalStorage::set(key, value).map_err(|e| AppError::Browser(e.to_string()))
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    const KEY: &str = "useAI-test";

    #[wasm_bindgen_test]
    fn wasm_flag_stored_as_literal() {
        let store = LocalPreferenceStore;

        store.save_flag(KEY, true).unwrap();
        assert_eq!(LocalStorage::raw().get_item(KEY).unwrap().as_deref(), Some("true"));
        assert_eq!(store.load_flag(KEY), Some(true));

        store.save_flag(KEY, false).unwrap();
        assert_eq!(LocalStorage::raw().get_item(KEY).unwrap().as_deref(), Some("false"));
        assert_eq!(store.load_flag(KEY), Some(false));

        LocalStorage::delete(KEY);
        assert_eq!(store.load_flag(KEY), None);
    }

    #[wasm_bindgen_test]
    fn wasm_unexpected_value_reads_unset() {
        LocalStorage::raw().set_item(KEY, "yes").unwrap();
        assert_eq!(LocalPreferenceStore.load_flag(KEY), None);
        LocalStorage::delete(KEY);
    }
}
