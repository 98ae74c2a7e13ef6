use wasm_bindgen::JsValue;

/// Key-value collaborator the task store persists through. Kept as a trait so
/// the store logic runs against an in-memory map in native tests.
pub trait StorageBackend {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), String>;
}

/// Browser `localStorage`. The handle is resolved once at construction; when
/// the browser refuses access (private mode, sandboxed frame) the board keeps
/// running in-memory and every write is a logged no-op.
pub struct LocalStorageBackend {
    storage: Option<web_sys::Storage>,
}

impl LocalStorageBackend {
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            web_sys::console::error_1(&JsValue::from_str(
                "localStorage is unavailable; board changes will not persist",
            ));
        }
        Self { storage }
    }
}

impl StorageBackend for LocalStorageBackend {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        let storage = self
            .storage
            .as_ref()
            .ok_or_else(|| "localStorage is unavailable".to_string())?;
        storage
            .set_item(key, value)
            .map_err(|err| format!("localStorage write failed: {err:?}"))
    }
}

#[cfg(test)]
pub use memory::MemoryBackend;

#[cfg(test)]
mod memory {
    use super::StorageBackend;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    /// Shared in-memory backend: clones see each other's writes, so a test
    /// can reload a board through a second store instance.
    #[derive(Clone, Default)]
    pub struct MemoryBackend {
        entries: Rc<RefCell<HashMap<String, String>>>,
    }

    impl MemoryBackend {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn raw(&self, key: &str) -> Option<String> {
            self.entries.borrow().get(key).cloned()
        }

        pub fn put_raw(&self, key: &str, value: &str) {
            self.entries
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
        }
    }

    impl StorageBackend for MemoryBackend {
        fn get(&self, key: &str) -> Option<String> {
            self.raw(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<(), String> {
            self.put_raw(key, value);
            Ok(())
        }
    }
}
