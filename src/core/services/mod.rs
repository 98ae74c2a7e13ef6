pub mod storage;
pub mod task_store;

pub use storage::{LocalStorageBackend, StorageBackend};
pub use task_store::{TaskStore, STORAGE_KEY};
