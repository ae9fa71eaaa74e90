//! Durable key-value storage backed by the local file system.

mod file_store;

pub use file_store::FileKeyValueStore;
