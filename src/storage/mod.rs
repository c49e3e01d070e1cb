//! Persistence bridge: a key-value store seam plus drawing snapshots on top of it.

mod store;
pub mod snapshot;

pub use store::{KeyValueStore, MemoryStore};
#[cfg(target_arch = "wasm32")]
pub use store::LocalStorage;
pub use snapshot::{
    clear_snapshot, last_saved_at, load_snapshot, restore_snapshot, save_snapshot, DRAWING_KEY,
    LAST_SAVE_KEY,
};
