use std::sync::Arc;

use crate::conf::settings;
use crate::pkg::internal::assets::PhotoStore;
use crate::pkg::internal::positions;
use crate::pkg::internal::store::RecordStore;

/// Shared handles for the request handlers. The store holds no cached rows:
/// every interaction reloads the table, so each response reflects the file
/// as it is on disk.
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: Arc<RecordStore>,
    pub photos: Arc<PhotoStore>,
    pub positions: Arc<Vec<String>>,
}

impl AppState {
    pub fn new() -> AppState {
        AppState {
            store: Arc::new(RecordStore::new(&settings.database_file)),
            photos: Arc::new(PhotoStore::new(&settings.images_dir)),
            positions: Arc::new(positions::load(&settings.positions_file)),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
