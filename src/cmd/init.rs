use std::fs;

use crate::{conf::settings, pkg::internal::store::RecordStore, prelude::Result};

/// Prepares the local storage: the photo directory and the player table with
/// its header row. Safe to run repeatedly.
pub fn apply() -> Result<()> {
    fs::create_dir_all(&settings.images_dir)?;
    tracing::debug!("images directory ready at {}", &settings.images_dir);

    let store = RecordStore::new(&settings.database_file);
    store.initialize()?;

    println!("Storage initialized successfully");
    Ok(())
}
