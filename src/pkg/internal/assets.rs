use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::errors::ScoutingError;
use crate::prelude::Result;

pub const ALLOWED_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];
pub const MAX_PHOTO_BYTES: usize = 5 * 1024 * 1024;

/// Filesystem-safe stem derived from a player name: alphanumeric characters
/// survive, everything else becomes '_', leading/trailing runs are trimmed.
pub fn sanitize_player_name(name: &str) -> String {
    let safe: String = name
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect();
    safe.trim_matches('_').to_string()
}

/// Player photos on disk under a dedicated directory, referenced from the
/// table by relative path.
#[derive(Debug)]
pub struct PhotoStore {
    dir: PathBuf,
}

impl PhotoStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        PhotoStore { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Saves an uploaded photo and returns the table-relative path. Filename
    /// is the sanitized player name plus the current Unix timestamp plus the
    /// original extension.
    pub fn save(&self, player_name: &str, original_filename: &str, data: &[u8]) -> Result<String> {
        let extension = Path::new(original_filename)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();
        if !ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
            return Err(ScoutingError::Validation(
                "Foto del jugador: solo se permiten archivos PNG o JPG".into(),
            ));
        }
        if data.len() > MAX_PHOTO_BYTES {
            return Err(ScoutingError::Validation(
                "Foto del jugador: la imagen supera el tamaño máximo de 5MB".into(),
            ));
        }

        let mut stem = sanitize_player_name(player_name);
        if stem.is_empty() {
            stem = "jugador".into();
        }
        let filename = format!("{}_{}.{}", stem, Utc::now().timestamp(), extension);

        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(&filename);
        fs::write(&path, data)
            .map_err(|e| ScoutingError::Asset(format!("no se pudo guardar la imagen: {e}")))?;
        tracing::debug!("photo stored at {}", path.display());
        Ok(path.to_string_lossy().into_owned())
    }

    /// Resolves a stored relative path, discarding it when the file is gone.
    pub fn resolve(&self, relative: &str) -> Option<PathBuf> {
        let trimmed = relative.trim();
        if trimmed.is_empty() {
            return None;
        }
        let path = PathBuf::from(trimmed);
        path.exists().then_some(path)
    }

    /// Reads a photo by bare filename for serving, refusing path traversal.
    pub fn open(&self, filename: &str) -> Result<Vec<u8>> {
        if filename.contains("..") || filename.contains('/') || filename.contains('\\') {
            return Err(ScoutingError::NotFound(format!("photo {filename}")));
        }
        let path = self.dir.join(filename);
        if !path.exists() {
            return Err(ScoutingError::NotFound(format!("photo {filename}")));
        }
        Ok(fs::read(path)?)
    }

    /// Best-effort removal, used to avoid orphan files when a submission
    /// fails after its photo was already stored.
    pub fn remove(&self, relative: &str) {
        if let Some(path) = self.resolve(relative) {
            if let Err(e) = fs::remove_file(&path) {
                tracing::warn!("could not remove {}: {e}", path.display());
            }
        }
    }
}
