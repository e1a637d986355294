use std::fs;
use std::path::Path;

/// Built-in position list used when no positions file is present.
pub const DEFAULT_POSITIONS: [&str; 15] = [
    "Portero",
    "Lateral Izquierdo",
    "Lateral Derecho",
    "Defensa Central",
    "Pivote",
    "Mediocentro",
    "Mediocentro Defensivo",
    "Mediocentro Ofensivo",
    "Interior Izquierdo",
    "Interior Derecho",
    "Extremo Izquierdo",
    "Extremo Derecho",
    "Mediapunta",
    "Delantero Centro",
    "Segundo Delantero",
];

/// Loads the selectable positions, one per line; falls back to the built-in
/// list when the file is absent, unreadable or empty.
pub fn load(path: impl AsRef<Path>) -> Vec<String> {
    match fs::read_to_string(&path) {
        Ok(content) => {
            let positions: Vec<String> = content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(String::from)
                .collect();
            if positions.is_empty() {
                default_positions()
            } else {
                positions
            }
        }
        Err(e) => {
            tracing::debug!(
                "positions file {} not readable ({e}), using defaults",
                path.as_ref().display()
            );
            default_positions()
        }
    }
}

pub fn default_positions() -> Vec<String> {
    DEFAULT_POSITIONS.iter().map(|p| p.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let positions = load("definitely/not/here.txt");
        assert_eq!(positions.len(), DEFAULT_POSITIONS.len());
        assert_eq!(positions[0], "Portero");
    }

    #[test]
    fn file_entries_override_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("posiciones.txt");
        fs::write(&path, "Portero\n\n  Carrilero  \n").unwrap();
        assert_eq!(load(&path), ["Portero", "Carrilero"]);
    }

    #[test]
    fn empty_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("posiciones.txt");
        fs::write(&path, "\n\n").unwrap();
        assert_eq!(load(&path).len(), DEFAULT_POSITIONS.len());
    }
}
