use std::collections::HashMap;
use std::path::Path;

use axum::body::Bytes;
use axum::extract::{Multipart, Path as AxumPath, Query, State};
use axum::http::header::CONTENT_TYPE;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use crate::errors::ScoutingError;
use crate::pkg::internal::adaptors::players::mutators::PlayerMutator;
use crate::pkg::internal::adaptors::players::selectors::{PlayerFilter, PlayerSelector};
use crate::pkg::internal::adaptors::players::spec::{NewPlayer, PlayerRecord};
use crate::pkg::server::state::AppState;
use crate::prelude::Result;

/// Required multipart fields with the labels shown in validation messages.
const REQUIRED_FIELDS: [(&str, &str); 8] = [
    ("name", "Nombre del jugador"),
    ("age", "Edad"),
    ("height_cm", "Talla"),
    ("primary_position", "Posición principal"),
    ("current_club", "Club actual"),
    ("league", "Liga"),
    ("foot", "Pie hábil"),
    ("nationality", "Nacionalidad"),
];

/// Labels of every required field that is absent or blank, in form order.
fn missing_required(fields: &HashMap<String, String>) -> Vec<&'static str> {
    REQUIRED_FIELDS
        .iter()
        .filter(|(key, _)| fields.get(*key).map(|v| v.trim().is_empty()).unwrap_or(true))
        .map(|(_, label)| *label)
        .collect()
}

pub async fn create(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<PlayerRecord>> {
    let mut fields: HashMap<String, String> = HashMap::new();
    let mut photo: Option<(String, Bytes)> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ScoutingError::Validation(format!("formulario inválido: {e}")))?
    {
        let field_name = field.name().unwrap_or("").to_string();
        if field_name == "photo" {
            let file_name = field.file_name().unwrap_or("").to_string();
            let data = field.bytes().await.map_err(|e| {
                ScoutingError::Validation(format!("no se pudo leer la imagen: {e}"))
            })?;
            if !file_name.is_empty() && !data.is_empty() {
                photo = Some((file_name, data));
            }
        } else {
            let value = field.text().await.map_err(|e| {
                ScoutingError::Validation(format!("no se pudo leer el campo {field_name}: {e}"))
            })?;
            fields.insert(field_name, value.trim().to_string());
        }
    }

    let missing = missing_required(&fields);
    if !missing.is_empty() {
        return Err(ScoutingError::Validation(format!(
            "Por favor complete los siguientes campos obligatorios: {}",
            missing.join(", ")
        )));
    }

    let mut draft = NewPlayer::from_form(&fields)?;
    if let Some((file_name, data)) = photo {
        draft.photo_path = Some(state.photos.save(&draft.name, &file_name, &data)?);
    }

    let stored_photo = draft.photo_path.clone();
    let record = match PlayerMutator::new(&state.store).create(draft) {
        Ok(record) => record,
        Err(err) => {
            // no orphan photo behind a failed submission
            if let Some(path) = &stored_photo {
                state.photos.remove(path);
            }
            return Err(err);
        }
    };
    tracing::info!("player stored: {} ({})", record.name, record.id);
    Ok(Json(record))
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<PlayerRecord>>> {
    let players = PlayerSelector::new(&state.store).all()?;
    Ok(Json(players))
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub league: Option<String>,
    pub club: Option<String>,
    pub position: Option<String>,
    pub nationality: Option<String>,
    pub name: Option<String>,
}

impl SearchParams {
    /// Blank inputs mean "no restriction", matching the dropdowns' empty
    /// first entry.
    pub fn into_filter(self) -> PlayerFilter {
        fn clean(value: Option<String>) -> Option<String> {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        }
        PlayerFilter {
            league: clean(self.league),
            club: clean(self.club),
            position: clean(self.position),
            nationality: clean(self.nationality),
            name: clean(self.name),
        }
    }
}

pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<PlayerRecord>>> {
    let filter = params.into_filter();
    let players = PlayerSelector::new(&state.store).filtered(&filter)?;
    Ok(Json(players))
}

pub async fn photo(
    State(state): State<AppState>,
    AxumPath(file): AxumPath<String>,
) -> Result<impl IntoResponse> {
    let data = state.photos.open(&file)?;
    let content_type = match Path::new(&file).extension().and_then(|e| e.to_str()) {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        _ => "application/octet-stream",
    };
    Ok(([(CONTENT_TYPE, content_type)], data))
}
