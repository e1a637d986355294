use std::path::PathBuf;

use askama::Template;
use axum::extract::{Query, State};
use axum::http::header::CONTENT_TYPE;
use axum::response::{Html, IntoResponse};
use serde::{Deserialize, Deserializer};
use uuid::Uuid;

use crate::conf::settings;
use crate::errors::ScoutingError;
use crate::pkg::internal::adaptors::players::selectors::PlayerSelector;
use crate::pkg::server::handlers::players::SearchParams;
use crate::pkg::server::state::AppState;
use crate::pkg::server::uispec::{DatabasePage, HomePage, NewReportPage};
use crate::prelude::Result;

pub async fn home() -> Result<Html<String>> {
    let template = HomePage {
        service: &settings.service_name,
    };
    Ok(Html(template.render()?))
}

pub async fn new_report(State(state): State<AppState>) -> Result<Html<String>> {
    let template = NewReportPage::new(&state.positions);
    Ok(Html(template.render()?))
}

#[derive(Debug, Default, Deserialize)]
pub struct DatabaseParams {
    pub league: Option<String>,
    pub club: Option<String>,
    pub position: Option<String>,
    pub nationality: Option<String>,
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub player: Option<Uuid>,
}

/// The selector submits `player=` when nothing is chosen; an empty value
/// means "no selection", not a malformed id.
fn deserialize_optional_id<'de, D>(deserializer: D) -> core::result::Result<Option<Uuid>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => Uuid::parse_str(value)
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

pub async fn database(
    State(state): State<AppState>,
    Query(params): Query<DatabaseParams>,
) -> Result<Html<String>> {
    let filter = SearchParams {
        league: params.league,
        club: params.club,
        position: params.position,
        nationality: params.nationality,
        name: params.name,
    }
    .into_filter();

    let rows = PlayerSelector::new(&state.store).all()?;
    let page = DatabasePage::build(rows, &filter, params.player, &state.photos);
    Ok(Html(page.render()?))
}

/// Optional club badge for the page header; a missing file is a 404 the
/// templates degrade around.
pub async fn logo() -> Result<impl IntoResponse> {
    let path = PathBuf::from(&settings.logo_file);
    if !path.exists() {
        return Err(ScoutingError::NotFound("logo".into()));
    }
    let data = tokio::fs::read(&path).await?;
    Ok(([(CONTENT_TYPE, "image/png")], data))
}
