use axum::extract::{Path as AxumPath, State};
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::response::IntoResponse;
use uuid::Uuid;

use crate::errors::ScoutingError;
use crate::pkg::internal::adaptors::players::selectors::PlayerSelector;
use crate::pkg::internal::report;
use crate::pkg::server::state::AppState;
use crate::prelude::Result;

/// Generates the two-page PDF for one record and offers it as a download.
/// Reports are transient: nothing is written to disk.
pub async fn download(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<Uuid>,
) -> Result<impl IntoResponse> {
    let record = PlayerSelector::new(&state.store)
        .by_id(id)?
        .ok_or_else(|| ScoutingError::NotFound(format!("player {id}")))?;

    let pdf = report::render_report(&record, &state.photos)?;
    let filename = report::report_filename(&record);
    tracing::debug!("report generated for {} ({} bytes)", record.name, pdf.len());

    Ok((
        [
            (CONTENT_TYPE, "application/pdf".to_string()),
            (
                CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        pdf,
    ))
}
