use axum::extract::State;

use crate::pkg::internal::adaptors::players::selectors::PlayerSelector;
use crate::pkg::server::state::AppState;
use crate::prelude::Result;

pub async fn livez() -> Result<()> {
    tracing::debug!("service is live");
    Ok(())
}

pub async fn healthz(State(state): State<AppState>) -> Result<()> {
    PlayerSelector::new(&state.store).all()?;
    tracing::debug!("service is healthy");
    Ok(())
}
