use std::convert::Infallible;

use axum::{
    extract::State,
    http::HeaderMap,
    response::sse::{Event, KeepAlive, Sse},
};
use tokio_stream::{
    wrappers::{errors::BroadcastStreamRecvError, BroadcastStream},
    Stream, StreamExt,
};

use crate::{
    model::{api::ErrorDto, event::AppEvent},
    server::{error::AppError, middleware::auth::AuthGuard, state::AppState},
};

/// Tag for grouping the event stream in OpenAPI documentation
pub static EVENT_TAG: &str = "event";

/// Stream change notifications as server-sent events.
///
/// Each event is named after its kind (`created`, `updated`, `deleted`, `reload`)
/// and carries the JSON encoded [`AppEvent`]. A client that falls behind skips the
/// missed events and keeps streaming.
///
/// # Access Control
/// - Any authenticated party
#[utoipa::path(
    get,
    path = "/events",
    tag = EVENT_TAG,
    responses(
        (status = 200, description = "Event stream", content_type = "text/event-stream", body = AppEvent),
        (status = 403, description = "Missing or invalid token", body = ErrorDto)
    ),
)]
pub async fn stream_events(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Sse<impl Stream<Item = Result<Event, Infallible>>>, AppError> {
    let party = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    tracing::debug!("Party {} subscribed to events", party.id);

    let stream = BroadcastStream::new(state.events.subscribe()).filter_map(|event| match event {
        Ok(event) => to_sse(&event).map(Ok),
        Err(BroadcastStreamRecvError::Lagged(skipped)) => {
            tracing::warn!("Event subscriber lagged, skipped {} events", skipped);
            None
        }
    });

    Ok(Sse::new(stream).keep_alive(KeepAlive::default()))
}

fn to_sse(event: &AppEvent) -> Option<Event> {
    match Event::default().event(event.kind()).json_data(event) {
        Ok(sse) => Some(sse),
        Err(e) => {
            tracing::error!("Failed to encode {} event: {}", event.kind(), e);
            None
        }
    }
}
