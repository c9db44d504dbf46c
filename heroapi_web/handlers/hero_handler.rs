use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::http::AppState;

const POWERSTATS_SEGMENT: &str = "powerstats";

/// GET {base}/{*rest} - single entry point for both operations, dispatched on
/// the remainder of the path. A `powerstats` segment anywhere in the
/// remainder wins over name lookup, whatever identifier precedes it; this
/// also covers the double-slash form `{base}//powerstats`.
pub async fn hero_lookup(State(state): State<AppState>, Path(rest): Path<String>) -> Response {
    if is_powerstats_path(&rest) {
        power_stats(state).await
    } else {
        hero_name(state, &rest).await
    }
}

fn is_powerstats_path(rest: &str) -> bool {
    rest.split('/').any(|segment| segment == POWERSTATS_SEGMENT)
}

async fn power_stats(state: AppState) -> Response {
    match state.store.power_stats().await {
        Ok(stats) => Json(stats).into_response(),
        Err(e) => {
            tracing::error!("Unable to list power stats: {}", e);
            internal_error()
        }
    }
}

async fn hero_name(state: AppState, id: &str) -> Response {
    match state.store.hero_name(id).await {
        Ok(Some(name)) => name.into_response(),
        // Absence keeps the empty plain-text body, there is no error payload.
        Ok(None) => (StatusCode::NOT_FOUND, "").into_response(),
        Err(e) => {
            tracing::error!("Unable to resolve hero {}: {}", id, e);
            internal_error()
        }
    }
}

fn internal_error() -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error.").into_response()
}

#[cfg(test)]
mod tests {
    use super::is_powerstats_path;

    #[test]
    fn powerstats_segment_dispatches_to_list() {
        assert!(is_powerstats_path("/powerstats"));
        assert!(is_powerstats_path("powerstats"));
        assert!(is_powerstats_path("60/powerstats"));
    }

    #[test]
    fn plain_ids_dispatch_to_name_lookup() {
        assert!(!is_powerstats_path("247"));
        assert!(!is_powerstats_path("/some-id"));
        assert!(!is_powerstats_path("powerstatsish"));
    }
}
