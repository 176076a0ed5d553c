use axum::Json;
use axum::extract::State;
use chrono::{SecondsFormat, Utc};
use crate::AppState;
use crate::models::{StatusResponse, SERVICE_NAME, STATUS_MESSAGE, STATUS_RUNNING};
use crate::uptime::format_uptime;

pub async fn status_handler(State(state): State<AppState>) -> Json<StatusResponse> {

    let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
    let uptime = format_uptime(state.started_at.elapsed());

    Json(StatusResponse {
        name: SERVICE_NAME.to_string(),
        version: state.version.to_string(),
        status: STATUS_RUNNING.to_string(),
        message: STATUS_MESSAGE.to_string(),
        timestamp,
        uptime
    })

}
