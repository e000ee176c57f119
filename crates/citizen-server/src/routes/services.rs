use axum::{extract::Path, routing::get, Json, Router};
use citizen_core::{ServiceKind, UNKNOWN_SERVICE_MESSAGE};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct ServiceEntry {
    pub slug: &'static str,
    pub label: &'static str,
}

#[derive(Serialize)]
pub struct ServiceInfo {
    pub label: Option<&'static str>,
    pub markdown: &'static str,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_services))
        .route("/{name}", get(get_service))
}

async fn list_services() -> Json<Vec<ServiceEntry>> {
    Json(
        ServiceKind::ALL
            .iter()
            .map(|kind| ServiceEntry {
                slug: kind.slug(),
                label: kind.label(),
            })
            .collect(),
    )
}

async fn get_service(Path(name): Path<String>) -> Json<ServiceInfo> {
    let info = match name.parse::<ServiceKind>() {
        Ok(kind) => ServiceInfo {
            label: Some(kind.label()),
            markdown: kind.info(),
        },
        Err(_) => ServiceInfo {
            label: None,
            markdown: UNKNOWN_SERVICE_MESSAGE,
        },
    };
    Json(info)
}
