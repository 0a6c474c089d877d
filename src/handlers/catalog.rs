use axum::Json;

use crate::models::service::CATALOG;

#[derive(serde::Serialize)]
pub struct ServiceView {
    #[serde(flatten)]
    service: &'static crate::models::Service,
    price_label: String,
}

// GET /api/services
pub async fn list_services() -> Json<Vec<ServiceView>> {
    Json(
        CATALOG
            .iter()
            .map(|service| ServiceView {
                service,
                price_label: service.price_label(),
            })
            .collect(),
    )
}
