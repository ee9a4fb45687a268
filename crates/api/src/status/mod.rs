use actix_web::{web, HttpResponse};
use evently_api_structs::get_service_health::*;

/// Liveness probe. Does not touch the event store.
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(APIResponse {
        status: "ok".into(),
        version: env!("CARGO_PKG_VERSION").into(),
    })
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(health_check));
}
