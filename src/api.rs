use actix_web::{web, HttpRequest, HttpResponse};
use leptos::logging::log;
use crate::models::session::SessionStatus;

/// `GET /api/session`.
///
/// No identity provider is wired in yet, so nobody holds a session and every
/// visitor is told they are logged out.
pub async fn session_status(req: HttpRequest) -> HttpResponse {
    log!("[API] Session check from {:?}", req.peer_addr());
    HttpResponse::Ok().json(SessionStatus {
        authenticated: false,
    })
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/session", web::get().to(session_status));
}
