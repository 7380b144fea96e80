//! Status route
//!
//! Runs one status pass per request and answers with the report. The status
//! code carries the verdict for load balancers: 200 when available, 429 when
//! the server is degraded and 503 otherwise.

use crate::core::status::StatusReport;
use crate::server::state::AppState;
use crate::utils::error::MonitorError;
use actix_web::{HttpResponse, web};
use tracing::{debug, info, warn};

/// Register the status route at `path`
pub fn configure_routes(cfg: &mut web::ServiceConfig, path: &str) {
    cfg.route(path, web::get().to(status));
}

/// Status endpoint
pub async fn status(state: web::Data<AppState>) -> HttpResponse {
    debug!("START status request");

    let deadline = state.status_timeout();
    let report = match tokio::time::timeout(deadline, state.client.get_status()).await {
        Ok(report) => report,
        Err(_) => {
            let error = MonitorError::timeout(format!(
                "Status pass did not complete within {}s",
                deadline.as_secs()
            ));
            warn!("{}", error);
            StatusReport::from_error(&error)
        }
    };

    if report.is_ok() {
        info!("Server status is {}", report.verdict());
    } else if report.is_degraded() {
        info!(alerts = ?report.alert_types, "Server status is {}", report.verdict());
    } else {
        warn!(
            server = %report.server,
            error = ?report.error.as_ref().map(|e| e.message.as_str()),
            "Server status is {}",
            report.verdict()
        );
    }

    let response = HttpResponse::build(report.http_status()).json(&report);
    debug!("END status request");
    response
}
