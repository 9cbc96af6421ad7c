//! Route table for the HTTP adapter.
//!
//! ```text
//! GET  /health
//! GET  /health/ready
//! GET  /health/live
//! GET  /api/users
//! GET  /api/users/{id}
//! POST /api/users
//! GET  /api/tasks?status=&userId=
//! GET  /api/tasks/{id}
//! POST /api/tasks
//! PUT  /api/tasks/{id}
//! GET  /api/stats
//! ```
//!
//! Handlers expect `web::Data<HttpState>` and `web::Data<HealthState>` to be
//! registered on the enclosing [`actix_web::App`].

use actix_web::web;

use crate::inbound::http::error::{json_error_handler, path_error_handler};
use crate::inbound::http::{health, stats, tasks, users};

/// Register every endpoint plus the extractor error handlers.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use taskboard::inbound::http::routes;
///
/// let _app = App::new().configure(routes::configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .service(health::health)
        .service(health::ready)
        .service(health::live)
        .service(
            web::scope("/api")
                .service(users::list_users)
                .service(users::get_user)
                .service(users::create_user)
                .service(tasks::list_tasks)
                .service(tasks::get_task)
                .service(tasks::create_task)
                .service(tasks::update_task)
                .service(stats::get_stats),
        );
}
