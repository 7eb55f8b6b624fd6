//! HTTP handlers and route configuration.

mod comments;
mod health;
mod posts;

#[cfg(test)]
mod test_support;

use actix_web::web;

use crate::middleware::error::json_error_handler;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/posts")
                .route("", web::get().to(posts::list_posts))
                .route("", web::post().to(posts::add_new_post))
                .route("/{id}", web::get().to(posts::get_single_post))
                .route("/{id}/comments", web::post().to(comments::add_comment_on_post)),
        )
        .route(
            "/comments/{commentid}",
            web::get().to(comments::get_single_comment),
        );
}
