//! HTTP inbound adapter exposing the phonebook REST endpoints.

pub mod error;
pub mod health;
pub mod info;
pub mod persons;
pub mod schemas;
pub mod state;

use actix_web::web;

pub use error::{ApiResult, json_error_handler};

/// Register the directory endpoints and the JSON body error handler.
///
/// Callers must provide [`state::HttpState`] as application data.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use phonebook::inbound::http::configure;
///
/// let app = App::new().configure(configure);
/// # let _ = app;
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(
            web::scope("/api")
                .service(persons::list_persons)
                .service(persons::create_person)
                .service(persons::get_person)
                .service(persons::delete_person),
        )
        .service(info::info);
}
