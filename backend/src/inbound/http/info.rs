//! `GET /info`: a small HTML page with the contact count and server time.

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, get, web};

use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

#[utoipa::path(
    get,
    path = "/info",
    responses(
        (status = 200, description = "Contact count and generation time", content_type = "text/html", body = String),
        (status = 503, description = "Contact store unavailable", body = ErrorSchema)
    ),
    tags = ["info"],
    operation_id = "directoryInfo"
)]
#[get("/info")]
pub async fn info(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let summary = state.directory.summary().await?;
    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(summary.to_html()))
}
