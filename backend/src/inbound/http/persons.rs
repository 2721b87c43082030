//! Person directory handlers.
//!
//! ```text
//! GET    /api/persons
//! GET    /api/persons/{id}
//! POST   /api/persons {"name":"Ada Lovelace","number":"39-44-5323523"}
//! DELETE /api/persons/{id}
//! ```
//!
//! Handlers only translate between HTTP and the directory ports; every rule
//! about presence, uniqueness and length lives in the domain service.

use actix_web::{HttpResponse, delete, get, post, web};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::domain::{Contact, ContactCandidate};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ContactSchema, ErrorSchema};
use crate::inbound::http::state::HttpState;

/// Request body for `POST /api/persons`.
///
/// Any JSON object is accepted. A field that is absent or not a string is
/// left empty, so the directory reports it as missing rather than the body
/// being rejected as malformed.
#[derive(Debug, Default, PartialEq, Eq, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(from = "Map<String, Value>")]
pub struct CreateContactRequest {
    #[schema(example = "Ada Lovelace")]
    pub name: Option<String>,
    #[schema(example = "39-44-5323523")]
    pub number: Option<String>,
}

fn string_field(fields: &mut Map<String, Value>, key: &str) -> Option<String> {
    match fields.remove(key) {
        Some(Value::String(value)) => Some(value),
        _ => None,
    }
}

impl From<Map<String, Value>> for CreateContactRequest {
    fn from(mut fields: Map<String, Value>) -> Self {
        Self {
            name: string_field(&mut fields, "name"),
            number: string_field(&mut fields, "number"),
        }
    }
}

impl From<CreateContactRequest> for ContactCandidate {
    fn from(value: CreateContactRequest) -> Self {
        Self {
            name: value.name,
            number: value.number,
        }
    }
}

/// List every contact in insertion order.
#[utoipa::path(
    get,
    path = "/api/persons",
    responses(
        (status = 200, description = "All contacts", body = [ContactSchema]),
        (status = 503, description = "Contact store unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["persons"],
    operation_id = "listPersons"
)]
#[get("/persons")]
pub async fn list_persons(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Contact>>> {
    let contacts = state.directory.list_all().await?;
    Ok(web::Json(contacts))
}

/// Fetch one contact.
///
/// Identifiers that are not plain decimal numbers are treated as unknown.
#[utoipa::path(
    get,
    path = "/api/persons/{id}",
    params(("id" = String, Path, description = "Contact identifier")),
    responses(
        (status = 200, description = "Contact", body = ContactSchema),
        (status = 404, description = "Person not found", body = ErrorSchema),
        (status = 503, description = "Contact store unavailable", body = ErrorSchema)
    ),
    tags = ["persons"],
    operation_id = "getPerson"
)]
#[get("/persons/{id}")]
pub async fn get_person(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Contact>> {
    let contact = state.directory.find_by_id(&path.into_inner()).await?;
    Ok(web::Json(contact))
}

/// Add a contact and return it with its assigned identifier.
#[utoipa::path(
    post,
    path = "/api/persons",
    request_body = CreateContactRequest,
    responses(
        (status = 200, description = "Created contact", body = ContactSchema),
        (status = 400, description = "Missing field, duplicate name or value too short", body = ErrorSchema),
        (status = 503, description = "Contact store unavailable", body = ErrorSchema)
    ),
    tags = ["persons"],
    operation_id = "createPerson"
)]
#[post("/persons")]
pub async fn create_person(
    state: web::Data<HttpState>,
    payload: web::Json<CreateContactRequest>,
) -> ApiResult<web::Json<Contact>> {
    let request = payload.into_inner();
    debug!(name = ?request.name, number = ?request.number, "create person request");
    let contact = state.directory_command.add(request.into()).await?;
    Ok(web::Json(contact))
}

/// Remove a contact. Responds 204 with an empty body.
#[utoipa::path(
    delete,
    path = "/api/persons/{id}",
    params(("id" = String, Path, description = "Contact identifier")),
    responses(
        (status = 204, description = "Contact removed"),
        (status = 404, description = "Person not found", body = ErrorSchema),
        (status = 503, description = "Contact store unavailable", body = ErrorSchema)
    ),
    tags = ["persons"],
    operation_id = "deletePerson"
)]
#[delete("/persons/{id}")]
pub async fn delete_person(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    state
        .directory_command
        .delete_by_id(&path.into_inner())
        .await?;
    Ok(HttpResponse::NoContent().finish())
}
