//! OpenAPI documentation for the phonebook API.
//!
//! Registers the person, info and health endpoints along with the schema
//! wrappers from [`crate::inbound::http::schemas`]. Swagger UI serves this
//! document in debug builds and `openapi-dump` prints it for tooling.

use utoipa::OpenApi;

use crate::inbound::http::persons::CreateContactRequest;
use crate::inbound::http::schemas::{ContactSchema, ErrorCodeSchema, ErrorSchema};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Phonebook API",
        description = "Contact directory with listing, lookup, creation and deletion."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::persons::list_persons,
        crate::inbound::http::persons::get_person,
        crate::inbound::http::persons::create_person,
        crate::inbound::http::persons::delete_person,
        crate::inbound::http::info::info,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ContactSchema,
        CreateContactRequest,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "persons", description = "Phonebook contacts"),
        (name = "info", description = "Directory summary page"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
