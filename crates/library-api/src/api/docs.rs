//! OpenAPI document and Swagger UI
//!
//! The document is generated from the `#[utoipa::path]` annotations on the
//! endpoint handlers. Both routes sit behind the API key like every other
//! route.

use utoipa::{
    openapi::security::{ApiKey, ApiKeyValue, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::features::books::{
    commands::{create, delete, update},
    model::{Book, BookRequest},
    queries::{get, list},
};
use crate::features::shared::ValidationError;

/// Where the UI is served
pub const SWAGGER_UI_PATH: &str = "/swagger-ui";

/// Where the JSON document is served
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(title = "Library API", description = "Books catalog"),
    paths(
        create::create_book,
        get::get_book,
        list::list_books,
        update::update_book,
        delete::delete_book,
    ),
    components(schemas(Book, BookRequest, ValidationError)),
    modifiers(&ApiKeyHeader),
    tags((name = "Books", description = "Create, read, search, update and delete books"))
)]
pub struct ApiDoc;

/// Declares the `Authorization` header scheme the paths refer to as `api_key`
struct ApiKeyHeader;

impl Modify for ApiKeyHeader {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "api_key",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new("Authorization"))),
        );
    }
}

/// UI plus JSON document, ready to merge into the application router
pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new(SWAGGER_UI_PATH).url(OPENAPI_JSON_PATH, ApiDoc::openapi())
}
