use axum::{
    Json,
    response::{Html, Redirect},
};
use utoipa::OpenApi;

use crate::openapi::ApiDoc;
use crate::render;

pub const OPENAPI_PATH: &str = "/openapi.json";

/// GET / when the form transport is not mounted.
pub async fn root_redirect() -> Redirect {
    Redirect::temporary("/docs")
}

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub async fn docs_page() -> Html<String> {
    Html(render::docs_page(OPENAPI_PATH))
}
