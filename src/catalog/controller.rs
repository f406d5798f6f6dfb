use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};
use serde_json::{json, Value};
use tracing::{info, Instrument};
use uuid::Uuid;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest, AddBookCommandResponse};
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest, GetBookCommandResponse};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest, ListBooksCommandResponse};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest, RemoveBookCommandResponse};
use crate::catalog::command::update_book_cmd::{UpdateBookCommand, UpdateBookCommandRequest, UpdateBookCommandResponse};
use crate::core::command::Command;
use crate::core::controller::{AppState, json_to_server_error, ServerError};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/catalog", get(list_books).post(add_book))
        .route("/catalog/:id",
               get(find_book_by_id).put(update_book).delete(remove_book))
        .route("/version", get(version))
        .with_state(state)
}

fn request_span(operation: &str) -> tracing::Span {
    tracing::info_span!("request", request_id = %Uuid::new_v4(), operation = %operation)
}

pub async fn list_books(
    State(state): State<AppState>) -> Result<Json<ListBooksCommandResponse>, ServerError> {
    let ctx = state.request_context();
    let res = ListBooksCommand::new(state.catalog_service.clone())
        .execute(&ctx, ListBooksCommandRequest::default())
        .instrument(request_span("list_books")).await?;
    Ok(Json(res))
}

pub async fn add_book(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<AddBookCommandResponse>, ServerError> {
    let req: AddBookCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let ctx = state.request_context();
    let span = request_span("add_book");
    let res = AddBookCommand::new(state.catalog_service.clone())
        .execute(&ctx, req).instrument(span.clone()).await?;
    span.in_scope(|| info!("added book {}", res.book.book_id));
    Ok(Json(res))
}

pub async fn find_book_by_id(
    State(state): State<AppState>,
    Path(book_id): Path<String>) -> Result<Json<GetBookCommandResponse>, ServerError> {
    let req = GetBookCommandRequest { book_id };
    let ctx = state.request_context();
    let res = GetBookCommand::new(state.catalog_service.clone())
        .execute(&ctx, req).instrument(request_span("find_book_by_id")).await?;
    Ok(Json(res))
}

pub async fn update_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
    json: Json<Value>) -> Result<Json<UpdateBookCommandResponse>, ServerError> {
    let mut req: UpdateBookCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    req.book_id = book_id;
    let ctx = state.request_context();
    let res = UpdateBookCommand::new(state.catalog_service.clone())
        .execute(&ctx, req).instrument(request_span("update_book")).await?;
    Ok(Json(res))
}

pub async fn remove_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>) -> Result<Json<RemoveBookCommandResponse>, ServerError> {
    let req = RemoveBookCommandRequest { book_id };
    let ctx = state.request_context();
    let res = RemoveBookCommand::new(state.catalog_service.clone())
        .execute(&ctx, req).instrument(request_span("remove_book")).await?;
    Ok(Json(res))
}

pub async fn version(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "service": state.config.service_name,
        "version": state.config.version,
    }))
}
