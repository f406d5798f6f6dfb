pub mod service;

use async_trait::async_trait;
use crate::books::dto::BookDto;
use crate::core::context::RequestContext;
use crate::core::library::LibraryResult;

#[async_trait]
pub trait CatalogService: Sync + Send {
    async fn get_book(&self, ctx: &RequestContext, id: &str) -> LibraryResult<BookDto>;
    async fn list_books(&self, ctx: &RequestContext) -> LibraryResult<Vec<BookDto>>;
    async fn create_book(&self, ctx: &RequestContext, book: &BookDto) -> LibraryResult<BookDto>;
    async fn delete_book(&self, ctx: &RequestContext, id: &str) -> LibraryResult<()>;
    async fn update_book(&self, ctx: &RequestContext, book: &BookDto) -> LibraryResult<BookDto>;
}
