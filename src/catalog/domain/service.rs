use async_trait::async_trait;
use tracing::{debug, error};
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::context::RequestContext;
use crate::core::domain::Configuration;
use crate::core::library::{ErrorKind, LibraryError, LibraryResult};

pub struct CatalogServiceImpl {
    service_name: String,
    book_repository: Box<dyn BookRepository>,
}

impl CatalogServiceImpl {
    pub fn new(config: &Configuration, book_repository: Box<dyn BookRepository>) -> Self {
        Self {
            service_name: config.service_name.to_string(),
            book_repository,
        }
    }

    // Rejected before the store is consulted, but still reported like any other failure.
    fn require_id(&self, id: &str) -> LibraryResult<()> {
        if id.is_empty() {
            return Err(self.failed(LibraryError::invalid_argument("book id is required", None)));
        }
        Ok(())
    }

    async fn find_book(&self, id: &str) -> LibraryResult<BookDto> {
        self.require_id(id)?;
        self.book_repository.get(id).await.map(|b| BookDto::from(&b))
            .map_err(|err| self.failed(err.context("get book", id)))
    }

    // NotFound is an ordinary outcome and only logged at debug level.
    fn failed(&self, err: LibraryError) -> LibraryError {
        if err.kind() == ErrorKind::NotFound {
            debug!(service = %self.service_name, "{}", err);
        } else {
            error!(service = %self.service_name, "{}", err);
        }
        err
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn get_book(&self, ctx: &RequestContext, id: &str) -> LibraryResult<BookDto> {
        ctx.check("get book")?;
        self.find_book(id).await
    }

    async fn list_books(&self, ctx: &RequestContext) -> LibraryResult<Vec<BookDto>> {
        ctx.check("list books")?;
        let books = self.book_repository.list().await
            .map_err(|err| self.failed(err.context("list books", "")))?;
        Ok(books.iter().map(BookDto::from).collect())
    }

    async fn create_book(&self, ctx: &RequestContext, book: &BookDto) -> LibraryResult<BookDto> {
        ctx.check("create book")?;
        let id = self.book_repository.create(&BookEntity::from(book)).await
            .map_err(|err| self.failed(err.context("save book", book.title.as_str())))?;
        // hand back what was stored rather than what was asked for
        self.find_book(id.as_str()).await
    }

    async fn delete_book(&self, ctx: &RequestContext, id: &str) -> LibraryResult<()> {
        ctx.check("delete book")?;
        self.require_id(id)?;
        self.book_repository.delete(id).await
            .map_err(|err| self.failed(err.context("delete book", id)))
    }

    async fn update_book(&self, ctx: &RequestContext, book: &BookDto) -> LibraryResult<BookDto> {
        ctx.check("update book")?;
        self.book_repository.update(&BookEntity::from(book)).await
            .map_err(|err| self.failed(err.context("update book", book.book_id.as_str())))?;
        Ok(book.clone())
    }
}
