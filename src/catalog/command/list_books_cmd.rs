use std::sync::Arc;
use async_trait::async_trait;
use serde::Serialize;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::context::RequestContext;

pub struct ListBooksCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl ListBooksCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Default)]
pub struct ListBooksCommandRequest {}

#[derive(Debug, Serialize)]
pub struct ListBooksCommandResponse {
    pub books: Vec<BookDto>,
}

impl ListBooksCommandResponse {
    pub fn new(books: Vec<BookDto>) -> Self {
        Self {
            books,
        }
    }
}

#[async_trait]
impl Command<ListBooksCommandRequest, ListBooksCommandResponse> for ListBooksCommand {
    async fn execute(&self, ctx: &RequestContext, _req: ListBooksCommandRequest) -> Result<ListBooksCommandResponse, CommandError> {
        self.catalog_service.list_books(ctx)
            .await.map_err(CommandError::from).map(ListBooksCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::context::RequestContext;
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;

    #[tokio::test]
    async fn test_should_run_list_books() {
        let svc = factory::create_catalog_service(&Configuration::new("test"), RepositoryStore::Memory);
        let add_cmd = AddBookCommand::new(svc.clone());
        let list_cmd = ListBooksCommand::new(svc);
        let ctx = RequestContext::background();

        for title in ["Foundation", "Dune", "Emma"] {
            let _ = add_cmd.execute(&ctx, AddBookCommandRequest::new(title, "")).await.expect("should add book");
        }
        let res = list_cmd.execute(&ctx, ListBooksCommandRequest::default()).await.expect("should list books");
        let titles: Vec<&str> = res.books.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(vec!["Dune", "Emma", "Foundation"], titles);
    }

    #[tokio::test]
    async fn test_should_time_out_list_books() {
        let svc = factory::create_catalog_service(&Configuration::new("test"), RepositoryStore::Memory);
        let list_cmd = ListBooksCommand::new(svc);
        let ctx = RequestContext::with_deadline(tokio::time::Instant::now());

        let err = list_cmd.execute(&ctx, ListBooksCommandRequest::default()).await.expect_err("should time out");
        assert!(matches!(err, CommandError::Timeout { .. }));
    }
}
