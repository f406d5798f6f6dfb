use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::context::RequestContext;

pub struct AddBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl AddBookCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddBookCommandRequest {
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub published_date: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub description: String,
}

impl AddBookCommandRequest {
    pub fn new(title: &str, author: &str) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            published_date: String::new(),
            image_url: String::new(),
            description: String::new(),
        }
    }

    // The id stays empty; the catalog assigns it.
    pub fn build_book(&self) -> BookDto {
        BookDto {
            book_id: String::new(),
            title: self.title.to_string(),
            author: self.author.to_string(),
            published_date: self.published_date.to_string(),
            image_url: self.image_url.to_string(),
            description: self.description.to_string(),
        }
    }
}


#[derive(Debug, Serialize)]
pub struct AddBookCommandResponse {
    pub book: BookDto,
}

impl AddBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    async fn execute(&self, ctx: &RequestContext, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        let book = req.build_book();
        self.catalog_service.create_book(ctx, &book).await.map_err(CommandError::from).map(AddBookCommandResponse::new)
    }
}
