use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::context::RequestContext;

pub struct UpdateBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl UpdateBookCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateBookCommandRequest {
    // taken from the path, not the body
    #[serde(skip)]
    pub book_id: String,
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

impl UpdateBookCommandRequest {
    pub fn new(book_id: &str, title: &str, author: &str) -> Self {
        Self {
            book_id: book_id.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            published_date: String::new(),
            image_url: String::new(),
            description: String::new(),
        }
    }

    pub fn build_book(&self) -> BookDto {
        BookDto {
            book_id: self.book_id.to_string(),
            title: self.title.to_string(),
            author: self.author.to_string(),
            published_date: self.published_date.to_string(),
            image_url: self.image_url.to_string(),
            description: self.description.to_string(),
        }
    }
}


#[derive(Debug, Serialize)]
pub struct UpdateBookCommandResponse {
    pub book: BookDto,
}

impl UpdateBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<UpdateBookCommandRequest, UpdateBookCommandResponse> for UpdateBookCommand {
    async fn execute(&self, ctx: &RequestContext, req: UpdateBookCommandRequest) -> Result<UpdateBookCommandResponse, CommandError> {
        if req.book_id.is_empty() {
            return Err(CommandError::validation("cannot update book: book id is required"));
        }
        let book = req.build_book();
        self.catalog_service.update_book(ctx, &book).await.map_err(CommandError::from).map(UpdateBookCommandResponse::new)
    }
}
