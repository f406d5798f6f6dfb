use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookEntity;

// BookDto is a data transfer object for Catalog service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    #[serde(default)]
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

impl BookDto {
    pub fn new(title: &str, author: &str) -> BookDto {
        BookDto {
            book_id: String::new(),
            title: title.to_string(),
            author: author.to_string(),
            published_date: String::new(),
            image_url: String::new(),
            description: String::new(),
        }
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            book_id: other.book_id.to_string(),
            title: other.title.to_string(),
            author: other.author.to_string(),
            published_date: other.published_date.to_string(),
            image_url: other.image_url.to_string(),
            description: other.description.to_string(),
        }
    }
}

impl From<&BookDto> for BookEntity {
    fn from(other: &BookDto) -> Self {
        Self {
            book_id: other.book_id.to_string(),
            title: other.title.to_string(),
            author: other.author.to_string(),
            published_date: other.published_date.to_string(),
            image_url: other.image_url.to_string(),
            description: other.description.to_string(),
        }
    }
}
