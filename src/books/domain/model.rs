use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::domain::Identifiable;

// BookEntity is the record the catalog store keeps for each book. The store assigns book_id;
// everything else is descriptive and replaced wholesale on update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookEntity {
    pub book_id: String,
    pub title: String,
    pub author: String,
    pub published_date: String,
    pub image_url: String,
    pub description: String,
}

impl BookEntity {
    pub fn new(title: &str, author: &str) -> Self {
        Self {
            book_id: String::new(),
            title: title.to_string(),
            author: author.to_string(),
            published_date: String::new(),
            image_url: String::new(),
            description: String::new(),
        }
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> String {
        self.book_id.to_string()
    }
}

impl Book for BookEntity {
    fn title(&self) -> &str {
        self.title.as_str()
    }
}
