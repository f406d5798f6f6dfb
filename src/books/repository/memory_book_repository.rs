use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::books::domain::catalog_order;
use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

struct MemoryBookState {
    books: HashMap<String, BookEntity>,
    // Last id handed out; ids are never reused, even after a delete.
    last_id: u64,
}

impl MemoryBookState {
    fn next_id(&mut self) -> String {
        self.last_id += 1;
        self.last_id.to_string()
    }
}

// MemoryBookRepository keeps the catalog in process memory behind a single reader/writer lock.
// Reads share the lock and writes hold it exclusively, so every operation takes effect at one
// point in a single total order.
pub struct MemoryBookRepository {
    state: RwLock<MemoryBookState>,
}

impl MemoryBookRepository {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(MemoryBookState {
                books: HashMap::new(),
                last_id: 0,
            }),
        }
    }
}

impl Default for MemoryBookRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Repository<BookEntity> for MemoryBookRepository {
    async fn create(&self, entity: &BookEntity) -> LibraryResult<String> {
        let mut state = self.state.write().await;
        let id = state.next_id();
        let mut book = entity.clone();
        book.book_id = id.clone();
        state.books.insert(id.clone(), book);
        debug!("added book {}", id);
        Ok(id)
    }

    async fn update(&self, entity: &BookEntity) -> LibraryResult<()> {
        let mut state = self.state.write().await;
        match state.books.get_mut(entity.book_id.as_str()) {
            Some(book) => {
                *book = entity.clone();
                Ok(())
            }
            None => Err(LibraryError::not_found(format!("book not found for {}", entity.book_id).as_str())),
        }
    }

    async fn get(&self, id: &str) -> LibraryResult<BookEntity> {
        let state = self.state.read().await;
        state.books.get(id).cloned()
            .ok_or_else(|| LibraryError::not_found(format!("book not found for {}", id).as_str()))
    }

    async fn delete(&self, id: &str) -> LibraryResult<()> {
        let mut state = self.state.write().await;
        state.books.remove(id).map(|_| ())
            .ok_or_else(|| LibraryError::not_found(format!("book not found for {}", id).as_str()))
    }

    async fn list(&self) -> LibraryResult<Vec<BookEntity>> {
        let mut books: Vec<BookEntity> = {
            let state = self.state.read().await;
            state.books.values().cloned().collect()
        };
        books.sort_by(catalog_order);
        Ok(books)
    }
}

impl BookRepository for MemoryBookRepository {}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;

    use crate::books::domain::model::BookEntity;
    use crate::books::repository::memory_book_repository::MemoryBookRepository;
    use crate::core::library::ErrorKind;
    use crate::core::repository::Repository;

    #[tokio::test]
    async fn test_should_create_get_books() {
        let books_repo = MemoryBookRepository::new();
        let book = BookEntity::new("test book", "someone");
        let id = books_repo.create(&book).await.expect("should create book");
        assert!(!id.is_empty());

        let loaded = books_repo.get(id.as_str()).await.expect("should return book");
        assert_eq!(id, loaded.book_id);
        assert_eq!(book.title, loaded.title);
        assert_eq!(book.author, loaded.author);
    }

    #[tokio::test]
    async fn test_should_ignore_caller_supplied_id() {
        let books_repo = MemoryBookRepository::new();
        let mut book = BookEntity::new("test book", "someone");
        book.book_id = "custom".to_string();
        let id = books_repo.create(&book).await.expect("should create book");
        assert_ne!("custom", id.as_str());
        let err = books_repo.get("custom").await.expect_err("caller id should not be stored");
        assert_eq!(ErrorKind::NotFound, err.kind());
    }

    #[tokio::test]
    async fn test_should_never_reuse_ids() {
        let books_repo = MemoryBookRepository::new();
        let mut seen = HashSet::new();
        for i in 0..20 {
            let id = books_repo.create(&BookEntity::new(format!("title_{}", i).as_str(), ""))
                .await.expect("should create book");
            if i % 2 == 0 {
                books_repo.delete(id.as_str()).await.expect("should delete book");
            }
            assert!(seen.insert(id), "id handed out twice");
        }
        assert_eq!(10, books_repo.list().await.expect("should list books").len());
    }

    #[tokio::test]
    async fn test_should_create_update_books() {
        let books_repo = MemoryBookRepository::new();
        let book = BookEntity::new("test book", "someone");
        let id = books_repo.create(&book).await.expect("should create book");

        let mut changed = BookEntity::new("new title", "");
        changed.book_id = id.clone();
        books_repo.update(&changed).await.expect("should update book");

        let loaded = books_repo.get(id.as_str()).await.expect("should return book");
        assert_eq!(changed, loaded);
        assert!(loaded.author.is_empty(), "update should replace, not merge");
        assert_eq!(1, books_repo.list().await.expect("should list books").len());
    }

    #[tokio::test]
    async fn test_should_fail_unknown_ids() {
        let books_repo = MemoryBookRepository::new();
        let err = books_repo.get("missing").await.expect_err("should not find book");
        assert_eq!(ErrorKind::NotFound, err.kind());
        let err = books_repo.delete("missing").await.expect_err("should not delete book");
        assert_eq!(ErrorKind::NotFound, err.kind());
        let mut book = BookEntity::new("test book", "");
        book.book_id = "missing".to_string();
        let err = books_repo.update(&book).await.expect_err("should not update book");
        assert_eq!(ErrorKind::NotFound, err.kind());
        assert_eq!(0, books_repo.list().await.expect("should list books").len());
    }

    #[tokio::test]
    async fn test_should_create_delete_books() {
        let books_repo = MemoryBookRepository::new();
        let id = books_repo.create(&BookEntity::new("test book", "")).await.expect("should create book");

        books_repo.delete(id.as_str()).await.expect("should delete book");
        let loaded = books_repo.get(id.as_str()).await;
        assert_eq!(ErrorKind::NotFound, loaded.expect_err("should be gone").kind());

        for _ in 0..3 {
            let err = books_repo.delete(id.as_str()).await.expect_err("repeated delete should fail");
            assert_eq!(ErrorKind::NotFound, err.kind());
        }
    }

    #[tokio::test]
    async fn test_should_list_books_by_title_then_id() {
        let books_repo = MemoryBookRepository::new();
        let dune = books_repo.create(&BookEntity::new("Dune", "")).await.expect("should create book");
        let foundation = books_repo.create(&BookEntity::new("Foundation", "")).await.expect("should create book");
        assert_eq!("1", dune.as_str());
        assert_eq!("2", foundation.as_str());

        let books = books_repo.list().await.expect("should list books");
        let titles: Vec<(&str, &str)> = books.iter().map(|b| (b.book_id.as_str(), b.title.as_str())).collect();
        assert_eq!(vec![("1", "Dune"), ("2", "Foundation")], titles);

        books_repo.delete("1").await.expect("should delete book");
        let books = books_repo.list().await.expect("should list books");
        assert_eq!(1, books.len());
        assert_eq!("Foundation", books[0].title.as_str());
        assert_eq!(ErrorKind::NotFound, books_repo.get("1").await.expect_err("should be gone").kind());

        let first = books_repo.create(&BookEntity::new("Emma", "")).await.expect("should create book");
        let second = books_repo.create(&BookEntity::new("Emma", "")).await.expect("should create book");
        let books = books_repo.list().await.expect("should list books");
        let ids: Vec<&str> = books.iter().map(|b| b.book_id.as_str()).collect();
        assert_eq!(vec![first.as_str(), second.as_str(), "2"], ids);
    }

    #[tokio::test]
    async fn test_should_list_equal_titles_in_id_order() {
        let books_repo = MemoryBookRepository::new();
        for _ in 0..10 {
            books_repo.create(&BookEntity::new("Emma", "")).await.expect("should create book");
        }
        let books = books_repo.list().await.expect("should list books");
        let ids: Vec<&str> = books.iter().map(|b| b.book_id.as_str()).collect();
        assert_eq!(vec!["1", "2", "3", "4", "5", "6", "7", "8", "9", "10"], ids);
    }

    #[tokio::test]
    async fn test_should_return_snapshot_from_list() {
        let books_repo = MemoryBookRepository::new();
        let id = books_repo.create(&BookEntity::new("Dune", "")).await.expect("should create book");
        let snapshot = books_repo.list().await.expect("should list books");

        books_repo.create(&BookEntity::new("Foundation", "")).await.expect("should create book");
        let mut changed = BookEntity::new("Dune Messiah", "");
        changed.book_id = id.clone();
        books_repo.update(&changed).await.expect("should update book");

        assert_eq!(1, snapshot.len());
        assert_eq!("Dune", snapshot[0].title.as_str());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_should_add_and_get_concurrently() {
        let books_repo = Arc::new(MemoryBookRepository::new());
        let mut handles = Vec::new();
        for i in 0..64 {
            let repo = books_repo.clone();
            handles.push(tokio::spawn(async move {
                let book = BookEntity::new(format!("title_{}", i).as_str(), format!("author_{}", i).as_str());
                let id = repo.create(&book).await.expect("should create book");
                let loaded = repo.get(id.as_str()).await.expect("should return book");
                assert_eq!(book.title, loaded.title);
                assert_eq!(book.author, loaded.author);
                id
            }));
        }
        let mut ids = HashSet::new();
        for handle in handles {
            ids.insert(handle.await.expect("task should finish"));
        }
        assert_eq!(64, ids.len());
        assert_eq!(64, books_repo.list().await.expect("should list books").len());
    }
}
