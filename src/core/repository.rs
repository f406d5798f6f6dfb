use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::library::LibraryResult;

#[async_trait]
pub trait Repository<Entity>: Sync + Send {
    // create an entity, the repository assigns and returns its id
    async fn create(&self, entity: &Entity) -> LibraryResult<String>;

    // replaces an existing entity
    async fn update(&self, entity: &Entity) -> LibraryResult<()>;

    // get an entity
    async fn get(&self, id: &str) -> LibraryResult<Entity>;

    // delete an entity
    async fn delete(&self, id: &str) -> LibraryResult<()>;

    // snapshot of all entities
    async fn list(&self) -> LibraryResult<Vec<Entity>>;
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub enum RepositoryStore {
    Memory,
}
