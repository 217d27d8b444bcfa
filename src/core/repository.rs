use async_trait::async_trait;
use crate::core::library::LibraryResult;

#[async_trait]
pub trait Repository<Entity>: Sync + Send {
    // appends an entity, existing ids are not checked; returns the size after the append
    async fn create(&self, entity: &Entity) -> LibraryResult<usize>;

    // overwrites the first entity sharing the id, keeping its position
    async fn update(&self, entity: &Entity) -> LibraryResult<usize>;

    // get the first entity with the id
    async fn get(&self, id: &str) -> LibraryResult<Entity>;

    // delete the first entity with the id
    async fn delete(&self, id: &str) -> LibraryResult<usize>;

    // all entities in insertion order
    async fn find_all(&self) -> LibraryResult<Vec<Entity>>;
}
