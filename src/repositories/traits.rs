//! Common repository traits
//!
//! This module defines generic interfaces for database operations.
//! Repositories take and return entities; the services build entities from
//! DTOs before persisting them.

/// Trait for creating new entities in the database
///
/// # Type Parameters
/// * `Entity` - Type of the entity (id assigned by the database)
pub trait Create<Entity> {
    /// Creates a new entity in the database
    ///
    /// # Arguments
    /// * `entity` - Entity to persist; its id field is ignored
    ///
    /// # Returns
    /// * `Ok(Entity)` - Created entity with id and timestamps assigned by the database
    /// * `Err(sqlx::Error)` - Error during insertion
    async fn create(&self, entity: &Entity) -> Result<Entity, sqlx::Error>;
}

/// Trait for reading a single entity by primary key
///
/// # Type Parameters
/// * `Entity` - Type of the entity to read
/// * `Id` - Type of the primary key (e.g. `i32`, `String`)
pub trait Read<Entity, Id> {
    /// Reads an entity from the database by its primary key
    ///
    /// # Returns
    /// * `Ok(Some(Entity))` - Entity found
    /// * `Ok(None)` - No entity with that id
    /// * `Err(sqlx::Error)` - Error during reading
    async fn read(&self, id: &Id) -> Result<Option<Entity>, sqlx::Error>;
}

/// Trait for updating existing entities
///
/// The caller passes the full merged entity (stored row reconciled with
/// the partial request); every updatable column is written.
pub trait Update<Entity> {
    /// Updates an existing entity in the database
    ///
    /// # Returns
    /// * `Ok(Entity)` - Updated entity as re-read from the database
    /// * `Err(sqlx::Error)` - `RowNotFound` if the id does not exist
    async fn update(&self, entity: &Entity) -> Result<Entity, sqlx::Error>;
}

/// Trait for deleting entities
///
/// # Type Parameters
/// * `Id` - Type of the primary key
pub trait Delete<Id> {
    /// Deletes an entity from the database
    ///
    /// # Returns
    /// * `Ok(u64)` - Number of rows removed (0 means the id did not exist)
    /// * `Err(sqlx::Error)` - Error during deletion
    async fn delete(&self, id: &Id) -> Result<u64, sqlx::Error>;
}
