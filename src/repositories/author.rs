//! AuthorRepository - Repository per la gestione degli autori

use super::order_clause;
use super::traits::{Create, Delete, Read, Update};
use crate::dtos::{PageRequest, SearchFilter};
use crate::entities::Author;
use sqlx::{Error, PgPool};

const AUTHOR_COLUMNS: &str = "id, first_name, last_name, created_at, updated_at";

pub struct AuthorRepository {
    connection_pool: PgPool,
}

impl AuthorRepository {
    pub fn new(connection_pool: PgPool) -> AuthorRepository {
        Self { connection_pool }
    }

    pub async fn find_all(
        &self,
        page: &PageRequest,
        filter: &SearchFilter,
    ) -> Result<(Vec<Author>, i64), Error> {
        let pattern = format!("%{}%", filter.search);
        let where_clause = "WHERE (first_name ILIKE $1 OR last_name ILIKE $1) \
             AND created_at::date BETWEEN $2::date AND $3::date";

        let count: i64 =
            sqlx::query_scalar(&format!("SELECT COUNT(*) FROM authors {where_clause}"))
                .bind(&pattern)
                .bind(&filter.start_date)
                .bind(&filter.end_date)
                .fetch_one(&self.connection_pool)
                .await?;

        let order = order_clause(
            page,
            &["created_at", "updated_at", "first_name", "last_name", "id"],
        );
        let authors = sqlx::query_as::<_, Author>(&format!(
            "SELECT {AUTHOR_COLUMNS} FROM authors {where_clause} ORDER BY {order} LIMIT $4 OFFSET $5"
        ))
        .bind(&pattern)
        .bind(&filter.start_date)
        .bind(&filter.end_date)
        .bind(page.limit)
        .bind(page.offset())
        .fetch_all(&self.connection_pool)
        .await?;

        Ok((authors, count))
    }
}

impl Create<Author> for AuthorRepository {
    async fn create(&self, entity: &Author) -> Result<Author, Error> {
        sqlx::query_as::<_, Author>(&format!(
            "INSERT INTO authors (first_name, last_name) VALUES ($1, $2) \
             RETURNING {AUTHOR_COLUMNS}"
        ))
        .bind(&entity.first_name)
        .bind(&entity.last_name)
        .fetch_one(&self.connection_pool)
        .await
    }
}

impl Read<Author, i32> for AuthorRepository {
    async fn read(&self, id: &i32) -> Result<Option<Author>, Error> {
        sqlx::query_as::<_, Author>(&format!(
            "SELECT {AUTHOR_COLUMNS} FROM authors WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await
    }
}

impl Update<Author> for AuthorRepository {
    async fn update(&self, entity: &Author) -> Result<Author, Error> {
        sqlx::query_as::<_, Author>(&format!(
            "UPDATE authors SET first_name = $1, last_name = $2, updated_at = now() \
             WHERE id = $3 RETURNING {AUTHOR_COLUMNS}"
        ))
        .bind(&entity.first_name)
        .bind(&entity.last_name)
        .bind(entity.id)
        .fetch_one(&self.connection_pool)
        .await
    }
}

impl Delete<i32> for AuthorRepository {
    async fn delete(&self, id: &i32) -> Result<u64, Error> {
        let result = sqlx::query("DELETE FROM authors WHERE id = $1")
            .bind(id)
            .execute(&self.connection_pool)
            .await?;

        Ok(result.rows_affected())
    }
}
