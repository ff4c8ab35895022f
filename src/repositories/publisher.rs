//! PublisherRepository - Repository per la gestione degli editori

use super::order_clause;
use super::traits::{Create, Delete, Read, Update};
use crate::dtos::{PageRequest, SearchFilter};
use crate::entities::Publisher;
use sqlx::{Error, PgPool};

const PUBLISHER_COLUMNS: &str = "id, name, created_at, updated_at";

pub struct PublisherRepository {
    connection_pool: PgPool,
}

impl PublisherRepository {
    pub fn new(connection_pool: PgPool) -> PublisherRepository {
        Self { connection_pool }
    }

    pub async fn find_all(
        &self,
        page: &PageRequest,
        filter: &SearchFilter,
    ) -> Result<(Vec<Publisher>, i64), Error> {
        let pattern = format!("%{}%", filter.search);
        let where_clause =
            "WHERE name ILIKE $1 AND created_at::date BETWEEN $2::date AND $3::date";

        let count: i64 =
            sqlx::query_scalar(&format!("SELECT COUNT(*) FROM publishers {where_clause}"))
                .bind(&pattern)
                .bind(&filter.start_date)
                .bind(&filter.end_date)
                .fetch_one(&self.connection_pool)
                .await?;

        let order = order_clause(page, &["created_at", "updated_at", "name", "id"]);
        let publishers = sqlx::query_as::<_, Publisher>(&format!(
            "SELECT {PUBLISHER_COLUMNS} FROM publishers {where_clause} \
             ORDER BY {order} LIMIT $4 OFFSET $5"
        ))
        .bind(&pattern)
        .bind(&filter.start_date)
        .bind(&filter.end_date)
        .bind(page.limit)
        .bind(page.offset())
        .fetch_all(&self.connection_pool)
        .await?;

        Ok((publishers, count))
    }
}

impl Create<Publisher> for PublisherRepository {
    async fn create(&self, entity: &Publisher) -> Result<Publisher, Error> {
        sqlx::query_as::<_, Publisher>(&format!(
            "INSERT INTO publishers (name) VALUES ($1) RETURNING {PUBLISHER_COLUMNS}"
        ))
        .bind(&entity.name)
        .fetch_one(&self.connection_pool)
        .await
    }
}

impl Read<Publisher, i32> for PublisherRepository {
    async fn read(&self, id: &i32) -> Result<Option<Publisher>, Error> {
        sqlx::query_as::<_, Publisher>(&format!(
            "SELECT {PUBLISHER_COLUMNS} FROM publishers WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await
    }
}

impl Update<Publisher> for PublisherRepository {
    async fn update(&self, entity: &Publisher) -> Result<Publisher, Error> {
        sqlx::query_as::<_, Publisher>(&format!(
            "UPDATE publishers SET name = $1, updated_at = now() WHERE id = $2 \
             RETURNING {PUBLISHER_COLUMNS}"
        ))
        .bind(&entity.name)
        .bind(entity.id)
        .fetch_one(&self.connection_pool)
        .await
    }
}

impl Delete<i32> for PublisherRepository {
    async fn delete(&self, id: &i32) -> Result<u64, Error> {
        let result = sqlx::query("DELETE FROM publishers WHERE id = $1")
            .bind(id)
            .execute(&self.connection_pool)
            .await?;

        Ok(result.rows_affected())
    }
}
