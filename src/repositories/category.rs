//! CategoryRepository - Repository per la gestione delle categorie

use super::order_clause;
use super::traits::{Create, Delete, Read, Update};
use crate::dtos::{PageRequest, SearchFilter};
use crate::entities::Category;
use sqlx::{Error, PgPool};

const CATEGORY_COLUMNS: &str = "id, name, created_at, updated_at";

pub struct CategoryRepository {
    connection_pool: PgPool,
}

impl CategoryRepository {
    pub fn new(connection_pool: PgPool) -> CategoryRepository {
        Self { connection_pool }
    }

    pub async fn find_all(
        &self,
        page: &PageRequest,
        filter: &SearchFilter,
    ) -> Result<(Vec<Category>, i64), Error> {
        let pattern = format!("%{}%", filter.search);
        let where_clause =
            "WHERE name ILIKE $1 AND created_at::date BETWEEN $2::date AND $3::date";

        let count: i64 =
            sqlx::query_scalar(&format!("SELECT COUNT(*) FROM categories {where_clause}"))
                .bind(&pattern)
                .bind(&filter.start_date)
                .bind(&filter.end_date)
                .fetch_one(&self.connection_pool)
                .await?;

        let order = order_clause(page, &["created_at", "updated_at", "name", "id"]);
        let categories = sqlx::query_as::<_, Category>(&format!(
            "SELECT {CATEGORY_COLUMNS} FROM categories {where_clause} \
             ORDER BY {order} LIMIT $4 OFFSET $5"
        ))
        .bind(&pattern)
        .bind(&filter.start_date)
        .bind(&filter.end_date)
        .bind(page.limit)
        .bind(page.offset())
        .fetch_all(&self.connection_pool)
        .await?;

        Ok((categories, count))
    }
}

impl Create<Category> for CategoryRepository {
    async fn create(&self, entity: &Category) -> Result<Category, Error> {
        sqlx::query_as::<_, Category>(&format!(
            "INSERT INTO categories (name) VALUES ($1) RETURNING {CATEGORY_COLUMNS}"
        ))
        .bind(&entity.name)
        .fetch_one(&self.connection_pool)
        .await
    }
}

impl Read<Category, i32> for CategoryRepository {
    async fn read(&self, id: &i32) -> Result<Option<Category>, Error> {
        sqlx::query_as::<_, Category>(&format!(
            "SELECT {CATEGORY_COLUMNS} FROM categories WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await
    }
}

impl Update<Category> for CategoryRepository {
    async fn update(&self, entity: &Category) -> Result<Category, Error> {
        sqlx::query_as::<_, Category>(&format!(
            "UPDATE categories SET name = $1, updated_at = now() WHERE id = $2 \
             RETURNING {CATEGORY_COLUMNS}"
        ))
        .bind(&entity.name)
        .bind(entity.id)
        .fetch_one(&self.connection_pool)
        .await
    }
}

impl Delete<i32> for CategoryRepository {
    async fn delete(&self, id: &i32) -> Result<u64, Error> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&self.connection_pool)
            .await?;

        Ok(result.rows_affected())
    }
}
