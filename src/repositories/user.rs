//! UserRepository - Repository per la gestione degli utenti

use super::order_clause;
use super::traits::{Create, Delete, Read, Update};
use crate::dtos::{PageRequest, SearchFilter};
use crate::entities::User;
use sqlx::{Error, PgPool};

const USER_COLUMNS: &str = "id, name, email, password, role, created_at, updated_at";

pub struct UserRepository {
    connection_pool: PgPool,
}

impl UserRepository {
    pub fn new(connection_pool: PgPool) -> UserRepository {
        Self { connection_pool }
    }

    /// Considero l'email univoca: lookup esatto per il login
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, Error> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(user)
    }

    /// Lista paginata; il chiamante passa richiesta e filtro già
    /// normalizzati. Ritorna la pagina di righe e il conteggio totale.
    pub async fn find_all(
        &self,
        page: &PageRequest,
        filter: &SearchFilter,
    ) -> Result<(Vec<User>, i64), Error> {
        let pattern = format!("%{}%", filter.search);
        let where_clause = "WHERE (name ILIKE $1 OR email ILIKE $1) \
             AND created_at::date BETWEEN $2::date AND $3::date";

        let count: i64 =
            sqlx::query_scalar(&format!("SELECT COUNT(*) FROM users {where_clause}"))
                .bind(&pattern)
                .bind(&filter.start_date)
                .bind(&filter.end_date)
                .fetch_one(&self.connection_pool)
                .await?;

        let order = order_clause(page, &["created_at", "updated_at", "name", "email", "id"]);
        let users = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users {where_clause} ORDER BY {order} LIMIT $4 OFFSET $5"
        ))
        .bind(&pattern)
        .bind(&filter.start_date)
        .bind(&filter.end_date)
        .bind(page.limit)
        .bind(page.offset())
        .fetch_all(&self.connection_pool)
        .await?;

        Ok((users, count))
    }
}

impl Create<User> for UserRepository {
    async fn create(&self, entity: &User) -> Result<User, Error> {
        sqlx::query_as::<_, User>(&format!(
            "INSERT INTO users (name, email, password, role) VALUES ($1, $2, $3, $4) \
             RETURNING {USER_COLUMNS}"
        ))
        .bind(&entity.name)
        .bind(&entity.email)
        .bind(&entity.password)
        .bind(entity.role)
        .fetch_one(&self.connection_pool)
        .await
    }
}

impl Read<User, i32> for UserRepository {
    async fn read(&self, id: &i32) -> Result<Option<User>, Error> {
        sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.connection_pool)
            .await
    }
}

impl Update<User> for UserRepository {
    async fn update(&self, entity: &User) -> Result<User, Error> {
        sqlx::query_as::<_, User>(&format!(
            "UPDATE users SET name = $1, email = $2, password = $3, updated_at = now() \
             WHERE id = $4 RETURNING {USER_COLUMNS}"
        ))
        .bind(&entity.name)
        .bind(&entity.email)
        .bind(&entity.password)
        .bind(entity.id)
        .fetch_one(&self.connection_pool)
        .await
    }
}

impl Delete<i32> for UserRepository {
    async fn delete(&self, id: &i32) -> Result<u64, Error> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.connection_pool)
            .await?;

        Ok(result.rows_affected())
    }
}
