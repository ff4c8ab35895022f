//! BookRepository - Repository per la gestione dei libri
//!
//! I libri portano con sé le associazioni alle categorie nella tabella
//! ponte `book_categories`; le scritture multi-statement girano in una
//! transazione esplicita, il rollback scatta da solo se non si arriva
//! alla commit.

use super::order_clause;
use super::traits::{Delete, Read};
use crate::dtos::{BookFilter, PageRequest};
use crate::entities::{Book, Category};
use sqlx::{Error, PgPool, Postgres, QueryBuilder};

const BOOK_COLUMNS: &str = "id, title, cover, description, page_count, \
     author_id, publisher_id, publication_date, created_at, updated_at";

pub struct BookRepository {
    connection_pool: PgPool,
}

impl BookRepository {
    pub fn new(connection_pool: PgPool) -> BookRepository {
        Self { connection_pool }
    }

    /// Inserisce il libro e le sue associazioni alle categorie in un'unica
    /// transazione.
    pub async fn create(&self, book: &Book, categories: &[i32]) -> Result<Book, Error> {
        let mut tx = self.connection_pool.begin().await?;

        let created = sqlx::query_as::<_, Book>(&format!(
            "INSERT INTO books \
             (title, cover, description, page_count, author_id, publisher_id, publication_date) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING {BOOK_COLUMNS}"
        ))
        .bind(&book.title)
        .bind(&book.cover)
        .bind(&book.description)
        .bind(book.page_count)
        .bind(book.author_id)
        .bind(book.publisher_id)
        .bind(book.publication_date)
        .fetch_one(&mut *tx)
        .await?;

        for category_id in categories {
            sqlx::query("INSERT INTO book_categories (book_id, category_id) VALUES ($1, $2)")
                .bind(created.id)
                .bind(category_id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(created)
    }

    /// Aggiorna la riga del libro; con `Some(categories)` sostituisce per
    /// intero le associazioni. Tutto nella stessa transazione.
    pub async fn update(&self, book: &Book, categories: Option<&[i32]>) -> Result<Book, Error> {
        let mut tx = self.connection_pool.begin().await?;

        let updated = sqlx::query_as::<_, Book>(&format!(
            "UPDATE books SET title = $1, cover = $2, description = $3, page_count = $4, \
             author_id = $5, publisher_id = $6, publication_date = $7, updated_at = now() \
             WHERE id = $8 RETURNING {BOOK_COLUMNS}"
        ))
        .bind(&book.title)
        .bind(&book.cover)
        .bind(&book.description)
        .bind(book.page_count)
        .bind(book.author_id)
        .bind(book.publisher_id)
        .bind(book.publication_date)
        .bind(book.id)
        .fetch_one(&mut *tx)
        .await?;

        if let Some(categories) = categories {
            sqlx::query("DELETE FROM book_categories WHERE book_id = $1")
                .bind(updated.id)
                .execute(&mut *tx)
                .await?;

            for category_id in categories {
                sqlx::query("INSERT INTO book_categories (book_id, category_id) VALUES ($1, $2)")
                    .bind(updated.id)
                    .bind(category_id)
                    .execute(&mut *tx)
                    .await?;
            }
        }

        tx.commit().await?;
        Ok(updated)
    }

    /// Categorie associate a un libro
    pub async fn categories_of(&self, book_id: &i32) -> Result<Vec<Category>, Error> {
        sqlx::query_as::<_, Category>(
            "SELECT categories.id, categories.name, categories.created_at, categories.updated_at \
             FROM categories \
             JOIN book_categories bc ON bc.category_id = categories.id \
             WHERE bc.book_id = $1 ORDER BY categories.id",
        )
        .bind(book_id)
        .fetch_all(&self.connection_pool)
        .await
    }

    /// Lista paginata con filtro: ricerca testuale su titolo, nomi autore
    /// ed editore; finestra di pubblicazione; finestra di creazione;
    /// vincolo sulle categorie.
    pub async fn find_all(
        &self,
        page: &PageRequest,
        filter: &BookFilter,
    ) -> Result<(Vec<Book>, i64), Error> {
        let mut count_query = QueryBuilder::<Postgres>::new(
            "SELECT COUNT(*) FROM books \
             LEFT JOIN authors ON authors.id = books.author_id \
             LEFT JOIN publishers ON publishers.id = books.publisher_id",
        );
        Self::push_filters(&mut count_query, filter);
        let count: i64 = count_query
            .build_query_scalar()
            .fetch_one(&self.connection_pool)
            .await?;

        let order = order_clause(
            page,
            &[
                "created_at",
                "updated_at",
                "title",
                "publication_date",
                "page_count",
                "id",
            ],
        );

        let mut select_query = QueryBuilder::<Postgres>::new(
            "SELECT books.id, books.title, books.cover, books.description, books.page_count, \
             books.author_id, books.publisher_id, books.publication_date, \
             books.created_at, books.updated_at FROM books \
             LEFT JOIN authors ON authors.id = books.author_id \
             LEFT JOIN publishers ON publishers.id = books.publisher_id",
        );
        Self::push_filters(&mut select_query, filter);
        select_query.push(format!(" ORDER BY books.{order}"));
        select_query.push(" LIMIT ");
        select_query.push_bind(page.limit);
        select_query.push(" OFFSET ");
        select_query.push_bind(page.offset());

        let books = select_query
            .build_query_as::<Book>()
            .fetch_all(&self.connection_pool)
            .await?;

        Ok((books, count))
    }

    fn push_filters(query: &mut QueryBuilder<'_, Postgres>, filter: &BookFilter) {
        let pattern = format!("%{}%", filter.base.search);

        query.push(" WHERE (books.title ILIKE ");
        query.push_bind(pattern.clone());
        query.push(" OR authors.first_name ILIKE ");
        query.push_bind(pattern.clone());
        query.push(" OR authors.last_name ILIKE ");
        query.push_bind(pattern.clone());
        query.push(" OR publishers.name ILIKE ");
        query.push_bind(pattern);
        query.push(")");

        query.push(" AND books.publication_date BETWEEN ");
        query.push_bind(filter.from.clone());
        query.push("::date AND ");
        query.push_bind(filter.to.clone());
        query.push("::date");

        query.push(" AND books.created_at::date BETWEEN ");
        query.push_bind(filter.base.start_date.clone());
        query.push("::date AND ");
        query.push_bind(filter.base.end_date.clone());
        query.push("::date");

        if !filter.categories.is_empty() {
            query.push(
                " AND EXISTS (SELECT 1 FROM book_categories bc \
                 WHERE bc.book_id = books.id AND bc.category_id = ANY(",
            );
            query.push_bind(filter.categories.clone());
            query.push("))");
        }
    }
}

impl Read<Book, i32> for BookRepository {
    async fn read(&self, id: &i32) -> Result<Option<Book>, Error> {
        sqlx::query_as::<_, Book>(&format!("SELECT {BOOK_COLUMNS} FROM books WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.connection_pool)
            .await
    }
}

impl Delete<i32> for BookRepository {
    async fn delete(&self, id: &i32) -> Result<u64, Error> {
        // le righe in book_categories cadono con ON DELETE CASCADE
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&self.connection_pool)
            .await?;

        Ok(result.rows_affected())
    }
}
