//! Book DTOs - Data Transfer Objects per libri
//!
//! La risposta di un libro incorpora autore, editore e categorie; il campo
//! `cover` in uscita è il link firmato allo storage (o stringa vuota se la
//! copertina non è risolvibile), mai il nome dell'oggetto.

use crate::dtos::filter::DATE_FORMAT;
use crate::dtos::{validate_calendar_date, validate_category_ids};
use crate::entities::{Author, Book, Category, Publisher};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Serialize, Deserialize, Debug)]
pub struct BookAuthorDTO {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct BookCategoryDTO {
    pub id: i32,
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct BookPublisherDTO {
    pub id: i32,
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct BookDTO {
    pub id: i32,
    pub title: String,
    pub cover: String,
    pub description: String,
    pub page_count: i32,
    pub author: BookAuthorDTO,
    pub categories: Vec<BookCategoryDTO>,
    pub publisher: BookPublisherDTO,
    pub publication_date: String,
}

impl BookDTO {
    /// Assembla la risposta; `book.cover` deve già contenere il link
    /// firmato (o la stringa vuota), come lo prepara il service.
    pub fn from_parts(
        book: &Book,
        author: &Author,
        publisher: &Publisher,
        categories: &[Category],
    ) -> Self {
        Self {
            id: book.id,
            title: book.title.to_uppercase(),
            cover: book.cover.clone(),
            description: book.description.clone(),
            page_count: book.page_count,
            author: BookAuthorDTO {
                id: author.id,
                first_name: author.first_name.clone(),
                last_name: author.last_name.clone(),
            },
            categories: categories
                .iter()
                .map(|c| BookCategoryDTO {
                    id: c.id,
                    name: c.name.clone(),
                })
                .collect(),
            publisher: BookPublisherDTO {
                id: publisher.id,
                name: publisher.name.clone(),
            },
            publication_date: book.publication_date.format(DATE_FORMAT).to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct CreateBookDTO {
    #[validate(length(min = 1, max = 100, message = "must be between 1 and 100 characters"))]
    pub title: String,
    #[validate(length(min = 1, message = "cannot be empty"))]
    pub cover: String,
    #[validate(length(min = 1, max = 500, message = "must be between 1 and 500 characters"))]
    pub description: String,
    #[validate(range(min = 1, max = 10000, message = "must be between 1 and 10000"))]
    pub page_count: i32,
    #[validate(range(min = 1, message = "must reference an author"))]
    pub author_id: i32,
    #[validate(
        length(min = 1, message = "cannot be empty"),
        custom(function = "validate_category_ids")
    )]
    pub categories: Vec<i32>,
    #[validate(range(min = 1, message = "must reference a publisher"))]
    pub publisher_id: i32,
    #[validate(
        length(min = 1, message = "cannot be empty"),
        custom(function = "validate_calendar_date")
    )]
    pub publication_date: String,
}

impl CreateBookDTO {
    pub fn to_entity(&self) -> Book {
        Book {
            id: 0,
            title: self.title.to_uppercase(),
            cover: self.cover.clone(),
            description: self.description.clone(),
            page_count: self.page_count,
            author_id: self.author_id,
            publisher_id: self.publisher_id,
            publication_date: NaiveDate::parse_from_str(&self.publication_date, DATE_FORMAT)
                .unwrap_or_default(),
            created_at: Default::default(),
            updated_at: Default::default(),
        }
    }
}

/// DTO per l'update parziale di un libro. L'editore va sempre indicato;
/// gli altri campi al valore zero restano invariati, e una lista di
/// categorie non vuota sostituisce per intero le associazioni.
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct UpdateBookDTO {
    #[serde(default)]
    #[validate(length(max = 100, message = "must be at most 100 characters"))]
    pub title: String,
    #[serde(default)]
    pub cover: String,
    #[serde(default)]
    #[validate(length(max = 500, message = "must be at most 500 characters"))]
    pub description: String,
    #[serde(default)]
    #[validate(range(min = 1, max = 10000, message = "must be between 1 and 10000"))]
    pub page_count: Option<i32>,
    #[serde(default)]
    pub author_id: i32,
    #[serde(default)]
    #[validate(custom(function = "validate_category_ids"))]
    pub categories: Vec<i32>,
    #[validate(range(min = 1, message = "must reference a publisher"))]
    pub publisher_id: i32,
    #[serde(default)]
    #[validate(custom(function = "validate_calendar_date"))]
    pub publication_date: String,
}

impl UpdateBookDTO {
    /// Entità a forma di richiesta per il merge: l'id viene dal path
    pub fn to_entity(&self, id: i32) -> Book {
        Book {
            id,
            title: self.title.to_uppercase(),
            cover: self.cover.clone(),
            description: self.description.clone(),
            page_count: self.page_count.unwrap_or_default(),
            author_id: self.author_id,
            publisher_id: self.publisher_id,
            publication_date: NaiveDate::parse_from_str(&self.publication_date, DATE_FORMAT)
                .unwrap_or_default(),
            created_at: Default::default(),
            updated_at: Default::default(),
        }
    }
}
