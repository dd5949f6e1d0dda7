//! Domain types for the trivia API.
//!
//! This module provides:
//! - Question and Category records
//! - Field coercion for client-supplied bodies
//! - Page slicing and case-insensitive search helpers

pub mod category;
pub mod pagination;
pub mod question;
pub mod search;

pub use category::{category_map, Category, CategoryMap, DEFAULT_CATEGORIES};
pub use pagination::{paginate, parse_page, QUESTIONS_PER_PAGE};
pub use question::{coerce_int, NewQuestion, Question, QuestionFieldError};
