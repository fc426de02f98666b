//! Transport layer for the Bookstock REST backend

pub mod books;

pub use books::{BooksApi, HttpBooksApi};
