//! Pattern 3b: a root entity owning an ordered sequence of leaves.
//!
//! The sequence container itself sits behind a shared handle, so the
//! shallow clone aliases the whole catalog: mutating a book, or even
//! appending one, through either root is visible through the other.
//! The deep clone allocates a fresh container and rebuilds every book.

use std::fmt;

use itertools::Itertools;

use crate::strategy::{alias, share, DeepClone, ShallowClone, Shared};

/// Leaf entity: only primitive fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    title: String,
    author: String,
}

impl Book {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Book {
            title: title.into(),
            author: author.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_author(&mut self, author: impl Into<String>) {
        self.author = author.into();
    }
}

/// Root entity: a name plus a shared, ordered sequence of books.
#[derive(Debug)]
pub struct Library {
    name: String,
    books: Shared<Vec<Book>>,
}

impl Library {
    pub fn new(name: impl Into<String>) -> Self {
        Library {
            name: name.into(),
            books: share(Vec::new()),
        }
    }

    /// Builds a catalog from parallel title and author lists. The lists
    /// must have equal length; `zip_eq` panics otherwise.
    pub fn from_pairs(name: impl Into<String>, titles: &[&str], authors: &[&str]) -> Self {
        let library = Library::new(name);
        for (title, author) in titles.iter().zip_eq(authors.iter()) {
            library.add_book(Book::new(*title, *author));
        }
        library
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn add_book(&self, book: Book) {
        self.books.borrow_mut().push(book);
    }

    pub fn books(&self) -> &Shared<Vec<Book>> {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.borrow().is_empty()
    }
}

impl ShallowClone for Library {
    fn shallow_clone(&self) -> Self {
        Library {
            name: self.name.clone(),   // duplicate
            books: alias(&self.books), // same container
        }
    }
}

impl DeepClone for Library {
    fn deep_clone(&self) -> Self {
        // Fresh container, every element rebuilt on its own.
        let books: Vec<Book> = self.books.borrow().iter().cloned().collect();
        Library {
            name: self.name.clone(), // duplicate
            books: share(books),     // fresh container
        }
    }
}

impl fmt::Display for Library {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "library: {}", self.name)?;
        for book in self.books.borrow().iter() {
            writeln!(f, "book: {}, author: {}", book.title(), book.author())?;
        }
        Ok(())
    }
}
