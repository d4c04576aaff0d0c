//! Scenario 3: Shallow and Deep Copies Side by Side
//! Example: a Library catalog cloned both ways, then mutated
//!
//! Run with: cargo run --bin p3_library_catalog

use clone_patterns::library::Library;
use clone_patterns::report;
use clone_patterns::strategy::{DeepClone, ShallowClone};

const TITLES: [&str; 3] = ["Book A", "Book B", "Book C"];
const AUTHORS: [&str; 3] = ["Author X", "Author Y", "Author Z"];

// The second book gets modified through the original catalog.
const CHANGE_INDEX: usize = 1;
const CHANGED_TITLE: &str = "Modified Book B";
const CHANGED_AUTHOR: &str = "Modified Author Y";

fn sample_catalog() -> Library {
    Library::from_pairs("City Library", &TITLES, &AUTHORS)
}

fn modify_second_book(library: &Library) {
    let mut books = library.books().borrow_mut();
    books[CHANGE_INDEX].set_title(CHANGED_TITLE);
    books[CHANGE_INDEX].set_author(CHANGED_AUTHOR);
}

fn main() {
    report::banner("Shallow vs Deep Copy: Library Catalog");

    let library = sample_catalog();

    report::section("original library");
    print!("{library}");
    report::blank();

    let shallow_library = library.shallow_clone();
    let deep_library = library.deep_clone();

    modify_second_book(&library);

    report::section("after modification: original library");
    print!("{library}");
    report::blank();

    // Shares the catalog container, so it sees the modification.
    report::section("after modification: shallow clone");
    print!("{shallow_library}");
    report::blank();

    // Owns rebuilt books, so it still shows the catalog as cloned.
    report::section("after modification: deep clone");
    print!("{deep_library}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shallow_clone_shows_the_modification() {
        let library = sample_catalog();
        let shallow_library = library.shallow_clone();

        modify_second_book(&library);

        let books = shallow_library.books().borrow();
        assert_eq!(books[CHANGE_INDEX].title(), CHANGED_TITLE);
        assert_eq!(books[CHANGE_INDEX].author(), CHANGED_AUTHOR);
    }

    #[test]
    fn deep_clone_keeps_the_state_at_clone_time() {
        let library = sample_catalog();
        let deep_library = library.deep_clone();

        modify_second_book(&library);

        let books = deep_library.books().borrow();
        assert_eq!(books[CHANGE_INDEX].title(), "Book B");
        assert_eq!(books[CHANGE_INDEX].author(), "Author Y");
    }

    #[test]
    fn rendered_catalogs_diverge_only_where_expected() {
        let library = sample_catalog();
        let shallow_library = library.shallow_clone();
        let deep_library = library.deep_clone();

        modify_second_book(&library);

        assert_eq!(library.to_string(), shallow_library.to_string());
        assert_ne!(library.to_string(), deep_library.to_string());
        assert_eq!(deep_library.to_string(), sample_catalog().to_string());
    }
}
