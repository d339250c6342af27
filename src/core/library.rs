use crate::core::{Book, LibraryInterface, Notifier};

pub const EMPTY_LIBRARY_NOTICE: &str = "No books in the library.";

/// In-memory catalog. Keeps insertion order and allows duplicate titles.
#[derive(Debug, Clone, Default)]
pub struct Library {
    books: Vec<Book>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

impl LibraryInterface for Library {
    fn add_book(&mut self, book: Book) {
        tracing::debug!("Appending book at position {}: {}", self.books.len(), book);
        self.books.push(book);
    }

    fn remove_book(&mut self, title: &str) {
        let before = self.books.len();
        self.books.retain(|book| book.title != title);
        tracing::debug!(
            "Removed {} book(s) titled {:?}",
            before - self.books.len(),
            title
        );
    }

    fn show_books(&self, notifier: &mut dyn Notifier) {
        if self.books.is_empty() {
            notifier.notify(EMPTY_LIBRARY_NOTICE);
            return;
        }
        for book in &self.books {
            notifier.notify(&book.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::notifier::RecordingNotifier;

    fn titles(library: &Library) -> Vec<&str> {
        library.books().iter().map(|b| b.title.as_str()).collect()
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let mut library = Library::new();
        library.add_book(Book::new("B", "x", "1"));
        library.add_book(Book::new("A", "y", "2"));
        library.add_book(Book::new("B", "z", "3"));

        assert_eq!(titles(&library), vec!["B", "A", "B"]);
    }

    #[test]
    fn test_remove_drops_every_exact_match() {
        let mut library = Library::new();
        library.add_book(Book::new("Dune", "Herbert", "1965"));
        library.add_book(Book::new("1984", "Orwell", "1949"));
        library.add_book(Book::new("Dune", "Someone", "2000"));
        library.add_book(Book::new("Emma", "Austen", "1815"));

        library.remove_book("Dune");

        assert_eq!(titles(&library), vec!["1984", "Emma"]);
    }

    #[test]
    fn test_remove_is_case_sensitive() {
        let mut library = Library::new();
        library.add_book(Book::new("Dune", "Herbert", "1965"));

        library.remove_book("dune");
        library.remove_book("Dune ");

        assert_eq!(library.len(), 1);
    }

    #[test]
    fn test_remove_missing_title_is_noop() {
        let mut library = Library::new();
        library.add_book(Book::new("Dune", "Herbert", "1965"));

        library.remove_book("Missing");

        assert_eq!(titles(&library), vec!["Dune"]);
    }

    #[test]
    fn test_show_empty_emits_single_notice() {
        let library = Library::new();
        let mut notifier = RecordingNotifier::default();

        library.show_books(&mut notifier);

        assert_eq!(notifier.messages(), [EMPTY_LIBRARY_NOTICE]);
    }

    #[test]
    fn test_show_is_idempotent() {
        let mut library = Library::new();
        library.add_book(Book::new("Dune", "Herbert", "1965"));
        library.add_book(Book::new("Emma", "Austen", "1815"));

        let mut first = RecordingNotifier::default();
        let mut second = RecordingNotifier::default();
        library.show_books(&mut first);
        library.show_books(&mut second);

        assert_eq!(first.messages(), second.messages());
        assert_eq!(first.messages().len(), 2);
    }
}
