use crate::core::{Book, LibraryInterface, Notifier};

/// Translates user intents into catalog calls.
///
/// Holds the catalog only as `dyn LibraryInterface` and borrows it along with the
/// notifier; the caller keeps ownership of both.
pub struct LibraryManager<'a> {
    library: &'a mut dyn LibraryInterface,
    notifier: &'a mut dyn Notifier,
}

impl<'a> LibraryManager<'a> {
    pub fn new(library: &'a mut dyn LibraryInterface, notifier: &'a mut dyn Notifier) -> Self {
        Self { library, notifier }
    }

    pub fn add_book(&mut self, title: &str, author: &str, year: &str) {
        self.library.add_book(Book::new(title, author, year));
        self.notifier
            .notify(&format!("Book \"{}\" added successfully!", title));
    }

    /// Reports success whether or not anything matched `title`.
    pub fn remove_book(&mut self, title: &str) {
        self.library.remove_book(title);
        self.notifier
            .notify(&format!("Book \"{}\" removed successfully!", title));
    }

    pub fn show_books(&mut self) {
        self.library.show_books(&mut *self.notifier);
    }

    /// Emits a free-form notice through the same sink as catalog feedback.
    pub fn notify(&mut self, message: &str) {
        self.notifier.notify(message);
    }
}
