use crate::domain::model::{Book, Car, Motorcycle, Region};

pub trait Vehicle {
    fn make(&self) -> &str;
    fn model(&self) -> &str;
    fn spec(&self) -> Region;
    /// Region-tagged start message: `"{make} {model} ({spec} Spec): {phrase}"`.
    fn start_engine(&self) -> String;
}

/// Abstract factory. A variant only decides its region; the products follow from it.
pub trait VehicleFactory {
    fn region(&self) -> Region;

    fn create_car(&self, make: &str, model: &str) -> Car {
        Car::new(make, model, self.region())
    }

    fn create_motorcycle(&self, make: &str, model: &str) -> Motorcycle {
        Motorcycle::new(make, model, self.region())
    }
}

/// Sink for user-facing feedback, one message per event.
pub trait Notifier {
    fn notify(&mut self, message: &str);
}

/// Catalog capability the manager depends on.
pub trait LibraryInterface {
    fn add_book(&mut self, book: Book);
    /// Drops every book whose title equals `title` exactly. No match is not an error.
    fn remove_book(&mut self, title: &str);
    fn show_books(&self, notifier: &mut dyn Notifier);
}
