pub mod factory;
pub mod library;
pub mod manager;

pub use crate::domain::model::{Book, Car, Motorcycle, Region};
pub use crate::domain::ports::{LibraryInterface, Notifier, Vehicle, VehicleFactory};
