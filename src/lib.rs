pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::notifier::{RecordingNotifier, TracingNotifier};
pub use app::shell::{Command, Shell};
pub use crate::core::{
    factory::{EuVehicleFactory, UsVehicleFactory},
    library::Library,
    manager::LibraryManager,
};
pub use domain::model::{Book, Car, Motorcycle, Region};
pub use domain::ports::{LibraryInterface, Notifier, Vehicle, VehicleFactory};
pub use utils::error::{AppError, Result};
