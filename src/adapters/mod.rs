// Adapters layer: concrete implementations of domain ports for the outside world.

pub mod notifier;
