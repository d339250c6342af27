// Application layer: drivers that wire user input to the core.

pub mod shell;
pub mod showroom;
