//! Game lifecycle: the single mutable game slot and the timer driving it

pub mod controller;
pub mod ticker;

pub use controller::GameController;
pub use ticker::TickTimer;
