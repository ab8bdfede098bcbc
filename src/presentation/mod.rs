// Presentation layer - HTTP surface over the analytics engine
pub mod app_state;
pub mod error;
pub mod handlers;
pub mod palette;
pub mod router;
pub mod views;
