// Domain layer - telemetry model and the analytics engine
pub mod calendar;
pub mod classification;
pub mod disconnection;
pub mod filter;
pub mod metrics;
pub mod series;
pub mod session;
pub mod telemetry;
