// Application layer - use cases over the analytics engine
pub mod analysis_session;
pub mod dataset_service;
