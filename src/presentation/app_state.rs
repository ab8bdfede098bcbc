// Application state for HTTP handlers
use crate::application::dataset_service::DatasetService;

#[derive(Clone)]
pub struct AppState {
    pub dataset_service: DatasetService,
}
