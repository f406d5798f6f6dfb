use std::sync::Arc;
use axum::http::StatusCode;
use crate::catalog::domain::CatalogService;
use crate::core::command::CommandError;
use crate::core::context::RequestContext;
use crate::core::domain::Configuration;

// AppState is shared by every handler; the service inside it owns the one store instance.
#[derive(Clone)]
pub struct AppState {
    pub config: Configuration,
    pub catalog_service: Arc<dyn CatalogService>,
}

impl AppState {
    pub fn new(config: Configuration, catalog_service: Arc<dyn CatalogService>) -> AppState {
        AppState {
            config,
            catalog_service,
        }
    }

    pub fn request_context(&self) -> RequestContext {
        RequestContext::with_timeout(self.config.request_timeout())
    }
}

pub type ServerError = (StatusCode, String);

pub fn json_to_server_error(err: serde_json::Error) -> ServerError {
    (StatusCode::BAD_REQUEST, format!("{}", err))
}

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::NotFound { .. } => {
                (StatusCode::NOT_FOUND, format!("{:?}", err))
            }
            CommandError::Cancelled { .. } => {
                (StatusCode::SERVICE_UNAVAILABLE, format!("{:?}", err))
            }
            CommandError::Timeout { .. } => {
                (StatusCode::REQUEST_TIMEOUT, format!("{:?}", err))
            }
            CommandError::Runtime { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("{:?}", err))
            }
            CommandError::Serialization { .. } => {
                (StatusCode::BAD_REQUEST, format!("{:?}", err))
            }
            CommandError::Validation { .. } => {
                (StatusCode::BAD_REQUEST, format!("{:?}", err))
            }
        }
    }
}
