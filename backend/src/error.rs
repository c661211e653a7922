use rocket::http::Status;
use rocket::response::Responder;
use thiserror::Error;
use tracing::error;
use crate::store::StoreError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Data with province name '{0}' already exists")]
    DuplicateKey(String),
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),
}

impl ApiError {
    pub fn status(&self) -> Status {
        match self {
            ApiError::DuplicateKey(_) => Status::BadRequest,
            ApiError::StoreUnavailable(_) => Status::InternalServerError,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Duplicate(name) => ApiError::DuplicateKey(name),
            StoreError::Unavailable(detail) => ApiError::StoreUnavailable(detail),
        }
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for ApiError {
    fn respond_to(self, req: &'r rocket::Request<'_>) -> rocket::response::Result<'o> {
        let status = self.status();
        let body = match &self {
            ApiError::StoreUnavailable(detail) => {
                error!("{} {} failed: {}", req.method(), req.uri(), detail);
                "Internal Server Error".to_string()
            }
            _ => self.to_string(),
        };

        rocket::Response::build_from(body.respond_to(req)?)
            .status(status)
            .ok()
    }
}
