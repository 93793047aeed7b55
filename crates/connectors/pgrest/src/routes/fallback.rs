use crate::error::ServerError;

pub async fn not_found() -> ServerError {
    ServerError::NotFound
}

pub async fn method_not_allowed() -> ServerError {
    ServerError::MethodNotAllowed
}
