use http::StatusCode;
use session_auth::CoordinationError;

/// Helper trait for converting errors to a standard response error format
pub(super) trait IntoResponseError<T> {
    fn into_response_error(self) -> Result<T, (StatusCode, String)>;
}

/// Client mistakes keep their message, server faults get a generic one
impl<T> IntoResponseError<T> for Result<T, CoordinationError> {
    fn into_response_error(self) -> Result<T, (StatusCode, String)> {
        self.map_err(|e| match e {
            CoordinationError::MalformedRequest(_) | CoordinationError::InvalidCredentials => {
                (StatusCode::BAD_REQUEST, e.to_string())
            }
            CoordinationError::SessionError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Server Error".to_string(),
            ),
        })
    }
}
