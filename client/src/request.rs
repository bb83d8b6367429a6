use seed::prelude::*;
use shared::ApiError;

/// Sends the request and hands back the status code with the raw body.
/// Only a request that never completes is an error here, status handling
/// is left to `shared::api`.
pub async fn send(request: Request<'static>) -> Result<(u16, String), ApiError> {
    let response = request
        .fetch()
        .await
        .map_err(|e| ApiError::Transport(format!("{:?}", e)))?;
    let status = response.status().code;
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Malformed(format!("{:?}", e)))?;
    Ok((status, body))
}
