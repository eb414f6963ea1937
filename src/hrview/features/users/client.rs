//! Client helper for the user list endpoint. The backend enforces
//! authorization; records are passed through without inspection.

use crate::hrview::{
    api::{HttpClient, get_json},
    errors::AppError,
    features::users::types::User,
    logger::Resource,
};

/// Fetches the user list. A body that is not a JSON array is a decode failure.
///
/// # Errors
/// Returns any transport, status, or decode failure from the HTTP layer.
pub async fn list_users(client: &dyn HttpClient) -> Result<Vec<User>, AppError> {
    get_json(client, Resource::Users.path()).await
}
