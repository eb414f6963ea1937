//! Client helper for the current-user endpoint.

use crate::hrview::{
    api::{HttpClient, get_json},
    errors::AppError,
    features::me::types::CurrentUser,
    logger::Resource,
};

/// Fetch the authenticated caller as resolved by the backend.
///
/// # Errors
/// Returns any transport, status, or decode failure from the HTTP layer.
pub async fn fetch_me(client: &dyn HttpClient) -> Result<CurrentUser, AppError> {
    get_json(client, Resource::CurrentUser.path()).await
}
