//! Endpoint clients and response types for the two resources the view loads.
//! Keeping the paths here leaves the view model free of URL handling.

pub mod me;
pub mod users;
