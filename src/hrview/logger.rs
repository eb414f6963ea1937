//! Logging seam for the view model. Load failures are reported here instead of
//! being returned, so the sink is injectable and tests can record what was
//! reported.

use super::errors::AppError;
use std::fmt;

/// Which of the two view resources a failure belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Resource {
    CurrentUser,
    Users,
}

impl Resource {
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::CurrentUser => "api/hr/me",
            Self::Users => "api/hr/users",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CurrentUser => write!(formatter, "current user"),
            Self::Users => write!(formatter, "user list"),
        }
    }
}

pub trait Logger: Send + Sync {
    fn fetch_failed(&self, resource: Resource, error: &AppError);
}

/// Forwards failures to the global `tracing` subscriber.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn fetch_failed(&self, resource: Resource, error: &AppError) {
        tracing::error!(path = resource.path(), %error, "Failed to load {resource}");
    }
}
