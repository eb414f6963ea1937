//! HR directory view: the view model, its HTTP and logging seams, and the
//! renderer used by the command-line host.

pub mod api;
pub mod config;
pub mod errors;
pub mod features;
pub mod logger;
pub mod render;
pub mod view_model;

pub use api::{HttpClient, HttpResponse, ReqwestClient};
pub use config::ApiConfig;
pub use errors::AppError;
pub use features::{me::CurrentUser, users::User};
pub use logger::{Logger, Resource, TracingLogger};
pub use view_model::{FALLBACK_FULL_NAME, Mounted, ViewModel};
