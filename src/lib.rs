//! # hrview
//!
//! Shows who is signed in to the HR portal and lists the HR users.
//!
//! The [`hrview::ViewModel`] loads two resources when it is mounted:
//!
//! 1. `GET api/hr/me`, the caller as resolved by the backend (the backend reads
//!    the Windows account from the `X-Windows-User` header).
//! 2. `GET api/hr/users`, the user list, kept verbatim.
//!
//! Both loads run as independent tasks. A failure in one never affects the
//! other, and neither surfaces an error to the caller: the current user falls
//! back to a placeholder name and the user list keeps its previous value.

pub mod cli;
pub mod hrview;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};
