use crate::hrview::config::DEFAULT_API_BASE_URL;
use clap::{Arg, Command};

pub const ARG_API_BASE_URL: &str = "api-base-url";
pub const ARG_WINDOWS_USER: &str = "windows-user";
pub const ARG_TOKEN: &str = "token";
pub const ARG_TIMEOUT_MS: &str = "timeout-ms";
pub const ARG_FORMAT: &str = "format";

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_API_BASE_URL)
                .short('u')
                .long("api-base-url")
                .help("Base URL of the HR API")
                .default_value(DEFAULT_API_BASE_URL)
                .env("HRVIEW_API_BASE_URL"),
        )
        .arg(
            Arg::new(ARG_WINDOWS_USER)
                .long("windows-user")
                .help("Windows account sent as X-Windows-User, example: DOMAIN\\jdoe")
                .env("HRVIEW_WINDOWS_USER"),
        )
        .arg(
            Arg::new(ARG_TOKEN)
                .long("token")
                .help("Bearer token sent in the Authorization header")
                .env("HRVIEW_TOKEN")
                .hide_env_values(true),
        )
        .arg(
            Arg::new(ARG_TIMEOUT_MS)
                .long("timeout-ms")
                .help("Request timeout in milliseconds")
                .default_value("10000")
                .env("HRVIEW_TIMEOUT_MS")
                .value_parser(clap::value_parser!(u64).range(1..)),
        )
        .arg(
            Arg::new(ARG_FORMAT)
                .short('f')
                .long("format")
                .help("Output format")
                .default_value("text")
                .env("HRVIEW_FORMAT")
                .value_parser(["text", "json"]),
        )
}
