use crate::cli::{
    actions::{Action, show::Args},
    commands::api,
};
use crate::hrview::{config::ApiConfig, render::Format};
use anyhow::{Context, Result, anyhow, ensure};
use secrecy::SecretString;
use std::time::Duration;
use url::Url;

/// # Errors
/// Returns an error if the base URL is invalid or an argument cannot be parsed.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let api_base_url = matches
        .get_one::<String>(api::ARG_API_BASE_URL)
        .cloned()
        .context("missing required argument: --api-base-url")?;
    let api_base_url = parse_base_url(&api_base_url)?;

    let timeout_ms = matches
        .get_one::<u64>(api::ARG_TIMEOUT_MS)
        .copied()
        .context("missing required argument: --timeout-ms")?;

    let windows_user = matches.get_one::<String>(api::ARG_WINDOWS_USER).cloned();
    let token = matches
        .get_one::<String>(api::ARG_TOKEN)
        .filter(|token| !token.trim().is_empty())
        .map(|token| SecretString::from(token.trim().to_string()));

    let format = matches
        .get_one::<String>(api::ARG_FORMAT)
        .map(|format| format.parse::<Format>())
        .transpose()
        .map_err(|err| anyhow!(err))?
        .unwrap_or_default();

    let config = ApiConfig::new(api_base_url)
        .with_timeout(Duration::from_millis(timeout_ms))
        .with_windows_user(windows_user)
        .with_token(token);

    Ok(Action::Show(Args { config, format }))
}

fn parse_base_url(value: &str) -> Result<Url> {
    let url = Url::parse(value.trim())
        .with_context(|| format!("invalid HRVIEW_API_BASE_URL: {value}"))?;
    ensure!(
        matches!(url.scheme(), "http" | "https"),
        "invalid HRVIEW_API_BASE_URL: unsupported scheme {}",
        url.scheme()
    );
    ensure!(
        url.host().is_some(),
        "invalid HRVIEW_API_BASE_URL: no host specified"
    );
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands;
    use secrecy::ExposeSecret;

    fn action_from(args: &[&str]) -> Result<Action> {
        let mut argv = vec!["hrview"];
        argv.extend_from_slice(args);
        let matches = commands::new().try_get_matches_from(argv)?;
        handler(&matches)
    }

    fn with_clean_env<F: FnOnce()>(f: F) {
        temp_env::with_vars(
            [
                ("HRVIEW_API_BASE_URL", None::<&str>),
                ("HRVIEW_WINDOWS_USER", None),
                ("HRVIEW_TOKEN", None),
                ("HRVIEW_TIMEOUT_MS", None),
                ("HRVIEW_FORMAT", None),
            ],
            f,
        );
    }

    #[test]
    fn test_handler_builds_show_action() {
        with_clean_env(|| {
            let Ok(Action::Show(args)) = action_from(&[
                "--api-base-url",
                "https://hr.example.com/portal",
                "--windows-user",
                "jdoe",
                "--token",
                " hr-token ",
                "--timeout-ms",
                "1500",
                "--format",
                "json",
            ]) else {
                panic!("expected show action");
            };

            assert_eq!(
                args.config.api_base_url.as_str(),
                "https://hr.example.com/portal"
            );
            assert_eq!(args.config.timeout, Duration::from_millis(1500));
            assert_eq!(args.config.windows_user.as_deref(), Some("jdoe"));
            assert_eq!(
                args.config.token.as_ref().map(|token| token.expose_secret()),
                Some("hr-token")
            );
            assert_eq!(args.format, Format::Json);
        });
    }

    #[test]
    fn test_handler_defaults() {
        with_clean_env(|| {
            let Ok(Action::Show(args)) = action_from(&[]) else {
                panic!("expected show action");
            };

            assert_eq!(args.config.api_base_url.as_str(), "http://localhost:8000/");
            assert!(args.config.windows_user.is_none());
            assert!(args.config.token.is_none());
            assert_eq!(args.format, Format::Text);
        });
    }

    #[test]
    fn test_handler_drops_blank_token() {
        with_clean_env(|| {
            let Ok(Action::Show(args)) = action_from(&["--token", "   "]) else {
                panic!("expected show action");
            };
            assert!(args.config.token.is_none());
        });
    }

    #[test]
    fn test_parse_base_url_rejects_bad_values() {
        assert!(parse_base_url("not a url").is_err());
        assert!(parse_base_url("ftp://hr.example.com").is_err());
        assert!(parse_base_url("https://hr.example.com").is_ok());
    }
}
