use crate::hrview::{
    api::{HttpClient, ReqwestClient},
    config::ApiConfig,
    logger::TracingLogger,
    render::{Format, render},
    view_model::ViewModel,
};
use anyhow::{Context, Result};
use std::{
    io::{Write, stdout},
    sync::Arc,
};
use tracing::info;

#[derive(Debug)]
pub struct Args {
    pub config: ApiConfig,
    pub format: Format,
}

/// Mount the view against the configured API, wait for both loads to settle
/// and print the result.
///
/// # Errors
/// Returns an error if the HTTP client cannot be built or stdout is closed.
/// Load failures are not errors; they show up as fallback values.
pub async fn execute(args: Args) -> Result<()> {
    let client = ReqwestClient::new(&args.config).context("failed to build HTTP client")?;
    let output = load_and_render(Arc::new(client), args.format).await?;

    let mut stdout = stdout().lock();
    stdout.write_all(output.as_bytes())?;
    if args.format == Format::Json {
        writeln!(stdout)?;
    }
    stdout.flush()?;

    Ok(())
}

async fn load_and_render(client: Arc<dyn HttpClient>, format: Format) -> Result<String> {
    let view = Arc::new(ViewModel::new(client, Arc::new(TracingLogger)));

    info!("mounting HR view");
    view.mount().settled().await;

    Ok(render(format, &view.current_user(), &view.users())?)
}
