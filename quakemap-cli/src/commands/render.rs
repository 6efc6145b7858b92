//! Render command - fetch both feeds and write the map page.

use std::path::{Path, PathBuf};

use quakemap::bootstrap::Bootstrap;
use quakemap::compose::MapOptions;
use quakemap::feed::FeedUrls;
use quakemap::page::{render_error_page, render_map_page};
use quakemap::provider::{AsyncHttpClient, AsyncReqwestClient};
use tracing::{error, info};

use super::common::{resolve_access_token, resolve_feed_urls, resolve_output};
use crate::error::CliError;
use crate::runner::CliRunner;

/// Arguments for the render command.
pub struct RenderArgs {
    pub output: Option<PathBuf>,
    pub access_token: Option<String>,
    pub earthquakes: Option<String>,
    pub faults: Option<String>,
    pub debug: bool,
}

/// Run the render command.
pub async fn run(args: RenderArgs) -> Result<(), CliError> {
    let runner = CliRunner::with_debug(args.debug)?;
    runner.log_startup("render");
    let config = runner.config();

    let output = resolve_output(args.output, config);
    let access_token = resolve_access_token(args.access_token, config)?;
    let urls = resolve_feed_urls(args.earthquakes, args.faults, config);
    let options = config.map_options(access_token);

    let http = AsyncReqwestClient::with_timeout(config.download.timeout)
        .map_err(CliError::HttpClient)?;

    println!("Fetching feeds:");
    println!("  Earthquakes: {}", urls.earthquakes);
    println!("  Fault lines: {}", urls.faults);

    let start = std::time::Instant::now();
    let html = build_page(http, urls, options).await;

    match html {
        Ok(html) => {
            runner.save_page(&output, &html)?;
            info!(elapsed_ms = start.elapsed().as_millis() as u64, "Render complete");
            println!("Map written to {}", output.display());
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "Render failed");
            write_error_page(&runner, &output, &e);
            Err(e)
        }
    }
}

/// Fetch, compose and render the page.
pub async fn build_page<C: AsyncHttpClient>(
    http: C,
    urls: FeedUrls,
    options: MapOptions,
) -> Result<String, CliError> {
    let view = Bootstrap::new(http, urls, options).run().await?;
    Ok(render_map_page(&view)?)
}

/// Leaves a page describing the failure where the map would have been.
///
/// A failure here is logged; the original error is what gets reported.
fn write_error_page(runner: &CliRunner, output: &Path, cause: &CliError) {
    let html = render_error_page(&cause.to_string());
    match runner.save_page(output, &html) {
        Ok(()) => println!("Error page written to {}", output.display()),
        Err(e) => error!(error = %e, "Could not write error page"),
    }
}
