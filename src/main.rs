use std::process::ExitCode;
use std::sync::Arc;

use erp_lite_entitlements::application::{
    GetWorkspaceNavigationHandler, GetWorkspaceNavigationQuery,
};
use erp_lite_entitlements::config::AppConfig;

#[tokio::main]
async fn main() -> ExitCode {
    // Logging may not be initialized yet, so report on stderr.
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.logging.init()?;

    // An invalid configuration or catalog stops startup here.
    let resolver = Arc::new(config.build_resolver()?);
    tracing::info!(
        segments = resolver.segments().segments().len(),
        "catalogs loaded"
    );

    let settings = config.settings.build_provider();
    let handler = GetWorkspaceNavigationHandler::new(settings, resolver);
    let navigation = handler.handle(GetWorkspaceNavigationQuery).await?;

    println!("{}", serde_json::to_string_pretty(&navigation)?);
    Ok(())
}
