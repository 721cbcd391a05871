//! DirectWarp host entry point

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use clap::Parser;
use tracing::{info, warn};

use clients::{CustomSearchSource, GeminiJudgmentSource};
use orchestrator::Orchestrator;
use shared::logging;
use webserver::{CredentialSource, RealCredentialSource, RealSettingsStore, WebServer, WebServerResult};

#[derive(Parser, Debug)]
#[command(name = "webserver")]
#[command(about = "DirectWarp query resolution host")]
struct Args {
    /// Address to bind
    #[arg(long, default_value = "127.0.0.1")]
    host: IpAddr,

    /// Port for HTTP server
    #[arg(long, default_value = "8787")]
    port: u16,

    /// Settings JSON file
    #[arg(long, default_value = "directwarp-settings.json")]
    settings_file: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> WebServerResult<()> {
    let args = Args::parse();
    logging::init_tracing_with_level(Some(&args.log_level));
    logging::log_startup(&format!("DirectWarp host v{}", env!("CARGO_PKG_VERSION")));

    let settings_store = RealSettingsStore::open(args.settings_file.clone()).await;
    info!(settings_file = %settings_store.path().display(), "⚙️ Settings file");
    let credential_source = RealCredentialSource::new();

    let credentials = credential_source.credentials().await;
    if !credentials.has_judgment() {
        warn!("🔑 GEMINI_API_KEY is not set; every resolution will fail until it is configured");
    }
    if !credentials.has_candidate() {
        warn!("🔑 GOOGLE_CSE_API_KEY or GOOGLE_CSE_ID is not set; only confident predictions can resolve");
    }

    let resolver = Orchestrator::new(CustomSearchSource::new(), GeminiJudgmentSource::new());
    let webserver = WebServer::new(resolver, settings_store, credential_source);

    let address = SocketAddr::new(args.host, args.port);

    webserver.run(address).await?;

    logging::log_success("Web server stopped gracefully");
    Ok(())
}
