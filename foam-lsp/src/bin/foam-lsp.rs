use foam_config::{FoamConfig, Loader, PROJECT_CONFIG_FILE};
use foam_lsp::FoamLanguageServer;
use tokio::io::{stdin, stdout};
use tower_lsp::{LspService, Server};
use tracing_subscriber::EnvFilter;

fn load_config() -> Option<FoamConfig> {
    match Loader::new().with_optional_file(PROJECT_CONFIG_FILE).build() {
        Ok(config) => Some(config),
        Err(err) => {
            tracing::error!("ignoring {PROJECT_CONFIG_FILE}: {err}");
            foam_config::load_defaults().ok()
        }
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let config = load_config();
    let stdin = stdin();
    let stdout = stdout();
    let (service, socket) = LspService::new(move |client| match &config {
        Some(config) => FoamLanguageServer::from_config(client, config),
        None => FoamLanguageServer::new(client),
    });
    Server::new(stdin, stdout, socket).serve(service).await;
}
