#[macro_use]
mod logging;

mod api;
mod app;
mod components;
mod effects;
mod theme;
mod views;
mod widgets;

use anyhow::Context;
use app::CrmApp;
use hcp_crm_core::ClientConfig;

/// `hcp-crm [BASE_URL]`. Without an argument the client talks to the local
/// development backend.
pub fn main() -> anyhow::Result<()> {
    logging::init();

    let mut config = ClientConfig::default();
    if let Some(base_url) = std::env::args().nth(1) {
        config = config.with_base_url(base_url);
    }

    let api = api::ApiClient::new(&config).context("failed to build HTTP client")?;
    log_info!("main", "Using backend at {}", api.base_url);

    iced::application("HCP Interactions", CrmApp::update, CrmApp::view)
        .subscription(CrmApp::subscription)
        .theme(|_| theme::app_theme())
        .window_size((1280.0, 900.0))
        .run_with(move || CrmApp::new(config, api))
        .map_err(|err| anyhow::anyhow!("GUI exited with an error: {}", err))
}
