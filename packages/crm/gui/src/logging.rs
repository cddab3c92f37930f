//! `log_*!("component", ...)` macros. The component becomes the log target
//! under the `hcp_crm::` prefix, so `RUST_LOG=hcp_crm::api=debug` narrows
//! output to one area.

macro_rules! log_debug {
    ($component:literal, $($arg:tt)+) => {
        log::debug!(target: concat!("hcp_crm::", $component), $($arg)+)
    };
}

macro_rules! log_info {
    ($component:literal, $($arg:tt)+) => {
        log::info!(target: concat!("hcp_crm::", $component), $($arg)+)
    };
}

macro_rules! log_warn {
    ($component:literal, $($arg:tt)+) => {
        log::warn!(target: concat!("hcp_crm::", $component), $($arg)+)
    };
}

macro_rules! log_error {
    ($component:literal, $($arg:tt)+) => {
        log::error!(target: concat!("hcp_crm::", $component), $($arg)+)
    };
}

/// `RUST_LOG` wins; otherwise info and above for this app, warnings elsewhere.
pub fn init() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn,hcp_crm=info"))
        .init();
}
