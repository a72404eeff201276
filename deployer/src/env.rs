use alloy::{
    network::Ethereum,
    providers::{Provider, ProviderBuilder},
    transports::http::{Client, Http},
};
use anyhow::{Ok, Result};
use settings::{Setting, Source};
use time::macros::format_description;
use tracing::warn;
use tracing_subscriber::{
    fmt::{format::FmtSpan, time::UtcTime},
    EnvFilter,
};
use url::Url;

/// Name of the network the deployment targets.
// TODO: rinkeby was shut down in 2022; switch the default to sepolia once the
// team environments set NETWORK explicitly.
pub const NETWORK: Setting<'static> = Setting::with_default("NETWORK", "rinkeby");

/// API key for the Alchemy endpoint.
pub const ALCHEMY_KEY: Setting<'static> = Setting::required("ALCHEMY_KEY");

/// Secret key the deployment account signs with.
pub const PRIVATE_KEY: Setting<'static> = Setting::required("PRIVATE_KEY");

/// Initialize the console subscriber for logging
pub fn init_console_subscriber() {
    let timer = UtcTime::new(format_description!(
        "[year]-[month]-[day]T[hour repr:24]:[minute]:[second].[subsecond digits:3]Z"
    ));
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_span_events(FmtSpan::CLOSE)
        .with_timer(timer)
        .with_target(true)
        .with_thread_ids(false)
        .with_line_number(false)
        .with_file(false)
        .with_level(true)
        .with_ansi(true)
        .with_writer(std::io::stdout)
        .init();
}

/// Resolves the RPC endpoint from the configured network and API key.
pub fn provider_url(env: &impl Source) -> Result<Url> {
    let network = NETWORK.resolve(env)?;
    let key = ALCHEMY_KEY.resolve(env)?;
    if network == "rinkeby" {
        warn!("NETWORK resolved to rinkeby, a testnet that was shut down in 2022");
    }
    alchemy_url(&network, &key)
}

// Subdomains as Alchemy names them.
fn alchemy_url(network: &str, key: &str) -> Result<Url> {
    let subdomain = match network {
        "mainnet" => "eth-mainnet",
        "sepolia" => "eth-sepolia",
        "holesky" => "eth-holesky",
        "goerli" => "eth-goerli",
        "rinkeby" => "eth-rinkeby",
        _ => anyhow::bail!("{} is not a known Alchemy network", network),
    };
    let url = Url::parse(&format!("https://{}.g.alchemy.com/v2/{}", subdomain, key))?;
    Ok(url)
}

/// Creates a read-only provider for the configured endpoint.
pub fn create_provider(env: &impl Source) -> Result<impl Provider<Http<Client>, Ethereum> + Clone> {
    let url = provider_url(env)?;
    Ok(ProviderBuilder::new().on_http(url))
}
