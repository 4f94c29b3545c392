use std::sync::Arc;

use anyhow::anyhow;
use common::config::ConfigLoader;
use model::order::OrderId;

use config::Config;
use driver_order_acceptance::acceptance::{AcceptanceOutcome, OrderAcceptanceClient};
use driver_order_acceptance::config::GlobalConfig;
use driver_order_acceptance::driver_api::HttpDriverApi;
use driver_order_acceptance::navigation::LocationNavigator;
use driver_order_acceptance::telemetry::init_tracing;

mod config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let global_config = ConfigLoader::load_default::<GlobalConfig>();
    let config = ConfigLoader::load_default::<Config>();

    let app_name = concat!(env!("CARGO_PKG_NAME"), "-", env!("CARGO_PKG_VERSION"));
    let _telemetry = init_tracing(app_name, global_config.verbose_log_mode)?;

    let order_id: OrderId = std::env::args()
        .nth(1)
        .or(config.order_id)
        .ok_or_else(|| anyhow!("Usage: accept_order <order_id>, or set ORDER_ID"))?
        .into();

    let driver_api = Arc::new(HttpDriverApi::new(&global_config)?);
    let navigator = Arc::new(LocationNavigator::new(
        global_config.origin(),
        &config.initial_path,
    ));
    let client = OrderAcceptanceClient::new(driver_api, navigator.clone());

    // A failed acceptance leaves the location untouched; it is not an error for the process.
    if let AcceptanceOutcome::Failed = client.accept_order(order_id).await? {
        tracing::warn!("Order was not accepted, staying on the current page");
    }

    println!("{}", navigator.href());
    Ok(())
}
