//! HTTP server initialization and runtime setup.
//!
//! Builds the in-memory stores, seeds demo data and drives the Axum server
//! lifecycle.

use crate::application::services::{AuthService, LinkService, OrderService, VendorService};
use crate::config::Config;
use crate::infrastructure::auth::MemoryAuthProvider;
use crate::infrastructure::store::{MemoryLinkStore, MemoryOrderStore, MemoryVendorStore, seed};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - In-memory link, vendor and order stores seeded with demo data
/// - Demo identity provider with one account from the configuration
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let links = seed::demo_links();
    let vendors = seed::demo_vendors();
    let orders = seed::demo_orders();
    tracing::info!(
        "Seeded demo data: {} links, {} vendors, {} orders",
        links.len(),
        vendors.len(),
        orders.len()
    );

    let link_store = Arc::new(MemoryLinkStore::with_links(links));
    let vendor_store = Arc::new(MemoryVendorStore::with_vendors(vendors));
    let order_store = Arc::new(MemoryOrderStore::with_orders(orders));
    let provider = Arc::new(MemoryAuthProvider::with_account(
        &config.demo_email,
        &config.demo_password,
    ));

    let link_service = Arc::new(LinkService::new(link_store));
    let vendor_service = Arc::new(VendorService::new(vendor_store));
    let order_service = Arc::new(OrderService::new(order_store));
    let auth_service = Arc::new(AuthService::new(
        provider,
        config.session_signing_secret.clone(),
        config.session_ttl_seconds,
    ));

    let state = AppState::new(link_service, vendor_service, order_service, auth_service);

    let app = app_router(state, config.behind_proxy);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .await?;

    Ok(())
}
