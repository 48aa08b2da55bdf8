#![allow(dead_code)]

use std::sync::Arc;

use quickvendor::application::services::{AuthService, LinkService, OrderService, VendorService};
use quickvendor::domain::auth::Credentials;
use quickvendor::infrastructure::auth::MemoryAuthProvider;
use quickvendor::infrastructure::store::{
    MemoryLinkStore, MemoryOrderStore, MemoryVendorStore, seed,
};
use quickvendor::state::AppState;

pub const DEMO_EMAIL: &str = "demo@quickvendor.app";
pub const DEMO_PASSWORD: &str = "demo-password";

/// State with empty stores and one demo account.
pub fn create_test_state() -> AppState {
    build_state(
        MemoryLinkStore::new(),
        MemoryVendorStore::new(),
        MemoryOrderStore::new(),
    )
}

/// State with the demo catalog loaded.
pub fn create_seeded_state() -> AppState {
    build_state(
        MemoryLinkStore::with_links(seed::demo_links()),
        MemoryVendorStore::with_vendors(seed::demo_vendors()),
        MemoryOrderStore::with_orders(seed::demo_orders()),
    )
}

fn build_state(
    link_store: MemoryLinkStore,
    vendor_store: MemoryVendorStore,
    order_store: MemoryOrderStore,
) -> AppState {
    let provider = Arc::new(MemoryAuthProvider::with_account(DEMO_EMAIL, DEMO_PASSWORD));

    AppState::new(
        Arc::new(LinkService::new(Arc::new(link_store))),
        Arc::new(VendorService::new(Arc::new(vendor_store))),
        Arc::new(OrderService::new(Arc::new(order_store))),
        Arc::new(AuthService::new(
            provider,
            "test-signing-secret".to_string(),
            3600,
        )),
    )
}

/// Signs the demo account in and returns a session token.
pub async fn sign_in(state: &AppState) -> String {
    state
        .auth_service
        .sign_in(Credentials {
            email: DEMO_EMAIL.to_string(),
            password: DEMO_PASSWORD.to_string(),
        })
        .await
        .unwrap()
        .token
}
