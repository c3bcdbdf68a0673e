//! Catalog App
//!
//! Wires the store, gateway, notification sink and workflow controller
//! together and kicks off the initial catalog load.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use std::rc::Rc;

use crate::components::{ProductTable, ToastArea};
use crate::controller::CatalogController;
use crate::gateway::HttpCatalogGateway;
use crate::notify::Toasts;
use crate::store::CatalogState;

/// The catalog service is expected to be reverse-proxied next to the app
const API_BASE_URL: &str = "/api";

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(CatalogState::default());
    let toasts = Toasts::new();
    let controller = CatalogController::new(
        store,
        Rc::new(HttpCatalogGateway::new(API_BASE_URL)),
        Rc::new(toasts),
    );

    // Provide context to all children
    provide_context(store);
    provide_context(toasts);
    provide_context(controller);

    // Load the catalog on mount
    Effect::new(move |_| {
        web_sys::console::log_1(&"[catalog] loading products".into());
        spawn_local(async move {
            controller.load().await;
        });
    });

    view! {
        <div class="catalog-app">
            <ProductTable/>
            <ToastArea/>
        </div>
    }
}
