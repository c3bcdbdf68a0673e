//! Delete Confirmation Dialog
//!
//! Second phase of the delete workflow: confirm calls the gateway through
//! the controller, cancel closes without any call.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::controller::use_controller;
use crate::models::Product;
use crate::store::{use_catalog_store, CatalogStateStoreFields};

#[component]
pub fn DeleteConfirmDialog(product: Product) -> impl IntoView {
    let ctrl = use_controller();
    let store = use_catalog_store();

    let confirm = move |_| {
        spawn_local(async move {
            ctrl.confirm_delete().await;
        });
    };

    view! {
        <div class="modal-overlay">
            <div class="modal confirm-dialog">
                <div class="modal-header">
                    <span class="modal-title">"Delete Product"</span>
                </div>
                <div class="modal-body">
                    <p>
                        {format!(
                            "Are you sure you want to delete {}? This action cannot be undone.",
                            product.title
                        )}
                    </p>
                </div>
                <div class="modal-footer">
                    <button class="ghost-btn" on:click=move |_| ctrl.close()>"Cancel"</button>
                    <button
                        class="danger-btn"
                        disabled=move || store.deleting().get()
                        on:click=confirm
                    >
                        "Delete"
                    </button>
                </div>
            </div>
        </div>
    }
}
