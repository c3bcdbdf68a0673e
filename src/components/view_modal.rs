//! Product View Modal
//!
//! Read-only product details; no gateway calls.

use leptos::prelude::*;

use crate::controller::use_controller;
use crate::models::Product;

#[component]
pub fn ProductViewModal(product: Product) -> impl IntoView {
    let ctrl = use_controller();

    let image = product.image_url.clone().filter(|url| !url.is_empty());

    view! {
        <div class="modal-overlay">
            <div class="modal view-modal">
                <div class="modal-header">
                    <span class="modal-title">"Product Details"</span>
                    <button class="close-btn" on:click=move |_| ctrl.close()>"×"</button>
                </div>
                <div class="modal-body">
                    {match image {
                        Some(url) => view! {
                            <img class="product-image" src=url alt=product.title.clone()/>
                        }
                        .into_any(),
                        None => view! {
                            <div class="product-image-placeholder">"No image available"</div>
                        }
                        .into_any(),
                    }}
                    <h2 class="product-title">{product.title.clone()}</h2>
                    <div class="product-meta-row">
                        <span class="product-sku">{format!("SKU: {}", product.sku)}</span>
                        <span class="product-price">{format!("${:.2}", product.price)}</span>
                    </div>
                    <p class="product-description">{product.description.clone()}</p>
                </div>
                <div class="modal-footer">
                    <button class="primary-btn" on:click=move |_| ctrl.close()>"Close"</button>
                </div>
            </div>
        </div>
    }
}
