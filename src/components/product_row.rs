//! Product Table Row Component
//!
//! Read-only row surface: the row owns no state and only raises the three
//! callbacks the workflow controller plugs in.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::models::Product;

/// Shown when a product has no image or its image fails to load
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/50x50?text=No+Image";

/// One catalog row: thumbnail, title/description, SKU, price, actions.
///
/// Clicking the title raises `on_view`; the edit and delete buttons raise
/// their callbacks. A failing image swaps in the placeholder instead of
/// erroring out.
#[component]
pub fn ProductRow(
    product: Product,
    #[prop(into)] on_view: Callback<()>,
    #[prop(into)] on_edit: Callback<()>,
    #[prop(into)] on_delete: Callback<()>,
) -> impl IntoView {
    let image_src = product
        .image_url
        .clone()
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());

    let on_image_error = move |ev: web_sys::ErrorEvent| {
        if let Some(img) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlImageElement>().ok())
        {
            // guard against a placeholder that itself fails to load
            if img.src() != PLACEHOLDER_IMAGE {
                img.set_src(PLACEHOLDER_IMAGE);
            }
        }
    };

    view! {
        <tr class="product-row">
            <td class="product-image-cell">
                <img
                    class="product-thumbnail"
                    src=image_src
                    alt=product.title.clone()
                    on:error=on_image_error
                />
            </td>
            <td class="product-title-cell">
                <span class="product-title" on:click=move |_| on_view.run(())>
                    {product.title.clone()}
                </span>
                <span class="product-description">{product.description.clone()}</span>
            </td>
            <td class="product-sku-cell">{product.sku.clone()}</td>
            <td class="product-price-cell">{format!("${:.2}", product.price)}</td>
            <td class="product-actions-cell">
                <button class="edit-btn" title="Edit" on:click=move |_| on_edit.run(())>
                    "✎"
                </button>
                <button class="delete-btn" title="Delete" on:click=move |_| on_delete.run(())>
                    "🗑"
                </button>
            </td>
        </tr>
    }
}
