//! Product Table Component
//!
//! The catalog widget itself: search input, sort controls, the derived
//! product listing, and whichever dialog the modal state selects.

use leptos::prelude::*;

use crate::components::{
    DeleteConfirmDialog, ProductCreateModal, ProductEditModal, ProductRow, ProductViewModal,
};
use crate::controller::{use_controller, ModalState};
use crate::listing::{derive_listing, SortDirection, SortField, SortState};
use crate::models::Product;
use crate::store::{store_is_busy, use_catalog_store, CatalogStateStoreFields};

#[component]
pub fn ProductTable(
    #[prop(into, default = String::from("Products"))] title: String,
) -> impl IntoView {
    let ctrl = use_controller();
    let store = use_catalog_store();
    let modal = ctrl.modal();

    let (search_term, set_search_term) = signal(String::new());
    let (sort, set_sort) = signal(SortState::default());

    // Filter and sort are one derivation over the same collection snapshot,
    // so the listing can never pair a fresh sort with a stale filter.
    let listing = move || {
        let products = store.products().get();
        derive_listing(&products, &search_term.get(), sort.get())
    };

    let select_field = move |field: SortField| {
        set_sort.update(|s| *s = s.select(field));
    };

    let sort_indicator = move |field: SortField| {
        let current = sort.get();
        if current.field == field {
            match current.direction {
                SortDirection::Asc => " ↑",
                SortDirection::Desc => " ↓",
            }
        } else {
            ""
        }
    };

    let rows = move |product: Product| {
        let view_product = product.clone();
        let edit_product = product.clone();
        let delete_product = product.clone();
        view! {
            <ProductRow
                product=product
                on_view=move |_| ctrl.open_view(view_product.clone())
                on_edit=move |_| ctrl.open_edit(edit_product.clone())
                on_delete=move |_| ctrl.open_delete(delete_product.clone())
            />
        }
    };

    view! {
        <div class="product-table-card">
            <div class="card-header">
                <h1 class="card-title">{title}</h1>
                <button
                    class="primary-btn create-btn"
                    disabled=move || store_is_busy(&store)
                    on:click=move |_| ctrl.open_create()
                >
                    "Create Product"
                </button>
            </div>

            <div class="table-controls">
                <input
                    type="search"
                    class="search-input"
                    placeholder="Search products..."
                    prop:value=move || search_term.get()
                    on:input=move |ev| set_search_term.set(event_target_value(&ev))
                />
                <select
                    class="sort-select"
                    prop:value=move || sort.get().field.as_str()
                    on:change=move |ev| {
                        if let Some(field) = SortField::from_str(&event_target_value(&ev)) {
                            select_field(field);
                        }
                    }
                >
                    <option value="title">"Title"</option>
                    <option value="sku">"SKU"</option>
                    <option value="price">"Price"</option>
                </select>
            </div>

            {move || store.fetch_error().get().map(|msg| view! {
                <p class="error-banner">{msg}</p>
            })}

            <Show when=move || store.fetching().get()>
                <div class="loading">"Loading..."</div>
            </Show>

            <table class="product-table">
                <thead>
                    <tr>
                        <th>"Image"</th>
                        <th class="sortable" on:click=move |_| select_field(SortField::Title)>
                            "Title" {move || sort_indicator(SortField::Title)}
                        </th>
                        <th class="sortable" on:click=move |_| select_field(SortField::Sku)>
                            "SKU" {move || sort_indicator(SortField::Sku)}
                        </th>
                        <th class="sortable" on:click=move |_| select_field(SortField::Price)>
                            "Price" {move || sort_indicator(SortField::Price)}
                        </th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=listing
                        key=|product| product.id.clone()
                        children=rows
                    />
                    <Show when=move || listing().is_empty() && !store.fetching().get()>
                        <tr>
                            <td class="empty-row" colspan="5">"No products found"</td>
                        </tr>
                    </Show>
                </tbody>
            </table>

            {move || match modal.get() {
                ModalState::Closed => view! { <div class="modal-slot"></div> }.into_any(),
                ModalState::Viewing(product) => {
                    view! { <ProductViewModal product=product/> }.into_any()
                }
                ModalState::Creating => view! { <ProductCreateModal/> }.into_any(),
                ModalState::Editing(product) => {
                    view! { <ProductEditModal product=product/> }.into_any()
                }
                ModalState::ConfirmingDelete(product) => {
                    view! { <DeleteConfirmDialog product=product/> }.into_any()
                }
            }}
        </div>
    }
}
