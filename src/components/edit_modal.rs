//! Product Edit Modal
//!
//! Edit form dialog, pre-populated from the product being edited. On
//! gateway failure the controller stays in `Editing` and the error is
//! surfaced inline so the user can retry.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::controller::{use_controller, SubmitError};
use crate::forms::{FieldErrors, ProductForm};
use crate::models::Product;
use crate::store::{store_is_busy, use_catalog_store};

#[component]
pub fn ProductEditModal(product: Product) -> impl IntoView {
    let ctrl = use_controller();
    let store = use_catalog_store();

    let prefill = ProductForm::from_product(&product);
    let (title, set_title) = signal(prefill.title);
    let (sku, set_sku) = signal(prefill.sku);
    let (price, set_price) = signal(prefill.price);
    let (description, set_description) = signal(prefill.description);
    let (image, set_image) = signal(prefill.image);
    let (errors, set_errors) = signal(FieldErrors::default());
    let (submit_error, set_submit_error) = signal::<Option<String>>(None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let form = ProductForm {
            title: title.get(),
            sku: sku.get(),
            price: price.get(),
            description: description.get(),
            image: image.get(),
        };
        spawn_local(async move {
            match ctrl.submit_edit(&form).await {
                Ok(()) => {}
                Err(SubmitError::Validation(field_errors)) => {
                    set_errors.set(field_errors);
                    set_submit_error.set(None);
                }
                Err(SubmitError::Gateway(err)) => {
                    set_errors.set(FieldErrors::default());
                    set_submit_error.set(Some(err.to_string()));
                }
            }
        });
    };

    view! {
        <div class="modal-overlay">
            <div class="modal form-modal">
                <div class="modal-header">
                    <span class="modal-title">"Edit Product"</span>
                    <button class="close-btn" on:click=move |_| ctrl.close()>"×"</button>
                </div>
                <form on:submit=on_submit>
                    <div class="modal-body">
                        {move || submit_error.get().map(|msg| view! {
                            <p class="submit-error">{msg}</p>
                        })}

                        <div class="form-field">
                            <label>"Title"</label>
                            <input
                                type="text"
                                placeholder="Product title"
                                prop:value=move || title.get()
                                on:input=move |ev| set_title.set(event_target_value(&ev))
                            />
                            {move || errors.get().title.map(|msg| view! {
                                <span class="field-error">{msg}</span>
                            })}
                        </div>

                        <div class="form-field">
                            <label>"SKU"</label>
                            <input
                                type="text"
                                placeholder="Product SKU"
                                prop:value=move || sku.get()
                                on:input=move |ev| set_sku.set(event_target_value(&ev))
                            />
                            {move || errors.get().sku.map(|msg| view! {
                                <span class="field-error">{msg}</span>
                            })}
                        </div>

                        <div class="form-field">
                            <label>"Price"</label>
                            <input
                                type="number"
                                step="any"
                                placeholder="Product price"
                                prop:value=move || price.get()
                                on:input=move |ev| set_price.set(event_target_value(&ev))
                            />
                            {move || errors.get().price.map(|msg| view! {
                                <span class="field-error">{msg}</span>
                            })}
                        </div>

                        <div class="form-field">
                            <label>"Description"</label>
                            <textarea
                                placeholder="Product description"
                                prop:value=move || description.get()
                                on:input=move |ev| set_description.set(event_target_value(&ev))
                            ></textarea>
                            {move || errors.get().description.map(|msg| view! {
                                <span class="field-error">{msg}</span>
                            })}
                        </div>

                        <div class="form-field">
                            <label>"Image URL"</label>
                            <input
                                type="text"
                                placeholder="Product image URL"
                                prop:value=move || image.get()
                                on:input=move |ev| set_image.set(event_target_value(&ev))
                            />
                            {move || {
                                let url = image.get();
                                (!url.is_empty()).then(|| view! {
                                    <img class="image-preview" src=url alt="Product preview"/>
                                })
                            }}
                        </div>
                    </div>
                    <div class="modal-footer">
                        <button type="button" class="ghost-btn" on:click=move |_| ctrl.close()>
                            "Cancel"
                        </button>
                        <button
                            type="submit"
                            class="primary-btn"
                            disabled=move || store_is_busy(&store)
                        >
                            "Save Changes"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
