//! Product Create Modal
//!
//! Create form dialog. Validation failures and gateway failures both keep
//! the dialog open; the controller only closes it on success, so the form
//! state (and its reset) lives and dies with the dialog.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::controller::{use_controller, SubmitError};
use crate::forms::{FieldErrors, ProductForm};
use crate::store::{store_is_busy, use_catalog_store};

#[component]
pub fn ProductCreateModal() -> impl IntoView {
    let ctrl = use_controller();
    let store = use_catalog_store();

    let (title, set_title) = signal(String::new());
    let (sku, set_sku) = signal(String::new());
    let (price, set_price) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (image, set_image) = signal(String::new());
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
            match ctrl.submit_create(&form).await {
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
                    <span class="modal-title">"Create New Product"</span>
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
                            "Create Product"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
