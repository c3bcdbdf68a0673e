//! Toast Area Component
//!
//! Renders the notification queue. The workflow controller decides when to
//! notify; this component only displays and dismisses.

use leptos::prelude::*;

use crate::notify::{Severity, Toasts};

#[component]
pub fn ToastArea() -> impl IntoView {
    let toasts = expect_context::<Toasts>();

    view! {
        <div class="toast-area">
            <For
                each=move || toasts.entries().get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let severity_class = match toast.notification.severity {
                        Severity::Success => "toast success",
                        Severity::Error => "toast error",
                    };
                    view! {
                        <div class=severity_class>
                            <div class="toast-text">
                                <span class="toast-title">{toast.notification.title.clone()}</span>
                                <span class="toast-description">
                                    {toast.notification.description.clone()}
                                </span>
                            </div>
                            <button class="toast-close" on:click=move |_| toasts.dismiss(id)>
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
