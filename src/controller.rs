//! Modal Workflow Controller
//!
//! Single state machine coordinating the dialogs with the gateway and the
//! store. At most one workflow can be active by construction: the dialog
//! selection is one tagged `ModalState` value, and the product being viewed,
//! edited or deleted lives inside its variant.

use std::rc::Rc;

use leptos::prelude::*;

use crate::error::GatewayError;
use crate::forms::{FieldErrors, ProductForm};
use crate::gateway::CatalogGateway;
use crate::models::Product;
use crate::notify::{Notification, NotificationSink};
use crate::store::{
    store_append_product, store_remove_product, store_replace_product, CatalogStateStoreFields,
    CatalogStore,
};

const FETCH_ERROR_MESSAGE: &str = "Failed to load products. Please try again later.";

/// Which dialog is open, if any
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Viewing(Product),
    Creating,
    Editing(Product),
    ConfirmingDelete(Product),
}

/// Why a create/edit submit did not go through.
///
/// Validation failures never reach the gateway; gateway failures are
/// re-signaled here so the dialog can stay open and surface them inline.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SubmitError {
    #[error("validation failed")]
    Validation(FieldErrors),
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

/// Copyable handle, provided via context the way the app context is.
/// The gateway and sink are trait objects on the local arena; everything
/// else is a signal.
#[derive(Clone, Copy)]
pub struct CatalogController {
    store: CatalogStore,
    modal: RwSignal<ModalState>,
    gateway: StoredValue<Rc<dyn CatalogGateway>, LocalStorage>,
    notifier: StoredValue<Rc<dyn NotificationSink>, LocalStorage>,
    /// Sequence counter for load requests; responses from superseded
    /// requests are discarded without touching the store
    load_seq: StoredValue<u64>,
}

/// Get the workflow controller from context
pub fn use_controller() -> CatalogController {
    expect_context::<CatalogController>()
}

impl CatalogController {
    pub fn new(
        store: CatalogStore,
        gateway: Rc<dyn CatalogGateway>,
        notifier: Rc<dyn NotificationSink>,
    ) -> Self {
        Self {
            store,
            modal: RwSignal::new(ModalState::Closed),
            gateway: StoredValue::new_local(gateway),
            notifier: StoredValue::new_local(notifier),
            load_seq: StoredValue::new(0),
        }
    }

    pub fn modal(&self) -> RwSignal<ModalState> {
        self.modal
    }

    fn notify(&self, notification: Notification) {
        self.notifier.get_value().notify(notification);
    }

    // ========================
    // Dialog Intents
    // ========================

    /// Read-only; no gateway call
    pub fn open_view(&self, product: Product) {
        self.modal.set(ModalState::Viewing(product));
    }

    pub fn open_create(&self) {
        self.modal.set(ModalState::Creating);
    }

    /// The edit form pre-populates from the product
    pub fn open_edit(&self, product: Product) {
        self.modal.set(ModalState::Editing(product));
    }

    /// First phase of delete: record the pending target
    pub fn open_delete(&self, product: Product) {
        self.modal.set(ModalState::ConfirmingDelete(product));
    }

    /// Explicit cancel/close from any state; never calls the gateway
    pub fn close(&self) {
        self.modal.set(ModalState::Closed);
    }

    // ========================
    // Gateway Workflows
    // ========================

    /// Fetch the full collection. On failure the previous collection is
    /// preserved and only the error banner changes. A response that has
    /// been superseded by a newer load is discarded entirely.
    pub async fn load(&self) {
        let seq = self.load_seq.get_value() + 1;
        self.load_seq.set_value(seq);
        self.store.fetching().set(true);

        let gateway = self.gateway.get_value();
        let result = gateway.list().await;
        if self.load_seq.get_value() != seq {
            return;
        }
        self.store.fetching().set(false);

        match result {
            Ok(products) => {
                self.store.products().set(products);
                self.store.fetch_error().set(None);
            }
            Err(_) => {
                self.store
                    .fetch_error()
                    .set(Some(FETCH_ERROR_MESSAGE.to_string()));
            }
        }
    }

    /// Create workflow submit. On success the created product is appended
    /// and the dialog closes; on gateway failure the dialog stays open for
    /// retry and the error is re-signaled to the caller.
    pub async fn submit_create(&self, form: &ProductForm) -> Result<(), SubmitError> {
        let input = form.validate().map_err(SubmitError::Validation)?;

        self.store.creating().set(true);
        let gateway = self.gateway.get_value();
        let result = gateway.create(&input).await;
        self.store.creating().set(false);

        match result {
            Ok(created) => {
                let created = ensure_id(created);
                self.notify(Notification::success(
                    "Product created",
                    format!("{} has been created successfully.", created.title),
                ));
                store_append_product(&self.store, created);
                self.modal.set(ModalState::Closed);
                Ok(())
            }
            Err(err) => {
                self.notify(failure_notification("Error creating product", &err));
                Err(err.into())
            }
        }
    }

    /// Edit workflow submit for the product currently in `Editing`.
    pub async fn submit_edit(&self, form: &ProductForm) -> Result<(), SubmitError> {
        let ModalState::Editing(original) = self.modal.get_untracked() else {
            return Ok(());
        };
        let input = form.validate().map_err(SubmitError::Validation)?;

        self.store.updating().set(true);
        let gateway = self.gateway.get_value();
        let result = gateway.update(&original.id, &input).await;
        self.store.updating().set(false);

        match result {
            Ok(updated) => {
                let mut updated = updated;
                if updated.id.is_empty() {
                    updated.id = original.id;
                }
                self.notify(Notification::success(
                    "Product updated",
                    format!("{} has been updated successfully.", updated.title),
                ));
                store_replace_product(&self.store, updated);
                self.modal.set(ModalState::Closed);
                Ok(())
            }
            Err(err) => {
                self.notify(failure_notification("Error updating product", &err));
                Err(err.into())
            }
        }
    }

    /// Second phase of delete: call the gateway, then close regardless of
    /// outcome (the pending target lives in the variant, so closing clears
    /// it).
    pub async fn confirm_delete(&self) {
        let ModalState::ConfirmingDelete(target) = self.modal.get_untracked() else {
            return;
        };

        self.store.deleting().set(true);
        let gateway = self.gateway.get_value();
        let result = gateway.delete(&target.id).await;
        self.store.deleting().set(false);

        match result {
            Ok(()) => {
                store_remove_product(&self.store, &target.id);
                self.notify(Notification::success(
                    "Product deleted",
                    format!("{} has been deleted successfully.", target.title),
                ));
            }
            Err(err) => {
                self.notify(failure_notification("Error deleting product", &err));
            }
        }
        self.modal.set(ModalState::Closed);
    }
}

/// Server-assigned ids are required; fall back to a UUID only when the
/// create response carries none.
fn ensure_id(mut product: Product) -> Product {
    if product.id.is_empty() {
        product.id = uuid::Uuid::new_v4().to_string();
    }
    product
}

fn failure_notification(title: &str, err: &GatewayError) -> Notification {
    match err {
        GatewayError::Timeout => Notification::error(
            "Request timeout",
            "The request took too long to complete. Please try again.",
        ),
        GatewayError::Remote(message) => Notification::error(title, message.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProductInput;
    use crate::notify::Severity;
    use crate::store::CatalogState;
    use async_trait::async_trait;
    use reactive_stores::Store;
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use tokio::sync::oneshot;

    fn make_product(id: &str, title: &str) -> Product {
        Product {
            id: id.to_string(),
            title: title.to_string(),
            sku: format!("SKU-{id}"),
            price: 1.0,
            description: "d".to_string(),
            image_url: None,
        }
    }

    fn filled_form() -> ProductForm {
        ProductForm {
            title: "Widget".to_string(),
            sku: "W-1".to_string(),
            price: "9.99".to_string(),
            description: "d".to_string(),
            image: "http://x/y.png".to_string(),
        }
    }

    /// Gateway double with one scripted response per operation
    #[derive(Default)]
    struct MockGateway {
        list_response: RefCell<Option<Result<Vec<Product>, GatewayError>>>,
        create_response: RefCell<Option<Result<Product, GatewayError>>>,
        update_response: RefCell<Option<Result<Product, GatewayError>>>,
        delete_response: RefCell<Option<Result<(), GatewayError>>>,
        calls: RefCell<Vec<String>>,
    }

    impl MockGateway {
        fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }
    }

    fn unscripted<T>() -> Result<T, GatewayError> {
        Err(GatewayError::Remote("unscripted call".to_string()))
    }

    #[async_trait(?Send)]
    impl CatalogGateway for MockGateway {
        async fn list(&self) -> Result<Vec<Product>, GatewayError> {
            self.calls.borrow_mut().push("list".to_string());
            self.list_response
                .borrow_mut()
                .take()
                .unwrap_or_else(unscripted)
        }

        async fn create(&self, _input: &ProductInput) -> Result<Product, GatewayError> {
            self.calls.borrow_mut().push("create".to_string());
            self.create_response
                .borrow_mut()
                .take()
                .unwrap_or_else(unscripted)
        }

        async fn update(&self, id: &str, _input: &ProductInput) -> Result<Product, GatewayError> {
            self.calls.borrow_mut().push(format!("update {id}"));
            self.update_response
                .borrow_mut()
                .take()
                .unwrap_or_else(unscripted)
        }

        async fn delete(&self, id: &str) -> Result<(), GatewayError> {
            self.calls.borrow_mut().push(format!("delete {id}"));
            self.delete_response
                .borrow_mut()
                .take()
                .unwrap_or_else(unscripted)
        }
    }

    #[derive(Default)]
    struct RecordingSink {
        notes: RefCell<Vec<Notification>>,
    }

    impl RecordingSink {
        fn notes(&self) -> Vec<Notification> {
            self.notes.borrow().clone()
        }
    }

    impl NotificationSink for RecordingSink {
        fn notify(&self, notification: Notification) {
            self.notes.borrow_mut().push(notification);
        }
    }

    struct Harness {
        store: CatalogStore,
        gateway: Rc<MockGateway>,
        sink: Rc<RecordingSink>,
        controller: CatalogController,
    }

    fn harness() -> Harness {
        let store = Store::new(CatalogState::default());
        let gateway = Rc::new(MockGateway::default());
        let sink = Rc::new(RecordingSink::default());
        let controller = CatalogController::new(
            store,
            Rc::clone(&gateway) as Rc<dyn CatalogGateway>,
            Rc::clone(&sink) as Rc<dyn NotificationSink>,
        );
        Harness {
            store,
            gateway,
            sink,
            controller,
        }
    }

    #[tokio::test]
    async fn test_load_replaces_collection_and_clears_error() {
        let h = harness();
        h.store.fetch_error().set(Some("stale banner".to_string()));
        *h.gateway.list_response.borrow_mut() =
            Some(Ok(vec![make_product("1", "Mug"), make_product("2", "Anvil")]));

        h.controller.load().await;

        assert_eq!(h.store.products().read_untracked().len(), 2);
        assert_eq!(h.store.fetch_error().get_untracked(), None);
        assert!(!h.store.fetching().get_untracked());
    }

    #[tokio::test]
    async fn test_load_failure_preserves_collection() {
        let h = harness();
        h.store.products().set(vec![make_product("1", "Mug")]);
        *h.gateway.list_response.borrow_mut() =
            Some(Err(GatewayError::Remote("boom".to_string())));

        h.controller.load().await;

        let products = h.store.products().read_untracked();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].title, "Mug");
        let error = h.store.fetch_error().get_untracked();
        assert!(error.is_some());
        assert!(!error.unwrap().is_empty());
        assert!(!h.store.fetching().get_untracked());
    }

    #[tokio::test]
    async fn test_create_success_appends_and_closes() {
        let h = harness();
        h.controller.open_create();
        *h.gateway.create_response.borrow_mut() = Some(Ok(Product {
            id: "42".to_string(),
            title: "Widget".to_string(),
            sku: "W-1".to_string(),
            price: 9.99,
            description: "d".to_string(),
            image_url: Some("http://x/y.png".to_string()),
        }));

        let result = h.controller.submit_create(&filled_form()).await;

        assert_eq!(result, Ok(()));
        let products = h.store.products().read_untracked();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, "42");
        assert_eq!(products[0].image_url.as_deref(), Some("http://x/y.png"));
        assert_eq!(h.controller.modal().get_untracked(), ModalState::Closed);
        let notes = h.sink.notes();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].severity, Severity::Success);
        assert_eq!(notes[0].title, "Product created");
    }

    #[tokio::test]
    async fn test_create_failure_keeps_dialog_open() {
        let h = harness();
        h.controller.open_create();
        *h.gateway.create_response.borrow_mut() =
            Some(Err(GatewayError::Remote("SKU already exists".to_string())));

        let result = h.controller.submit_create(&filled_form()).await;

        assert_eq!(
            result,
            Err(SubmitError::Gateway(GatewayError::Remote(
                "SKU already exists".to_string()
            )))
        );
        assert_eq!(h.controller.modal().get_untracked(), ModalState::Creating);
        assert!(h.store.products().read_untracked().is_empty());
        let notes = h.sink.notes();
        assert_eq!(notes[0].severity, Severity::Error);
        assert_eq!(notes[0].description, "SKU already exists");
    }

    #[tokio::test]
    async fn test_create_validation_skips_gateway() {
        let h = harness();
        h.controller.open_create();

        let result = h.controller.submit_create(&ProductForm::default()).await;

        let Err(SubmitError::Validation(errors)) = result else {
            panic!("expected validation failure");
        };
        assert!(errors.title.is_some());
        assert!(h.gateway.calls().is_empty());
        assert_eq!(h.controller.modal().get_untracked(), ModalState::Creating);
    }

    #[tokio::test]
    async fn test_create_fills_missing_id() {
        let h = harness();
        h.controller.open_create();
        *h.gateway.create_response.borrow_mut() = Some(Ok(Product {
            id: String::new(),
            title: "Widget".to_string(),
            sku: "W-1".to_string(),
            price: 9.99,
            description: "d".to_string(),
            image_url: None,
        }));

        h.controller.submit_create(&filled_form()).await.unwrap();

        let products = h.store.products().read_untracked();
        assert!(!products[0].id.is_empty());
    }

    #[tokio::test]
    async fn test_timeout_gets_specific_message() {
        let h = harness();
        h.controller.open_create();
        *h.gateway.create_response.borrow_mut() = Some(Err(GatewayError::Timeout));

        let result = h.controller.submit_create(&filled_form()).await;

        assert_eq!(result, Err(SubmitError::Gateway(GatewayError::Timeout)));
        let notes = h.sink.notes();
        assert_eq!(notes[0].title, "Request timeout");
        assert_eq!(
            notes[0].description,
            "The request took too long to complete. Please try again."
        );
    }

    #[tokio::test]
    async fn test_edit_validation_blocks_gateway_call() {
        let h = harness();
        let product = make_product("1", "Mug");
        h.store.products().set(vec![product.clone()]);
        h.controller.open_edit(product.clone());

        let mut form = ProductForm::from_product(&product);
        form.title = String::new();
        let result = h.controller.submit_edit(&form).await;

        let Err(SubmitError::Validation(errors)) = result else {
            panic!("expected validation failure");
        };
        assert_eq!(errors.title.as_deref(), Some("Title is required"));
        assert!(h.gateway.calls().is_empty());
        assert_eq!(
            h.controller.modal().get_untracked(),
            ModalState::Editing(product)
        );
    }

    #[tokio::test]
    async fn test_edit_success_replaces_in_place() {
        let h = harness();
        let product = make_product("1", "Mug");
        h.store
            .products()
            .set(vec![product.clone(), make_product("2", "Anvil")]);
        h.controller.open_edit(product.clone());
        *h.gateway.update_response.borrow_mut() = Some(Ok(Product {
            title: "Mug Mk2".to_string(),
            ..product.clone()
        }));

        let mut form = ProductForm::from_product(&product);
        form.title = "Mug Mk2".to_string();
        h.controller.submit_edit(&form).await.unwrap();

        let products = h.store.products().read_untracked();
        assert_eq!(products[0].title, "Mug Mk2");
        assert_eq!(products[1].title, "Anvil");
        assert_eq!(h.gateway.calls(), vec!["update 1".to_string()]);
        assert_eq!(h.controller.modal().get_untracked(), ModalState::Closed);
    }

    #[tokio::test]
    async fn test_edit_failure_stays_open_and_resignals() {
        let h = harness();
        let product = make_product("1", "Mug");
        h.store.products().set(vec![product.clone()]);
        h.controller.open_edit(product.clone());
        *h.gateway.update_response.borrow_mut() =
            Some(Err(GatewayError::Remote("nope".to_string())));

        let form = ProductForm::from_product(&product);
        let result = h.controller.submit_edit(&form).await;

        assert_eq!(
            result,
            Err(SubmitError::Gateway(GatewayError::Remote(
                "nope".to_string()
            )))
        );
        assert_eq!(
            h.controller.modal().get_untracked(),
            ModalState::Editing(product)
        );
        assert_eq!(h.sink.notes()[0].severity, Severity::Error);
    }

    #[tokio::test]
    async fn test_delete_cancel_leaves_store_untouched() {
        let h = harness();
        let product = make_product("1", "Mug");
        h.store.products().set(vec![product.clone()]);
        h.controller.open_delete(product.clone());
        assert_eq!(
            h.controller.modal().get_untracked(),
            ModalState::ConfirmingDelete(product)
        );

        h.controller.close();

        assert_eq!(h.controller.modal().get_untracked(), ModalState::Closed);
        assert_eq!(h.store.products().read_untracked().len(), 1);
        assert!(h.gateway.calls().is_empty());
    }

    #[tokio::test]
    async fn test_delete_confirm_removes_by_id() {
        let h = harness();
        h.store
            .products()
            .set(vec![make_product("1", "Mug"), make_product("2", "Anvil")]);
        h.controller.open_delete(make_product("1", "Mug"));
        *h.gateway.delete_response.borrow_mut() = Some(Ok(()));

        h.controller.confirm_delete().await;

        let products = h.store.products().read_untracked();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, "2");
        assert_eq!(h.controller.modal().get_untracked(), ModalState::Closed);
        assert_eq!(h.sink.notes()[0].title, "Product deleted");
    }

    #[tokio::test]
    async fn test_delete_failure_still_closes() {
        let h = harness();
        h.store.products().set(vec![make_product("1", "Mug")]);
        h.controller.open_delete(make_product("1", "Mug"));
        *h.gateway.delete_response.borrow_mut() =
            Some(Err(GatewayError::Remote("locked".to_string())));

        h.controller.confirm_delete().await;

        assert_eq!(h.store.products().read_untracked().len(), 1);
        assert_eq!(h.controller.modal().get_untracked(), ModalState::Closed);
        assert_eq!(h.sink.notes()[0].severity, Severity::Error);
    }

    /// Gateway whose list calls suspend until the test releases them
    struct PendingGateway {
        receivers: RefCell<VecDeque<oneshot::Receiver<Result<Vec<Product>, GatewayError>>>>,
    }

    #[async_trait(?Send)]
    impl CatalogGateway for PendingGateway {
        async fn list(&self) -> Result<Vec<Product>, GatewayError> {
            let receiver = self
                .receivers
                .borrow_mut()
                .pop_front()
                .expect("scripted list call");
            receiver.await.expect("sender dropped")
        }

        async fn create(&self, _input: &ProductInput) -> Result<Product, GatewayError> {
            unscripted()
        }

        async fn update(&self, _id: &str, _input: &ProductInput) -> Result<Product, GatewayError> {
            unscripted()
        }

        async fn delete(&self, _id: &str) -> Result<(), GatewayError> {
            unscripted()
        }
    }

    #[tokio::test]
    async fn test_superseded_load_response_is_discarded() {
        let (first_tx, first_rx) = oneshot::channel();
        let (second_tx, second_rx) = oneshot::channel();
        let gateway = Rc::new(PendingGateway {
            receivers: RefCell::new(VecDeque::from([first_rx, second_rx])),
        });
        let store = Store::new(CatalogState::default());
        let sink = Rc::new(RecordingSink::default());
        let controller = CatalogController::new(
            store,
            gateway as Rc<dyn CatalogGateway>,
            sink as Rc<dyn NotificationSink>,
        );

        let local = tokio::task::LocalSet::new();
        local
            .run_until(async move {
                let first = tokio::task::spawn_local(async move { controller.load().await });
                // let the first load reach its gateway await
                tokio::task::yield_now().await;

                // second load completes first
                second_tx
                    .send(Ok(vec![make_product("2", "Fresh")]))
                    .unwrap();
                controller.load().await;

                // now the slow first response arrives
                first_tx.send(Ok(vec![make_product("1", "Stale")])).unwrap();
                first.await.unwrap();

                let products = store.products().read_untracked();
                assert_eq!(products.len(), 1);
                assert_eq!(products[0].title, "Fresh");
                assert!(!store.fetching().get_untracked());
            })
            .await;
    }
}
