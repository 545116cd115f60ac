//! The interaction controller.
//!
//! [`App`] owns all application state: the store, both repositories, the
//! contact settings, the current selection and the visible screen. Each
//! user action is one method call that mutates state, persists it, asks the
//! [`Ui`] to redraw the affected views, and posts a notification.

use oryza_core::{ContactInfo, EntityId, Order, OrderDraft, OrderForm, Variant, VariantDraft};
use oryza_storage::{KeyValueStore, LocalStore};

use crate::contact::ContactSettings;
use crate::options::AppOptions;
use crate::repository::{DeleteOutcome, Repository};
use crate::screen::Screen;
use crate::ui::{Notification, Ui};
use crate::views::{Action, ContactView, DetailView, GalleryView, OrdersView};
use crate::{Error, Result};

/// Confirmation shown before deleting a variant.
pub const CONFIRM_DELETE_VARIANT: &str = "Delete this variant?";
/// Confirmation shown before deleting an order.
pub const CONFIRM_DELETE_ORDER: &str = "Delete this order?";
/// Prompt for a new phone number.
pub const PROMPT_PHONE: &str = "New Phone:";
/// Prompt for a new address.
pub const PROMPT_ADDRESS: &str = "New Address:";

/// Application state plus the front end it talks to.
pub struct App<S, U> {
    store: LocalStore<S>,
    ui: U,
    options: AppOptions,
    variants: Repository<Variant>,
    orders: Repository<Order>,
    contact: ContactSettings,
    selection: Option<Variant>,
    screen: Screen,
}

impl<S, U> App<S, U>
where
    S: KeyValueStore,
    U: Ui,
{
    /// Loads every collection and setting from `store`.
    ///
    /// Nothing is rendered yet; call [`start`](Self::start) for the initial
    /// draw.
    pub fn load(store: LocalStore<S>, ui: U, options: AppOptions) -> Result<Self> {
        options.validate()?;
        let variants = Repository::load(&store)?;
        let orders = Repository::load(&store)?;
        let contact = ContactSettings::load(&store, options.default_contact.clone())?;

        tracing::info!(
            variants = variants.len(),
            orders = orders.len(),
            "Catalogue loaded"
        );

        Ok(Self {
            store,
            ui,
            options,
            variants,
            orders,
            contact,
            selection: None,
            screen: Screen::Gallery,
        })
    }

    /// Draws the gallery, order list and contact panel.
    pub fn start(&mut self) {
        self.render_gallery();
        self.render_orders();
        self.render_contact();
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    /// Variants, newest first.
    pub fn variants(&self) -> &[Variant] {
        self.variants.list()
    }

    /// Orders, newest first.
    pub fn orders(&self) -> &[Order] {
        self.orders.list()
    }

    /// Current contact details.
    pub fn contact(&self) -> &ContactInfo {
        self.contact.info()
    }

    /// The variant last opened in the detail panel.
    pub fn selection(&self) -> Option<&Variant> {
        self.selection.as_ref()
    }

    /// The visible screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// The options this app was loaded with.
    pub fn options(&self) -> &AppOptions {
        &self.options
    }

    /// Borrows the front end.
    pub fn ui(&self) -> &U {
        &self.ui
    }

    /// Mutably borrows the front end.
    pub fn ui_mut(&mut self) -> &mut U {
        &mut self.ui
    }

    /// Borrows the store.
    pub fn store(&self) -> &LocalStore<S> {
        &self.store
    }

    /// Tears the app down, returning the store and front end.
    pub fn into_parts(self) -> (LocalStore<S>, U) {
        (self.store, self.ui)
    }

    // ------------------------------------------------------------------------
    // Views
    // ------------------------------------------------------------------------

    /// Gallery projection of the current variants.
    pub fn gallery_view(&self) -> GalleryView {
        GalleryView::build(self.variants.list())
    }

    /// Order list projection.
    pub fn orders_view(&self) -> OrdersView {
        OrdersView::build(self.orders.list())
    }

    /// Detail projection of the current selection.
    pub fn detail_view(&self) -> Option<DetailView> {
        self.selection.as_ref().map(DetailView::build)
    }

    /// Contact panel projection.
    pub fn contact_view(&self) -> ContactView {
        ContactView::build(self.contact.info())
    }

    fn render_gallery(&mut self) {
        let view = self.gallery_view();
        self.ui.render_gallery(&view);
    }

    fn render_orders(&mut self) {
        let view = self.orders_view();
        self.ui.render_orders(&view);
    }

    fn render_contact(&mut self) {
        let view = self.contact_view();
        self.ui.render_contact(&view);
    }

    // ------------------------------------------------------------------------
    // Panels
    // ------------------------------------------------------------------------

    /// Opens the detail panel for `id` and makes it the current selection.
    ///
    /// Unknown ids are ignored: nothing opens and the previous selection and
    /// screen are kept.
    pub fn open_view_modal(&mut self, id: EntityId) -> Option<&Variant> {
        let Some(variant) = self.variants.get(id).cloned() else {
            tracing::debug!(id = %id, "View requested for unknown variant");
            return None;
        };

        self.ui.render_detail(&DetailView::build(&variant));
        self.screen = Screen::Detail(id);
        self.selection = Some(variant);
        self.selection.as_ref()
    }

    /// Opens the add-variant form.
    pub fn open_add_form(&mut self) {
        self.screen = Screen::AddVariant;
    }

    /// Opens the contact panel.
    pub fn open_contact(&mut self) {
        self.screen = Screen::Contact;
    }

    /// Opens the order form for the current selection.
    pub fn open_order_form(&mut self) -> Result<()> {
        let id = self.selection.as_ref().ok_or(Error::NoSelection)?.id;
        self.screen = Screen::Ordering(id);
        Ok(())
    }

    /// Closes whatever panel is open. The selection is kept.
    pub fn close_all_modals(&mut self) {
        self.screen = Screen::Gallery;
    }

    // ------------------------------------------------------------------------
    // Variants
    // ------------------------------------------------------------------------

    /// Adds a variant to the top of the catalogue.
    pub fn add_variant(&mut self, draft: VariantDraft) -> Result<Variant> {
        match self.variants.create(draft, &mut self.store) {
            Ok(variant) => {
                self.render_gallery();
                self.close_all_modals();
                self.ui.notify(Notification::success("Added Successfully"));
                Ok(variant)
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to save variant");
                self.ui.notify(Notification::failure("Could not save variant"));
                Err(e)
            }
        }
    }

    /// Deletes a variant after confirmation. Orders are never affected.
    pub fn delete_variant(&mut self, id: EntityId) -> Result<DeleteOutcome> {
        let ui = &mut self.ui;
        let outcome = self
            .variants
            .delete(id, &mut self.store, || ui.confirm(CONFIRM_DELETE_VARIANT));

        match outcome {
            Ok(outcome @ DeleteOutcome::Deleted { .. }) => {
                self.render_gallery();
                self.ui.notify(Notification::success("Deleted"));
                Ok(outcome)
            }
            Ok(outcome) => Ok(outcome),
            Err(e) => {
                tracing::error!(id = %id, error = %e, "Failed to delete variant");
                self.ui.notify(Notification::failure("Could not delete variant"));
                Err(e)
            }
        }
    }

    // ------------------------------------------------------------------------
    // Orders
    // ------------------------------------------------------------------------

    /// Places an order for the current selection and returns to the gallery.
    pub fn place_order(&mut self, form: OrderForm) -> Result<Order> {
        let item = self.selection.as_ref().ok_or(Error::NoSelection)?.name.clone();
        let draft = OrderDraft {
            item,
            form,
            date: self.options.format_today(),
        };

        match self.orders.create(draft, &mut self.store) {
            Ok(order) => {
                self.render_orders();
                self.close_all_modals();
                self.ui.notify(Notification::success("Order Placed"));
                Ok(order)
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to save order");
                self.ui.notify(Notification::failure("Could not place order"));
                Err(e)
            }
        }
    }

    /// Deletes an order after confirmation.
    pub fn delete_order(&mut self, id: EntityId) -> Result<DeleteOutcome> {
        let ui = &mut self.ui;
        let outcome = self
            .orders
            .delete(id, &mut self.store, || ui.confirm(CONFIRM_DELETE_ORDER));

        match outcome {
            Ok(outcome @ DeleteOutcome::Deleted { .. }) => {
                self.render_orders();
                self.ui.notify(Notification::success("Order Deleted"));
                Ok(outcome)
            }
            Ok(outcome) => Ok(outcome),
            Err(e) => {
                tracing::error!(id = %id, error = %e, "Failed to delete order");
                self.ui.notify(Notification::failure("Could not delete order"));
                Err(e)
            }
        }
    }

    // ------------------------------------------------------------------------
    // Contact
    // ------------------------------------------------------------------------

    /// Prompts for a new phone and address, keeping any left blank.
    pub fn edit_contact(&mut self) -> Result<ContactInfo> {
        let current = self.contact.info().clone();
        let phone = self.ui.prompt(PROMPT_PHONE, &current.phone);
        let address = self.ui.prompt(PROMPT_ADDRESS, &current.address);
        self.update_contact(phone.as_deref(), address.as_deref())
    }

    /// Applies non-empty values directly, without prompting.
    pub fn update_contact(
        &mut self,
        phone: Option<&str>,
        address: Option<&str>,
    ) -> Result<ContactInfo> {
        let change = self.contact.update(&mut self.store, phone, address);
        if let Err(e) = &change {
            tracing::error!(error = %e, "Failed to save contact details");
            self.ui
                .notify(Notification::failure("Could not save contact details"));
        }
        // A failed address write can follow a successful phone write, so
        // redraw whatever landed before reporting.
        self.render_contact();
        change?;
        Ok(self.contact.info().clone())
    }

    /// Accepts a message from the contact form. Nothing is stored.
    pub fn send_message(&mut self, message: &str) {
        tracing::info!(length = message.len(), "Contact message received");
        self.close_all_modals();
        self.ui.notify(Notification::success("Message Sent"));
    }

    // ------------------------------------------------------------------------
    // Dispatch
    // ------------------------------------------------------------------------

    /// Runs the handler bound to a rendered affordance.
    pub fn dispatch(&mut self, action: Action) -> Result<()> {
        match action {
            Action::ViewVariant(id) => {
                self.open_view_modal(id);
            }
            Action::DeleteVariant(id) => {
                self.delete_variant(id)?;
            }
            Action::DeleteOrder(id) => {
                self.delete_order(id)?;
            }
        }
        Ok(())
    }
}
