//! Common test utilities and harness for oryza-app integration tests.

use std::collections::{BTreeSet, VecDeque};

use oryza_app::{
    App, AppOptions, ContactView, DetailView, Dialog, GalleryView, Notification, Notifier,
    OrdersView, Renderer,
};
use oryza_storage::{KeyValueStore, LocalStore, MemoryStore};

/// A front end that answers dialogs from a script and records everything
/// the controller asks it to show.
#[derive(Debug, Default)]
pub struct ScriptedUi {
    /// Answers for `confirm`, consumed in order; defaults to `true` when empty
    pub confirms: VecDeque<bool>,
    /// Answers for `prompt`, consumed in order; defaults to cancel when empty
    pub prompts: VecDeque<Option<String>>,
    /// Every confirmation message asked
    pub asked: Vec<String>,
    /// Every prompt message asked, with the offered current value
    pub prompted: Vec<(String, String)>,
    /// Notifications in order
    pub notifications: Vec<Notification>,
    /// Gallery renders in order
    pub galleries: Vec<GalleryView>,
    /// Detail renders in order
    pub details: Vec<DetailView>,
    /// Order-list renders in order
    pub order_lists: Vec<OrdersView>,
    /// Contact renders in order
    pub contacts: Vec<ContactView>,
}

impl ScriptedUi {
    /// Creates a UI that confirms everything and cancels every prompt.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues confirmation answers.
    pub fn with_confirms(mut self, answers: &[bool]) -> Self {
        self.confirms.extend(answers.iter().copied());
        self
    }

    /// Queues prompt answers.
    pub fn with_prompts(mut self, answers: &[Option<&str>]) -> Self {
        self.prompts
            .extend(answers.iter().map(|a| a.map(str::to_string)));
        self
    }

    /// Messages of all notifications so far.
    pub fn messages(&self) -> Vec<&str> {
        self.notifications
            .iter()
            .map(|n| n.message.as_str())
            .collect()
    }
}

impl Dialog for ScriptedUi {
    fn confirm(&mut self, message: &str) -> bool {
        self.asked.push(message.to_string());
        self.confirms.pop_front().unwrap_or(true)
    }

    fn prompt(&mut self, message: &str, current: &str) -> Option<String> {
        self.prompted
            .push((message.to_string(), current.to_string()));
        self.prompts.pop_front().flatten()
    }
}

impl Notifier for ScriptedUi {
    fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }
}

impl Renderer for ScriptedUi {
    fn render_gallery(&mut self, view: &GalleryView) {
        self.galleries.push(view.clone());
    }

    fn render_detail(&mut self, view: &DetailView) {
        self.details.push(view.clone());
    }

    fn render_orders(&mut self, view: &OrdersView) {
        self.order_lists.push(view.clone());
    }

    fn render_contact(&mut self, view: &ContactView) {
        self.contacts.push(view.clone());
    }
}

/// An app over a fresh in-memory store.
pub fn fresh_app(ui: ScriptedUi) -> App<MemoryStore, ScriptedUi> {
    App::load(LocalStore::new(MemoryStore::new()), ui, AppOptions::default())
        .expect("fresh app should load")
}

/// Simulates a page reload: keeps the store, starts a new app over it.
pub fn reload(app: App<MemoryStore, ScriptedUi>) -> App<MemoryStore, ScriptedUi> {
    let (store, _ui) = app.into_parts();
    App::load(store, ScriptedUi::new(), AppOptions::default()).expect("reload should succeed")
}

/// An in-memory store whose writes fail for chosen keys.
#[derive(Debug, Default)]
pub struct FailingStore {
    inner: MemoryStore,
    rejected: BTreeSet<String>,
}

impl FailingStore {
    /// A store that rejects writes to each of `keys`.
    pub fn rejecting(keys: &[&str]) -> Self {
        let mut store = Self::default();
        for key in keys {
            store.reject(key);
        }
        store
    }

    /// Starts rejecting writes to `key`.
    pub fn reject(&mut self, key: &str) {
        self.rejected.insert(key.to_string());
    }
}

impl KeyValueStore for FailingStore {
    fn get(&self, key: &str) -> oryza_storage::Result<Option<String>> {
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> oryza_storage::Result<()> {
        if self.rejected.contains(key) {
            return Err(oryza_storage::Error::write_rejected(key, "disk full"));
        }
        self.inner.set(key, value)
    }

    fn keys(&self) -> oryza_storage::Result<Vec<String>> {
        self.inner.keys()
    }
}

/// An app whose store rejects writes to `keys`.
pub fn failing_app(keys: &[&str], ui: ScriptedUi) -> App<FailingStore, ScriptedUi> {
    App::load(LocalStore::new(FailingStore::rejecting(keys)), ui, AppOptions::default())
        .expect("failing app should load")
}
