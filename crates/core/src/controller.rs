//! The load / mutate / persist / render cycle.
//!
//! [`ChecklistController`] owns the single [`ChecklistStore`] of a widget,
//! the storage location it is saved to, and the renderer that redraws it.
//! Every operation is synchronous and completes before returning.

use std::path::{Path, PathBuf};

use jot_config::Config;
use jot_protocol::{Action, ChecklistItem, ChecklistStore};
use tracing::{debug, info, instrument, warn};

use crate::document;
use crate::error::{ControllerError, Result};
use crate::render::{Renderer, RowView};
use crate::storage::Storage;

/// Where the controller stands with respect to its backing file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    /// Nothing has been read yet.
    #[default]
    NotLoaded,
    /// The last load parsed successfully.
    Loaded,
    /// The last load found a file that does not parse. Saving is refused
    /// until a later load succeeds.
    Unreadable,
}

/// Work the host has to carry out on behalf of the widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostRequest {
    /// Let the user edit the text of the item at `index`.
    Edit {
        /// Position of the item being edited.
        index: usize,
        /// Its current text.
        text: String,
    },
    /// Open the backing file with an external program.
    OpenExternal(PathBuf),
    /// Show the keybinding help.
    ShowHelp,
}

/// What handling an action led to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The list changed, was saved, and was redrawn.
    Persisted,
    /// Only the view was redrawn (cursor moves).
    Rendered,
    /// The host has to handle the request.
    Delegated(HostRequest),
    /// Nothing to do, e.g. editing with no item selected.
    Ignored,
}

/// Mediates between a storage location, the checklist, and its renderer.
///
/// # Examples
///
/// ```
/// use jot_core::{ChecklistController, MemoryStorage, NullRenderer, Outcome};
/// use jot_protocol::Action;
///
/// let storage = MemoryStorage::new()
///     .with_file("todo.json", r#"[{"text": "Buy milk", "done": false}]"#);
/// let mut controller =
///     ChecklistController::new("todo.json", storage, NullRenderer::default()).unwrap();
///
/// controller.load().unwrap();
/// controller.handle_action(Action::SelectNext).unwrap();
/// assert_eq!(
///     controller.handle_action(Action::ToggleDone).unwrap(),
///     Outcome::Persisted
/// );
/// assert!(controller.store().items()[0].done);
/// ```
#[derive(Debug)]
pub struct ChecklistController<S, R> {
    store: ChecklistStore,
    storage: S,
    renderer: R,
    location: PathBuf,
    state: LoadState,
    dirty: bool,
}

impl<S: Storage, R: Renderer> ChecklistController<S, R> {
    /// Creates a controller for `location`, creating an empty file there if
    /// none exists so that the first load never misses.
    ///
    /// The store starts empty; call [`load`](Self::load) to read the file.
    ///
    /// # Errors
    ///
    /// Returns [`ControllerError::StorageInit`] if the file cannot be
    /// created. The widget cannot work without it.
    pub fn new(location: impl Into<PathBuf>, mut storage: S, renderer: R) -> Result<Self> {
        let location = location.into();
        storage
            .ensure_exists(&location)
            .map_err(|source| ControllerError::StorageInit { source })?;
        info!(path = ?location, "todo widget initialized");

        Ok(Self {
            store: ChecklistStore::new(),
            storage,
            renderer,
            location,
            state: LoadState::NotLoaded,
            dirty: false,
        })
    }

    /// Creates a controller for the file named by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ControllerError::Config`] if the path cannot be resolved
    /// and [`ControllerError::StorageInit`] if the file cannot be created.
    pub fn from_config(config: &Config, storage: S, renderer: R) -> Result<Self> {
        Self::new(config.storage_path()?, storage, renderer)
    }

    /// Returns the checklist.
    #[must_use]
    pub fn store(&self) -> &ChecklistStore {
        &self.store
    }

    /// Returns the storage location.
    #[must_use]
    pub fn location(&self) -> &Path {
        &self.location
    }

    /// Returns the load state.
    #[must_use]
    pub fn load_state(&self) -> LoadState {
        self.state
    }

    /// Returns `true` once a load has parsed successfully.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.state == LoadState::Loaded
    }

    /// Returns `true` while the list holds changes the last save failed to
    /// write.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Returns the renderer.
    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Returns the storage.
    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Returns the storage mutably.
    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    /// Replaces the list with the contents of the backing file.
    ///
    /// A missing file leaves the list untouched and is not an error; if the
    /// previous load found the file unreadable, saving is allowed again. When
    /// the file is empty the list becomes empty with nothing selected;
    /// otherwise the cursor is kept, clamped to the new length.
    ///
    /// Unsaved changes are written first. The file is only read once they are
    /// on disk, so a failed save is never undone by a reload.
    ///
    /// # Errors
    ///
    /// - [`ControllerError::Write`] if unsaved changes still cannot be
    ///   written; the list is left untouched.
    /// - [`ControllerError::Read`] if the file exists but cannot be read; the
    ///   list is left untouched.
    /// - [`ControllerError::Deserialize`] if the file does not parse; the
    ///   list is cleared and saving is refused until a later load succeeds.
    #[instrument(skip(self), fields(path = ?self.location))]
    pub fn load(&mut self) -> Result<()> {
        if self.dirty {
            debug!("saving pending changes before reload");
            self.persist()?;
        }

        let bytes = match self.storage.read_all(&self.location) {
            Ok(bytes) => bytes,
            Err(err) if err.is_not_found() => {
                if self.state == LoadState::Unreadable {
                    info!("unreadable todo file is gone, saving allowed again");
                    self.state = LoadState::NotLoaded;
                } else {
                    debug!("todo file missing, keeping current list");
                }
                return Ok(());
            }
            Err(source) => {
                warn!(error = %source, "failed to read todo file");
                return Err(ControllerError::Read { source });
            }
        };

        match document::decode(&bytes) {
            Ok(items) => {
                debug!(items = items.len(), "loaded todo list");
                self.store.replace_items(items);
                self.state = LoadState::Loaded;
                Ok(())
            }
            Err(source) => {
                warn!(error = %source, "todo file is unreadable");
                self.store.replace_items(Vec::new());
                self.state = LoadState::Unreadable;
                Err(ControllerError::Deserialize {
                    path: self.location.clone(),
                    source,
                })
            }
        }
    }

    /// Writes the items (never the cursor) to the backing file.
    ///
    /// # Errors
    ///
    /// - [`ControllerError::PersistBlocked`] after a load found an
    ///   unreadable file.
    /// - [`ControllerError::Write`] if the write fails. The in-memory list is
    ///   kept and marked dirty; the next persist or load retries the write.
    #[instrument(skip(self), fields(path = ?self.location, items = self.store.len()))]
    pub fn persist(&mut self) -> Result<()> {
        if self.state == LoadState::Unreadable {
            warn!("refusing to overwrite unreadable todo file");
            return Err(ControllerError::PersistBlocked {
                path: self.location.clone(),
            });
        }

        let bytes = document::encode(self.store.items()).map_err(ControllerError::Serialize)?;
        self.storage
            .write_all(&self.location, &bytes)
            .map_err(|source| {
                warn!(error = %source, "failed to save todo file");
                self.dirty = true;
                ControllerError::Write { source }
            })?;
        self.dirty = false;
        debug!("todo list saved");
        Ok(())
    }

    /// Redraws the list through the renderer.
    pub fn render(&mut self) {
        let rows = RowView::collect(&self.store);
        self.renderer.render(&rows);
    }

    /// Reloads from the backing file and redraws, even if loading failed.
    ///
    /// # Errors
    ///
    /// Returns the error from [`load`](Self::load).
    pub fn refresh(&mut self) -> Result<()> {
        let loaded = self.load();
        self.render();
        loaded
    }

    /// Applies a user action.
    ///
    /// Cursor moves are redrawn but never saved. List mutations are saved and
    /// then redrawn, whether or not they changed anything. Edit, open and help
    /// requests are handed back to the host.
    ///
    /// # Errors
    ///
    /// Returns the error from [`persist`](Self::persist). The view is redrawn
    /// before the error is returned.
    pub fn handle_action(&mut self, action: Action) -> Result<Outcome> {
        debug!(?action, "handling action");
        if action.is_delegated() {
            return Ok(self.delegate(action));
        }

        let changed = match action {
            Action::SelectNext => {
                self.store.next();
                false
            }
            Action::SelectPrev => {
                self.store.prev();
                false
            }
            Action::Unselect => {
                self.store.unselect();
                false
            }
            Action::ToggleDone => self.store.toggle(),
            Action::Promote => self.store.promote(),
            Action::Demote => self.store.demote(),
            Action::Delete => self.store.delete(),
            Action::Edit | Action::OpenExternal | Action::ShowHelp => false,
        };
        if !action.is_mutating() {
            self.render();
            return Ok(Outcome::Rendered);
        }
        if !changed {
            debug!(?action, "action left the list unchanged");
        }
        self.finish()
    }

    fn delegate(&self, action: Action) -> Outcome {
        match action {
            Action::Edit => match (self.store.selected(), self.store.selected_item()) {
                (Some(index), Some(item)) => Outcome::Delegated(HostRequest::Edit {
                    index,
                    text: item.text.clone(),
                }),
                _ => Outcome::Ignored,
            },
            Action::OpenExternal => {
                Outcome::Delegated(HostRequest::OpenExternal(self.location.clone()))
            }
            Action::ShowHelp => Outcome::Delegated(HostRequest::ShowHelp),
            _ => Outcome::Ignored,
        }
    }

    /// Replaces the text of the selected item, completing an edit.
    ///
    /// # Errors
    ///
    /// Returns the error from [`persist`](Self::persist).
    pub fn rename_selected(&mut self, text: impl Into<String>) -> Result<Outcome> {
        self.store.set_text(text);
        self.finish()
    }

    /// Adds a new unchecked item below the cursor and selects it.
    ///
    /// # Errors
    ///
    /// Returns the error from [`persist`](Self::persist).
    pub fn add_item(&mut self, text: impl Into<String>) -> Result<Outcome> {
        self.store.insert(ChecklistItem::new(text));
        self.finish()
    }

    fn finish(&mut self) -> Result<Outcome> {
        let persisted = self.persist();
        self.render();
        persisted.map(|()| Outcome::Persisted)
    }
}
