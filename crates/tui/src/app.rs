//! Main application struct and run loop.
//!
//! This module provides the `App` struct which hosts a checklist controller,
//! turns key presses into actions, carries out the requests the controller
//! delegates (editing, opening the file, help), and draws the panel.

use std::io;
use std::path::Path;
use std::time::{Duration, Instant};

use chrono::{DateTime, Local};
use jot_config::Config;
use jot_core::{ChecklistController, ControllerError, FileStorage, HostRequest, Outcome, Storage};
use jot_protocol::Action;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{ListState, Paragraph, Wrap},
};
use tracing::{debug, error, info, warn};

use crate::{
    editor::{EditTarget, EditorState},
    event::{event_to_message, poll_event},
    layout::{MIN_HEIGHT, MIN_WIDTH, STATUS_BAR_HEIGHT},
    message::Message,
    notice::Notice,
    terminal::AppTerminal,
    view::PanelView,
    widgets::{
        render_checklist, render_disabled_panel, render_editor, render_help_overlay,
        render_status_bar,
    },
};

/// Opens a file with an external program.
pub type Opener = fn(&Path) -> io::Result<()>;

/// Opens `path` with the desktop's default handler without waiting for it.
fn open_with_system(path: &Path) -> io::Result<()> {
    open::that_detached(path)
}

/// The checklist panel, or the reason it cannot be shown.
#[derive(Debug)]
pub enum Panel<S> {
    /// The panel is live.
    Active(ChecklistController<S, PanelView>),
    /// The panel is turned off or failed to start.
    Disabled {
        /// Why the panel is unavailable.
        reason: String,
    },
}

/// The main application struct.
///
/// Manages the panel state and provides the main event loop.
#[derive(Debug)]
pub struct App<S = FileStorage> {
    panel: Panel<S>,
    title: String,
    /// Period of the automatic reload, if enabled.
    refresh_every: Option<Duration>,
    last_refresh: Instant,
    /// Wall-clock time of the last reload, shown in the status bar.
    reloaded_at: Option<DateTime<Local>>,
    help_visible: bool,
    editor: Option<EditorState>,
    notice: Option<Notice>,
    /// Scroll offset of the item list, kept between frames.
    list_state: ListState,
    opener: Opener,
    should_quit: bool,
}

impl<S: Storage> App<S> {
    /// Creates the application for `config`, backed by `storage`, and loads
    /// the todo file.
    ///
    /// The panel is disabled, not failed, when the configuration turns it off
    /// or the todo file cannot be created; the reason is shown in its place.
    ///
    /// # Examples
    ///
    /// ```
    /// use jot_config::Config;
    /// use jot_core::MemoryStorage;
    /// use jot_tui::App;
    ///
    /// let config = Config::with_filename("/lists/todo.json");
    /// let app = App::new(&config, MemoryStorage::new());
    /// assert!(app.controller().is_some());
    /// ```
    #[must_use]
    pub fn new(config: &Config, storage: S) -> Self {
        let panel = if config.enabled {
            match ChecklistController::from_config(config, storage, PanelView::default()) {
                Ok(controller) => Panel::Active(controller),
                Err(err) => {
                    error!(error = %err, "todo panel disabled");
                    Panel::Disabled {
                        reason: err.to_string(),
                    }
                }
            }
        } else {
            info!("todo panel disabled in configuration");
            Panel::Disabled {
                reason: "disabled in configuration".to_string(),
            }
        };

        let mut app = Self {
            panel,
            title: config.title.clone(),
            refresh_every: config.refresh.interval(),
            last_refresh: Instant::now(),
            reloaded_at: None,
            help_visible: false,
            editor: None,
            notice: None,
            list_state: ListState::default(),
            opener: open_with_system,
            should_quit: false,
        };
        app.refresh();
        app
    }

    /// Replaces the program used to open the todo file.
    #[must_use]
    pub fn with_opener(mut self, opener: Opener) -> Self {
        self.opener = opener;
        self
    }

    /// Returns the panel.
    #[must_use]
    pub fn panel(&self) -> &Panel<S> {
        &self.panel
    }

    /// Returns the controller if the panel is live.
    #[must_use]
    pub fn controller(&self) -> Option<&ChecklistController<S, PanelView>> {
        match &self.panel {
            Panel::Active(controller) => Some(controller),
            Panel::Disabled { .. } => None,
        }
    }

    /// Returns the open editor, if any.
    #[must_use]
    pub fn editor(&self) -> Option<&EditorState> {
        self.editor.as_ref()
    }

    /// Returns the notice shown in the status bar.
    #[must_use]
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Returns whether the help overlay is shown.
    #[must_use]
    pub fn is_help_visible(&self) -> bool {
        self.help_visible
    }

    /// Returns when the todo file was last reloaded.
    #[must_use]
    pub fn reloaded_at(&self) -> Option<DateTime<Local>> {
        self.reloaded_at
    }

    /// Returns whether the application should exit.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Updates the application state based on a message.
    ///
    /// While the help overlay is shown any message other than `Quit` only
    /// dismisses it. While the editor is open only editor messages and `Quit`
    /// are handled.
    pub fn update(&mut self, msg: Message) {
        if msg == Message::Quit {
            self.should_quit = true;
            return;
        }

        if self.help_visible {
            self.help_visible = false;
            return;
        }

        if let Some(editor) = &mut self.editor {
            match msg {
                Message::EditorInput { ch } => editor.input_char(ch),
                Message::EditorBackspace => editor.backspace(),
                Message::EditorLeft => editor.move_left(),
                Message::EditorRight => editor.move_right(),
                Message::EditorConfirm => self.commit_edit(),
                Message::EditorCancel => self.editor = None,
                _ => {}
            }
            return;
        }

        match msg {
            Message::Action(action) => self.apply(action),
            Message::NewItem => {
                if matches!(self.panel, Panel::Active(_)) {
                    self.editor = Some(EditorState::new_item());
                }
            }
            Message::Refresh => self.refresh(),
            _ => {}
        }
    }

    /// Reloads the todo file and redraws the panel.
    ///
    /// Failures are shown as a notice; a successful reload clears it.
    pub fn refresh(&mut self) {
        self.last_refresh = Instant::now();
        let Panel::Active(controller) = &mut self.panel else {
            return;
        };

        let result = controller.refresh();
        self.reloaded_at = Some(Local::now());
        match result {
            Ok(()) => self.notice = None,
            Err(err) => self.report(&err),
        }
    }

    /// Reloads the todo file if the refresh period has elapsed.
    ///
    /// Never reloads under an open editor, where it would pull the item
    /// being edited away.
    pub fn tick(&mut self, now: Instant) {
        let Some(every) = self.refresh_every else {
            return;
        };
        if self.editor.is_none() && now.saturating_duration_since(self.last_refresh) >= every {
            debug!("periodic reload");
            self.refresh();
        }
    }

    fn apply(&mut self, action: Action) {
        let Panel::Active(controller) = &mut self.panel else {
            if action == Action::ShowHelp {
                self.help_visible = true;
            }
            return;
        };

        match controller.handle_action(action) {
            Ok(Outcome::Delegated(request)) => self.fulfil(request),
            Ok(Outcome::Persisted) => self.notice = None,
            Ok(Outcome::Rendered | Outcome::Ignored) => {}
            Err(err) => self.report(&err),
        }
    }

    fn fulfil(&mut self, request: HostRequest) {
        match request {
            HostRequest::Edit { index, text } => {
                self.editor = Some(EditorState::rename(index, text));
            }
            HostRequest::OpenExternal(path) => match (self.opener)(&path) {
                Ok(()) => {
                    info!(?path, "opened todo file externally");
                    self.notice = Some(Notice::info(format!("opened {}", path.display())));
                }
                Err(err) => {
                    warn!(?path, error = %err, "failed to open todo file");
                    self.notice = Some(Notice::error(format!(
                        "could not open {}: {err}",
                        path.display()
                    )));
                }
            },
            HostRequest::ShowHelp => self.help_visible = true,
        }
    }

    fn commit_edit(&mut self) {
        let Some(editor) = self.editor.take() else {
            return;
        };
        let Panel::Active(controller) = &mut self.panel else {
            return;
        };

        let (target, text) = editor.finish();
        let text = text.trim();
        if text.is_empty() {
            debug!("ignoring empty item text");
            return;
        }

        let result = match target {
            EditTarget::Rename { index } => {
                // A reload may have moved the cursor while the editor was open
                if controller.store().selected() != Some(index) {
                    warn!(index, "edited item is no longer selected");
                    return;
                }
                controller.rename_selected(text)
            }
            EditTarget::New => controller.add_item(text),
        };

        match result {
            Ok(Outcome::Persisted) => self.notice = None,
            Ok(_) => {}
            Err(err) => self.report(&err),
        }
    }

    fn report(&mut self, err: &ControllerError) {
        warn!(error = %err, "todo panel error");
        self.notice = Some(Notice::from(err));
    }

    /// Renders the application UI to the given frame.
    ///
    /// If the terminal is below the minimum dimensions, shows a
    /// "terminal too small" message instead.
    pub fn view(&mut self, frame: &mut Frame) {
        let area = frame.area();

        if area.height < MIN_HEIGHT || area.width < MIN_WIDTH {
            Self::render_terminal_too_small(frame, area);
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),                    // Panel
                Constraint::Length(STATUS_BAR_HEIGHT), // Status bar
            ])
            .split(area);

        let buf = frame.buffer_mut();
        match &self.panel {
            Panel::Active(controller) => render_checklist(
                controller.renderer(),
                &self.title,
                &mut self.list_state,
                chunks[0],
                buf,
            ),
            Panel::Disabled { reason } => {
                render_disabled_panel(&self.title, reason, chunks[0], buf);
            }
        }
        render_status_bar(self.notice.as_ref(), self.reloaded_at, chunks[1], buf);

        let cursor = self
            .editor
            .as_ref()
            .and_then(|editor| render_editor(editor, area, buf));
        if self.help_visible {
            render_help_overlay(area, buf);
        }
        if let Some(position) = cursor {
            frame.set_cursor_position(position);
        }
    }

    /// Renders a message indicating the terminal is too small.
    fn render_terminal_too_small(frame: &mut Frame, area: Rect) {
        let message = format!(
            "Terminal too small ({}×{})\nMinimum: {}×{} (w×h)",
            area.width, area.height, MIN_WIDTH, MIN_HEIGHT
        );

        let paragraph = Paragraph::new(message)
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false });

        frame.render_widget(paragraph, area);
    }

    /// Runs the main application loop.
    ///
    /// Blocks until the user quits. Each iteration draws a frame, waits up to
    /// 100ms for a key, applies it, and runs the periodic reload.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal operations fail.
    pub fn run(&mut self, terminal: &mut AppTerminal) -> anyhow::Result<()> {
        loop {
            terminal.draw(|frame| self.view(frame))?;

            if let Some(event) = poll_event()? {
                if let Some(msg) = event_to_message(&event, self.editor.is_some()) {
                    self.update(msg);
                }
            }

            self.tick(Instant::now());

            if self.should_quit {
                info!("quitting");
                return Ok(());
            }
        }
    }
}
