//! The page controller.
//!
//! [`PageController`] owns the session-wide UI state, the virtual-time
//! scheduler and the notification bookkeeping. The host feeds it
//! [`PageEvent`]s and advances time; every visual effect goes through the
//! [`ElementRegistry`].
//!
//! Handlers are grouped by concern in the submodules. Each one only runs if
//! its wiring step succeeded during [`PageController::initialize`].

mod ancillary;
mod contact;
mod download;
mod menu;
mod navigation;
mod notifications;
mod theme;

use std::collections::BTreeSet;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, error, info};

use crate::config::TimingConfig;
use crate::constants::{APP_NAME, MSG_INIT_DEGRADED};
use crate::dom::{ElementId, ElementRegistry};
use crate::events::PageEvent;
use crate::notify::{NotificationCenter, NotificationId, Severity};
use crate::scheduler::{Scheduler, TimerHandle};
use crate::storage::PreferenceStore;
use crate::theme::{ColorSchemeSource, Theme};
use crate::throttle::Debounce;

/// Session-wide UI state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PageState {
    /// Applied theme
    pub theme: Theme,
    /// Whether the mobile menu is open
    pub menu_open: bool,
    /// Index of the active nav link
    pub active_link: Option<usize>,
    /// Whether the navbar carries the `scrolled` class
    pub navbar_scrolled: bool,
    /// Whether the loading overlay is shown
    pub loading_visible: bool,
    /// Setup failure, if initialization stopped early
    pub init_error: Option<String>,
}

/// Handlers attached during initialization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Wiring {
    /// Theme toggle click
    pub theme_toggle: bool,
    /// Hamburger click
    pub mobile_menu: bool,
    /// Nav link clicks
    pub smooth_scrolling: bool,
    /// Contact form submit
    pub contact_form: bool,
    /// CV button click
    pub download_cv: bool,
    /// Entrance animation observer
    pub intersection: bool,
    /// Document keydown
    pub keyboard: bool,
    /// Skill tag hover
    pub skill_tags: bool,
    /// Print hooks
    pub print: bool,
    /// Debounced resize
    pub resize: bool,
    /// Throttled scroll
    pub scroll: bool,
}

/// Deferred controller work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    /// Show a freshly inserted notification
    RevealNotification(NotificationId),
    /// Dismiss a notification whose lifetime ran out
    AutoHideNotification(NotificationId),
    /// Detach a hidden notification
    RemoveNotification(NotificationId),
    /// End of the simulated contact submission
    CompleteContactSubmit,
    /// End of the simulated CV preparation
    CompleteCvDownload,
    /// Trailing edge of a scroll burst
    ScrollSettled,
    /// Trailing edge of a resize burst
    ResizeSettled,
    /// Hide the overlay the page was served with
    HideInitialLoading,
    /// Warn the user that initialization stopped early
    InitFailureNotice,
}

/// Drives one page session.
#[derive(Debug)]
pub struct PageController<R, S> {
    registry: R,
    store: S,
    timing: TimingConfig,
    scheduler: Scheduler<Task>,
    notifications: NotificationCenter,
    state: PageState,
    wiring: Wiring,
    observed: BTreeSet<usize>,
    scroll_throttle: Debounce,
    resize_debounce: Debounce,
}

impl<R: ElementRegistry, S: PreferenceStore> PageController<R, S> {
    /// Creates a controller over an already rendered page.
    ///
    /// Nothing is wired until [`initialize`](Self::initialize) runs.
    pub fn new(registry: R, store: S, timing: TimingConfig) -> Self {
        Self {
            scroll_throttle: Debounce::new(timing.scroll_throttle()),
            resize_debounce: Debounce::new(timing.resize_debounce()),
            registry,
            store,
            timing,
            scheduler: Scheduler::new(),
            notifications: NotificationCenter::new(),
            state: PageState::default(),
            wiring: Wiring::default(),
            observed: BTreeSet::new(),
        }
    }

    /// The page.
    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// The page, mutably (hosts apply scroll/resize/input here).
    pub fn registry_mut(&mut self) -> &mut R {
        &mut self.registry
    }

    /// The preference store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Current UI state.
    pub fn state(&self) -> &PageState {
        &self.state
    }

    /// Handlers attached so far.
    pub fn wiring(&self) -> Wiring {
        self.wiring
    }

    /// Offsets and delays in use.
    pub fn timing(&self) -> &TimingConfig {
        &self.timing
    }

    /// Live notifications.
    pub fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    /// Current virtual time.
    pub fn now(&self) -> Duration {
        self.scheduler.now()
    }

    /// Number of scheduled tasks not yet run.
    pub fn pending_tasks(&self) -> usize {
        self.scheduler.pending()
    }

    /// Consumes the controller, returning the page and the store.
    pub fn into_parts(self) -> (R, S) {
        (self.registry, self.store)
    }

    /// Wires every handler and runs the initial passes.
    ///
    /// A failing step stops the wiring; handlers attached before it keep
    /// working. The failure is logged and a warning notification is
    /// scheduled. Returns false in that case.
    pub fn initialize(&mut self, scheme: &dyn ColorSchemeSource) -> bool {
        match self.wire_page(scheme) {
            Ok(()) => {
                info!("{} page initialized", APP_NAME);
                true
            }
            Err(err) => {
                error!("Error initializing page: {err:#}");
                self.state.init_error = Some(format!("{err:#}"));
                self.scheduler
                    .schedule(self.timing.init_failure_notice(), Task::InitFailureNotice);
                false
            }
        }
    }

    fn wire_page(&mut self, scheme: &dyn ColorSchemeSource) -> Result<()> {
        self.add_notification_styles();
        // Theme is wired ahead of every fallible step so it survives a partial init
        self.initialize_theme(scheme);
        self.wiring.theme_toggle = true;

        self.setup_mobile_menu()
            .context("Failed to wire mobile menu")?;
        self.setup_smooth_scrolling()
            .context("Failed to wire navigation links")?;
        self.setup_contact_form()
            .context("Failed to wire contact form")?;
        self.setup_download_cv()
            .context("Failed to wire CV download")?;

        self.setup_intersection_observer();
        self.setup_keyboard_navigation();
        self.setup_skill_tags();
        self.setup_print_handling();
        self.setup_resize_handler();
        self.wiring.scroll = true;

        self.handle_navbar_scroll();
        self.highlight_active_section();

        self.scheduler
            .schedule(self.timing.initial_overlay_hide(), Task::HideInitialLoading);

        Ok(())
    }

    /// Dispatches one host event.
    ///
    /// Handler errors are logged as uncaught errors; they never propagate.
    pub fn handle_event(&mut self, event: &PageEvent) {
        if let Err(err) = self.dispatch(event) {
            error!("Application error during {}: {err:#}", event.name());
        }
    }

    fn dispatch(&mut self, event: &PageEvent) -> Result<()> {
        match event {
            PageEvent::Click { target } => self.handle_click(*target)?,
            PageEvent::Scroll { .. } => {
                if self.wiring.scroll {
                    self.scroll_throttle
                        .trigger(&mut self.scheduler, Task::ScrollSettled);
                }
            }
            PageEvent::Resize { .. } => {
                if self.wiring.resize {
                    self.resize_debounce
                        .trigger(&mut self.scheduler, Task::ResizeSettled);
                }
            }
            PageEvent::Input { .. } => {}
            PageEvent::Submit => {
                if self.wiring.contact_form {
                    if let Err(reason) = self.handle_contact_submit() {
                        debug!("Contact submission rejected: {reason}");
                    }
                }
            }
            PageEvent::KeyDown { key, focused } => {
                if self.wiring.keyboard {
                    self.handle_key_down(key, *focused)?;
                }
            }
            PageEvent::PointerEnter { target } => self.handle_pointer(*target, true),
            PageEvent::PointerLeave { target } => self.handle_pointer(*target, false),
            PageEvent::BeforePrint => self.handle_print(true),
            PageEvent::AfterPrint => self.handle_print(false),
            PageEvent::Intersection { target, ratio } => self.handle_intersection(*target, *ratio),
            PageEvent::Error { message } => error!("Application error: {message}"),
            PageEvent::UnhandledRejection { reason } => {
                error!("Unhandled promise rejection: {reason}");
            }
        }
        Ok(())
    }

    fn handle_click(&mut self, target: ElementId) -> Result<()> {
        // Disabled controls swallow activation
        if self.registry.is_disabled(target) {
            debug!("Ignoring click on disabled {target:?}");
            return Ok(());
        }
        match target {
            ElementId::ThemeToggle if self.wiring.theme_toggle => {
                self.toggle_theme()?;
            }
            ElementId::MobileMenuToggle if self.wiring.mobile_menu => self.toggle_mobile_menu(),
            ElementId::NavLink(index) if self.wiring.smooth_scrolling => {
                self.handle_nav_click(index);
            }
            ElementId::ContactSubmit if self.wiring.contact_form => {
                if let Err(reason) = self.handle_contact_submit() {
                    debug!("Contact submission rejected: {reason}");
                }
            }
            ElementId::DownloadCv if self.wiring.download_cv => self.handle_download_cv(),
            ElementId::NotificationClose(id) => self.hide_notification(id),
            other => debug!("No click handler for {other:?}"),
        }
        Ok(())
    }

    /// Advances virtual time by `dt`, running every task that falls due.
    ///
    /// Tasks scheduled while the window is processed run too if they fall
    /// due before its end.
    pub fn advance(&mut self, dt: Duration) {
        let until = self.scheduler.now().saturating_add(dt);
        while let Some((handle, task)) = self.scheduler.pop_due(until) {
            self.run_task(handle, task);
        }
        self.scheduler.settle(until);
    }

    /// Runs every pending task, however far in the future.
    pub fn run_until_idle(&mut self) {
        while let Some(due) = self.scheduler.next_due() {
            let dt = due.saturating_sub(self.scheduler.now());
            self.advance(dt);
        }
    }

    fn run_task(&mut self, handle: TimerHandle, task: Task) {
        match task {
            Task::RevealNotification(id) => self.reveal_notification(id),
            Task::AutoHideNotification(id) => self.hide_notification(id),
            Task::RemoveNotification(id) => self.remove_notification(id),
            Task::CompleteContactSubmit => self.complete_contact_submit(),
            Task::CompleteCvDownload => self.complete_cv_download(),
            Task::ScrollSettled => {
                if self.scroll_throttle.complete(handle) {
                    self.handle_navbar_scroll();
                    self.highlight_active_section();
                }
            }
            Task::ResizeSettled => {
                if self.resize_debounce.complete(handle) {
                    self.handle_resize_settled();
                }
            }
            Task::HideInitialLoading => self.hide_loading(),
            Task::InitFailureNotice => {
                self.show_notification(MSG_INIT_DEGRADED, Severity::Error);
            }
        }
    }
}
