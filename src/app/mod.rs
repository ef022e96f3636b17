// SPDX-License-Identifier: MPL-2.0
//! Gallery application hosting the notification overlay.
//!
//! `App` is the composition root: it creates the one [`NotificationStore`],
//! hands a clone to the [`Overlay`], and issues sample notifications from
//! gallery buttons. Timers are not polled; after every update the app
//! schedules a single wake-up for the overlay's earliest deadline. Frame
//! ticks only run while a toast is animating.

mod message;
mod persistence;
mod subscription;
mod view;

pub use message::{Flags, Message, Preset};

use crate::config;
use crate::diagnostics::DiagnosticsCollector;
use crate::ui::notifications::{
    self, ActionResponse, NotificationOptions, NotificationStore, Overlay,
    Subscription as StoreSubscription,
};
use crate::ui::theming::{ColorMode, ThemeMode};
use iced::{window, Element, Subscription, Task, Theme};
use std::cell::Cell;
use std::fmt;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    store: NotificationStore,
    overlay: Overlay,
    diagnostics: DiagnosticsCollector,
    theme_mode: ThemeMode,
    color_mode: ColorMode,
    /// Updated by a store subscription on every mutation.
    active: Rc<Cell<usize>>,
    _active_subscription: StoreSubscription,
    /// Deadline of the wake-up task currently in flight.
    scheduled_wake: Option<Instant>,
    /// Number of gallery notifications issued so far.
    issued: u64,
    config_dir: Option<PathBuf>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("active", &self.active.get())
            .field("theme_mode", &self.theme_mode)
            .field("scheduled_wake", &self.scheduled_wake)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 640;
pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 720;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot function; flags are consumed on the first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || App::new(boot_state.borrow_mut().take().unwrap_or_default());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .subscription(App::subscription)
        .window(window_settings())
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config_dir = flags.config_dir.map(PathBuf::from);
        let (config, config_warning) = config::load(config_dir.as_deref());

        let mut diagnostics = DiagnosticsCollector::new(config.buffer_capacity());
        if let Some(warning) = config_warning {
            eprintln!("{warning}");
            diagnostics.handle().log_warning(warning);
        }

        let store = NotificationStore::with_defaults(config.notification_defaults());
        store.set_diagnostics(diagnostics.handle());

        let mut overlay = Overlay::new(store.clone(), config.transition_window());
        overlay.set_diagnostics(diagnostics.handle());

        let active = Rc::new(Cell::new(store.len()));
        let sink = Rc::clone(&active);
        let active_subscription = store.subscribe(move |snapshot| sink.set(snapshot.len()));

        let theme_mode = flags.theme.unwrap_or(config.general.theme_mode);
        diagnostics.process_pending();

        let app = App {
            store,
            overlay,
            diagnostics,
            theme_mode,
            color_mode: theme_mode.resolve(),
            active,
            _active_subscription: active_subscription,
            scheduled_wake: None,
            issued: 0,
            config_dir,
        };
        (app, Task::none())
    }

    fn title(&self) -> String {
        match self.active.get() {
            0 => "Iced Toast".to_string(),
            n => format!("Iced Toast ({n} active)"),
        }
    }

    fn theme(&self) -> Theme {
        self.color_mode.theme()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let now = Instant::now();
        let mut task = Task::none();

        match message {
            Message::Notification(message) => {
                if let notifications::Message::Tick(at) = message {
                    // The in-flight wake-up has fired.
                    if self.scheduled_wake.is_some_and(|wake| wake <= at) {
                        self.scheduled_wake = None;
                    }
                }
                self.overlay.handle_message(&message, now);
            }
            Message::Show(preset) => {
                let options = self.preset_options(preset);
                self.issued += 1;
                if let Err(error) = self.store.add(options) {
                    eprintln!("Failed to show notification: {error}");
                }
            }
            Message::DismissAll => self.store.remove_all(),
            Message::ToggleTheme => {
                self.color_mode = self.color_mode.toggled();
                self.theme_mode = ThemeMode::from(self.color_mode);
                task = persistence::persist_theme_mode(self.theme_mode, self.config_dir.as_deref());
            }
            Message::RefreshSystemTheme => self.refresh_system_theme(self.theme_mode.resolve()),
        }

        self.overlay.sync(now);
        self.diagnostics.process_pending();
        Task::batch([task, self.schedule_wake()])
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            overlay: &self.overlay,
            color_mode: self.color_mode,
            active: self.active.get(),
            now: Instant::now(),
        })
    }

    fn subscription(&self) -> Subscription<Message> {
        let animation_sub =
            subscription::create_animation_subscription(self.overlay.is_animating(Instant::now()));
        let theme_sub = subscription::create_system_theme_subscription(self.theme_mode);

        Subscription::batch([animation_sub, theme_sub])
    }

    /// Follows the OS theme; explicit modes are left alone.
    fn refresh_system_theme(&mut self, resolved: ColorMode) {
        if self.theme_mode == ThemeMode::System {
            self.color_mode = resolved;
        }
    }

    fn preset_options(&self, preset: Preset) -> NotificationOptions {
        let options = preset.options(self.issued);
        match preset {
            Preset::WithAction => {
                let store = self.store.clone();
                // Closes only once the item is restored.
                options.action_with("Undo", move || {
                    match store.add(NotificationOptions::success("Restored")) {
                        Ok(_) => ActionResponse::Close,
                        Err(error) => {
                            eprintln!("Failed to show notification: {error}");
                            ActionResponse::KeepOpen
                        }
                    }
                })
            }
            _ => options,
        }
    }

    /// Schedules a wake-up for the overlay's earliest deadline unless one at
    /// or before it is already in flight.
    fn schedule_wake(&mut self) -> Task<Message> {
        let Some(deadline) = self.overlay.next_deadline() else {
            return Task::none();
        };
        if self.scheduled_wake.is_some_and(|wake| wake <= deadline) {
            return Task::none();
        }

        self.scheduled_wake = Some(deadline);
        Task::perform(
            async move {
                tokio::time::sleep_until(tokio::time::Instant::from_std(deadline)).await;
                Instant::now()
            },
            |at| Message::Notification(notifications::Message::Tick(at)),
        )
    }
}
