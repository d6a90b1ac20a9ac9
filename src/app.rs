//! Application state and main event loop.

use crate::config::PortfolioConfig;
use crate::domain::Route;
use crate::error::{AppError, Result};
use crate::motion;
use crate::services::{load_avatar, AvatarArt, Mailer};
use crate::ui::input::{Action, InputHandler, InputMode};
use crate::ui::pages::{self, ContactAction, ContactState, ProjectsState};
use crate::ui::widgets::navbar::NavState;
use crossterm::event::{self, Event, KeyEvent};
use ratatui::prelude::*;
use std::path::Path;
use std::time::{Duration, Instant};

/// Poll timeout while a page has settled and nothing is animating
const IDLE_TICK: Duration = Duration::from_millis(250);

/// Main application state
pub struct App {
    /// Loaded configuration
    pub config: PortfolioConfig,
    /// Active route
    pub route: Route,
    /// Nav bar and menu overlay state
    pub nav: NavState,
    /// Vertical scroll of the active page
    pub scroll: u16,
    /// Current input mode
    pub input_mode: InputMode,

    // Per-visit page state, rebuilt on navigation
    /// Projects page state (category filter)
    pub projects: ProjectsState,
    /// Contact form state
    pub contact: ContactState,

    /// Decoded avatar, or None for the initials fallback
    pub avatar: Option<AvatarArt>,

    // Timing
    /// When the app started, drives the backdrop drift
    started_at: Instant,
    /// When the active route was entered, drives the entrance stagger
    entered_at: Instant,

    input_handler: InputHandler,
}

impl App {
    /// Create a new application from the loaded configuration
    pub fn new(config: PortfolioConfig) -> Self {
        let avatar = load_avatar(Path::new(&config.profile.avatar_path));
        let input_handler = InputHandler::new(config.ui.vim_navigation);
        let now = Instant::now();
        Self {
            config,
            route: Route::default(),
            nav: NavState::new(),
            scroll: 0,
            input_mode: InputMode::default(),
            projects: ProjectsState::new(),
            contact: ContactState::new(),
            avatar,
            started_at: now,
            entered_at: now,
            input_handler,
        }
    }

    /// Start on the route for `path`. An unknown path falls back to Home.
    pub fn with_initial_path(mut self, path: &str) -> Self {
        match Route::from_path(path) {
            Some(route) => self.route = route,
            None => {
                tracing::warn!("unknown launch path {:?}, starting on Home", path);
                self.route = Route::Home;
            }
        }
        self
    }

    /// Time on the active route
    pub fn elapsed(&self) -> Duration {
        self.entered_at.elapsed()
    }

    /// Time since the app started
    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }

    /// Switch to `route`, discarding the left page's state. Re-selecting
    /// the active route is a no-op; the page keeps its state.
    pub fn navigate_to(&mut self, route: Route) {
        self.nav.close_menu();
        if route == self.route {
            return;
        }
        self.route = route;
        self.entered_at = Instant::now();
        self.scroll = 0;
        self.input_mode = InputMode::Normal;
        self.projects = ProjectsState::new();
        self.contact = ContactState::new();
    }

    /// Entrance sections of the active page
    fn section_count(&self) -> usize {
        match self.route {
            Route::Home => pages::home::SECTION_COUNT,
            Route::About => pages::about::SECTION_COUNT,
            Route::Experience => pages::experience::section_count(),
            Route::Projects => self.projects.section_count(),
            Route::Contact => pages::contact::SECTION_COUNT,
        }
    }

    /// True once the active page's entrance has finished
    fn is_settled(&self) -> bool {
        motion::settled(
            self.elapsed(),
            self.section_count(),
            self.config.ui.reduced_motion,
        )
    }

    /// Restart the entrance for the current content
    fn restart_entrance(&mut self) {
        self.entered_at = Instant::now();
        self.scroll = 0;
    }

    /// Handle a key event. Returns true when the app should exit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if self.input_mode == InputMode::Insert {
            return self.handle_form_key(key);
        }
        if self.nav.menu_open {
            return self.handle_menu_key(key);
        }

        let Some(action) = self.input_handler.handle_key(key, self.input_mode) else {
            return false;
        };

        match action {
            Action::MoveUp => self.scroll = self.scroll.saturating_sub(1),
            Action::MoveDown => self.scroll = self.scroll.saturating_add(1),
            Action::MoveLeft => {
                if self.route == Route::Projects {
                    self.projects.previous_filter();
                    self.restart_entrance();
                } else {
                    self.navigate_to(self.route.previous());
                }
            }
            Action::MoveRight => {
                if self.route == Route::Projects {
                    self.projects.next_filter();
                    self.restart_entrance();
                } else {
                    self.navigate_to(self.route.next());
                }
            }
            Action::NextPage => self.navigate_to(self.route.next()),
            Action::PreviousPage => self.navigate_to(self.route.previous()),
            Action::GoTo(route) => self.navigate_to(route),
            Action::Select => {
                if self.route == Route::Contact {
                    self.input_mode = InputMode::Insert;
                }
            }
            Action::ToggleMenu => self.nav.toggle_menu(),
            Action::Back | Action::Quit => return true,
        }
        false
    }

    /// Keys while the menu overlay is open
    fn handle_menu_key(&mut self, key: KeyEvent) -> bool {
        let Some(action) = self.input_handler.handle_key(key, self.input_mode) else {
            return false;
        };

        match action {
            Action::MoveUp => self.nav.select_previous(),
            Action::MoveDown => self.nav.select_next(),
            Action::Select => {
                let route = self.nav.selected_route();
                self.navigate_to(route);
            }
            Action::ToggleMenu | Action::Back => self.nav.close_menu(),
            Action::Quit => return true,
            _ => {}
        }
        false
    }

    /// Keys while editing the contact form
    fn handle_form_key(&mut self, key: KeyEvent) -> bool {
        if let Some(Action::Quit) = self.input_handler.handle_key(key, self.input_mode) {
            return true;
        }

        match self.contact.handle_key(key, &self.config.profile) {
            ContactAction::Exit => self.input_mode = InputMode::Normal,
            ContactAction::Submit(uri) => {
                if let Err(e) = Mailer::open(&uri) {
                    tracing::warn!("could not open mail client: {}", e);
                }
            }
            ContactAction::None => {}
        }
        false
    }

    /// Periodic update between input events
    pub fn tick(&mut self) {
        self.contact.tick(Instant::now());
    }

    /// Main event loop
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        let tick_rate = Duration::from_millis(self.config.ui.refresh_rate_ms);
        let mut last_tick = Instant::now();

        loop {
            // Draw UI
            terminal.draw(|f| crate::ui::layout::draw(f, self))?;

            // Animate at the refresh rate; idle slower once settled, unless
            // the backdrop is still drifting
            let animating = !self.is_settled() || !self.config.ui.reduced_motion;
            let timeout = if animating {
                tick_rate.saturating_sub(last_tick.elapsed())
            } else {
                IDLE_TICK
            };

            // Wait for event with timeout
            if event::poll(timeout).map_err(|e| AppError::Terminal(e.to_string()))? {
                match event::read().map_err(|e| AppError::Terminal(e.to_string()))? {
                    Event::Key(key) => {
                        if self.handle_key(key) {
                            break;
                        }
                    }
                    Event::Resize(width, height) => {
                        // The next draw picks up the new frame area
                        tracing::debug!("Terminal resized to {}x{}", width, height);
                    }
                    _ => {}
                }
            }

            // Tick
            if last_tick.elapsed() >= tick_rate {
                last_tick = Instant::now();
                self.tick();
            }
        }

        Ok(())
    }
}
