//! portfolio-tui: a personal portfolio as a terminal application.
//!
//! Five keyboard-navigable pages (Home, About, Experience, Projects,
//! Contact) with staggered entrance animation, a collapsible navigation
//! menu, and a contact form that composes `mailto:` links for the system
//! mail client.

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod motion;
pub mod services;
pub mod ui;

pub use app::App;
pub use config::PortfolioConfig;
pub use error::{AppError, Result};
