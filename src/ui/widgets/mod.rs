//! Reusable UI widgets for portfolio-tui.

pub mod avatar;
pub mod backdrop;
pub mod chip;
pub mod navbar;
pub mod text_input;
