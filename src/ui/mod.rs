//! UI components for portfolio-tui.
//!
//! This module contains:
//! - layout: Main layout rendering
//! - input: Keyboard input handling
//! - pages: One view per route
//! - widgets: Reusable UI widgets

pub mod input;
pub mod layout;
pub mod pages;
pub mod widgets;
