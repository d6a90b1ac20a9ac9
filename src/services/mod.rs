//! Infrastructure services for portfolio-tui.
//!
//! This module contains:
//! - mailer: mailto composition and hand-off to the system mail handler
//! - avatar: avatar image decoding with initials fallback

pub mod avatar;
pub mod mailer;

pub use avatar::{load_avatar, AvatarArt};
pub use mailer::{compose_mailto, contact_mailto, Mailer};
