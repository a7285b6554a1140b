//! UI components for the portfolio page.
//!
//! DESIGN
//! ======
//! Each page section is its own component so sections can be reordered or
//! dropped without touching their neighbours. Cross-cutting pieces (icons,
//! scroll reveal, the toast stack) also live here and are shared by the
//! sections.

pub mod certifications;
pub mod contact_dialog;
pub mod experience;
pub mod footer;
pub mod hero;
pub mod icons;
pub mod mouse_glow;
pub mod navbar;
pub mod pipeline;
pub mod projects;
pub mod resume;
pub mod reveal;
pub mod skills;
pub mod toast_stack;
