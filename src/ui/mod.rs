//! UI panel rendering subsystem
//!
//! - Header panel (file controls, fitting settings)
//! - Share panel (read-only share link with copy button)
//! - Timeline panel (fixed-width event boxes)
//! - Status bar (timeline and fitting summary)
//! - Panel manager (panel orchestration and layout)

pub mod header;
pub mod share_panel;
pub mod timeline_panel;
pub mod status_bar;
pub mod panel_manager;
