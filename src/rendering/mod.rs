//! Rendering subsystem for drawing the timeline
//!
//! - Event box rendering (fitted title, date marker, tooltip)
//! - Text utilities (egui-backed measurement and label layout)

pub mod timeline_renderer;
pub mod text_utils;
