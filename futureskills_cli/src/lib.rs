//! Future Skills Lab CLI
//!
//! Interactive menu session plus one-shot commands over the orientation engine.

pub mod intake;
pub mod menu;
pub mod render;
