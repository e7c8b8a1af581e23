//! Presentation models

pub mod display;
