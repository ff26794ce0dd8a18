//! UI module - die display, face artwork and widgets

pub mod components;
pub mod die;
pub mod faces;
