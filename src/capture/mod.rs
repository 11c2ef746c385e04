// Capture flow: acquire one frame, convert, persist, validate, display.

pub mod commands;
pub mod flow;
