// Per-session state surviving across page re-renders.

pub mod commands;
pub mod state;
