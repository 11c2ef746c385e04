// Live media widget boundary. The webview owns the stream, we log its state.

pub mod commands;
pub mod status;
