// Interactive loop layering:
// - `commands` owns the session loop and dispatches single-character
//   commands to `handlers`.
// - `handlers` drive the dialogs and the repository; every state change
//   the user cares about is printed by a view function.
// - `ui` is generic over the I/O streams so full flows run against
//   in-memory buffers in tests.

mod commands;
pub mod config;
mod dialog;
mod handlers;
mod session;
mod ui;

pub use commands::run;
