//! TUI pane rendering modules
//!
//! - [`bars`]: the array as vertical bars, coloured by highlight and sorted state
//! - [`info`]: pseudocode, statistics, step description and legend
//! - [`status`]: status bar with keybindings and playback state
//!
//! Each pane module exports a `render_*` function that only reads from a
//! [`View`](crate::playback::View).

pub mod bars;
pub mod info;
pub mod status;

pub use bars::render_bars_pane;
pub use info::render_info_pane;
pub use status::{render_status_bar, StatusRenderData};
