//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! - **[`app`]**: application state and the keyboard event loop
//! - **[`panes`]**: stateless render functions (bars, info, status bar)
//! - **[`sound`]**: terminal-bell [`StepObserver`](crate::playback::StepObserver)
//! - **[`theme`]**: colour palette shared by all panes
//!
//! Construct an [`App`] and call [`App::run`](app::App::run) to start the loop.

pub mod app;
pub mod panes;
pub mod sound;
pub mod theme;

pub use app::App;
