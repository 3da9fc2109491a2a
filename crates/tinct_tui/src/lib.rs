//! tinct-tui — terminal UI for tinct.
//!
//! Chrome and preview palettes in `theme`; layout in `layouts`; state and
//! view in [state] and [view]. Run with [run_tui].

pub mod events;
pub mod layouts;
pub mod preview;
pub mod run;
pub mod state;
pub mod theme;
pub mod utils;
pub mod view;

pub use events::AppEvent;
pub use run::run_tui;
pub use state::{Field, InputMode, Screen, TuiState};
pub use theme::Appearance;
pub use view::draw as draw_view;
