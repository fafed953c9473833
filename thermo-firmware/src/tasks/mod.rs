//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels/signals.

pub mod button;
pub mod display;
pub mod sampler;

pub use button::button_task;
pub use display::display_task;
pub use sampler::{sampler_task, RpTempAdc};
