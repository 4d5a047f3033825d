pub mod actions;
mod app_state;
mod bubble;
mod bubble_list;
mod dispatch;
pub mod events;
#[cfg(test)]
mod fake_backend;
mod scroll;
mod sidebar;

pub use app_state::*;
pub use bubble::*;
pub use bubble_list::*;
pub use dispatch::*;
pub use scroll::*;
pub use sidebar::*;
