mod action;
mod backend;
mod conversation;
mod event;
mod focus;
mod loading;
mod message;
mod parameters;
mod role;
mod slash_commands;
mod textarea;

pub use action::*;
pub use backend::*;
pub use conversation::*;
pub use event::*;
pub use focus::*;
pub use loading::*;
pub use message::*;
pub use parameters::*;
pub use role::*;
pub use slash_commands::*;
pub use textarea::*;
