//! The components module contains all shared components for our app.

mod app;
mod app_view;
mod icons;
mod mini_player;
mod player;
mod stream;
pub mod views;

pub use app::*;
pub use app_view::*;
pub use icons::*;
pub use mini_player::*;
pub use player::*;
pub use stream::*;
