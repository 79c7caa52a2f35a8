#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod bitgrid;
mod board;
mod common;
mod config;
mod game;
pub mod layout;
#[cfg(feature = "std")]
mod logging;
mod player;
pub mod prelude;
mod record;
mod score;
mod ship;
pub mod validator;

pub use bitgrid::{BitGrid, BitGridError};
pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use layout::{LayoutDescription, ShipSpec};
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use player::*;
pub use record::*;
pub use score::*;
pub use ship::*;
