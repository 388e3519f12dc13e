#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod board;
mod common;
mod config;
pub mod geometry;
mod id;
pub mod layout;
#[cfg(feature = "std")]
mod logging;
pub mod session;
mod ship;

pub use board::*;
pub use common::*;
pub use config::*;
pub use geometry::*;
pub use id::*;
pub use layout::{random_fleet, random_positions, LayoutError};
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from_env_value};
pub use session::*;
pub use ship::*;
