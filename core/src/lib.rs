//! Game logic for a fill-in times table: a 15 x 10 grid whose outer columns
//! hold the multipliers and whose inner cells take the products.
//!
//! [`PlayEngine`] owns all state and is driven by discrete events from a host:
//! text edits, navigation keys, clicks, mode buttons and two one-second ticks.
#![no_std]

extern crate alloc;

pub use board::*;
pub use celebration::*;
pub use cell::*;
pub use clock::*;
pub use engine::*;
pub use error::*;
pub use modes::*;
pub use navigation::*;
pub use scoring::*;
pub use types::*;
pub use view::*;

mod board;
mod celebration;
mod cell;
mod clock;
mod engine;
mod error;
mod modes;
mod navigation;
mod scoring;
mod types;
mod view;
