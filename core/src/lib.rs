#![no_std]

extern crate alloc;

pub use board::*;
pub use controller::*;
pub use error::*;
pub use heuristic::*;
pub use types::*;
pub use win::*;

mod board;
mod controller;
mod error;
mod heuristic;
mod types;
mod win;
