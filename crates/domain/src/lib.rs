#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod catalog;

mod asset;
mod demonstration;
mod error;
mod exercise;
mod gallery;
mod premium;
mod progress;
mod video;

pub use asset::*;
pub use catalog::Catalog;
pub use demonstration::*;
pub use error::*;
pub use exercise::*;
pub use gallery::*;
pub use premium::*;
pub use progress::*;
pub use video::*;
