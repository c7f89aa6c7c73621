#![allow(clippy::cast_possible_truncation)]

pub use rustfft::num_complex;

mod common;
pub use common::*;

mod point;
pub use point::*;

mod options;
pub use options::*;

pub mod analysis;
pub mod drawing;
pub mod synthesis;

mod visualizer;
pub use visualizer::*;
