mod reconstruct;
pub use reconstruct::*;

mod epicycle;
pub use epicycle::*;

mod argument;
pub use argument::*;
