mod coefficient;
pub use coefficient::*;

pub mod dft;

mod reorder;
pub use reorder::*;

mod spectrum;
pub use spectrum::*;
