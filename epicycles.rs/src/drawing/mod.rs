mod brush;
pub use brush::*;

mod resample;
pub use resample::*;
