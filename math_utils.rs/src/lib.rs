pub mod easing;
pub mod even_odd;
pub mod ext;
pub mod stats;
