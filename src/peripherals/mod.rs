mod button;
mod edge_detector;

pub use button::*;
pub use edge_detector::*;
