// this library file publicly exports our modules
pub mod sort;
pub mod median;
pub mod util;
pub use median::compute_median;
