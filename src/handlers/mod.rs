pub mod availability;
pub mod shared;
pub mod stats;
