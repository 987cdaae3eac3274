pub mod sample;
pub mod traits;
