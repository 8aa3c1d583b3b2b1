pub mod driver;
pub mod human;

pub use driver::RoundDriver;
pub use human::{HumanMode, Screen};
