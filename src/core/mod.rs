pub mod console;
pub mod station;

pub use crate::domain::model::{AvailabilityPolicy, Bike, StationState};
pub use crate::domain::ports::ConfigProvider;
pub use crate::utils::error::Result;
