use crate::domain::model::AvailabilityPolicy;

pub trait ConfigProvider {
    fn station_name(&self) -> &str;
    fn availability_policy(&self) -> AvailabilityPolicy;
}
