use crate::core::{Region, VehicleFactory};

#[derive(Debug, Clone, Copy, Default)]
pub struct UsVehicleFactory;

impl VehicleFactory for UsVehicleFactory {
    fn region(&self) -> Region {
        Region::Us
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EuVehicleFactory;

impl VehicleFactory for EuVehicleFactory {
    fn region(&self) -> Region {
        Region::Eu
    }
}

/// Factory variant for a region, behind the capability.
pub fn factory_for(region: Region) -> Box<dyn VehicleFactory> {
    match region {
        Region::Us => Box::new(UsVehicleFactory),
        Region::Eu => Box::new(EuVehicleFactory),
    }
}
