use crate::core::factory::factory_for;
use crate::core::{Region, Vehicle, VehicleFactory};

/// Demo line-up for one factory: a car and a motorcycle.
pub fn lineup(factory: &dyn VehicleFactory) -> Vec<Box<dyn Vehicle>> {
    let (car, motorcycle) = match factory.region() {
        Region::Us => (("Ford", "Mustang"), ("Harley-Davidson", "Sportster")),
        Region::Eu => (("Volkswagen", "Golf"), ("Volkswagen", "SP")),
    };

    vec![
        Box::new(factory.create_car(car.0, car.1)),
        Box::new(factory.create_motorcycle(motorcycle.0, motorcycle.1)),
    ]
}

/// Factories to showcase, US first. `None` means every region.
pub fn factories(region: Option<Region>) -> Vec<Box<dyn VehicleFactory>> {
    let regions = match region {
        Some(region) => vec![region],
        None => vec![Region::Us, Region::Eu],
    };
    regions.into_iter().map(factory_for).collect()
}

/// Engine-start messages for the selected factories, in presentation order.
pub fn start_engines(region: Option<Region>) -> Vec<String> {
    factories(region)
        .iter()
        .flat_map(|factory| lineup(factory.as_ref()))
        .map(|vehicle| {
            tracing::debug!(
                "Starting {} {} built for {}",
                vehicle.make(),
                vehicle.model(),
                vehicle.spec()
            );
            vehicle.start_engine()
        })
        .collect()
}
