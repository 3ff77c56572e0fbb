mod degree_celsius;
mod flow;
mod kilo_joules;
mod kwh;

pub use degree_celsius::DegreeCelsius;
pub use flow::CubicMetersPerHour;
pub use kilo_joules::KiloJoules;
pub use kwh::KiloWattHours;
