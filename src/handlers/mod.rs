pub mod common;
pub mod health;
pub mod sensor_records;
pub mod simulations;

pub use health::health_routes;
pub use sensor_records::sensor_record_routes;
pub use simulations::simulation_routes;
