pub mod sensor_records;
pub mod simulation;

pub use sensor_records::SensorRecordService;
pub use simulation::{DbReadingSink, ReadingSink, SimulationService};
