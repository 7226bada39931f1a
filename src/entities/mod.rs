pub mod sensor_records;
