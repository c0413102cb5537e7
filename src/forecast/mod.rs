pub mod aggregate;
pub mod mock;
pub mod openweather;
pub mod summary;
pub mod types;
