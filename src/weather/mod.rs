pub mod displays;
pub mod event;
pub mod station;
pub mod weather_data;
