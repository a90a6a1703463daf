use super::displays::{HumidityDisplay, PressureDisplay, TemperatureDisplay};
use super::weather_data::WeatherData;
use crate::console_display::ConsoleDisplay;
use crate::error::DemoError;
use std::rc::Rc;
use tracing::info;

const READINGS: [(f32, f32, f32); 3] = [(30.0, 65.0, 30.4), (30.3, 66.0, 30.6), (31.2, 66.3, 30.9)];

/// Wires three displays to one weather data source and pushes the fixed readings through it.
pub fn run(console: Rc<ConsoleDisplay>) -> Result<(), DemoError> {
    let mut weather_data = WeatherData::new();
    let _temperature_display = TemperatureDisplay::new(&mut weather_data, console.clone());
    let _humidity_display = HumidityDisplay::new(&mut weather_data, console.clone());
    let _pressure_display = PressureDisplay::new(&mut weather_data, console);
    info!(
        observers = weather_data.observer_count(),
        readings = READINGS.len(),
        "running weather station"
    );

    for (temperature, humidity, pressure) in READINGS {
        weather_data.set_measurements(temperature, humidity, pressure)?;
    }

    Ok(())
}
