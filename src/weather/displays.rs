use super::event::{DisplayElement, Observer, Subject};
use super::weather_data::WeatherData;
use crate::console_display::ConsoleDisplay;
use crate::error::DemoError;
use std::cell::Cell;
use std::rc::Rc;

fn render(console: &ConsoleDisplay, kind: &str, value: f32, unit: &str) -> Result<(), DemoError> {
    console.line(&format!("** {} Display **", kind))?;
    console.line(&format!("Current: {} {}", value, unit))?;

    Ok(())
}

pub struct TemperatureDisplay {
    console: Rc<ConsoleDisplay>,
    temperature: Cell<f32>,
}

impl TemperatureDisplay {
    /// Creates the display and registers it with `weather_data`.
    pub fn new(weather_data: &mut WeatherData, console: Rc<ConsoleDisplay>) -> Rc<TemperatureDisplay> {
        let display = Rc::new(TemperatureDisplay {
            console,
            temperature: Cell::new(0.0),
        });
        weather_data.register_observer(display.clone());

        display
    }

    pub fn temperature(&self) -> f32 {
        self.temperature.get()
    }
}

impl Observer for TemperatureDisplay {
    fn update(&self, subject: &WeatherData) -> Result<(), DemoError> {
        self.temperature.set(subject.temperature());
        self.display()
    }
}

impl DisplayElement for TemperatureDisplay {
    fn display(&self) -> Result<(), DemoError> {
        render(&self.console, "Temperature", self.temperature(), "C")
    }
}

pub struct HumidityDisplay {
    console: Rc<ConsoleDisplay>,
    humidity: Cell<f32>,
}

impl HumidityDisplay {
    pub fn new(weather_data: &mut WeatherData, console: Rc<ConsoleDisplay>) -> Rc<HumidityDisplay> {
        let display = Rc::new(HumidityDisplay {
            console,
            humidity: Cell::new(0.0),
        });
        weather_data.register_observer(display.clone());

        display
    }

    pub fn humidity(&self) -> f32 {
        self.humidity.get()
    }
}

impl Observer for HumidityDisplay {
    fn update(&self, subject: &WeatherData) -> Result<(), DemoError> {
        self.humidity.set(subject.humidity());
        self.display()
    }
}

impl DisplayElement for HumidityDisplay {
    fn display(&self) -> Result<(), DemoError> {
        render(&self.console, "Humidity", self.humidity(), "mb")
    }
}

pub struct PressureDisplay {
    console: Rc<ConsoleDisplay>,
    pressure: Cell<f32>,
}

impl PressureDisplay {
    pub fn new(weather_data: &mut WeatherData, console: Rc<ConsoleDisplay>) -> Rc<PressureDisplay> {
        let display = Rc::new(PressureDisplay {
            console,
            pressure: Cell::new(0.0),
        });
        weather_data.register_observer(display.clone());

        display
    }

    pub fn pressure(&self) -> f32 {
        self.pressure.get()
    }
}

impl Observer for PressureDisplay {
    fn update(&self, subject: &WeatherData) -> Result<(), DemoError> {
        self.pressure.set(subject.pressure());
        self.display()
    }
}

impl DisplayElement for PressureDisplay {
    fn display(&self) -> Result<(), DemoError> {
        render(&self.console, "Pressure", self.pressure(), "mb")
    }
}
