use super::weather_data::WeatherData;
use crate::error::DemoError;
use std::rc::Rc;

/// Reacts to a measurement change by pulling what it needs from the subject.
pub trait Observer {
    fn update(&self, subject: &WeatherData) -> Result<(), DemoError>;
}

pub trait Subject {
    fn register_observer(&mut self, observer: Rc<dyn Observer>);
    #[cfg_attr(not(test), allow(dead_code))]
    fn remove_observer(&mut self, observer: &Rc<dyn Observer>);
    fn notify_observers(&self) -> Result<(), DemoError>;
}

pub trait DisplayElement {
    fn display(&self) -> Result<(), DemoError>;
}
