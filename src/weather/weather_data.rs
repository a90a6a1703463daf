use super::event::{Observer, Subject};
use crate::error::DemoError;
use std::rc::Rc;
use tracing::debug;

/// Holds the latest measurement triple and the observers interested in it.
#[derive(Default)]
pub struct WeatherData {
    observers: Vec<Rc<dyn Observer>>,
    temperature: f32,
    humidity: f32,
    pressure: f32,
}

#[cfg_attr(not(test), allow(dead_code))]
fn same_observer(a: &Rc<dyn Observer>, b: &Rc<dyn Observer>) -> bool {
    // identity is the allocation; vtable pointers are not unique
    Rc::as_ptr(a).cast::<()>() == Rc::as_ptr(b).cast::<()>()
}

impl Subject for WeatherData {
    fn register_observer(&mut self, observer: Rc<dyn Observer>) {
        self.observers.push(observer);
        debug!(observers = self.observers.len(), "observer registered");
    }

    fn remove_observer(&mut self, observer: &Rc<dyn Observer>) {
        match self
            .observers
            .iter()
            .position(|registered| same_observer(registered, observer))
        {
            Some(ix) => {
                self.observers.remove(ix);
                debug!(observers = self.observers.len(), "observer removed");
            }
            None => debug!("remove ignored, observer not registered"),
        }
    }

    fn notify_observers(&self) -> Result<(), DemoError> {
        let snapshot = self.observers.clone();
        debug!(observers = snapshot.len(), "notifying observers");

        for observer in snapshot.iter() {
            observer.update(self)?;
        }

        Ok(())
    }
}

impl WeatherData {
    pub fn new() -> WeatherData {
        WeatherData::default()
    }

    pub fn set_measurements(
        &mut self,
        temperature: f32,
        humidity: f32,
        pressure: f32,
    ) -> Result<(), DemoError> {
        self.temperature = temperature;
        self.humidity = humidity;
        self.pressure = pressure;
        debug!(temperature, humidity, pressure, "measurements set");

        self.measurements_changed()
    }

    pub fn measurements_changed(&self) -> Result<(), DemoError> {
        self.notify_observers()
    }

    pub fn temperature(&self) -> f32 {
        self.temperature
    }

    pub fn humidity(&self) -> f32 {
        self.humidity
    }

    pub fn pressure(&self) -> f32 {
        self.pressure
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}
