use super::behaviours::{Drowning, FlyBehaviour, SwimBehaviour, Walking};
use crate::console_display::ConsoleDisplay;
use crate::error::DemoError;
use std::fmt;
use tracing::debug;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Species {
    Eagle,
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Species::Eagle => "Eagle",
        };

        f.write_str(name)
    }
}

/// A bird whose flight and swim actions are delegated to swappable behaviours.
pub struct Bird {
    name: String,
    species: Species,
    fly_behaviour: Box<dyn FlyBehaviour>,
    swim_behaviour: Box<dyn SwimBehaviour>,
}

impl Bird {
    pub fn new(name: impl Into<String>, species: Species) -> Bird {
        Bird {
            name: name.into(),
            species,
            fly_behaviour: Box::new(Walking),
            swim_behaviour: Box::new(Drowning),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn species(&self) -> Species {
        self.species
    }

    pub fn fly_behaviour(&self) -> &dyn FlyBehaviour {
        self.fly_behaviour.as_ref()
    }

    pub fn swim_behaviour(&self) -> &dyn SwimBehaviour {
        self.swim_behaviour.as_ref()
    }

    pub fn set_fly_behaviour(&mut self, fly_behaviour: Box<dyn FlyBehaviour>) {
        debug!(
            bird = %self.name,
            from = self.fly_behaviour.name(),
            to = fly_behaviour.name(),
            "fly behaviour swapped"
        );
        self.fly_behaviour = fly_behaviour;
    }

    pub fn set_swim_behaviour(&mut self, swim_behaviour: Box<dyn SwimBehaviour>) {
        debug!(
            bird = %self.name,
            from = self.swim_behaviour.name(),
            to = swim_behaviour.name(),
            "swim behaviour swapped"
        );
        self.swim_behaviour = swim_behaviour;
    }

    pub fn fly(&self, console: &ConsoleDisplay) -> Result<(), DemoError> {
        console.line(&format!("Fly: {}", self.fly_behaviour.fly()))?;

        Ok(())
    }

    pub fn swim(&self, console: &ConsoleDisplay) -> Result<(), DemoError> {
        console.line(&format!("Swim: {}", self.swim_behaviour.swim()))?;

        Ok(())
    }

    pub fn display_info(&self, console: &ConsoleDisplay) -> Result<(), DemoError> {
        console.blank()?;
        console.line(&format!("Name: {}, Type: {}", self.name, self.species))?;
        console.line(&format!("Fly Behaviour: {}", self.fly_behaviour().name()))?;
        console.line(&format!("Swim Behaviour: {}", self.swim_behaviour().name()))?;
        console.blank()?;

        Ok(())
    }
}
