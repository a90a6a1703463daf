use super::behaviours::{Flying, Swimming};
use super::bird::{Bird, Species};
use crate::console_display::ConsoleDisplay;
use crate::error::DemoError;
use tracing::info;

pub fn run(console: &ConsoleDisplay) -> Result<(), DemoError> {
    let mut bird = Bird::new("Garry", Species::Eagle);
    info!(bird = bird.name(), species = %bird.species(), "running strategy demo");

    bird.display_info(console)?;
    bird.fly(console)?;
    bird.swim(console)?;

    bird.set_fly_behaviour(Box::new(Flying));
    bird.set_swim_behaviour(Box::new(Swimming));

    bird.display_info(console)?;
    bird.fly(console)?;
    bird.swim(console)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console_display::testing::capture;

    #[test]
    fn strategy_transcript() {
        let (console, buffer) = capture();
        run(&console).unwrap();

        let expected = vec![
            "",
            "Name: Garry, Type: Eagle",
            "Fly Behaviour: Walking",
            "Swim Behaviour: Drowning",
            "",
            "Fly: Not a chance, I'm walking!",
            "Swim: Only bubbles appear on the waters surface...",
            "",
            "Name: Garry, Type: Eagle",
            "Fly Behaviour: Flying",
            "Swim Behaviour: Swimming",
            "",
            "Fly: Flapping my wings and taking off!",
            "Swim: Majestic strokes on the water!",
        ];

        assert_eq!(expected, buffer.lines());
    }
}
