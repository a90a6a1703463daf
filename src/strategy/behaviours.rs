pub trait FlyBehaviour {
    fn fly(&self) -> &'static str;
    fn name(&self) -> &'static str;
}

pub trait SwimBehaviour {
    fn swim(&self) -> &'static str;
    fn name(&self) -> &'static str;
}

/// Default flight behaviour: the bird can't fly.
pub struct Walking;

pub struct Flying;

/// Default swim behaviour: the bird can't swim.
pub struct Drowning;

pub struct Swimming;

impl FlyBehaviour for Walking {
    fn fly(&self) -> &'static str {
        "Not a chance, I'm walking!"
    }

    fn name(&self) -> &'static str {
        "Walking"
    }
}

impl FlyBehaviour for Flying {
    fn fly(&self) -> &'static str {
        "Flapping my wings and taking off!"
    }

    fn name(&self) -> &'static str {
        "Flying"
    }
}

impl SwimBehaviour for Drowning {
    fn swim(&self) -> &'static str {
        "Only bubbles appear on the waters surface..."
    }

    fn name(&self) -> &'static str {
        "Drowning"
    }
}

impl SwimBehaviour for Swimming {
    fn swim(&self) -> &'static str {
        "Majestic strokes on the water!"
    }

    fn name(&self) -> &'static str {
        "Swimming"
    }
}
