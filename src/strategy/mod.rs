pub mod behaviours;
pub mod bird;
pub mod demo;
