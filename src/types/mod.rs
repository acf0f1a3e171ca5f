//! Domain value types shared across the crate.

pub mod alert;
pub mod city;
pub mod condition;
pub mod country;
pub mod progress;
pub mod units;
pub mod weather;
