//! Local, in-memory data sources backing the fast side of every query.

mod city_store;
mod weather_store;

pub use city_store::CityStore;
pub use weather_store::WeatherStore;
