//! Pure transformation of raw readings into render-ready view models.

mod mapper;
pub mod view;

pub use mapper::{fake_min_max, map_current_weather};
