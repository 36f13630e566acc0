//! 단위 정의 및 변환 모듈 모음.

pub mod length;
pub mod temperature;
pub mod weight;

pub use length::{convert_length, length_unit_name, LengthUnit};
pub use temperature::{convert_temperature, temperature_unit_name, TemperatureUnit};
pub use weight::{convert_weight, weight_unit_name, WeightUnit};
