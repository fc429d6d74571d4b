use chrono::{DateTime, Utc};
use ndarray::Array1;

use crate::constants::NODATAVAL;

/// InputElement represents the weather read at a single cell for one day.
/// Unit conversions from raw feeds belong to the producing collaborator;
/// the engines assume the units below.
#[derive(Debug, Clone, Copy)]
pub struct InputElement {
    /// air temperature [°C]
    pub temperature: f32,
    /// 24h cumulated rain [mm]
    pub rain: f32,
    /// wind speed [km/h]
    pub wind_speed: f32,
    /// wind direction, azimuth the wind blows towards [°]
    pub wind_dir: f32,
    /// relative humidity [%]
    pub humidity: f32,
    /// grass curing [%], grass fuel types only
    pub curing: f32,
    /// foliar moisture content [%], overrides the date-based estimate
    pub foliar_moisture: f32,
}

impl Default for InputElement {
    fn default() -> Self {
        Self {
            temperature: NODATAVAL,
            rain: NODATAVAL,
            wind_speed: NODATAVAL,
            wind_dir: NODATAVAL,
            humidity: NODATAVAL,
            curing: NODATAVAL,
            foliar_moisture: NODATAVAL,
        }
    }
}

pub struct Input {
    pub time: DateTime<Utc>,
    pub data: Array1<InputElement>,
}
