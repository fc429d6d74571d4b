use chrono::{DateTime, Utc};
use ndarray::Array1;
use serde_derive::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use crate::constants::NODATAVAL;

pub struct OutputElement {
    // ---------------- FWI ----------------- //
    /// Fine Fuel Moisture Code
    pub ffmc: f32,
    /// Duff Moisture Code
    pub dmc: f32,
    /// Drought Code
    pub dc: f32,
    /// Initial Spread Index
    pub isi: f32,
    /// Buildup Index
    pub bui: f32,
    /// Fire Weather Index
    pub fwi: f32,
    /// Daily Severity Rating
    pub dsr: f32,

    // ---------------- FBP ----------------- //
    /// Head rate of spread [m/min]
    pub hros: f32,
    /// Flank rate of spread [m/min]
    pub fros: f32,
    /// Back rate of spread [m/min]
    pub bros: f32,
    /// Crown fraction burned [0-1]
    pub cfb: f32,
    /// Surface fuel consumption [kg/m²]
    pub sfc: f32,
    /// Total fuel consumption [kg/m²]
    pub tfc: f32,
    /// Head fire intensity [kW/m]
    pub hfi: f32,
    /// Length-to-breadth ratio
    pub lb: f32,
    /// Elliptical fire area at elapsed time [m²]
    pub area: f32,
    /// Elliptical fire perimeter at elapsed time [m]
    pub perimeter: f32,
    /// Net effective wind speed [km/h]
    pub wsv: f32,
    /// Net spread azimuth [°]
    pub raz: f32,

    // ----------------- INPUTS ---------------//
    /// Input temperature [°C]
    pub temperature: f32,
    /// Input rain [mm]
    pub rain: f32,
    /// Input wind speed [km/h]
    pub wind_speed: f32,
    /// Input relative humidity [%]
    pub humidity: f32,
}

impl Default for OutputElement {
    fn default() -> Self {
        Self {
            ffmc: NODATAVAL,
            dmc: NODATAVAL,
            dc: NODATAVAL,
            isi: NODATAVAL,
            bui: NODATAVAL,
            fwi: NODATAVAL,
            dsr: NODATAVAL,

            hros: NODATAVAL,
            fros: NODATAVAL,
            bros: NODATAVAL,
            cfb: NODATAVAL,
            sfc: NODATAVAL,
            tfc: NODATAVAL,
            hfi: NODATAVAL,
            lb: NODATAVAL,
            area: NODATAVAL,
            perimeter: NODATAVAL,
            wsv: NODATAVAL,
            raz: NODATAVAL,

            temperature: NODATAVAL,
            rain: NODATAVAL,
            wind_speed: NODATAVAL,
            humidity: NODATAVAL,
        }
    }
}

pub struct Output {
    pub time: DateTime<Utc>,
    pub data: Array1<OutputElement>,
}

impl Output {
    pub fn new(time: DateTime<Utc>, data: Array1<OutputElement>) -> Self {
        Self { time, data }
    }
}

/// Names of the output columns/bands produced by the engines.
#[derive(
    Debug, PartialEq, Eq, Hash, Copy, Clone, EnumString, EnumIter, Display, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
pub enum OutputVariableName {
    Ffmc,
    Dmc,
    Dc,
    Isi,
    Bui,
    Fwi,
    Dsr,
    Hros,
    Fros,
    Bros,
    Cfb,
    Sfc,
    Tfc,
    Hfi,
    Lb,
    Area,
    Perimeter,
    Wsv,
    Raz,
}
