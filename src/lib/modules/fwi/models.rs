use chrono::prelude::*;
use ndarray::{Array1, Zip};
use serde_derive::{Deserialize, Serialize};

use crate::models::{input::Input, output::Output};

use super::{
    config::FwiModelConfig,
    constants::*,
    functions::{get_output_fn, update_state_fn},
};

/// The three fuel-moisture codes carried from one day to the next.
/// Each day's state derives solely from the previous day's state and that
/// day's observation; the first day of a season needs an explicit seed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoistureState {
    /// Fine Fuel Moisture Code, in [0, 101]
    pub ffmc: f32,
    /// Duff Moisture Code, >= 0
    pub dmc: f32,
    /// Drought Code, >= 0
    pub dc: f32,
}

impl Default for MoistureState {
    fn default() -> Self {
        Self {
            ffmc: FFMC_INIT,
            dmc: DMC_INIT,
            dc: DC_INIT,
        }
    }
}

impl MoistureState {
    pub fn new(ffmc: f32, dmc: f32, dc: f32) -> Self {
        Self { ffmc, dmc, dc }
    }
}

/// Stateless danger indices derived from a moisture state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FwiIndices {
    /// Initial Spread Index
    pub isi: f32,
    /// Buildup Index
    pub bui: f32,
    /// Fire Weather Index
    pub fwi: f32,
    /// Daily Severity Rating
    pub dsr: f32,
}

/// One day of weather at one station or point, as consumed by the
/// moisture-code recursion.
#[derive(Debug, Clone, Copy)]
pub struct DailyWeatherObservation {
    /// air temperature [°C]
    pub temperature: f32,
    /// relative humidity [%]
    pub humidity: f32,
    /// wind speed [km/h]
    pub wind_speed: f32,
    /// 24h cumulated rain [mm]
    pub rain: f32,
    /// latitude [°], for the day-length adjustments
    pub latitude: f32,
    /// month, 1-12
    pub month: u32,
}

// CELLS PROPERTIES
#[derive(Debug)]
pub struct FwiPropertiesElement {
    pub lon: f32,
    pub lat: f32,
}

#[derive(Debug)]
pub struct FwiProperties {
    pub data: Array1<FwiPropertiesElement>,
    pub len: usize,
}

pub struct FwiCellPropertiesContainer {
    pub lons: Vec<f32>,
    pub lats: Vec<f32>,
}

impl FwiProperties {
    pub fn new(props: FwiCellPropertiesContainer) -> Self {
        let data: Array1<FwiPropertiesElement> = props
            .lons
            .into_iter()
            .zip(props.lats)
            .map(|(lon, lat)| FwiPropertiesElement { lon, lat })
            .collect();

        let len = data.len();
        Self { data, len }
    }

    pub fn get_coords(&self) -> (Vec<f32>, Vec<f32>) {
        let lats: Vec<f32> = self.data.iter().map(|p| p.lat).collect();
        let lons: Vec<f32> = self.data.iter().map(|p| p.lon).collect();
        (lats, lons)
    }
}

// STATE
#[derive(Debug)]
pub struct FwiState {
    pub time: DateTime<Utc>,
    pub data: Array1<MoistureState>,
    len: usize,
    config: FwiModelConfig,
}

impl FwiState {
    /// Create a new state from per-cell seed codes.
    pub fn new(seed: &[MoistureState], time: &DateTime<Utc>, config: FwiModelConfig) -> FwiState {
        let data = Array1::from_vec(seed.to_vec());

        FwiState {
            time: *time,
            data,
            len: seed.len(),
            config,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn update_state(&mut self, props: &FwiProperties, input: &Input) {
        let time = &self.time;
        Zip::from(&mut self.data)
            .and(&props.data)
            .and(&input.data)
            .par_for_each(|state, props, input_data| {
                update_state_fn(state, props, input_data, time, &self.config)
            });
    }

    pub fn get_output(self: &FwiState, input: &Input) -> Output {
        let time = &self.time;

        let output_data = Zip::from(&self.data)
            .and(&input.data)
            .par_map_collect(|state, input| get_output_fn(state, input, &self.config));

        Output::new(*time, output_data)
    }

    /// Advance the cells one day.
    pub fn update(&mut self, props: &FwiProperties, input: &Input) {
        let new_time = &input.time;
        self.time = *new_time;
        self.update_state(props, input);
    }

    pub fn output(&self, input: &Input) -> Output {
        self.get_output(input)
    }
}
