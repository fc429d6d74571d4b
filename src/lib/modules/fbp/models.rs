use std::sync::Arc;

use chrono::{DateTime, Datelike, Utc};
use ndarray::{Array1, Zip};
use serde_derive::{Deserialize, Serialize};

use crate::constants::NODATAVAL;
use crate::models::{input::Input, output::Output, output::OutputElement};
use crate::modules::fwi::models::{FwiIndices, MoistureState};

use super::{
    config::FbpModelConfig,
    fuel::{FuelTypeParameters, FUEL_CATALOGUE},
    functions::predict_behavior_with,
};

/// Auxiliary inputs of the behaviour prediction, beyond the fire weather.
/// Azimuths are in degrees; `slope_azimuth` is the upslope direction.
#[derive(Debug, Clone, Copy)]
pub struct FbpAuxInputs {
    /// 10 m open wind speed [km/h]
    pub wind_speed: f32,
    /// azimuth the wind blows towards [°]
    pub wind_azimuth: f32,
    /// ground slope [%], >= 0
    pub slope_percent: f32,
    /// upslope azimuth [°]
    pub slope_azimuth: f32,
    /// grass curing [%], required by grass fuel types
    pub curing: Option<f32>,
    /// percent conifer [%], required by M1/M2
    pub percent_conifer: Option<f32>,
    /// percent dead balsam fir [%], required by M3/M4
    pub percent_dead_fir: Option<f32>,
    /// grass fuel load [kg/m²], defaults to 0.35
    pub grass_fuel_load: Option<f32>,
    /// foliar moisture content [%]; when absent it is estimated from
    /// latitude/longitude/elevation and day of year
    pub foliar_moisture: Option<f32>,
    /// latitude [°] for the foliar moisture estimate
    pub latitude: Option<f32>,
    /// longitude [°], positive west, for the foliar moisture estimate
    pub longitude: Option<f32>,
    /// elevation [m] for the foliar moisture estimate
    pub elevation: Option<f32>,
    /// day of year, 1-366, for the foliar moisture estimate
    pub day_of_year: Option<u32>,
    /// elapsed time since ignition [min]
    pub elapsed_time: f32,
}

impl Default for FbpAuxInputs {
    fn default() -> Self {
        Self {
            wind_speed: 0.0,
            wind_azimuth: 0.0,
            slope_percent: 0.0,
            slope_azimuth: 0.0,
            curing: None,
            percent_conifer: None,
            percent_dead_fir: None,
            grass_fuel_load: None,
            foliar_moisture: None,
            latitude: None,
            longitude: None,
            elevation: None,
            day_of_year: None,
            elapsed_time: 60.0,
        }
    }
}

/// Surface / intermittent crown / crown classification by crown fraction
/// burned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FireDescription {
    Surface,
    IntermittentCrown,
    Crown,
}

/// Quantitative fire behaviour at a point for one time step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FireBehaviorOutputs {
    /// head rate of spread [m/min]
    pub hros: f32,
    /// flank rate of spread [m/min]
    pub fros: f32,
    /// back rate of spread [m/min]
    pub bros: f32,
    /// net effective wind speed [km/h]
    pub wsv: f32,
    /// net spread azimuth [°]
    pub raz: f32,
    /// surface fuel consumption [kg/m²]
    pub sfc: f32,
    /// crown fuel consumption [kg/m²]
    pub cfc: f32,
    /// total fuel consumption [kg/m²]
    pub tfc: f32,
    /// crown fraction burned [0-1]
    pub cfb: f32,
    pub fire_description: FireDescription,
    /// head fireline intensity [kW/m]
    pub hfi: f32,
    /// length-to-breadth ratio of the fire ellipse
    pub lb: f32,
    /// head spread distance at elapsed time [m]
    pub hdist: f32,
    /// flank spread distance at elapsed time [m]
    pub fdist: f32,
    /// back spread distance at elapsed time [m]
    pub bdist: f32,
    /// elliptical burned area at elapsed time [m²]
    pub area: f32,
    /// elliptical perimeter at elapsed time [m]
    pub perimeter: f32,
}

// CELLS PROPERTIES
#[derive(Debug)]
pub struct FbpPropertiesElement {
    pub lon: f32,
    pub lat: f32,
    /// elevation [m], NODATAVAL when unknown
    pub elevation: f32,
    /// ground slope [%]
    pub slope: f32,
    /// downslope-facing aspect [°]
    pub aspect: f32,
    pub fuel: Arc<FuelTypeParameters>,
    /// percent conifer [%], mixedwood cells
    pub percent_conifer: f32,
    /// percent dead balsam fir [%], dead-fir mixedwood cells
    pub percent_dead_fir: f32,
    /// grass fuel load [kg/m²], grass cells
    pub grass_fuel_load: f32,
}

#[derive(Debug)]
pub struct FbpProperties {
    pub data: Array1<FbpPropertiesElement>,
    pub len: usize,
}

impl FbpProperties {
    pub fn new(data: Vec<FbpPropertiesElement>) -> Self {
        let len = data.len();
        Self {
            data: Array1::from_vec(data),
            len,
        }
    }
}

fn optional(value: f32) -> Option<f32> {
    if value == NODATAVAL {
        None
    } else {
        Some(value)
    }
}

/// Element-wise behaviour prediction over co-registered cells. Stateless:
/// every output is freshly computed from the cell's indices and weather.
pub fn get_output_fn(
    props: &FbpPropertiesElement,
    state: &MoistureState,
    indices: &FwiIndices,
    input: &crate::models::input::InputElement,
    time: &DateTime<Utc>,
    config: &FbpModelConfig,
) -> OutputElement {
    if input.wind_speed == NODATAVAL || input.wind_dir == NODATAVAL {
        return OutputElement::default();
    }

    let aux = FbpAuxInputs {
        wind_speed: input.wind_speed,
        wind_azimuth: input.wind_dir,
        slope_percent: if props.slope == NODATAVAL { 0.0 } else { props.slope },
        // fire runs upslope
        slope_azimuth: if props.aspect == NODATAVAL {
            0.0
        } else {
            (props.aspect + 180.0) % 360.0
        },
        curing: optional(input.curing),
        percent_conifer: optional(props.percent_conifer),
        percent_dead_fir: optional(props.percent_dead_fir),
        grass_fuel_load: optional(props.grass_fuel_load),
        foliar_moisture: optional(input.foliar_moisture),
        latitude: Some(props.lat),
        longitude: Some(props.lon),
        elevation: optional(props.elevation),
        day_of_year: Some(time.ordinal()),
        elapsed_time: config.elapsed_time,
    };

    match predict_behavior_with(&FUEL_CATALOGUE, props.fuel.code, state, indices, &aux, config) {
        Ok(behavior) => OutputElement {
            ffmc: state.ffmc,
            dmc: state.dmc,
            dc: state.dc,
            isi: indices.isi,
            bui: indices.bui,
            fwi: indices.fwi,
            dsr: indices.dsr,
            hros: behavior.hros,
            fros: behavior.fros,
            bros: behavior.bros,
            cfb: behavior.cfb,
            sfc: behavior.sfc,
            tfc: behavior.tfc,
            hfi: behavior.hfi,
            lb: behavior.lb,
            area: behavior.area,
            perimeter: behavior.perimeter,
            wsv: behavior.wsv,
            raz: behavior.raz,
            temperature: input.temperature,
            rain: input.rain,
            wind_speed: input.wind_speed,
            humidity: input.humidity,
        },
        Err(_) => OutputElement::default(),
    }
}

/// Stateless FBP pass over all cells.
pub fn run_cells(
    props: &FbpProperties,
    states: &Array1<MoistureState>,
    indices: &Array1<FwiIndices>,
    input: &Input,
    config: &FbpModelConfig,
) -> Output {
    let time = &input.time;
    let output_data = Zip::from(&props.data)
        .and(states)
        .and(indices)
        .and(&input.data)
        .par_map_collect(|props, state, idx, input_data| {
            get_output_fn(props, state, idx, input_data, time, config)
        });

    Output::new(*time, output_data)
}
