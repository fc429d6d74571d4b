//! Core numerical engines of the Canadian Forest Fire Danger Rating System:
//! the Fire Weather Index (FWI) System and the Fire Behaviour Prediction
//! (FBP) System, in scalar, table and raster form.

pub mod batch;
pub mod constants;
pub mod error;
pub mod models;
pub mod modules;

pub use error::FireDangerError;
pub use modules::fbp::config::{CrownFireModel, FbpModelConfig, WindEffectModel};
pub use modules::fbp::fuel::{FuelCatalogue, FuelCode, FuelTypeParameters, FUEL_CATALOGUE};
pub use modules::fbp::functions::predict_behavior;
pub use modules::fbp::models::{FbpAuxInputs, FireBehaviorOutputs, FireDescription};
pub use modules::fwi::config::FwiModelConfig;
pub use modules::fwi::functions::{compute_fwi, hourly_ffmc, update_moisture};
pub use modules::fwi::models::{DailyWeatherObservation, FwiIndices, MoistureState};
