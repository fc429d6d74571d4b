use std::f32::consts::PI;

use super::{
    config::{CrownFireModel, FbpModelConfig, WindEffectModel},
    constants::*,
    fuel::{FuelCatalogue, FuelCode, FuelTypeParameters, FUEL_CATALOGUE},
    models::{FbpAuxInputs, FireBehaviorOutputs, FireDescription},
};
use crate::error::FireDangerError;
use crate::modules::fwi::constants::{ISI_A0, ISI_A5, ISI_FBP_W2};
use crate::modules::fwi::functions::{fine_fuel_moisture_function, initial_spread_index};
use crate::modules::fwi::models::{FwiIndices, MoistureState};

/// Foliar moisture content estimated from position and day of year,
/// Eqs. 1-4. Longitude is positive west.
pub fn foliar_moisture(
    latitude: f32,
    longitude: f32,
    elevation: Option<f32>,
    day_of_year: u32,
) -> f32 {
    let d0 = match elevation {
        Some(elev) => {
            let latn = FMC_ELAT1 + FMC_ELAT2 * f32::exp(-FMC_ELAT3 * (FMC_LON0 - longitude));
            FMC_D0_2 * (latitude / latn) + FMC_D0_ELEV * elev
        }
        None => {
            let latn = FMC_LAT1 + FMC_LAT2 * f32::exp(-FMC_LAT3 * (FMC_LON0 - longitude));
            FMC_D0_1 * (latitude / latn)
        }
    };
    let nd = (day_of_year as f32 - d0.round()).abs();
    if nd < FMC_ND1 {
        FMC_C1 + FMC_C2 * nd * nd
    } else if nd < FMC_ND2 {
        FMC_C3 + FMC_C4 * nd - FMC_C5 * nd * nd
    } else {
        FMC_MAX
    }
}

/// Surface fuel consumption per fuel type, Eqs. 9-25.
pub fn surface_fuel_consumption(
    code: FuelCode,
    ffmc: f32,
    bui: f32,
    percent_conifer: f32,
    grass_fuel_load: f32,
) -> f32 {
    let sfc = match code {
        FuelCode::C1 => {
            if ffmc > 84.0 {
                0.75 + 0.75 * (1.0 - f32::exp(-0.23 * (ffmc - 84.0))).sqrt()
            } else {
                0.75 - 0.75 * (1.0 - f32::exp(-0.23 * (84.0 - ffmc))).sqrt()
            }
        }
        FuelCode::C2 | FuelCode::M3 | FuelCode::M4 => 5.0 * (1.0 - f32::exp(-0.0115 * bui)),
        FuelCode::C3 | FuelCode::C4 => 5.0 * (1.0 - f32::exp(-0.0164 * bui)).powf(2.24),
        FuelCode::C5 | FuelCode::C6 => 5.0 * (1.0 - f32::exp(-0.0149 * bui)).powf(2.48),
        FuelCode::C7 => {
            let ffc = f32::max(0.0, 2.0 * (1.0 - f32::exp(-0.104 * (ffmc - 70.0))));
            let wfc = 1.5 * (1.0 - f32::exp(-0.0201 * bui));
            ffc + wfc
        }
        FuelCode::D1 => 1.5 * (1.0 - f32::exp(-0.0183 * bui)),
        FuelCode::M1 | FuelCode::M2 => {
            let pc = percent_conifer;
            pc / 100.0 * surface_fuel_consumption(FuelCode::C2, ffmc, bui, pc, grass_fuel_load)
                + (100.0 - pc) / 100.0
                    * surface_fuel_consumption(FuelCode::D1, ffmc, bui, pc, grass_fuel_load)
        }
        FuelCode::O1a | FuelCode::O1b => grass_fuel_load,
        FuelCode::S1 => {
            4.0 * (1.0 - f32::exp(-0.025 * bui)) + 4.0 * (1.0 - f32::exp(-0.034 * bui))
        }
        FuelCode::S2 => {
            10.0 * (1.0 - f32::exp(-0.013 * bui)) + 6.0 * (1.0 - f32::exp(-0.060 * bui))
        }
        FuelCode::S3 => {
            12.0 * (1.0 - f32::exp(-0.0166 * bui)) + 20.0 * (1.0 - f32::exp(-0.0210 * bui))
        }
    };
    f32::max(sfc, ROS_FLOOR)
}

/// Grass curing coefficient, piecewise in the curing fraction.
pub fn curing_coefficient(curing: f32) -> f32 {
    if curing < CURING_SPLIT {
        CURING_A1 * (f32::exp(CURING_A2 * curing) - 1.0)
    } else {
        CURING_A3 + CURING_A4 * (curing - CURING_SPLIT)
    }
}

fn basic_rsi(params: &FuelTypeParameters, isi: f32) -> f32 {
    params.a * (1.0 - f32::exp(-params.b * isi)).powf(params.c)
}

/// Isotropic surface spread rate before the buildup effect, Eqs. 26-30 and
/// 35. Mixedwood types blend the conifer and hardwood components; grass
/// types apply the curing coefficient.
pub fn rate_of_spread_index(
    catalogue: &FuelCatalogue,
    code: FuelCode,
    isi: f32,
    curing: f32,
    percent_conifer: f32,
    percent_dead_fir: f32,
) -> Result<f32, FireDangerError> {
    let rsi = match code {
        FuelCode::M1 | FuelCode::M2 => {
            let c2 = catalogue.lookup(FuelCode::C2)?;
            let d1 = catalogue.lookup(FuelCode::D1)?;
            let pc = percent_conifer;
            let hardwood = if code == FuelCode::M2 {
                HARDWOOD_DAMPING
            } else {
                1.0
            };
            pc / 100.0 * basic_rsi(c2, isi)
                + hardwood * (100.0 - pc) / 100.0 * basic_rsi(d1, isi)
        }
        FuelCode::M3 | FuelCode::M4 => {
            let own = catalogue.lookup(code)?;
            let d1 = catalogue.lookup(FuelCode::D1)?;
            let pdf = percent_dead_fir;
            let hardwood = if code == FuelCode::M4 {
                HARDWOOD_DAMPING
            } else {
                1.0
            };
            pdf / 100.0 * basic_rsi(own, isi)
                + hardwood * (1.0 - pdf / 100.0) * basic_rsi(d1, isi)
        }
        FuelCode::O1a | FuelCode::O1b => {
            let params = catalogue.lookup(code)?;
            basic_rsi(params, isi) * curing_coefficient(curing)
        }
        _ => {
            let params = catalogue.lookup(code)?;
            basic_rsi(params, isi)
        }
    };
    Ok(rsi)
}

/// Buildup effect on the spread rate, Eq. 54.
pub fn buildup_effect(q: f32, bui0: f32, bui: f32) -> f32 {
    if bui > 0.0 && bui0 > 0.0 {
        f32::exp(BE_SCALE * q.ln() * (1.0 / bui - 1.0 / bui0))
    } else {
        1.0
    }
}

/// Spread factor of ground slope, Eq. 39.
pub fn slope_factor(gs: f32) -> f32 {
    if gs >= SLOPE_MAX_GS {
        SLOPE_MAX_FACTOR
    } else {
        f32::exp(SLOPE_A1 * (gs / 100.0).powf(SLOPE_A2))
    }
}

// Inverts the spread curve: the ISI that would produce `rsf`, Eqs. 41-42.
fn invert_spread_curve(params: &FuelTypeParameters, rsf: f32) -> f32 {
    let ratio = 1.0 - (rsf / params.a).powf(1.0 / params.c);
    let ratio = f32::max(ratio, ISF_FLOOR);
    ratio.ln() / (-params.b)
}

/// Slope-equivalent wind speed [km/h], Eqs. 40-43: the zero-wind spread is
/// scaled by the slope factor, pushed back through the fuel curve, and
/// converted to the wind that would cause the same spread.
pub fn slope_equivalent_wind(
    catalogue: &FuelCatalogue,
    code: FuelCode,
    ffmc: f32,
    gs: f32,
    curing: f32,
    percent_conifer: f32,
    percent_dead_fir: f32,
) -> Result<f32, FireDangerError> {
    let sf = slope_factor(gs);
    let ff = fine_fuel_moisture_function(ffmc);
    // zero-wind spread index
    let isz = ISI_A5 * ff;

    let isf = match code {
        FuelCode::M1 | FuelCode::M2 => {
            let c2 = catalogue.lookup(FuelCode::C2)?;
            let d1 = catalogue.lookup(FuelCode::D1)?;
            let pc = percent_conifer;
            let isf_c2 = invert_spread_curve(c2, basic_rsi(c2, isz) * sf);
            let isf_d1 = invert_spread_curve(d1, basic_rsi(d1, isz) * sf);
            pc / 100.0 * isf_c2 + (1.0 - pc / 100.0) * isf_d1
        }
        FuelCode::M3 | FuelCode::M4 => {
            let own = catalogue.lookup(code)?;
            let d1 = catalogue.lookup(FuelCode::D1)?;
            let pdf = percent_dead_fir;
            let isf_own = invert_spread_curve(own, basic_rsi(own, isz) * sf);
            let isf_d1 = invert_spread_curve(d1, basic_rsi(d1, isz) * sf);
            pdf / 100.0 * isf_own + (1.0 - pdf / 100.0) * isf_d1
        }
        FuelCode::O1a | FuelCode::O1b => {
            let params = catalogue.lookup(code)?;
            let cf = curing_coefficient(curing);
            if cf <= 0.0 {
                // fully green grass does not spread, no slope wind either
                return Ok(0.0);
            }
            let rsf = basic_rsi(params, isz) * cf * sf;
            let ratio = 1.0 - (rsf / (cf * params.a)).powf(1.0 / params.c);
            let ratio = f32::max(ratio, ISF_FLOOR);
            ratio.ln() / (-params.b)
        }
        _ => {
            let params = catalogue.lookup(code)?;
            invert_spread_curve(params, basic_rsi(params, isz) * sf)
        }
    };

    // Eq. 43 with the high-wind alternate and cap
    let mut wse = (isf / (ISI_A5 * ff)).ln() / ISI_A0;
    if wse > WSE_THRESHOLD {
        if isf < WSE_B2 * WSE_B1 * ff {
            wse = 28.0 - (1.0 - isf / (WSE_B1 * ff)).ln() / ISI_FBP_W2;
        } else {
            wse = WSE_MAX;
        }
    }
    Ok(wse)
}

fn normalize_azimuth(az: f32) -> f32 {
    az.rem_euclid(360.0)
}

/// Vector sum of the ambient wind and the slope-equivalent wind, Eq. 44.
/// Returns net wind speed [km/h] and net spread azimuth [°].
pub fn net_effective_wind(ws: f32, wind_azimuth: f32, wse: f32, slope_azimuth: f32) -> (f32, f32) {
    let waz = wind_azimuth.to_radians();
    let saz = slope_azimuth.to_radians();
    let wsx = ws * waz.sin() + wse * saz.sin();
    let wsy = ws * waz.cos() + wse * saz.cos();
    let wsv = (wsx * wsx + wsy * wsy).sqrt();
    let raz = if wsv > 0.0 {
        let raz = (wsy / wsv).acos();
        let raz = if wsx < 0.0 { 2.0 * PI - raz } else { raz };
        raz.to_degrees()
    } else {
        0.0
    };
    (wsv, raz)
}

/// Critical surface intensity for crowning, Eq. 56.
pub fn critical_surface_intensity(fmc: f32, cbh: f32) -> f32 {
    CSI_A1 * cbh.powf(CSI_A2) * (CSI_A3 + CSI_A4 * fmc).powf(CSI_A2)
}

/// Surface spread rate at which the critical intensity is reached, Eq. 57.
pub fn surface_fire_threshold(csi: f32, sfc: f32) -> f32 {
    csi / (RSO_DENOM * sfc)
}

/// Crown fraction burned, Eq. 58.
pub fn crown_fraction_burned(ros: f32, rso: f32) -> f32 {
    if ros > rso {
        1.0 - f32::exp(-CFB_A1 * (ros - rso))
    } else {
        0.0
    }
}

/// Foliar moisture effect on the C6 crown spread rate, Eq. 61.
pub fn foliar_moisture_effect(fmc: f32) -> f32 {
    (FME_A1 - FME_A2 * fmc).powi(4) / (CSI_A3 + CSI_A4 * fmc) * 1000.0
}

/// Length-to-breadth ratio of the wind-driven fire ellipse, Eqs. 79-80.
pub fn length_to_breadth(code: FuelCode, wsv: f32) -> f32 {
    if code.is_grass() {
        if wsv >= LB_GRASS_MIN_WSV {
            LB_GRASS_A1 * wsv.powf(LB_GRASS_A2)
        } else {
            1.0
        }
    } else {
        1.0 + LB_A1 * (1.0 - f32::exp(-LB_A2 * wsv)).powf(LB_A3)
    }
}

/// Spread index seen by the back of the fire, Eq. 75.
pub fn back_isi(ffmc: f32, wsv: f32) -> f32 {
    ISI_A5 * f32::exp(-ISI_A0 * wsv) * fine_fuel_moisture_function(ffmc)
}

/// Point-ignition acceleration coefficient, Eq. 72. Open fuel types take
/// the fixed constant; closed canopies slow down with crown involvement.
pub fn acceleration_coefficient(code: FuelCode, cfb: f32) -> f32 {
    match code {
        FuelCode::O1a
        | FuelCode::O1b
        | FuelCode::C1
        | FuelCode::S1
        | FuelCode::S2
        | FuelCode::S3 => ACCEL_OPEN,
        _ => ACCEL_OPEN - ACCEL_CFB1 * cfb.powf(ACCEL_CFB2) * f32::exp(-ACCEL_CFB3 * cfb),
    }
}

/// Spread rate of an accelerating fire at elapsed time, Eq. 70.
pub fn ros_at_time(ros_eq: f32, elapsed: f32, alpha: f32) -> f32 {
    ros_eq * (1.0 - f32::exp(-alpha * elapsed))
}

/// Head distance travelled by an accelerating fire, Eq. 71 integrated.
pub fn spread_distance(ros_eq: f32, elapsed: f32, alpha: f32) -> f32 {
    ros_eq * (elapsed + (f32::exp(-alpha * elapsed) - 1.0) / alpha)
}

/// Area and perimeter of the elliptical fire outline from the three spread
/// distances. Perimeter uses the Ramanujan approximation.
pub fn ellipse_metrics(hdist: f32, fdist: f32, bdist: f32) -> (f32, f32) {
    let semi_major = (hdist + bdist) / 2.0;
    let semi_minor = fdist;
    let area = PI * semi_major * semi_minor;
    let perimeter = PI
        * (3.0 * (semi_major + semi_minor)
            - ((3.0 * semi_major + semi_minor) * (semi_major + 3.0 * semi_minor)).sqrt());
    (area, perimeter)
}

fn validate_fraction(value: Option<f32>, field: &'static str) -> Result<(), FireDangerError> {
    if let Some(v) = value {
        if !(0.0..=100.0).contains(&v) {
            return Err(FireDangerError::InvalidInput { field, value: v });
        }
    }
    Ok(())
}

fn require(
    value: Option<f32>,
    fuel: FuelCode,
    field: &'static str,
) -> Result<f32, FireDangerError> {
    value.ok_or(FireDangerError::MissingRequiredInput {
        fuel: fuel.to_string(),
        field,
    })
}

/// Full behaviour prediction against an explicit catalogue.
pub fn predict_behavior_with(
    catalogue: &FuelCatalogue,
    code: FuelCode,
    state: &MoistureState,
    indices: &FwiIndices,
    aux: &FbpAuxInputs,
    config: &FbpModelConfig,
) -> Result<FireBehaviorOutputs, FireDangerError> {
    let params = catalogue.lookup(code)?;

    if aux.wind_speed < 0.0 {
        return Err(FireDangerError::InvalidInput {
            field: "wind speed",
            value: aux.wind_speed,
        });
    }
    if aux.slope_percent < 0.0 {
        return Err(FireDangerError::InvalidInput {
            field: "slope percent",
            value: aux.slope_percent,
        });
    }
    if aux.elapsed_time < 0.0 {
        return Err(FireDangerError::InvalidInput {
            field: "elapsed time",
            value: aux.elapsed_time,
        });
    }
    validate_fraction(aux.curing, "curing percentage")?;
    validate_fraction(aux.percent_conifer, "percent conifer")?;
    validate_fraction(aux.percent_dead_fir, "percent dead fir")?;
    if let Some(gfl) = aux.grass_fuel_load {
        if gfl < 0.0 {
            return Err(FireDangerError::InvalidInput {
                field: "grass fuel load",
                value: gfl,
            });
        }
    }
    if let Some(fmc) = aux.foliar_moisture {
        if fmc < 0.0 {
            return Err(FireDangerError::InvalidInput {
                field: "foliar moisture content",
                value: fmc,
            });
        }
    }

    let curing = if params.requires_curing {
        require(aux.curing, code, "curing percentage")?
    } else {
        aux.curing.unwrap_or(0.0)
    };
    let pc = if params.requires_percent_conifer {
        require(aux.percent_conifer, code, "percent conifer")?
    } else {
        aux.percent_conifer.unwrap_or(0.0)
    };
    let pdf = if params.requires_percent_dead_fir {
        require(aux.percent_dead_fir, code, "percent dead fir")?
    } else {
        aux.percent_dead_fir.unwrap_or(0.0)
    };
    let gfl = aux.grass_fuel_load.unwrap_or(DEFAULT_GFL);

    let crown_enabled =
        config.crown_model == CrownFireModel::Enabled && params.crown_capable;
    let fmc = if crown_enabled {
        match aux.foliar_moisture {
            Some(v) => v,
            None => match (aux.latitude, aux.longitude, aux.day_of_year) {
                (Some(lat), Some(lon), Some(dj)) => {
                    foliar_moisture(lat, lon, aux.elevation, dj)
                }
                _ => {
                    return Err(FireDangerError::MissingRequiredInput {
                        fuel: code.to_string(),
                        field: "foliar moisture content",
                    })
                }
            },
        }
    } else {
        0.0
    };

    let ffmc = state.ffmc;
    let bui = indices.bui;
    let sfc = surface_fuel_consumption(code, ffmc, bui, pc, gfl);

    // slope-equivalent wind vector-added to the ambient wind
    let (wsv, raz) = if aux.slope_percent > 0.0 {
        let wse = slope_equivalent_wind(catalogue, code, ffmc, aux.slope_percent, curing, pc, pdf)?;
        net_effective_wind(aux.wind_speed, aux.wind_azimuth, wse, aux.slope_azimuth)
    } else {
        (aux.wind_speed, normalize_azimuth(aux.wind_azimuth))
    };

    let isi_head = initial_spread_index(ffmc, wsv, true);
    let be = buildup_effect(params.q, params.bui0, bui);
    let rsi = rate_of_spread_index(catalogue, code, isi_head, curing, pc, pdf)?;

    let (ros_eq, cfb) = if code == FuelCode::C6 {
        // C6 blends a surface and a crown spread rate through the crown
        // fraction burned
        let rss = f32::max(rsi * be, ROS_FLOOR);
        if crown_enabled {
            let csi = critical_surface_intensity(fmc, params.cbh);
            let rso = surface_fire_threshold(csi, sfc);
            let fme = foliar_moisture_effect(fmc);
            let rsc = C6_RSC_A1 * (1.0 - f32::exp(-C6_RSC_A2 * isi_head)) * fme / FME_AVG;
            if rsc > rss {
                let cfb = crown_fraction_burned(rss, rso);
                (rss + cfb * (rsc - rss), cfb)
            } else {
                (rss, 0.0)
            }
        } else {
            (rss, 0.0)
        }
    } else {
        let ros = f32::max(rsi * be, ROS_FLOOR);
        if crown_enabled {
            let csi = critical_surface_intensity(fmc, params.cbh);
            let rso = surface_fire_threshold(csi, sfc);
            (ros, crown_fraction_burned(ros, rso))
        } else {
            (ros, 0.0)
        }
    };

    let cfc = if crown_enabled {
        let scale = match code {
            FuelCode::M1 | FuelCode::M2 => pc / 100.0,
            FuelCode::M3 | FuelCode::M4 => pdf / 100.0,
            _ => 1.0,
        };
        params.cfl * cfb * scale
    } else {
        0.0
    };
    let tfc = sfc + cfc;

    // backing fire spreads as a surface fire against the wind
    let bisi = back_isi(ffmc, wsv);
    let brsi = rate_of_spread_index(catalogue, code, bisi, curing, pc, pdf)?;
    let bros_eq = f32::max(brsi * be, ROS_FLOOR);
    let lb_eq = length_to_breadth(code, wsv);

    let alpha = acceleration_coefficient(code, cfb);
    let t = aux.elapsed_time;
    let (hros, bros, lb, hdist, bdist) = match config.wind_effect {
        WindEffectModel::Instantaneous => {
            let growth = 1.0 - f32::exp(-alpha * t);
            (
                ros_at_time(ros_eq, t, alpha),
                ros_at_time(bros_eq, t, alpha),
                1.0 + (lb_eq - 1.0) * growth,
                spread_distance(ros_eq, t, alpha),
                spread_distance(bros_eq, t, alpha),
            )
        }
        WindEffectModel::Equilibrium => (ros_eq, bros_eq, lb_eq, ros_eq * t, bros_eq * t),
    };
    let fros = (hros + bros) / (2.0 * lb);
    let fdist = (hdist + bdist) / (2.0 * lb);
    let (area, perimeter) = ellipse_metrics(hdist, fdist, bdist);

    let hfi = FI_COEFF * tfc * hros;
    let fire_description = if cfb < CFB_SURFACE {
        FireDescription::Surface
    } else if cfb < CFB_CROWN {
        FireDescription::IntermittentCrown
    } else {
        FireDescription::Crown
    };

    Ok(FireBehaviorOutputs {
        hros,
        fros,
        bros,
        wsv,
        raz,
        sfc,
        cfc,
        tfc,
        cfb,
        fire_description,
        hfi,
        lb,
        hdist,
        fdist,
        bdist,
        area,
        perimeter,
    })
}

/// Behaviour prediction against the process-wide catalogue.
pub fn predict_behavior(
    state: &MoistureState,
    indices: &FwiIndices,
    code: FuelCode,
    aux: &FbpAuxInputs,
    config: &FbpModelConfig,
) -> Result<FireBehaviorOutputs, FireDangerError> {
    predict_behavior_with(&FUEL_CATALOGUE, code, state, indices, aux, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::fwi::functions::{buildup_index, compute_fwi};

    fn state() -> MoistureState {
        MoistureState {
            ffmc: 92.0,
            dmc: 45.0,
            dc: 300.0,
        }
    }

    fn indices() -> FwiIndices {
        compute_fwi(&state(), 20.0).unwrap()
    }

    fn aux() -> FbpAuxInputs {
        FbpAuxInputs {
            wind_speed: 20.0,
            wind_azimuth: 90.0,
            foliar_moisture: Some(97.0),
            ..Default::default()
        }
    }

    #[test]
    fn grass_without_curing_is_rejected() {
        let err =
            predict_behavior(&state(), &indices(), FuelCode::O1a, &aux(), &Default::default())
                .unwrap_err();
        assert_eq!(
            err,
            FireDangerError::MissingRequiredInput {
                fuel: "O1a".to_string(),
                field: "curing percentage"
            }
        );
    }

    #[test]
    fn mixedwood_without_percent_conifer_is_rejected() {
        let err =
            predict_behavior(&state(), &indices(), FuelCode::M1, &aux(), &Default::default())
                .unwrap_err();
        assert_eq!(
            err,
            FireDangerError::MissingRequiredInput {
                fuel: "M1".to_string(),
                field: "percent conifer"
            }
        );
    }

    #[test]
    fn crown_type_without_foliar_moisture_is_rejected() {
        let mut inputs = aux();
        inputs.foliar_moisture = None;
        let err =
            predict_behavior(&state(), &indices(), FuelCode::C2, &inputs, &Default::default())
                .unwrap_err();
        assert_eq!(
            err,
            FireDangerError::MissingRequiredInput {
                fuel: "C2".to_string(),
                field: "foliar moisture content"
            }
        );
    }

    #[test]
    fn out_of_range_curing_is_rejected() {
        let mut inputs = aux();
        inputs.curing = Some(120.0);
        let err =
            predict_behavior(&state(), &indices(), FuelCode::O1b, &inputs, &Default::default())
                .unwrap_err();
        assert_eq!(
            err,
            FireDangerError::InvalidInput {
                field: "curing percentage",
                value: 120.0
            }
        );
    }

    #[test]
    fn intensity_follows_spread_and_consumption() {
        let out =
            predict_behavior(&state(), &indices(), FuelCode::C2, &aux(), &Default::default())
                .unwrap();
        assert!(out.hros > 0.0);
        assert!(out.tfc >= out.sfc);
        let expected = FI_COEFF * out.tfc * out.hros;
        assert!((out.hfi - expected).abs() < 1e-3 * expected.max(1.0));
    }

    #[test]
    fn wind_speeds_up_the_head_fire() {
        let mut calm = aux();
        calm.wind_speed = 0.0;
        let slow =
            predict_behavior(&state(), &indices(), FuelCode::C3, &calm, &Default::default())
                .unwrap();
        let fast =
            predict_behavior(&state(), &indices(), FuelCode::C3, &aux(), &Default::default())
                .unwrap();
        assert!(fast.hros > slow.hros);
    }

    #[test]
    fn no_wind_no_slope_is_isotropic() {
        let mut inputs = aux();
        inputs.wind_speed = 0.0;
        let out =
            predict_behavior(&state(), &indices(), FuelCode::C5, &inputs, &Default::default())
                .unwrap();
        assert_eq!(out.lb, 1.0);
        assert_eq!(out.hros, out.bros);
        assert_eq!(out.hros, out.fros);
    }

    #[test]
    fn slope_pushes_the_fire_uphill() {
        let flat =
            predict_behavior(&state(), &indices(), FuelCode::C7, &aux(), &Default::default())
                .unwrap();
        let mut inputs = aux();
        inputs.slope_percent = 40.0;
        inputs.slope_azimuth = 90.0; // aligned with the wind
        let steep =
            predict_behavior(&state(), &indices(), FuelCode::C7, &inputs, &Default::default())
                .unwrap();
        assert!(steep.wsv > flat.wsv);
        assert!(steep.hros > flat.hros);
    }

    #[test]
    fn disabling_the_crown_model_zeroes_crown_outputs() {
        let config = FbpModelConfig::new("equilibrium", "disabled");
        let out = predict_behavior(&state(), &indices(), FuelCode::C2, &aux(), &config).unwrap();
        assert_eq!(out.cfb, 0.0);
        assert_eq!(out.cfc, 0.0);
        assert_eq!(out.tfc, out.sfc);
        assert_eq!(out.fire_description, FireDescription::Surface);
    }

    #[test]
    fn vigorous_conditions_crown_the_fire() {
        let hot = MoistureState {
            ffmc: 96.0,
            dmc: 80.0,
            dc: 500.0,
        };
        let idx = compute_fwi(&hot, 40.0).unwrap();
        let mut inputs = aux();
        inputs.wind_speed = 40.0;
        let out =
            predict_behavior(&hot, &idx, FuelCode::C2, &inputs, &Default::default()).unwrap();
        assert!(out.cfb > 0.1);
        assert!(out.tfc > out.sfc);
        assert_ne!(out.fire_description, FireDescription::Surface);
    }

    #[test]
    fn instantaneous_model_lags_equilibrium() {
        let eq_config = FbpModelConfig::new("equilibrium", "enabled");
        let inst_config = FbpModelConfig::new("instantaneous", "enabled");
        let eq = predict_behavior(&state(), &indices(), FuelCode::C4, &aux(), &eq_config).unwrap();
        let inst =
            predict_behavior(&state(), &indices(), FuelCode::C4, &aux(), &inst_config).unwrap();
        assert!(inst.hros < eq.hros);
        assert!(inst.hdist < eq.hdist);
    }

    #[test]
    fn ellipse_grows_with_time() {
        let mut early = aux();
        early.elapsed_time = 30.0;
        let mut late = aux();
        late.elapsed_time = 120.0;
        let small =
            predict_behavior(&state(), &indices(), FuelCode::C3, &early, &Default::default())
                .unwrap();
        let large =
            predict_behavior(&state(), &indices(), FuelCode::C3, &late, &Default::default())
                .unwrap();
        assert!(small.area > 0.0);
        assert!(large.area > small.area);
        assert!(large.perimeter > small.perimeter);
    }

    #[test]
    fn cured_grass_burns_green_grass_barely() {
        let mut cured = aux();
        cured.curing = Some(95.0);
        let mut green = aux();
        green.curing = Some(10.0);
        let fast =
            predict_behavior(&state(), &indices(), FuelCode::O1b, &cured, &Default::default())
                .unwrap();
        let slow =
            predict_behavior(&state(), &indices(), FuelCode::O1b, &green, &Default::default())
                .unwrap();
        assert!(fast.hros > slow.hros);
        assert!(slow.hros < 1.0);
    }

    #[test]
    fn foliar_moisture_curve_branches() {
        // at the date of minimum the foliar moisture bottoms out at 85
        let at_min = foliar_moisture(46.0, 81.0, None, 141);
        assert!((at_min - 85.0).abs() < 1.0);
        // far from the minimum it saturates at 120
        let far = foliar_moisture(46.0, 81.0, None, 300);
        assert_eq!(far, 120.0);
    }

    #[test]
    fn curing_coefficient_is_continuous_at_split() {
        let below = curing_coefficient(58.799);
        let above = curing_coefficient(58.801);
        assert!((below - above).abs() < 1e-3);
    }

    #[test]
    fn buildup_effect_is_one_at_reference() {
        let be = buildup_effect(0.7, 64.0, 64.0);
        assert!((be - 1.0).abs() < 1e-6);
        // drier than the reference speeds the fire up
        assert!(buildup_effect(0.7, 64.0, 120.0) > 1.0);
        assert!(buildup_effect(0.7, 64.0, 30.0) < 1.0);
    }

    #[test]
    fn determinism() {
        let a = predict_behavior(&state(), &indices(), FuelCode::C6, &aux(), &Default::default())
            .unwrap();
        let b = predict_behavior(&state(), &indices(), FuelCode::C6, &aux(), &Default::default())
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn bui_zero_means_no_buildup_effect() {
        let zeroed = MoistureState {
            ffmc: 92.0,
            dmc: 0.0,
            dc: 0.0,
        };
        assert_eq!(buildup_index(zeroed.dmc, zeroed.dc), 0.0);
        let idx = compute_fwi(&zeroed, 20.0).unwrap();
        let out =
            predict_behavior(&zeroed, &idx, FuelCode::C3, &aux(), &Default::default()).unwrap();
        assert!(out.hros > 0.0);
    }
}
