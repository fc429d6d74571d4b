use chrono::{DateTime, Datelike, Utc};

use super::{
    config::FwiModelConfig,
    constants::*,
    models::{DailyWeatherObservation, FwiIndices, FwiPropertiesElement, MoistureState},
};
use crate::{
    constants::NODATAVAL,
    error::FireDangerError,
    models::{input::InputElement, output::OutputElement},
};

// FFMC MODULE
pub fn from_ffmc_to_moisture(ffmc: f32) -> f32 {
    FFMC_S1 * (FFMC_MAX - ffmc) / (FFMC_S2 + ffmc)
}

pub fn from_moisture_to_ffmc(moisture: f32) -> f32 {
    FFMC_S2 * (FFMC_MAX_MOISTURE - moisture) / (FFMC_S1 + moisture)
}

/// Rain effect on the fine fuel moisture, Eqs. 2, 3a and 3b.
/// Only called above the canopy-interception threshold.
pub fn moisture_rain_effect(moisture: f32, rain: f32) -> f32 {
    let rain_eff = rain - FFMC_MIN_RAIN;
    let mut moisture_new = moisture
        + FFMC_R1
            * rain_eff
            * f32::exp(-100.0 / (251.0 - moisture))
            * (1.0 - f32::exp(-FFMC_R2 / rain_eff));
    // super-saturation term for litter already wetter than 150%
    if moisture > FFMC_SAT_COND {
        moisture_new += FFMC_R3 * (moisture - FFMC_SAT_COND).powi(2) * rain_eff.sqrt();
    }
    // pine litter moisture does not exceed 250%
    f32::min(moisture_new, FFMC_MAX_MOISTURE)
}

/// Daily Fine Fuel Moisture Code update, Van Wagner & Pickett (1985) Eqs. 1-10.
pub fn update_ffmc(ffmc: f32, temp: f32, hum: f32, w_speed: f32, rain: f32) -> f32 {
    let mut moisture = from_ffmc_to_moisture(ffmc);
    if rain > FFMC_MIN_RAIN {
        moisture = moisture_rain_effect(moisture, rain);
    }
    // equilibrium moisture content from drying (Eq. 4) and wetting (Eq. 5)
    let emc_dry = FFMC_A1D * hum.powf(FFMC_A2D)
        + FFMC_A3D * f32::exp((hum - 100.0) / 10.0)
        + FFMC_A4 * (FFMC_TNORM - temp) * (1.0 - f32::exp(-FFMC_A5 * hum));
    let emc_wet = FFMC_A1W * hum.powf(FFMC_A2W)
        + FFMC_A3W * f32::exp((hum - 100.0) / 10.0)
        + FFMC_A4 * (FFMC_TNORM - temp) * (1.0 - f32::exp(-FFMC_A5 * hum));

    let moisture_new = if moisture > emc_dry {
        // drying process, Eqs. 6a, 6b, 9
        let k0 = FFMC_B1 * (1.0 - (hum / 100.0).powf(FFMC_B2))
            + FFMC_B3 * w_speed.sqrt() * (1.0 - (hum / 100.0).powf(FFMC_B4));
        let k = FFMC_B5 * k0 * f32::exp(FFMC_B6 * temp);
        emc_dry + (moisture - emc_dry) * f32::powf(10.0, -k)
    } else if moisture < emc_wet {
        // wetting process, Eqs. 7a, 7b, 8
        let k0 = FFMC_B1 * (1.0 - ((100.0 - hum) / 100.0).powf(FFMC_B2))
            + FFMC_B3 * w_speed.sqrt() * (1.0 - ((100.0 - hum) / 100.0).powf(FFMC_B4));
        let k = FFMC_B5 * k0 * f32::exp(FFMC_B6 * temp);
        emc_wet - (emc_wet - moisture) * f32::powf(10.0, -k)
    } else {
        // between the two equilibria the moisture does not move
        moisture
    };

    let ffmc_new = from_moisture_to_ffmc(moisture_new);
    f32::max(0.0, f32::min(FFMC_MAX, ffmc_new))
}

/// Hourly Fine Fuel Moisture Code, Van Wagner (1977) as updated by the
/// Canadian Forest Service. `time_step` is in hours; the rain effect applies
/// to any non-zero precipitation in the step. Standalone variant: it does
/// not feed the daily recursion.
pub fn hourly_ffmc(
    ffmc: f32,
    temp: f32,
    hum: f32,
    w_speed: f32,
    rain: f32,
    time_step: f32,
) -> Result<f32, FireDangerError> {
    if !(0.0..=100.0).contains(&hum) {
        return Err(FireDangerError::InvalidObservation {
            field: "humidity",
            value: hum,
        });
    }
    if w_speed < 0.0 {
        return Err(FireDangerError::InvalidObservation {
            field: "wind speed",
            value: w_speed,
        });
    }
    if rain < 0.0 {
        return Err(FireDangerError::InvalidObservation {
            field: "rain",
            value: rain,
        });
    }
    if time_step <= 0.0 {
        return Err(FireDangerError::InvalidObservation {
            field: "time step",
            value: time_step,
        });
    }

    let mut moisture = HFFMC_S1 * (FFMC_MAX - ffmc) / (FFMC_S2 + ffmc);
    if rain > 0.0 {
        let mut moisture_new = moisture
            + FFMC_R1 * rain * f32::exp(-100.0 / (251.0 - moisture))
                * (1.0 - f32::exp(-FFMC_R2 / rain));
        if moisture > FFMC_SAT_COND {
            moisture_new += FFMC_R3 * (moisture - FFMC_SAT_COND).powi(2) * rain.sqrt();
        }
        moisture = f32::min(moisture_new, FFMC_MAX_MOISTURE);
    }

    let emc_dry = FFMC_A1D * hum.powf(FFMC_A2D)
        + FFMC_A3D * f32::exp((hum - 100.0) / 10.0)
        + FFMC_A4 * (FFMC_TNORM - temp) * (1.0 - f32::exp(-FFMC_A5 * hum));
    let emc_wet = FFMC_A1W * hum.powf(FFMC_A2W)
        + FFMC_A3W * f32::exp((hum - 100.0) / 10.0)
        + FFMC_A4 * (FFMC_TNORM - temp) * (1.0 - f32::exp(-FFMC_A5 * hum));

    let moisture_new = if moisture > emc_dry {
        let k0 = FFMC_B1 * (1.0 - (hum / 100.0).powf(FFMC_B2))
            + FFMC_B3 * w_speed.sqrt() * (1.0 - (hum / 100.0).powf(FFMC_B4));
        let k = k0 * HFFMC_B5 * f32::exp(FFMC_B6 * temp);
        emc_dry + (moisture - emc_dry) * f32::powf(10.0, -k * time_step)
    } else if moisture < emc_wet {
        let k0 = FFMC_B1 * (1.0 - ((100.0 - hum) / 100.0).powf(FFMC_B2))
            + FFMC_B3 * w_speed.sqrt() * (1.0 - ((100.0 - hum) / 100.0).powf(FFMC_B4));
        let k = k0 * HFFMC_B5 * f32::exp(FFMC_B6 * temp);
        emc_wet - (emc_wet - moisture) * f32::powf(10.0, -k * time_step)
    } else {
        moisture
    };

    let ffmc_new = FFMC_S2 * (FFMC_MAX_MOISTURE - moisture_new) / (HFFMC_S1 + moisture_new);
    Ok(f32::max(ffmc_new, 0.0))
}

// DMC MODULE

/// Day-length factor for the DMC drying rate, selected by latitude band.
pub fn dmc_day_length_factor(latitude: f32, month: u32) -> f32 {
    let idx = (month - 1) as usize;
    if latitude > 30.0 {
        DMC_ELL_46N[idx]
    } else if latitude > 10.0 {
        DMC_ELL_20N[idx]
    } else if latitude > -10.0 {
        DMC_ELL_EQUATOR
    } else if latitude > -30.0 {
        DMC_ELL_20S[idx]
    } else {
        DMC_ELL_40S[idx]
    }
}

/// Rain effect on the duff layer, Eqs. 11-15.
pub fn dmc_rain_effect(dmc: f32, rain: f32) -> f32 {
    // net rain reaching the duff
    let re = DMC_R1 * rain - DMC_R2;
    let wmi = DMC_W1 + DMC_W2 / f32::exp(DMC_W3 * dmc);
    let b = if dmc <= DMC_A1 {
        DMC_B1 / (DMC_B2 + DMC_B3 * dmc)
    } else if dmc <= DMC_A2 {
        DMC_B4 - DMC_B5 * dmc.ln()
    } else {
        DMC_B6 * dmc.ln() - DMC_B7
    };
    // moisture content after rain
    let wmr = wmi + 1000.0 * re / (DMC_R3 + b * re);
    let pr = DMC_R4 * (DMC_R5 - (wmr - DMC_W1).ln());
    f32::max(pr, 0.0)
}

/// Daily Duff Moisture Code update, Eqs. 11-17.
pub fn update_dmc(
    dmc: f32,
    rain: f32,
    temp: f32,
    hum: f32,
    latitude: f32,
    month: u32,
    lat_adjust: bool,
) -> f32 {
    let pr = if rain > DMC_MIN_RAIN {
        dmc_rain_effect(dmc, rain)
    } else {
        dmc
    };
    // no drying below the temperature floor
    let temp = f32::max(temp, DMC_MIN_TEMP);
    let l_e = if lat_adjust {
        dmc_day_length_factor(latitude, month)
    } else {
        DMC_ELL_46N[(month - 1) as usize]
    };
    let rk = DMC_T1 * (temp + DMC_T2) * (100.0 - hum) * l_e * 1e-4;
    f32::max(pr + rk, 0.0)
}

// DC MODULE

/// Day-length factor for the DC evapotranspiration term.
pub fn dc_day_length_factor(latitude: f32, month: u32) -> f32 {
    let idx = (month - 1) as usize;
    if latitude > 20.0 {
        DC_FL_NORTH[idx]
    } else if latitude > -20.0 {
        DC_FL_EQUATOR
    } else {
        DC_FL_SOUTH[idx]
    }
}

/// Rain effect on the deep duff layer, Eqs. 18-21.
pub fn dc_rain_effect(dc: f32, rain: f32) -> f32 {
    let rw = DC_R1 * rain - DC_R2;
    let q0 = DC_Q1 * f32::exp(-dc / DC_Q2);
    let dr = dc - DC_Q2 * (1.0 + DC_R5 * rw / q0).ln();
    f32::max(dr, 0.0)
}

/// Daily Drought Code update, Eqs. 18-23.
pub fn update_dc(
    dc: f32,
    rain: f32,
    temp: f32,
    latitude: f32,
    month: u32,
    lat_adjust: bool,
) -> f32 {
    let dr = if rain > DC_MIN_RAIN {
        dc_rain_effect(dc, rain)
    } else {
        dc
    };
    let temp = f32::max(temp, DC_MIN_TEMP);
    let l_f = if lat_adjust {
        dc_day_length_factor(latitude, month)
    } else {
        DC_FL_NORTH[(month - 1) as usize]
    };
    // potential evapotranspiration, capped at zero for winter values
    let pe = f32::max((DC_T1 * (temp + DC_T2) + l_f) / 2.0, 0.0);
    f32::max(dr + pe, 0.0)
}

// ISI MODULE

/// Fine fuel moisture function f(F), Eq. 25.
pub fn fine_fuel_moisture_function(ffmc: f32) -> f32 {
    let moisture = from_ffmc_to_moisture(ffmc);
    ISI_A1 * f32::exp(ISI_A2 * moisture) * (1.0 + moisture.powf(ISI_A3) / ISI_A4)
}

/// Initial Spread Index, Eqs. 24-26. With `fbp_mod` the wind function
/// switches to Eq. 53a of FCFDG (1992) at high wind speeds.
pub fn initial_spread_index(ffmc: f32, w_speed: f32, fbp_mod: bool) -> f32 {
    let fw = if fbp_mod && w_speed >= ISI_FBP_MIN_WS {
        ISI_FBP_W1 * (1.0 - f32::exp(-ISI_FBP_W2 * (w_speed - ISI_FBP_W3)))
    } else {
        f32::exp(ISI_A0 * w_speed)
    };
    ISI_A5 * fw * fine_fuel_moisture_function(ffmc)
}

pub fn isi_vanwagner(ffmc: f32, w_speed: f32) -> f32 {
    initial_spread_index(ffmc, w_speed, false)
}

pub fn isi_fbp(ffmc: f32, w_speed: f32) -> f32 {
    initial_spread_index(ffmc, w_speed, true)
}

// BUI MODULE

/// Buildup Index, Eqs. 27a and 27b with the low-ratio correction.
pub fn buildup_index(dmc: f32, dc: f32) -> f32 {
    let bui = if dmc == 0.0 && dc == 0.0 {
        0.0
    } else {
        BUI_A2 * dc * dmc / (dmc + BUI_A1 * dc)
    };
    if bui < dmc {
        let p = if dmc == 0.0 { 0.0 } else { (dmc - bui) / dmc };
        let cc = BUI_C1 + (BUI_C2 * dmc).powf(BUI_C3);
        f32::max(dmc - cc * p, 0.0)
    } else {
        bui
    }
}

// FWI MODULE

/// Fire Weather Index, Eqs. 28-30 with the duff-effect branch at BUI 80.
pub fn fire_weather_index(isi: f32, bui: f32) -> f32 {
    let fd = if bui > FWI_BUI_SPLIT {
        FWI_A4 / (FWI_A5 + FWI_A6 * f32::exp(-FWI_A7 * bui))
    } else {
        FWI_A1 * bui.powf(FWI_A2) + FWI_A3
    };
    let bb = 0.1 * isi * fd;
    if bb <= 1.0 {
        bb
    } else {
        f32::exp(FWI_B1 * (FWI_B2 * bb.ln()).powf(FWI_B3))
    }
}

pub fn daily_severity_rating(fwi: f32) -> f32 {
    DSR_A1 * fwi.powf(DSR_A2)
}

// VALIDATED SCALAR ENTRY POINTS

pub fn validate_observation(obs: &DailyWeatherObservation) -> Result<(), FireDangerError> {
    if !(0.0..=100.0).contains(&obs.humidity) {
        return Err(FireDangerError::InvalidObservation {
            field: "humidity",
            value: obs.humidity,
        });
    }
    if obs.wind_speed < 0.0 {
        return Err(FireDangerError::InvalidObservation {
            field: "wind speed",
            value: obs.wind_speed,
        });
    }
    if obs.rain < 0.0 {
        return Err(FireDangerError::InvalidObservation {
            field: "rain",
            value: obs.rain,
        });
    }
    if !(1..=12).contains(&obs.month) {
        return Err(FireDangerError::InvalidObservation {
            field: "month",
            value: obs.month as f32,
        });
    }
    if !(-90.0..=90.0).contains(&obs.latitude) {
        return Err(FireDangerError::InvalidObservation {
            field: "latitude",
            value: obs.latitude,
        });
    }
    Ok(())
}

pub fn validate_state(state: &MoistureState) -> Result<(), FireDangerError> {
    if !(0.0..=FFMC_MAX).contains(&state.ffmc) {
        return Err(FireDangerError::InvalidObservation {
            field: "ffmc",
            value: state.ffmc,
        });
    }
    if state.dmc < 0.0 {
        return Err(FireDangerError::InvalidObservation {
            field: "dmc",
            value: state.dmc,
        });
    }
    if state.dc < 0.0 {
        return Err(FireDangerError::InvalidObservation {
            field: "dc",
            value: state.dc,
        });
    }
    Ok(())
}

/// One day of the moisture-code recursion: yesterday's state plus today's
/// observation gives today's state.
pub fn update_moisture(
    prev: &MoistureState,
    obs: &DailyWeatherObservation,
) -> Result<MoistureState, FireDangerError> {
    validate_state(prev)?;
    validate_observation(obs)?;
    Ok(MoistureState {
        ffmc: update_ffmc(prev.ffmc, obs.temperature, obs.humidity, obs.wind_speed, obs.rain),
        dmc: update_dmc(
            prev.dmc,
            obs.rain,
            obs.temperature,
            obs.humidity,
            obs.latitude,
            obs.month,
            true,
        ),
        dc: update_dc(prev.dc, obs.rain, obs.temperature, obs.latitude, obs.month, true),
    })
}

/// Stateless combination of a moisture state into the danger indices.
/// The spread index consumes today's wind speed alongside the state.
pub fn compute_fwi(state: &MoistureState, wind_speed: f32) -> Result<FwiIndices, FireDangerError> {
    validate_state(state)?;
    if wind_speed < 0.0 {
        return Err(FireDangerError::InvalidObservation {
            field: "wind speed",
            value: wind_speed,
        });
    }
    let isi = initial_spread_index(state.ffmc, wind_speed, false);
    let bui = buildup_index(state.dmc, state.dc);
    let fwi = fire_weather_index(isi, bui);
    let dsr = daily_severity_rating(fwi);
    Ok(FwiIndices { isi, bui, fwi, dsr })
}

// CELL-WISE UPDATE AND OUTPUT

pub fn update_state_fn(
    state: &mut MoistureState,
    props: &FwiPropertiesElement,
    input: &InputElement,
    time: &DateTime<Utc>,
    config: &FwiModelConfig,
) {
    let rain = input.rain;
    let humidity = input.humidity;
    let temperature = input.temperature;
    let wind_speed = input.wind_speed;

    if rain == NODATAVAL || humidity == NODATAVAL || temperature == NODATAVAL
        || wind_speed == NODATAVAL
    {
        // keep current state if we don't have all the data
        return;
    }

    let month = time.month();
    state.ffmc = config.ffmc(state.ffmc, temperature, humidity, wind_speed, rain);
    state.dmc = config.dmc(state.dmc, rain, temperature, humidity, props.lat, month);
    state.dc = config.dc(state.dc, rain, temperature, props.lat, month);
}

pub fn get_output_fn(
    state: &MoistureState,
    input: &InputElement,
    config: &FwiModelConfig,
) -> OutputElement {
    let bui = config.bui(state.dmc, state.dc);
    let (isi, fwi, dsr) = if input.wind_speed == NODATAVAL {
        (NODATAVAL, NODATAVAL, NODATAVAL)
    } else {
        let isi = config.isi(state.ffmc, input.wind_speed);
        let fwi = config.fwi(isi, bui);
        (isi, fwi, config.dsr(fwi))
    };

    OutputElement {
        ffmc: state.ffmc,
        dmc: state.dmc,
        dc: state.dc,
        isi,
        bui,
        fwi,
        dsr,
        temperature: input.temperature,
        rain: input.rain,
        wind_speed: input.wind_speed,
        humidity: input.humidity,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OBS: DailyWeatherObservation = DailyWeatherObservation {
        temperature: 20.0,
        humidity: 45.0,
        wind_speed: 10.0,
        rain: 0.0,
        latitude: 46.0,
        month: 6,
    };

    #[test]
    fn ffmc_stays_in_code_bounds() {
        for &ffmc in &[0.0, 30.0, 85.0, 101.0] {
            for &rain in &[0.0, 0.5, 5.0, 80.0] {
                for &hum in &[0.0, 45.0, 100.0] {
                    let out = update_ffmc(ffmc, 25.0, hum, 15.0, rain);
                    assert!((0.0..=101.0).contains(&out), "ffmc out of bounds: {}", out);
                }
            }
        }
    }

    #[test]
    fn dry_day_raises_ffmc() {
        // warm, dry, breezy day with no rain: the fine fuel dries and the
        // code climbs above its start-up value
        let out = update_ffmc(85.0, 20.0, 45.0, 10.0, 0.0);
        assert!(out > 85.0);
    }

    #[test]
    fn rain_lowers_ffmc_relative_to_dry_day() {
        let dry = update_ffmc(85.0, 20.0, 45.0, 10.0, 0.0);
        let wet = update_ffmc(85.0, 20.0, 45.0, 10.0, 15.0);
        assert!(wet < dry);
    }

    #[test]
    fn ffmc_rain_threshold_is_strict() {
        // rainfall exactly at the canopy-interception threshold has no effect
        let none = update_ffmc(85.0, 20.0, 45.0, 10.0, 0.0);
        let at_threshold = update_ffmc(85.0, 20.0, 45.0, 10.0, 0.5);
        assert_eq!(none, at_threshold);
    }

    #[test]
    fn hotter_and_drier_never_lowers_ffmc() {
        let base = update_ffmc(85.0, 20.0, 45.0, 10.0, 0.0);
        let hotter = update_ffmc(85.0, 30.0, 30.0, 10.0, 0.0);
        assert!(hotter >= base);
    }

    #[test]
    fn saturated_humidity_is_handled() {
        let out = update_ffmc(85.0, 15.0, 100.0, 10.0, 0.0);
        assert!((0.0..=101.0).contains(&out));
    }

    #[test]
    fn dmc_rain_threshold_is_strict() {
        let none = update_dmc(6.0, 0.0, 20.0, 45.0, 46.0, 6, true);
        let at_threshold = update_dmc(6.0, 1.5, 20.0, 45.0, 46.0, 6, true);
        assert_eq!(none, at_threshold);
        let above = update_dmc(6.0, 1.6, 20.0, 45.0, 46.0, 6, true);
        assert!(above < none);
    }

    #[test]
    fn dmc_never_negative() {
        for &rain in &[0.0, 10.0, 100.0] {
            for &temp in &[-20.0, -1.1, 0.0, 30.0] {
                let out = update_dmc(0.5, rain, temp, 90.0, 46.0, 1, true);
                assert!(out >= 0.0);
            }
        }
    }

    #[test]
    fn dmc_cold_day_has_no_drying() {
        // below the temperature floor the drying term vanishes
        let cold = update_dmc(20.0, 0.0, -10.0, 45.0, 46.0, 1, true);
        let at_floor = update_dmc(20.0, 0.0, -1.1, 45.0, 46.0, 1, true);
        assert_eq!(cold, at_floor);
        assert_eq!(cold, 20.0);
    }

    #[test]
    fn dc_rain_threshold_is_strict() {
        let none = update_dc(100.0, 0.0, 20.0, 46.0, 6, true);
        let at_threshold = update_dc(100.0, 2.8, 20.0, 46.0, 6, true);
        assert_eq!(none, at_threshold);
        let above = update_dc(100.0, 2.9, 20.0, 46.0, 6, true);
        assert!(above < none);
    }

    #[test]
    fn dc_never_negative() {
        for &rain in &[0.0, 50.0, 200.0] {
            let out = update_dc(5.0, rain, -30.0, 46.0, 12, true);
            assert!(out >= 0.0);
        }
    }

    #[test]
    fn day_length_factor_latitude_bands() {
        assert_eq!(dmc_day_length_factor(46.0, 7), DMC_ELL_46N[6]);
        assert_eq!(dmc_day_length_factor(20.0, 7), DMC_ELL_20N[6]);
        assert_eq!(dmc_day_length_factor(0.0, 7), DMC_ELL_EQUATOR);
        assert_eq!(dmc_day_length_factor(-20.0, 7), DMC_ELL_20S[6]);
        assert_eq!(dmc_day_length_factor(-45.0, 7), DMC_ELL_40S[6]);
        assert_eq!(dc_day_length_factor(46.0, 1), DC_FL_NORTH[0]);
        assert_eq!(dc_day_length_factor(0.0, 1), DC_FL_EQUATOR);
        assert_eq!(dc_day_length_factor(-46.0, 1), DC_FL_SOUTH[0]);
    }

    #[test]
    fn isi_grows_with_wind() {
        let calm = initial_spread_index(90.0, 0.0, false);
        let windy = initial_spread_index(90.0, 30.0, false);
        assert!(windy > calm);
    }

    #[test]
    fn bui_zero_codes() {
        assert_eq!(buildup_index(0.0, 0.0), 0.0);
        assert_eq!(buildup_index(0.0, 100.0), 0.0);
    }

    #[test]
    fn fwi_continuous_at_bui_branch() {
        let below = fire_weather_index(8.0, 79.999);
        let above = fire_weather_index(8.0, 80.001);
        assert!((below - above).abs() < 0.1, "{} vs {}", below, above);
    }

    #[test]
    fn update_moisture_rejects_bad_humidity() {
        let mut obs = OBS;
        obs.humidity = 120.0;
        let err = update_moisture(&MoistureState::default(), &obs).unwrap_err();
        assert_eq!(
            err,
            FireDangerError::InvalidObservation {
                field: "humidity",
                value: 120.0
            }
        );
    }

    #[test]
    fn update_moisture_rejects_bad_month() {
        let mut obs = OBS;
        obs.month = 13;
        assert!(update_moisture(&MoistureState::default(), &obs).is_err());
    }

    #[test]
    fn update_moisture_is_deterministic() {
        let state = MoistureState::default();
        let a = update_moisture(&state, &OBS).unwrap();
        let b = update_moisture(&state, &OBS).unwrap();
        assert_eq!(a.ffmc.to_bits(), b.ffmc.to_bits());
        assert_eq!(a.dmc.to_bits(), b.dmc.to_bits());
        assert_eq!(a.dc.to_bits(), b.dc.to_bits());
    }

    #[test]
    fn compute_fwi_produces_all_indices() {
        let state = MoistureState {
            ffmc: 90.0,
            dmc: 40.0,
            dc: 300.0,
        };
        let indices = compute_fwi(&state, 20.0).unwrap();
        assert!(indices.isi > 0.0);
        assert!(indices.bui > 0.0);
        assert!(indices.fwi > 0.0);
        assert!(indices.dsr > 0.0);
    }

    #[test]
    fn hourly_ffmc_bounded_and_validated() {
        let out = hourly_ffmc(85.0, 20.0, 45.0, 10.0, 0.0, 1.0).unwrap();
        assert!((0.0..=101.0).contains(&out));
        assert!(hourly_ffmc(85.0, 20.0, 145.0, 10.0, 0.0, 1.0).is_err());
    }
}
