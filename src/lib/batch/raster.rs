use ndarray::{Array2, Zip};
use rayon::prelude::*;

use crate::constants::NODATAVAL;
use crate::error::FireDangerError;
use crate::modules::fbp::config::FbpModelConfig;
use crate::modules::fbp::fuel::FuelCode;
use crate::modules::fbp::functions::predict_behavior;
use crate::modules::fbp::models::FbpAuxInputs;
use crate::modules::fwi::config::FwiModelConfig;
use crate::modules::fwi::constants::FFMC_MAX;
use crate::modules::fwi::models::{FwiIndices, MoistureState};

use super::{BatchDiagnostics, FailurePolicy, UnitFailure};

/// The three moisture-code grids of one day, spatially co-registered.
#[derive(Debug, Clone)]
pub struct MoistureRaster {
    pub ffmc: Array2<f32>,
    pub dmc: Array2<f32>,
    pub dc: Array2<f32>,
}

impl MoistureRaster {
    /// Season start-up grids: every cell at the conventional seed codes.
    pub fn seeded(shape: (usize, usize)) -> Self {
        let seed = MoistureState::default();
        Self {
            ffmc: Array2::from_elem(shape, seed.ffmc),
            dmc: Array2::from_elem(shape, seed.dmc),
            dc: Array2::from_elem(shape, seed.dc),
        }
    }

    pub fn shape(&self) -> (usize, usize) {
        self.ffmc.dim()
    }
}

/// One day of gridded weather, co-registered with the moisture grids.
#[derive(Debug, Clone)]
pub struct WeatherRaster {
    pub temp: Array2<f32>,
    pub rh: Array2<f32>,
    pub ws: Array2<f32>,
    pub prec: Array2<f32>,
    pub lat: Array2<f32>,
}

#[derive(Debug, Clone)]
pub struct FwiRaster {
    pub isi: Array2<f32>,
    pub bui: Array2<f32>,
    pub fwi: Array2<f32>,
    pub dsr: Array2<f32>,
}

fn check_shape(
    name: &'static str,
    arr: &Array2<f32>,
    dim: (usize, usize),
) -> Result<(), FireDangerError> {
    if arr.dim() != dim {
        return Err(FireDangerError::InvalidInput {
            field: name,
            value: arr.len() as f32,
        });
    }
    Ok(())
}

fn valid_rh(h: f32) -> bool {
    (0.0..=100.0).contains(&h)
}

fn valid_ffmc(f: f32) -> bool {
    (0.0..=FFMC_MAX).contains(&f)
}

/// One day-step of the moisture recursion over co-registered grids.
/// Cells with missing weather keep their previous code; cells with invalid
/// values are dropped to no-data and recorded.
pub fn run_moisture_raster(
    prev: &MoistureRaster,
    weather: &WeatherRaster,
    month: u32,
    config: &FwiModelConfig,
    policy: FailurePolicy,
) -> Result<(MoistureRaster, BatchDiagnostics), FireDangerError> {
    let dim = prev.shape();
    check_shape("dmc raster", &prev.dmc, dim)?;
    check_shape("dc raster", &prev.dc, dim)?;
    check_shape("temp raster", &weather.temp, dim)?;
    check_shape("rh raster", &weather.rh, dim)?;
    check_shape("ws raster", &weather.ws, dim)?;
    check_shape("prec raster", &weather.prec, dim)?;
    check_shape("lat raster", &weather.lat, dim)?;
    if !(1..=12).contains(&month) {
        return Err(FireDangerError::InvalidObservation {
            field: "month",
            value: month as f32,
        });
    }

    let mut diagnostics = BatchDiagnostics::default();
    for (index, ((((&h, &w), &p), &l), ((&f, &dm), &dcv))) in weather
        .rh
        .iter()
        .zip(weather.ws.iter())
        .zip(weather.prec.iter())
        .zip(weather.lat.iter())
        .zip(prev.ffmc.iter().zip(prev.dmc.iter()).zip(prev.dc.iter()))
        .enumerate()
    {
        let mut bad = |field: &'static str, value: f32| {
            diagnostics.record(index, FireDangerError::InvalidObservation { field, value });
        };
        if h != NODATAVAL && !valid_rh(h) {
            bad("humidity", h);
        }
        if w != NODATAVAL && w < 0.0 {
            bad("wind speed", w);
        }
        if p != NODATAVAL && p < 0.0 {
            bad("rain", p);
        }
        if l != NODATAVAL && !(-90.0..=90.0).contains(&l) {
            bad("latitude", l);
        }
        if f != NODATAVAL && !valid_ffmc(f) {
            bad("ffmc", f);
        }
        if dm != NODATAVAL && dm < 0.0 {
            bad("dmc", dm);
        }
        if dcv != NODATAVAL && dcv < 0.0 {
            bad("dc", dcv);
        }
    }
    if policy == FailurePolicy::Strict && !diagnostics.is_clean() {
        return Err(diagnostics.failures[0].error.clone());
    }

    let ffmc = Zip::from(&prev.ffmc)
        .and(&weather.temp)
        .and(&weather.rh)
        .and(&weather.ws)
        .and(&weather.prec)
        .par_map_collect(|&f, &t, &h, &w, &p| {
            if f == NODATAVAL {
                NODATAVAL
            } else if t == NODATAVAL || h == NODATAVAL || w == NODATAVAL || p == NODATAVAL {
                // keep current code if we don't have all the data
                f
            } else if !valid_ffmc(f) || !valid_rh(h) || w < 0.0 || p < 0.0 {
                NODATAVAL
            } else {
                config.ffmc(f, t, h, w, p)
            }
        });

    let dmc = Zip::from(&prev.dmc)
        .and(&weather.temp)
        .and(&weather.rh)
        .and(&weather.prec)
        .and(&weather.lat)
        .par_map_collect(|&d, &t, &h, &p, &l| {
            if d == NODATAVAL {
                NODATAVAL
            } else if t == NODATAVAL || h == NODATAVAL || p == NODATAVAL || l == NODATAVAL {
                d
            } else if d < 0.0 || !valid_rh(h) || p < 0.0 || !(-90.0..=90.0).contains(&l) {
                NODATAVAL
            } else {
                config.dmc(d, p, t, h, l, month)
            }
        });

    let dc = Zip::from(&prev.dc)
        .and(&weather.temp)
        .and(&weather.prec)
        .and(&weather.lat)
        .par_map_collect(|&d, &t, &p, &l| {
            if d == NODATAVAL {
                NODATAVAL
            } else if t == NODATAVAL || p == NODATAVAL || l == NODATAVAL {
                d
            } else if d < 0.0 || p < 0.0 || !(-90.0..=90.0).contains(&l) {
                NODATAVAL
            } else {
                config.dc(d, p, t, l, month)
            }
        });

    diagnostics.log_summary("moisture raster step");
    Ok((MoistureRaster { ffmc, dmc, dc }, diagnostics))
}

/// Stateless FWI combination over the code grids and a wind grid.
pub fn run_fwi_raster(
    codes: &MoistureRaster,
    ws: &Array2<f32>,
    config: &FwiModelConfig,
    policy: FailurePolicy,
) -> Result<(FwiRaster, BatchDiagnostics), FireDangerError> {
    let dim = codes.shape();
    check_shape("dmc raster", &codes.dmc, dim)?;
    check_shape("dc raster", &codes.dc, dim)?;
    check_shape("ws raster", ws, dim)?;

    let mut diagnostics = BatchDiagnostics::default();
    for (index, ((&f, &dm), (&dcv, &w))) in codes
        .ffmc
        .iter()
        .zip(codes.dmc.iter())
        .zip(codes.dc.iter().zip(ws.iter()))
        .enumerate()
    {
        let mut bad = |field: &'static str, value: f32| {
            diagnostics.record(index, FireDangerError::InvalidObservation { field, value });
        };
        if f != NODATAVAL && !valid_ffmc(f) {
            bad("ffmc", f);
        }
        if dm != NODATAVAL && dm < 0.0 {
            bad("dmc", dm);
        }
        if dcv != NODATAVAL && dcv < 0.0 {
            bad("dc", dcv);
        }
        if w != NODATAVAL && w < 0.0 {
            bad("wind speed", w);
        }
    }
    if policy == FailurePolicy::Strict && !diagnostics.is_clean() {
        return Err(diagnostics.failures[0].error.clone());
    }

    let isi = Zip::from(&codes.ffmc).and(ws).par_map_collect(|&f, &w| {
        if f == NODATAVAL || w == NODATAVAL || !valid_ffmc(f) || w < 0.0 {
            NODATAVAL
        } else {
            config.isi(f, w)
        }
    });
    let bui = Zip::from(&codes.dmc)
        .and(&codes.dc)
        .par_map_collect(|&dm, &dcv| {
            if dm == NODATAVAL || dcv == NODATAVAL || dm < 0.0 || dcv < 0.0 {
                NODATAVAL
            } else {
                config.bui(dm, dcv)
            }
        });
    let fwi = Zip::from(&isi).and(&bui).par_map_collect(|&i, &b| {
        if i == NODATAVAL || b == NODATAVAL {
            NODATAVAL
        } else {
            config.fwi(i, b)
        }
    });
    let dsr = fwi.map(|&v| if v == NODATAVAL { NODATAVAL } else { config.dsr(v) });

    diagnostics.log_summary("fwi raster run");
    Ok((FwiRaster { isi, bui, fwi, dsr }, diagnostics))
}

/// Co-registered input grids of a behaviour-prediction run. Optional bands
/// may be omitted entirely; NODATAVAL cells inside an optional band fall
/// back to the band's default semantics.
#[derive(Debug, Clone, Default)]
pub struct FbpRasterInputs {
    pub fuel: Array2<f32>,
    pub ffmc: Array2<f32>,
    pub bui: Array2<f32>,
    pub ws: Array2<f32>,
    pub wd: Array2<f32>,
    pub gs: Option<Array2<f32>>,
    pub saz: Option<Array2<f32>>,
    pub curing: Option<Array2<f32>>,
    pub percent_conifer: Option<Array2<f32>>,
    pub percent_dead_fir: Option<Array2<f32>>,
    pub grass_fuel_load: Option<Array2<f32>>,
    pub foliar_moisture: Option<Array2<f32>>,
    pub lat: Option<Array2<f32>>,
    pub long: Option<Array2<f32>>,
    pub elev: Option<Array2<f32>>,
    pub day_of_year: Option<u32>,
}

#[derive(Debug, Clone)]
pub struct FbpRaster {
    pub hros: Array2<f32>,
    pub fros: Array2<f32>,
    pub bros: Array2<f32>,
    pub cfb: Array2<f32>,
    pub sfc: Array2<f32>,
    pub tfc: Array2<f32>,
    pub hfi: Array2<f32>,
    pub lb: Array2<f32>,
    pub area: Array2<f32>,
    pub perimeter: Array2<f32>,
}

fn band_at(band: &Option<Array2<f32>>, r: usize, c: usize) -> Option<f32> {
    match band {
        Some(values) if values[[r, c]] != NODATAVAL => Some(values[[r, c]]),
        _ => None,
    }
}

/// Cell-wise behaviour prediction over co-registered grids.
pub fn run_fbp_raster(
    inputs: &FbpRasterInputs,
    config: &FbpModelConfig,
    policy: FailurePolicy,
) -> Result<(FbpRaster, BatchDiagnostics), FireDangerError> {
    let dim = inputs.fuel.dim();
    check_shape("ffmc raster", &inputs.ffmc, dim)?;
    check_shape("bui raster", &inputs.bui, dim)?;
    check_shape("ws raster", &inputs.ws, dim)?;
    check_shape("wd raster", &inputs.wd, dim)?;
    for (name, band) in [
        ("gs raster", &inputs.gs),
        ("saz raster", &inputs.saz),
        ("cc raster", &inputs.curing),
        ("pc raster", &inputs.percent_conifer),
        ("pdf raster", &inputs.percent_dead_fir),
        ("gfl raster", &inputs.grass_fuel_load),
        ("fmc raster", &inputs.foliar_moisture),
        ("lat raster", &inputs.lat),
        ("long raster", &inputs.long),
        ("elv raster", &inputs.elev),
    ] {
        if let Some(arr) = band {
            check_shape(name, arr, dim)?;
        }
    }

    let (nrows, ncols) = dim;
    let n = nrows * ncols;

    type CellOut = [f32; 10];
    let cells: Vec<Result<CellOut, UnitFailure>> = (0..n)
        .into_par_iter()
        .map(|index| {
            let (r, c) = (index / ncols, index % ncols);
            let fuel = inputs.fuel[[r, c]];
            let ffmc = inputs.ffmc[[r, c]];
            let bui = inputs.bui[[r, c]];
            let ws = inputs.ws[[r, c]];
            let wd = inputs.wd[[r, c]];
            if fuel == NODATAVAL
                || ffmc == NODATAVAL
                || bui == NODATAVAL
                || ws == NODATAVAL
                || wd == NODATAVAL
            {
                return Ok([NODATAVAL; 10]);
            }
            let code = FuelCode::from_grid_code(fuel as u8)
                .map_err(|error| UnitFailure { index, error })?;
            let state = MoistureState::new(ffmc, 0.0, 0.0);
            let indices = FwiIndices {
                isi: 0.0,
                bui,
                fwi: 0.0,
                dsr: 0.0,
            };
            let aux = FbpAuxInputs {
                wind_speed: ws,
                wind_azimuth: wd,
                slope_percent: band_at(&inputs.gs, r, c).unwrap_or(0.0),
                slope_azimuth: band_at(&inputs.saz, r, c).unwrap_or(0.0),
                curing: band_at(&inputs.curing, r, c),
                percent_conifer: band_at(&inputs.percent_conifer, r, c),
                percent_dead_fir: band_at(&inputs.percent_dead_fir, r, c),
                grass_fuel_load: band_at(&inputs.grass_fuel_load, r, c),
                foliar_moisture: band_at(&inputs.foliar_moisture, r, c),
                latitude: band_at(&inputs.lat, r, c),
                longitude: band_at(&inputs.long, r, c),
                elevation: band_at(&inputs.elev, r, c),
                day_of_year: inputs.day_of_year,
                elapsed_time: config.elapsed_time,
            };
            match predict_behavior(&state, &indices, code, &aux, config) {
                Ok(b) => Ok([
                    b.hros,
                    b.fros,
                    b.bros,
                    b.cfb,
                    b.sfc,
                    b.tfc,
                    b.hfi,
                    b.lb,
                    b.area,
                    b.perimeter,
                ]),
                Err(error) => Err(UnitFailure { index, error }),
            }
        })
        .collect();

    let mut bands = vec![vec![NODATAVAL; n]; 10];
    let mut diagnostics = BatchDiagnostics::default();
    for (index, cell) in cells.into_iter().enumerate() {
        match cell {
            Ok(values) => {
                for (band, value) in bands.iter_mut().zip(values) {
                    band[index] = value;
                }
            }
            Err(failure) => match policy {
                FailurePolicy::Strict => return Err(failure.error),
                FailurePolicy::Collect => diagnostics.failures.push(failure),
            },
        }
    }

    let mut arrays = bands
        .into_iter()
        .map(|band| Array2::from_shape_vec(dim, band).expect("band length matches the grid"));
    let raster = FbpRaster {
        hros: arrays.next().expect("band count"),
        fros: arrays.next().expect("band count"),
        bros: arrays.next().expect("band count"),
        cfb: arrays.next().expect("band count"),
        sfc: arrays.next().expect("band count"),
        tfc: arrays.next().expect("band count"),
        hfi: arrays.next().expect("band count"),
        lb: arrays.next().expect("band count"),
        area: arrays.next().expect("band count"),
        perimeter: arrays.next().expect("band count"),
    };
    diagnostics.log_summary("fbp raster run");
    Ok((raster, diagnostics))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::fwi::functions::{update_dc, update_dmc, update_ffmc};
    use ndarray::array;

    fn weather() -> WeatherRaster {
        WeatherRaster {
            temp: array![[20.0, 25.0], [15.0, 30.0]],
            rh: array![[45.0, 30.0], [70.0, 20.0]],
            ws: array![[10.0, 20.0], [5.0, 30.0]],
            prec: array![[0.0, 0.0], [4.0, 0.0]],
            lat: array![[46.0, 46.0], [46.0, 46.0]],
        }
    }

    #[test]
    fn raster_step_matches_scalar_formulas() {
        let prev = MoistureRaster::seeded((2, 2));
        let (out, diagnostics) = run_moisture_raster(
            &prev,
            &weather(),
            6,
            &FwiModelConfig::default(),
            FailurePolicy::Collect,
        )
        .unwrap();
        assert!(diagnostics.is_clean());

        let w = weather();
        for r in 0..2 {
            for c in 0..2 {
                let expected_ffmc = update_ffmc(
                    85.0,
                    w.temp[[r, c]],
                    w.rh[[r, c]],
                    w.ws[[r, c]],
                    w.prec[[r, c]],
                );
                assert_eq!(out.ffmc[[r, c]], expected_ffmc);
                let expected_dmc = update_dmc(
                    6.0,
                    w.prec[[r, c]],
                    w.temp[[r, c]],
                    w.rh[[r, c]],
                    w.lat[[r, c]],
                    6,
                    true,
                );
                assert_eq!(out.dmc[[r, c]], expected_dmc);
                let expected_dc =
                    update_dc(15.0, w.prec[[r, c]], w.temp[[r, c]], w.lat[[r, c]], 6, true);
                assert_eq!(out.dc[[r, c]], expected_dc);
            }
        }
    }

    #[test]
    fn missing_weather_carries_the_code() {
        let prev = MoistureRaster::seeded((2, 2));
        let mut w = weather();
        w.temp[[0, 1]] = NODATAVAL;
        let (out, diagnostics) = run_moisture_raster(
            &prev,
            &w,
            6,
            &FwiModelConfig::default(),
            FailurePolicy::Collect,
        )
        .unwrap();
        assert!(diagnostics.is_clean());
        assert_eq!(out.ffmc[[0, 1]], 85.0);
        assert_eq!(out.dmc[[0, 1]], 6.0);
        assert_eq!(out.dc[[0, 1]], 15.0);
    }

    #[test]
    fn invalid_cell_is_recorded_and_dropped() {
        let prev = MoistureRaster::seeded((2, 2));
        let mut w = weather();
        w.rh[[1, 0]] = 150.0;
        let (out, diagnostics) = run_moisture_raster(
            &prev,
            &w,
            6,
            &FwiModelConfig::default(),
            FailurePolicy::Collect,
        )
        .unwrap();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics.failures[0].index, 2); // row-major
        assert_eq!(out.ffmc[[1, 0]], NODATAVAL);
        assert_eq!(out.dmc[[1, 0]], NODATAVAL);
        // other cells are untouched
        assert_ne!(out.ffmc[[0, 0]], NODATAVAL);
    }

    #[test]
    fn strict_mode_aborts_on_invalid_cell() {
        let prev = MoistureRaster::seeded((2, 2));
        let mut w = weather();
        w.rh[[1, 0]] = 150.0;
        let err = run_moisture_raster(
            &prev,
            &w,
            6,
            &FwiModelConfig::default(),
            FailurePolicy::Strict,
        )
        .unwrap_err();
        assert_eq!(
            err,
            FireDangerError::InvalidObservation {
                field: "humidity",
                value: 150.0
            }
        );
    }

    #[test]
    fn shape_mismatch_is_rejected() {
        let prev = MoistureRaster::seeded((2, 2));
        let mut w = weather();
        w.ws = Array2::from_elem((3, 2), 10.0);
        assert!(run_moisture_raster(
            &prev,
            &w,
            6,
            &FwiModelConfig::default(),
            FailurePolicy::Collect
        )
        .is_err());
    }

    #[test]
    fn fwi_raster_combines_the_codes() {
        let codes = MoistureRaster {
            ffmc: array![[90.0, NODATAVAL]],
            dmc: array![[40.0, 40.0]],
            dc: array![[300.0, 300.0]],
        };
        let ws = array![[20.0, 20.0]];
        let (out, diagnostics) =
            run_fwi_raster(&codes, &ws, &FwiModelConfig::default(), FailurePolicy::Collect)
                .unwrap();
        assert!(diagnostics.is_clean());
        assert!(out.isi[[0, 0]] > 0.0);
        assert!(out.fwi[[0, 0]] > 0.0);
        // no-data ffmc propagates to every wind-dependent band
        assert_eq!(out.isi[[0, 1]], NODATAVAL);
        assert_eq!(out.fwi[[0, 1]], NODATAVAL);
        assert_eq!(out.dsr[[0, 1]], NODATAVAL);
        // bui only needs the duff codes
        assert!(out.bui[[0, 1]] > 0.0);
    }

    #[test]
    fn fbp_raster_isolates_bad_fuel_cells() {
        let inputs = FbpRasterInputs {
            fuel: array![[2.0, 99.0]],
            ffmc: array![[92.0, 92.0]],
            bui: array![[70.0, 70.0]],
            ws: array![[20.0, 20.0]],
            wd: array![[90.0, 90.0]],
            foliar_moisture: Some(array![[97.0, 97.0]]),
            ..Default::default()
        };
        let (out, diagnostics) =
            run_fbp_raster(&inputs, &FbpModelConfig::default(), FailurePolicy::Collect).unwrap();
        assert!(out.hros[[0, 0]] > 0.0);
        assert!(out.hfi[[0, 0]] > 0.0);
        assert_eq!(out.hros[[0, 1]], NODATAVAL);
        assert_eq!(diagnostics.len(), 1);
        assert!(matches!(
            diagnostics.failures[0].error,
            FireDangerError::UnknownFuelType { .. }
        ));
    }
}
