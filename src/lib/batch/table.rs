use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use itertools::Itertools;
use rayon::prelude::*;

use crate::constants::NODATAVAL;
use crate::error::FireDangerError;
use crate::modules::fbp::config::FbpModelConfig;
use crate::modules::fbp::fuel::FuelCode;
use crate::modules::fbp::functions::predict_behavior;
use crate::modules::fbp::models::FbpAuxInputs;
use crate::modules::fwi::config::FwiModelConfig;
use crate::modules::fwi::functions::{validate_observation, validate_state};
use crate::modules::fwi::models::{DailyWeatherObservation, FwiIndices, MoistureState};

use super::{BatchDiagnostics, FailurePolicy, SeedPolicy, UnitFailure};

// Input column names, matching the tabular reader contract.
pub const COL_ID: &str = "id";
pub const COL_YEAR: &str = "yr";
pub const COL_MONTH: &str = "mon";
pub const COL_DAY: &str = "day";
pub const COL_TEMP: &str = "temp";
pub const COL_RH: &str = "rh";
pub const COL_WS: &str = "ws";
pub const COL_PREC: &str = "prec";
pub const COL_LAT: &str = "lat";
pub const COL_FUEL: &str = "fuel";
pub const COL_WD: &str = "wd";
pub const COL_GS: &str = "gs";
pub const COL_SAZ: &str = "saz";
pub const COL_CURING: &str = "cc";
pub const COL_PC: &str = "pc";
pub const COL_PDF: &str = "pdf";
pub const COL_GFL: &str = "gfl";
pub const COL_LONG: &str = "long";
pub const COL_ELEV: &str = "elv";
pub const COL_DJ: &str = "dj";
pub const COL_FMC: &str = "fmc";
pub const COL_HR: &str = "hr";

// Output column names.
pub const COL_FFMC: &str = "ffmc";
pub const COL_DMC: &str = "dmc";
pub const COL_DC: &str = "dc";
pub const COL_ISI: &str = "isi";
pub const COL_BUI: &str = "bui";
pub const COL_FWI: &str = "fwi";
pub const COL_DSR: &str = "dsr";

/// Named columns of equal length; rows align by position. NODATAVAL marks
/// missing values and propagates through every run.
#[derive(Debug, Clone, Default)]
pub struct TableFrame {
    columns: HashMap<String, Vec<f32>>,
    nrows: usize,
}

impl TableFrame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nrows
    }

    pub fn is_empty(&self) -> bool {
        self.nrows == 0
    }

    pub fn add_column(&mut self, name: &str, values: Vec<f32>) -> Result<(), FireDangerError> {
        if self.columns.is_empty() {
            self.nrows = values.len();
        } else if values.len() != self.nrows {
            return Err(FireDangerError::InvalidInput {
                field: "column length",
                value: values.len() as f32,
            });
        }
        self.columns.insert(name.to_string(), values);
        Ok(())
    }

    pub fn column(&self, name: &str) -> Result<&[f32], FireDangerError> {
        self.columns
            .get(name)
            .map(|v| v.as_slice())
            .ok_or(FireDangerError::MissingColumn {
                name: name.to_string(),
            })
    }

    pub fn optional_column(&self, name: &str) -> Option<&[f32]> {
        self.columns.get(name).map(|v| v.as_slice())
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.keys().map(|k| k.as_str()).collect()
    }
}

#[derive(Debug, Clone, Default)]
pub struct MoistureRunOptions {
    pub seed: SeedPolicy,
    pub policy: FailurePolicy,
}

type GroupResult = (Vec<usize>, Vec<MoistureState>, Vec<UnitFailure>);

fn fold_group(
    gid: i64,
    rows: &[usize],
    frame: &TableFrame,
    config: &FwiModelConfig,
    opts: &MoistureRunOptions,
) -> Result<GroupResult, FireDangerError> {
    let ids_yr = frame.column(COL_YEAR)?;
    let ids_mon = frame.column(COL_MONTH)?;
    let ids_day = frame.column(COL_DAY)?;
    let temp = frame.column(COL_TEMP)?;
    let rh = frame.column(COL_RH)?;
    let ws = frame.column(COL_WS)?;
    let prec = frame.column(COL_PREC)?;
    let lat = frame.column(COL_LAT)?;

    let mut state = match &opts.seed {
        SeedPolicy::Fixed(seed) => *seed,
        SeedPolicy::PerGroup(map) => *map.get(&gid).ok_or(FireDangerError::InvalidInput {
            field: "seed state",
            value: gid as f32,
        })?,
    };

    let nodata = MoistureState::new(NODATAVAL, NODATAVAL, NODATAVAL);
    let mut out = Vec::with_capacity(rows.len());
    let mut failures = Vec::new();
    let mut prev_date: Option<NaiveDate> = None;

    for &row in rows {
        let date = NaiveDate::from_ymd_opt(
            ids_yr[row] as i32,
            ids_mon[row] as u32,
            ids_day[row] as u32,
        )
        .ok_or(FireDangerError::InvalidObservation {
            field: "date",
            value: ids_day[row],
        })?;
        if let Some(prev) = prev_date {
            let expected = prev.succ_opt().unwrap_or(prev);
            if date != expected {
                // gaps are structural, they always abort the run
                return Err(FireDangerError::SequenceGap {
                    group: gid,
                    expected,
                    found: date,
                });
            }
        }
        prev_date = Some(date);

        if temp[row] == NODATAVAL
            || rh[row] == NODATAVAL
            || ws[row] == NODATAVAL
            || prec[row] == NODATAVAL
            || lat[row] == NODATAVAL
        {
            // keep current state if we don't have all the data
            out.push(nodata);
            continue;
        }

        let obs = DailyWeatherObservation {
            temperature: temp[row],
            humidity: rh[row],
            wind_speed: ws[row],
            rain: prec[row],
            latitude: lat[row],
            month: date.month(),
        };
        if let Err(error) = validate_observation(&obs) {
            match opts.policy {
                FailurePolicy::Strict => return Err(error),
                FailurePolicy::Collect => {
                    failures.push(UnitFailure { index: row, error });
                    out.push(nodata);
                    continue;
                }
            }
        }

        state = MoistureState {
            ffmc: config.ffmc(
                state.ffmc,
                obs.temperature,
                obs.humidity,
                obs.wind_speed,
                obs.rain,
            ),
            dmc: config.dmc(
                state.dmc,
                obs.rain,
                obs.temperature,
                obs.humidity,
                obs.latitude,
                obs.month,
            ),
            dc: config.dc(state.dc, obs.rain, obs.temperature, obs.latitude, obs.month),
        };
        out.push(state);
    }

    Ok((rows.to_vec(), out, failures))
}

/// Day-chained moisture-code run over a table. Rows must be grouped by the
/// station `id` column and ordered by date within each group; the recursion
/// folds each group independently and the groups run in parallel.
pub fn run_moisture_table(
    frame: &TableFrame,
    config: &FwiModelConfig,
    opts: &MoistureRunOptions,
) -> Result<(TableFrame, BatchDiagnostics), FireDangerError> {
    let ids = frame.column(COL_ID)?;
    // touch every required column up front so missing ones fail fast
    for name in [COL_YEAR, COL_MONTH, COL_DAY, COL_TEMP, COL_RH, COL_WS, COL_PREC, COL_LAT] {
        frame.column(name)?;
    }

    let mut groups: Vec<(i64, Vec<usize>)> = Vec::new();
    for (key, chunk) in &(0..frame.len()).chunk_by(|&i| ids[i] as i64) {
        groups.push((key, chunk.collect()));
    }

    let results: Vec<Result<GroupResult, FireDangerError>> = groups
        .par_iter()
        .map(|(gid, rows)| fold_group(*gid, rows, frame, config, opts))
        .collect();

    let mut ffmc_col = vec![NODATAVAL; frame.len()];
    let mut dmc_col = vec![NODATAVAL; frame.len()];
    let mut dc_col = vec![NODATAVAL; frame.len()];
    let mut diagnostics = BatchDiagnostics::default();

    for result in results {
        let (rows, states, failures) = result?;
        for (row, state) in rows.into_iter().zip(states) {
            ffmc_col[row] = state.ffmc;
            dmc_col[row] = state.dmc;
            dc_col[row] = state.dc;
        }
        diagnostics.failures.extend(failures);
    }

    let mut out = frame.clone();
    out.add_column(COL_FFMC, ffmc_col)?;
    out.add_column(COL_DMC, dmc_col)?;
    out.add_column(COL_DC, dc_col)?;
    diagnostics.log_summary("moisture table run");
    Ok((out, diagnostics))
}

/// Stateless FWI combination over a table holding the three code columns
/// and the wind speed.
pub fn run_fwi_table(
    frame: &TableFrame,
    config: &FwiModelConfig,
    policy: FailurePolicy,
) -> Result<(TableFrame, BatchDiagnostics), FireDangerError> {
    let ffmc = frame.column(COL_FFMC)?;
    let dmc = frame.column(COL_DMC)?;
    let dc = frame.column(COL_DC)?;
    let ws = frame.column(COL_WS)?;

    let rows: Vec<Result<(f32, f32, f32, f32), UnitFailure>> = (0..frame.len())
        .into_par_iter()
        .map(|row| {
            if ffmc[row] == NODATAVAL
                || dmc[row] == NODATAVAL
                || dc[row] == NODATAVAL
                || ws[row] == NODATAVAL
            {
                return Ok((NODATAVAL, NODATAVAL, NODATAVAL, NODATAVAL));
            }
            let state = MoistureState::new(ffmc[row], dmc[row], dc[row]);
            if let Err(error) = validate_state(&state) {
                return Err(UnitFailure { index: row, error });
            }
            if ws[row] < 0.0 {
                return Err(UnitFailure {
                    index: row,
                    error: FireDangerError::InvalidObservation {
                        field: "wind speed",
                        value: ws[row],
                    },
                });
            }
            let isi = config.isi(state.ffmc, ws[row]);
            let bui = config.bui(state.dmc, state.dc);
            let fwi = config.fwi(isi, bui);
            Ok((isi, bui, fwi, config.dsr(fwi)))
        })
        .collect();

    let mut isi_col = vec![NODATAVAL; frame.len()];
    let mut bui_col = vec![NODATAVAL; frame.len()];
    let mut fwi_col = vec![NODATAVAL; frame.len()];
    let mut dsr_col = vec![NODATAVAL; frame.len()];
    let mut diagnostics = BatchDiagnostics::default();

    for (row, result) in rows.into_iter().enumerate() {
        match result {
            Ok((isi, bui, fwi, dsr)) => {
                isi_col[row] = isi;
                bui_col[row] = bui;
                fwi_col[row] = fwi;
                dsr_col[row] = dsr;
            }
            Err(failure) => match policy {
                FailurePolicy::Strict => return Err(failure.error),
                FailurePolicy::Collect => diagnostics.failures.push(failure),
            },
        }
    }

    let mut out = frame.clone();
    out.add_column(COL_ISI, isi_col)?;
    out.add_column(COL_BUI, bui_col)?;
    out.add_column(COL_FWI, fwi_col)?;
    out.add_column(COL_DSR, dsr_col)?;
    diagnostics.log_summary("fwi table run");
    Ok((out, diagnostics))
}

/// Full FWI System run: chained moisture codes followed by the stateless
/// index combination, in one pass over the table.
pub fn run_fwi_system_table(
    frame: &TableFrame,
    config: &FwiModelConfig,
    opts: &MoistureRunOptions,
) -> Result<(TableFrame, BatchDiagnostics), FireDangerError> {
    let (with_codes, mut diagnostics) = run_moisture_table(frame, config, opts)?;
    let (out, combine_diagnostics) = run_fwi_table(&with_codes, config, opts.policy)?;
    diagnostics.merge(combine_diagnostics);
    Ok((out, diagnostics))
}

fn optional_at(column: Option<&[f32]>, row: usize) -> Option<f32> {
    match column {
        Some(values) if values[row] != NODATAVAL => Some(values[row]),
        _ => None,
    }
}

/// Row-wise behaviour prediction. Fuel types come in as numeric grid codes;
/// optional auxiliary columns may be absent entirely or hold NODATAVAL.
pub fn run_fbp_table(
    frame: &TableFrame,
    config: &FbpModelConfig,
    policy: FailurePolicy,
) -> Result<(TableFrame, BatchDiagnostics), FireDangerError> {
    let fuel = frame.column(COL_FUEL)?;
    let ffmc = frame.column(COL_FFMC)?;
    let bui = frame.column(COL_BUI)?;
    let ws = frame.column(COL_WS)?;
    let wd = frame.column(COL_WD)?;

    let gs = frame.optional_column(COL_GS);
    let saz = frame.optional_column(COL_SAZ);
    let cc = frame.optional_column(COL_CURING);
    let pc = frame.optional_column(COL_PC);
    let pdf = frame.optional_column(COL_PDF);
    let gfl = frame.optional_column(COL_GFL);
    let lat = frame.optional_column(COL_LAT);
    let long = frame.optional_column(COL_LONG);
    let elev = frame.optional_column(COL_ELEV);
    let dj = frame.optional_column(COL_DJ);
    let fmc = frame.optional_column(COL_FMC);
    let hr = frame.optional_column(COL_HR);

    type RowOut = [f32; 12];
    let rows: Vec<Result<RowOut, UnitFailure>> = (0..frame.len())
        .into_par_iter()
        .map(|row| {
            if fuel[row] == NODATAVAL
                || ffmc[row] == NODATAVAL
                || bui[row] == NODATAVAL
                || ws[row] == NODATAVAL
                || wd[row] == NODATAVAL
            {
                return Ok([NODATAVAL; 12]);
            }
            let code = FuelCode::from_grid_code(fuel[row] as u8).map_err(|error| UnitFailure {
                index: row,
                error,
            })?;
            let state = MoistureState::new(ffmc[row], 0.0, 0.0);
            let indices = FwiIndices {
                isi: 0.0,
                bui: bui[row],
                fwi: 0.0,
                dsr: 0.0,
            };
            let aux = FbpAuxInputs {
                wind_speed: ws[row],
                wind_azimuth: wd[row],
                slope_percent: optional_at(gs, row).unwrap_or(0.0),
                slope_azimuth: optional_at(saz, row).unwrap_or(0.0),
                curing: optional_at(cc, row),
                percent_conifer: optional_at(pc, row),
                percent_dead_fir: optional_at(pdf, row),
                grass_fuel_load: optional_at(gfl, row),
                foliar_moisture: optional_at(fmc, row),
                latitude: optional_at(lat, row),
                longitude: optional_at(long, row),
                elevation: optional_at(elev, row),
                day_of_year: optional_at(dj, row).map(|v| v as u32),
                elapsed_time: optional_at(hr, row).unwrap_or(config.elapsed_time),
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
                    b.wsv,
                    b.raz,
                ]),
                Err(error) => Err(UnitFailure { index: row, error }),
            }
        })
        .collect();

    const OUT_NAMES: [&str; 12] = [
        "hros",
        "fros",
        "bros",
        "cfb",
        "sfc",
        "tfc",
        "hfi",
        "lb",
        "area",
        "perimeter",
        "wsv",
        "raz",
    ];
    let mut out_cols = vec![vec![NODATAVAL; frame.len()]; OUT_NAMES.len()];
    let mut diagnostics = BatchDiagnostics::default();

    for (row, result) in rows.into_iter().enumerate() {
        match result {
            Ok(values) => {
                for (col, value) in out_cols.iter_mut().zip(values) {
                    col[row] = value;
                }
            }
            Err(failure) => match policy {
                FailurePolicy::Strict => return Err(failure.error),
                FailurePolicy::Collect => diagnostics.failures.push(failure),
            },
        }
    }

    let mut out = frame.clone();
    for (name, col) in OUT_NAMES.iter().zip(out_cols) {
        out.add_column(name, col)?;
    }
    diagnostics.log_summary("fbp table run");
    Ok((out, diagnostics))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::fwi::functions::update_moisture;

    fn weather_frame(days: &[f32]) -> TableFrame {
        let n = days.len();
        let mut frame = TableFrame::new();
        frame.add_column(COL_ID, vec![1.0; n]).unwrap();
        frame.add_column(COL_YEAR, vec![2023.0; n]).unwrap();
        frame.add_column(COL_MONTH, vec![6.0; n]).unwrap();
        frame.add_column(COL_DAY, days.to_vec()).unwrap();
        frame.add_column(COL_TEMP, vec![20.0; n]).unwrap();
        frame.add_column(COL_RH, vec![45.0; n]).unwrap();
        frame.add_column(COL_WS, vec![10.0; n]).unwrap();
        frame.add_column(COL_PREC, vec![0.0; n]).unwrap();
        frame.add_column(COL_LAT, vec![46.0; n]).unwrap();
        frame
    }

    #[test]
    fn chained_run_matches_scalar_fold() {
        let frame = weather_frame(&[1.0, 2.0, 3.0]);
        let (out, diagnostics) =
            run_moisture_table(&frame, &FwiModelConfig::default(), &Default::default()).unwrap();
        assert!(diagnostics.is_clean());

        let obs = DailyWeatherObservation {
            temperature: 20.0,
            humidity: 45.0,
            wind_speed: 10.0,
            rain: 0.0,
            latitude: 46.0,
            month: 6,
        };
        let mut state = MoistureState::default();
        for row in 0..3 {
            state = update_moisture(&state, &obs).unwrap();
            assert_eq!(out.column(COL_FFMC).unwrap()[row], state.ffmc);
            assert_eq!(out.column(COL_DMC).unwrap()[row], state.dmc);
            assert_eq!(out.column(COL_DC).unwrap()[row], state.dc);
        }
    }

    #[test]
    fn date_gap_aborts_the_group() {
        let frame = weather_frame(&[1.0, 2.0, 4.0]);
        let err =
            run_moisture_table(&frame, &FwiModelConfig::default(), &Default::default()).unwrap_err();
        match err {
            FireDangerError::SequenceGap { group, .. } => assert_eq!(group, 1),
            other => panic!("expected SequenceGap, got {:?}", other),
        }
    }

    #[test]
    fn groups_fold_independently() {
        let mut frame = TableFrame::new();
        frame.add_column(COL_ID, vec![1.0, 1.0, 2.0, 2.0]).unwrap();
        frame.add_column(COL_YEAR, vec![2023.0; 4]).unwrap();
        frame.add_column(COL_MONTH, vec![6.0; 4]).unwrap();
        // the second station restarts from day 10: no gap across groups
        frame.add_column(COL_DAY, vec![1.0, 2.0, 10.0, 11.0]).unwrap();
        frame.add_column(COL_TEMP, vec![20.0; 4]).unwrap();
        frame.add_column(COL_RH, vec![45.0; 4]).unwrap();
        frame.add_column(COL_WS, vec![10.0; 4]).unwrap();
        frame.add_column(COL_PREC, vec![0.0; 4]).unwrap();
        frame.add_column(COL_LAT, vec![46.0; 4]).unwrap();

        let (out, _) =
            run_moisture_table(&frame, &FwiModelConfig::default(), &Default::default()).unwrap();
        let ffmc = out.column(COL_FFMC).unwrap();
        // both stations start from the same seed under the same weather
        assert_eq!(ffmc[0], ffmc[2]);
        assert_eq!(ffmc[1], ffmc[3]);
    }

    #[test]
    fn invalid_row_is_recorded_not_fatal() {
        let mut frame = weather_frame(&[1.0, 2.0, 3.0]);
        frame
            .add_column(COL_RH, vec![45.0, 145.0, 45.0])
            .unwrap();
        let (out, diagnostics) =
            run_moisture_table(&frame, &FwiModelConfig::default(), &Default::default()).unwrap();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics.failures[0].index, 1);
        assert_eq!(out.column(COL_FFMC).unwrap()[1], NODATAVAL);
        // the chain keeps running past the bad row
        assert_ne!(out.column(COL_FFMC).unwrap()[2], NODATAVAL);
    }

    #[test]
    fn strict_policy_aborts_on_invalid_row() {
        let mut frame = weather_frame(&[1.0, 2.0]);
        frame.add_column(COL_RH, vec![45.0, 145.0]).unwrap();
        let opts = MoistureRunOptions {
            policy: FailurePolicy::Strict,
            ..Default::default()
        };
        let err = run_moisture_table(&frame, &FwiModelConfig::default(), &opts).unwrap_err();
        assert_eq!(
            err,
            FireDangerError::InvalidObservation {
                field: "humidity",
                value: 145.0
            }
        );
    }

    #[test]
    fn missing_weather_carries_state_and_marks_no_data() {
        let mut frame = weather_frame(&[1.0, 2.0, 3.0]);
        frame
            .add_column(COL_TEMP, vec![20.0, NODATAVAL, 20.0])
            .unwrap();
        let (out, diagnostics) =
            run_moisture_table(&frame, &FwiModelConfig::default(), &Default::default()).unwrap();
        assert!(diagnostics.is_clean());
        let ffmc = out.column(COL_FFMC).unwrap();
        assert_eq!(ffmc[1], NODATAVAL);
        // day 3 continues from day 1's state
        let obs = DailyWeatherObservation {
            temperature: 20.0,
            humidity: 45.0,
            wind_speed: 10.0,
            rain: 0.0,
            latitude: 46.0,
            month: 6,
        };
        let day1 = update_moisture(&MoistureState::default(), &obs).unwrap();
        let day3 = update_moisture(&day1, &obs).unwrap();
        assert_eq!(ffmc[2], day3.ffmc);
    }

    #[test]
    fn per_group_seed_is_required_for_every_group() {
        let frame = weather_frame(&[1.0, 2.0]);
        let mut seeds = HashMap::new();
        seeds.insert(7_i64, MoistureState::default());
        let opts = MoistureRunOptions {
            seed: SeedPolicy::PerGroup(seeds),
            ..Default::default()
        };
        let err = run_moisture_table(&frame, &FwiModelConfig::default(), &opts).unwrap_err();
        assert!(matches!(err, FireDangerError::InvalidInput { .. }));
    }

    #[test]
    fn fwi_system_run_produces_all_columns() {
        let frame = weather_frame(&[1.0, 2.0, 3.0]);
        let (out, diagnostics) =
            run_fwi_system_table(&frame, &FwiModelConfig::default(), &Default::default()).unwrap();
        assert!(diagnostics.is_clean());
        for name in [COL_FFMC, COL_DMC, COL_DC, COL_ISI, COL_BUI, COL_FWI, COL_DSR] {
            let col = out.column(name).unwrap();
            assert!(col.iter().all(|&v| v != NODATAVAL));
        }
    }

    #[test]
    fn missing_required_column_fails_fast() {
        let mut frame = weather_frame(&[1.0]);
        frame.columns.remove(COL_PREC);
        let err =
            run_moisture_table(&frame, &FwiModelConfig::default(), &Default::default()).unwrap_err();
        assert_eq!(
            err,
            FireDangerError::MissingColumn {
                name: COL_PREC.to_string()
            }
        );
    }

    fn fbp_frame() -> TableFrame {
        let mut frame = TableFrame::new();
        frame
            .add_column(COL_FUEL, vec![FuelCode::C2.grid_code() as f32, 99.0])
            .unwrap();
        frame.add_column(COL_FFMC, vec![92.0, 92.0]).unwrap();
        frame.add_column(COL_BUI, vec![70.0, 70.0]).unwrap();
        frame.add_column(COL_WS, vec![20.0, 20.0]).unwrap();
        frame.add_column(COL_WD, vec![90.0, 90.0]).unwrap();
        frame.add_column(COL_FMC, vec![97.0, 97.0]).unwrap();
        frame
    }

    #[test]
    fn fbp_rows_are_independent() {
        let (out, diagnostics) =
            run_fbp_table(&fbp_frame(), &FbpModelConfig::default(), FailurePolicy::Collect)
                .unwrap();
        // first row predicted, second dropped for its unknown fuel code
        assert!(out.column("hros").unwrap()[0] > 0.0);
        assert_eq!(out.column("hros").unwrap()[1], NODATAVAL);
        assert_eq!(diagnostics.len(), 1);
        assert!(matches!(
            diagnostics.failures[0].error,
            FireDangerError::UnknownFuelType { .. }
        ));
    }

    #[test]
    fn fbp_strict_mode_aborts() {
        let err =
            run_fbp_table(&fbp_frame(), &FbpModelConfig::default(), FailurePolicy::Strict)
                .unwrap_err();
        assert!(matches!(err, FireDangerError::UnknownFuelType { .. }));
    }
}
