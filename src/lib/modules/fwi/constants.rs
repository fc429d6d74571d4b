// Van Wagner & Pickett (1985), Forestry Technical Report 33 constants.

// conventional season start-up codes
pub const FFMC_INIT: f32 = 85.0;
pub const DMC_INIT: f32 = 6.0;
pub const DC_INIT: f32 = 15.0;

pub const FFMC_MAX: f32 = 101.0;

// FFMC CONSTANTS
// code <-> moisture conversion (Eqs. 1 and 10)
pub const FFMC_S1: f32 = 147.2;
pub const FFMC_S2: f32 = 59.5;
// Rain phase constants (Eqs. 2, 3a, 3b)
pub const FFMC_MIN_RAIN: f32 = 0.5; // daily cumulated rain (mm)
pub const FFMC_SAT_COND: f32 = 150.0;
pub const FFMC_MAX_MOISTURE: f32 = 250.0;
pub const FFMC_R1: f32 = 42.5;
pub const FFMC_R2: f32 = 6.93;
pub const FFMC_R3: f32 = 0.0015;
// Equilibrium moisture content constants (Eqs. 4 and 5)
pub const FFMC_A1D: f32 = 0.942;
pub const FFMC_A2D: f32 = 0.679;
pub const FFMC_A3D: f32 = 11.0;
pub const FFMC_A1W: f32 = 0.618;
pub const FFMC_A2W: f32 = 0.753;
pub const FFMC_A3W: f32 = 10.0;
pub const FFMC_A4: f32 = 0.18;
pub const FFMC_A5: f32 = 0.115;
pub const FFMC_TNORM: f32 = 21.1; // normal temperature (°C)
// Log drying/wetting rate constants (Eqs. 6a, 6b, 7a, 7b)
pub const FFMC_B1: f32 = 0.424;
pub const FFMC_B2: f32 = 1.7;
pub const FFMC_B3: f32 = 0.0694;
pub const FFMC_B4: f32 = 8.0;
pub const FFMC_B5: f32 = 0.581;
pub const FFMC_B6: f32 = 0.0365;

// Hourly FFMC variant: more precise conversion multiplier and rate scale
pub const HFFMC_S1: f32 = 147.27723933929;
pub const HFFMC_B5: f32 = 0.0579;

// DMC CONSTANTS
// rain effect (Eqs. 11-15)
pub const DMC_MIN_RAIN: f32 = 1.5;
pub const DMC_R1: f32 = 0.92;
pub const DMC_R2: f32 = 1.27;
pub const DMC_W1: f32 = 20.0;
pub const DMC_W2: f32 = 280.0;
pub const DMC_W3: f32 = 0.023;
pub const DMC_A1: f32 = 33.0;
pub const DMC_A2: f32 = 65.0;
pub const DMC_B1: f32 = 100.0;
pub const DMC_B2: f32 = 0.5;
pub const DMC_B3: f32 = 0.3;
pub const DMC_B4: f32 = 14.0;
pub const DMC_B5: f32 = 1.3;
pub const DMC_B6: f32 = 6.2;
pub const DMC_B7: f32 = 17.2;
pub const DMC_R3: f32 = 48.77;
pub const DMC_R4: f32 = 43.43;
pub const DMC_R5: f32 = 5.6348;
// log drying rate (Eq. 16)
pub const DMC_MIN_TEMP: f32 = -1.1;
pub const DMC_T1: f32 = 1.894;
pub const DMC_T2: f32 = 1.1;

// DMC day-length tables, one entry per month.
// 46N: Canadian standard, latitude >= 30N (Van Wagner 1987)
pub const DMC_ELL_46N: [f32; 12] = [
    6.5, 7.5, 9.0, 12.8, 13.9, 13.9, 12.4, 10.9, 9.4, 8.0, 7.0, 6.0,
];
// 20N: for 30 > latitude >= 10
pub const DMC_ELL_20N: [f32; 12] = [
    7.9, 8.4, 8.9, 9.5, 9.9, 10.2, 10.1, 9.7, 9.1, 8.6, 8.1, 7.8,
];
// 20S: for -10 > latitude >= -30
pub const DMC_ELL_20S: [f32; 12] = [
    10.1, 9.6, 9.1, 8.5, 8.1, 7.8, 7.9, 8.3, 8.9, 9.4, 9.9, 10.2,
];
// 40S: for -30 > latitude
pub const DMC_ELL_40S: [f32; 12] = [
    11.5, 10.5, 9.2, 7.9, 6.8, 6.2, 6.5, 7.4, 8.7, 10.0, 11.2, 11.8,
];
// near the equator a single factor serves all months
pub const DMC_ELL_EQUATOR: f32 = 9.0;

// DC CONSTANTS
// rain effect (Eqs. 18-21)
pub const DC_MIN_RAIN: f32 = 2.8;
pub const DC_R1: f32 = 0.83;
pub const DC_R2: f32 = 1.27;
pub const DC_Q1: f32 = 800.0;
pub const DC_Q2: f32 = 400.0;
pub const DC_R5: f32 = 3.937;
// potential evapotranspiration (Eq. 22)
pub const DC_MIN_TEMP: f32 = -2.8;
pub const DC_T1: f32 = 0.36;
pub const DC_T2: f32 = 2.8;

// DC day-length factor tables, one entry per month.
// north of 20 degrees N
pub const DC_FL_NORTH: [f32; 12] = [
    -1.6, -1.6, -1.6, 0.9, 3.8, 5.8, 6.4, 5.0, 2.4, 0.4, -1.6, -1.6,
];
// south of 20 degrees S
pub const DC_FL_SOUTH: [f32; 12] = [
    6.4, 5.0, 2.4, 0.4, -1.6, -1.6, -1.6, -1.6, -1.6, 0.9, 3.8, 5.8,
];
// near the equator a single factor serves all months
pub const DC_FL_EQUATOR: f32 = 1.4;

// ISI CONSTANTS (Eqs. 24-26)
pub const ISI_A0: f32 = 0.05039;
pub const ISI_A1: f32 = 91.9;
pub const ISI_A2: f32 = -0.1386;
pub const ISI_A3: f32 = 5.31;
pub const ISI_A4: f32 = 49_300_000.0;
pub const ISI_A5: f32 = 0.208;
// FBP wind-function modification, Eq. 53a in FCFDG (1992)
pub const ISI_FBP_MIN_WS: f32 = 40.0;
pub const ISI_FBP_W1: f32 = 12.0;
pub const ISI_FBP_W2: f32 = 0.0818;
pub const ISI_FBP_W3: f32 = 28.0;

// BUI CONSTANTS (Eqs. 27a, 27b)
pub const BUI_A1: f32 = 0.4;
pub const BUI_A2: f32 = 0.8;
pub const BUI_C1: f32 = 0.92;
pub const BUI_C2: f32 = 0.0114;
pub const BUI_C3: f32 = 1.7;

// FWI CONSTANTS (Eqs. 28-30)
pub const FWI_BUI_SPLIT: f32 = 80.0;
pub const FWI_A1: f32 = 0.626;
pub const FWI_A2: f32 = 0.809;
pub const FWI_A3: f32 = 2.0;
pub const FWI_A4: f32 = 1000.0;
pub const FWI_A5: f32 = 25.0;
pub const FWI_A6: f32 = 108.64;
pub const FWI_A7: f32 = 0.023;
pub const FWI_B1: f32 = 2.72;
pub const FWI_B2: f32 = 0.434;
pub const FWI_B3: f32 = 0.647;

// DSR CONSTANTS (Van Wagner 1970)
pub const DSR_A1: f32 = 0.0272;
pub const DSR_A2: f32 = 1.77;
