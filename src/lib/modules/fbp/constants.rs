// Forestry Canada Fire Danger Group (1992), ST-X-3 constants,
// with the updates carried by the cffdrs reference implementation.

// Foliar moisture content, Eqs. 1-4.
// Normalized latitude without / with elevation
pub const FMC_LAT1: f32 = 46.0;
pub const FMC_LAT2: f32 = 23.4;
pub const FMC_LAT3: f32 = 0.0360;
pub const FMC_ELAT1: f32 = 43.0;
pub const FMC_ELAT2: f32 = 33.7;
pub const FMC_ELAT3: f32 = 0.0351;
pub const FMC_LON0: f32 = 150.0;
// Date of minimum foliar moisture
pub const FMC_D0_1: f32 = 151.0;
pub const FMC_D0_2: f32 = 142.1;
pub const FMC_D0_ELEV: f32 = 0.0172;
// Three-branch FMC curve over days from minimum
pub const FMC_ND1: f32 = 30.0;
pub const FMC_ND2: f32 = 50.0;
pub const FMC_C1: f32 = 85.0;
pub const FMC_C2: f32 = 0.0189;
pub const FMC_C3: f32 = 32.9;
pub const FMC_C4: f32 = 3.17;
pub const FMC_C5: f32 = 0.0288;
pub const FMC_MAX: f32 = 120.0;

// Grass curing coefficient, Eq. 35 as updated.
pub const CURING_SPLIT: f32 = 58.8;
pub const CURING_A1: f32 = 0.005;
pub const CURING_A2: f32 = 0.061;
pub const CURING_A3: f32 = 0.176;
pub const CURING_A4: f32 = 0.02;

// Buildup effect, Eq. 54.
pub const BE_SCALE: f32 = 50.0;

// Slope effect, Eqs. 39-43.
pub const SLOPE_A1: f32 = 3.533;
pub const SLOPE_A2: f32 = 1.2;
pub const SLOPE_MAX_FACTOR: f32 = 10.0;
pub const SLOPE_MAX_GS: f32 = 70.0;
// floor for the spread-curve inversion
pub const ISF_FLOOR: f32 = 0.01;
// slope-equivalent wind, Eq. 43 alternates and cap
pub const WSE_THRESHOLD: f32 = 40.0;
pub const WSE_B1: f32 = 2.496;
pub const WSE_B2: f32 = 0.999;
pub const WSE_MAX: f32 = 112.45;

// Mixedwood hardwood damping for green-up (M2, M4).
pub const HARDWOOD_DAMPING: f32 = 0.2;

// Crown fire, Eqs. 56-58.
pub const CSI_A1: f32 = 0.001;
pub const CSI_A2: f32 = 1.5;
pub const CSI_A3: f32 = 460.0;
pub const CSI_A4: f32 = 25.9;
pub const RSO_DENOM: f32 = 300.0;
pub const CFB_A1: f32 = 0.23;
// Fire description thresholds on crown fraction burned
pub const CFB_SURFACE: f32 = 0.1;
pub const CFB_CROWN: f32 = 0.9;

// C6 crowning, Eqs. 61-64.
pub const C6_RSC_A1: f32 = 60.0;
pub const C6_RSC_A2: f32 = 0.0497;
pub const FME_A1: f32 = 1.5;
pub const FME_A2: f32 = 0.00275;
pub const FME_AVG: f32 = 0.778;

// Fireline intensity, Eq. 69: heat of combustion [kJ/kg] over 60 s/min.
pub const HEAT_OF_COMBUSTION: f32 = 18000.0;
pub const FI_COEFF: f32 = HEAT_OF_COMBUSTION / 60.0;

// Acceleration, Eqs. 70-72.
pub const ACCEL_OPEN: f32 = 0.115;
pub const ACCEL_CFB1: f32 = 18.8;
pub const ACCEL_CFB2: f32 = 2.5;
pub const ACCEL_CFB3: f32 = 8.0;

// Length-to-breadth ratio, Eqs. 79-80.
pub const LB_A1: f32 = 8.729;
pub const LB_A2: f32 = 0.030;
pub const LB_A3: f32 = 2.155;
pub const LB_GRASS_A1: f32 = 1.1;
pub const LB_GRASS_A2: f32 = 0.464;
pub const LB_GRASS_MIN_WSV: f32 = 1.0;

// Default grass fuel load [kg/m²].
pub const DEFAULT_GFL: f32 = 0.35;

// Numerical floor applied to spread rates and surface consumption.
pub const ROS_FLOOR: f32 = 1e-6;
