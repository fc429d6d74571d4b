use std::collections::HashMap;

use lazy_static::lazy_static;
use serde_derive::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

use crate::constants::NODATAVAL;
use crate::error::FireDangerError;

/// The closed set of FBP fuel types, FCFDG (1992).
#[allow(non_camel_case_types)]
#[derive(
    Debug, PartialEq, Eq, Hash, Copy, Clone, EnumString, EnumIter, Display, Serialize, Deserialize,
)]
pub enum FuelCode {
    C1,
    C2,
    C3,
    C4,
    C5,
    C6,
    C7,
    D1,
    M1,
    M2,
    M3,
    M4,
    S1,
    S2,
    S3,
    O1a,
    O1b,
}

impl FuelCode {
    /// Numeric code used by raster fuel maps, 1-17 in catalogue order.
    pub fn grid_code(&self) -> u8 {
        FuelCode::iter()
            .position(|c| c == *self)
            .map(|p| p as u8 + 1)
            .unwrap_or(0)
    }

    pub fn from_grid_code(code: u8) -> Result<FuelCode, FireDangerError> {
        if code == 0 {
            return Err(FireDangerError::UnknownFuelType {
                code: code.to_string(),
            });
        }
        FuelCode::iter()
            .nth((code - 1) as usize)
            .ok_or(FireDangerError::UnknownFuelType {
                code: code.to_string(),
            })
    }

    pub fn parse(code: &str) -> Result<FuelCode, FireDangerError> {
        code.parse()
            .map_err(|_| FireDangerError::UnknownFuelType {
                code: code.to_string(),
            })
    }

    /// Grass and mixedwood types take the grass length-to-breadth curve
    /// and the open-fuel acceleration constant.
    pub fn is_grass(&self) -> bool {
        matches!(self, FuelCode::O1a | FuelCode::O1b)
    }
}

/// Per-fuel-type coefficients and applicability constraints.
/// Crown geometry fields hold NODATAVAL where crowning is not modelled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FuelTypeParameters {
    pub code: FuelCode,
    pub name: String,
    /// rate-of-spread curve coefficients, Eq. 26
    pub a: f32,
    pub b: f32,
    pub c: f32,
    /// buildup effect parameters, Eq. 54
    pub q: f32,
    pub bui0: f32,
    /// crown base height [m]
    pub cbh: f32,
    /// crown fuel load [kg/m²]
    pub cfl: f32,
    pub requires_curing: bool,
    pub requires_percent_conifer: bool,
    pub requires_percent_dead_fir: bool,
    pub crown_capable: bool,
}

/// The read-only fuel-type catalogue. Built once at startup and shared by
/// all computations; an alternate parameterization can be loaded from JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FuelCatalogue {
    entries: HashMap<FuelCode, FuelTypeParameters>,
}

lazy_static! {
    pub static ref FUEL_CATALOGUE: FuelCatalogue = FuelCatalogue::standard();
}

macro_rules! fuel {
    ($entries:expr, $code:ident, $name:expr, $a:expr, $b:expr, $c:expr, $q:expr, $bui0:expr,
     $cbh:expr, $cfl:expr, curing: $cu:expr, pc: $pc:expr, pdf: $pdf:expr, crown: $cr:expr) => {
        $entries.insert(
            FuelCode::$code,
            FuelTypeParameters {
                code: FuelCode::$code,
                name: $name.to_string(),
                a: $a,
                b: $b,
                c: $c,
                q: $q,
                bui0: $bui0,
                cbh: $cbh,
                cfl: $cfl,
                requires_curing: $cu,
                requires_percent_conifer: $pc,
                requires_percent_dead_fir: $pdf,
                crown_capable: $cr,
            },
        );
    };
}

impl FuelCatalogue {
    /// The standard FBP parameterization, FCFDG (1992) Table 6 et seq.
    #[rustfmt::skip]
    pub fn standard() -> Self {
        let mut entries = HashMap::new();
        let nd = NODATAVAL;
        fuel!(entries, C1, "Spruce-lichen woodland",            90.0, 0.0649, 4.5,  0.90, 72.0,  2.0, 0.75, curing: false, pc: false, pdf: false, crown: true);
        fuel!(entries, C2, "Boreal spruce",                    110.0, 0.0282, 1.5,  0.70, 64.0,  3.0, 0.80, curing: false, pc: false, pdf: false, crown: true);
        fuel!(entries, C3, "Mature jack or lodgepole pine",    110.0, 0.0444, 3.0,  0.75, 62.0,  8.0, 1.15, curing: false, pc: false, pdf: false, crown: true);
        fuel!(entries, C4, "Immature jack or lodgepole pine",  110.0, 0.0293, 1.5,  0.80, 66.0,  4.0, 1.20, curing: false, pc: false, pdf: false, crown: true);
        fuel!(entries, C5, "Red and white pine",                30.0, 0.0697, 4.0,  0.80, 56.0, 18.0, 1.20, curing: false, pc: false, pdf: false, crown: true);
        fuel!(entries, C6, "Conifer plantation",                30.0, 0.0800, 3.0,  0.80, 62.0,  7.0, 1.80, curing: false, pc: false, pdf: false, crown: true);
        fuel!(entries, C7, "Ponderosa pine - Douglas-fir",      45.0, 0.0305, 2.0,  0.85, 106.0, 10.0, 0.50, curing: false, pc: false, pdf: false, crown: true);
        fuel!(entries, D1, "Leafless aspen",                    30.0, 0.0232, 1.6,  0.90, 32.0,  nd,  nd,  curing: false, pc: false, pdf: false, crown: false);
        // M1/M2 spread blends C2 and D1; their own curve coefficients are unused
        fuel!(entries, M1, "Boreal mixedwood - leafless",        nd,   nd,    nd,   0.80, 50.0,  6.0, 0.80, curing: false, pc: true,  pdf: false, crown: true);
        fuel!(entries, M2, "Boreal mixedwood - green",           nd,   nd,    nd,   0.80, 50.0,  6.0, 0.80, curing: false, pc: true,  pdf: false, crown: true);
        fuel!(entries, M3, "Dead balsam fir mixedwood - leafless", 120.0, 0.0572, 1.4, 0.80, 50.0, 6.0, 0.80, curing: false, pc: false, pdf: true, crown: true);
        fuel!(entries, M4, "Dead balsam fir mixedwood - green", 100.0, 0.0404, 1.48, 0.80, 50.0,  6.0, 0.80, curing: false, pc: false, pdf: true,  crown: true);
        fuel!(entries, S1, "Jack or lodgepole pine slash",      75.0, 0.0297, 1.3,  0.75, 38.0,  nd,  nd,  curing: false, pc: false, pdf: false, crown: false);
        fuel!(entries, S2, "White spruce - balsam slash",       40.0, 0.0438, 1.7,  0.75, 63.0,  nd,  nd,  curing: false, pc: false, pdf: false, crown: false);
        fuel!(entries, S3, "Coastal cedar - hemlock - Douglas-fir slash", 55.0, 0.0829, 3.2, 0.75, 31.0, nd, nd, curing: false, pc: false, pdf: false, crown: false);
        fuel!(entries, O1a, "Matted grass",                    190.0, 0.0310, 1.4,  1.00, 1.0,   nd,  nd,  curing: true,  pc: false, pdf: false, crown: false);
        fuel!(entries, O1b, "Standing grass",                  250.0, 0.0350, 1.7,  1.00, 1.0,   nd,  nd,  curing: true,  pc: false, pdf: false, crown: false);
        FuelCatalogue { entries }
    }

    /// Load an alternate catalogue from its JSON serialization.
    pub fn from_json(json: &str) -> Result<Self, FireDangerError> {
        serde_json::from_str(json).map_err(|e| FireDangerError::UnknownFuelType {
            code: format!("unparseable catalogue: {}", e),
        })
    }

    pub fn lookup(&self, code: FuelCode) -> Result<&FuelTypeParameters, FireDangerError> {
        self.entries
            .get(&code)
            .ok_or(FireDangerError::UnknownFuelType {
                code: code.to_string(),
            })
    }

    pub fn lookup_str(&self, code: &str) -> Result<&FuelTypeParameters, FireDangerError> {
        self.lookup(FuelCode::parse(code)?)
    }

    pub fn lookup_grid_code(&self, code: u8) -> Result<&FuelTypeParameters, FireDangerError> {
        self.lookup(FuelCode::from_grid_code(code)?)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
