use super::functions::{
    buildup_index, daily_severity_rating, fire_weather_index, isi_fbp, isi_vanwagner, update_dc,
    update_dmc, update_ffmc,
};

/// configuration structure for model config
/// selects the spread-index wind function and the day-length adjustment
#[derive(Debug, Clone)]
pub struct FwiModelConfig {
    pub model_version: String,
    pub lat_adjust: bool,

    isi_fn: fn(f32, f32) -> f32,
}

impl FwiModelConfig {
    pub fn new(model_version_str: &str) -> Self {
        let isi_fn: fn(f32, f32) -> f32 = match model_version_str {
            // high-wind modification of the spread index, FCFDG (1992)
            "fbp-1992" => isi_fbp,
            "vanwagner-1985" => isi_vanwagner,
            _ => isi_vanwagner,
        };

        FwiModelConfig {
            model_version: model_version_str.to_owned(),
            lat_adjust: true,
            isi_fn,
        }
    }

    pub fn with_lat_adjust(mut self, lat_adjust: bool) -> Self {
        self.lat_adjust = lat_adjust;
        self
    }

    pub fn ffmc(&self, ffmc: f32, temp: f32, hum: f32, w_speed: f32, rain: f32) -> f32 {
        update_ffmc(ffmc, temp, hum, w_speed, rain)
    }

    pub fn dmc(&self, dmc: f32, rain: f32, temp: f32, hum: f32, latitude: f32, month: u32) -> f32 {
        update_dmc(dmc, rain, temp, hum, latitude, month, self.lat_adjust)
    }

    pub fn dc(&self, dc: f32, rain: f32, temp: f32, latitude: f32, month: u32) -> f32 {
        update_dc(dc, rain, temp, latitude, month, self.lat_adjust)
    }

    pub fn isi(&self, ffmc: f32, w_speed: f32) -> f32 {
        (self.isi_fn)(ffmc, w_speed)
    }

    pub fn bui(&self, dmc: f32, dc: f32) -> f32 {
        buildup_index(dmc, dc)
    }

    pub fn fwi(&self, isi: f32, bui: f32) -> f32 {
        fire_weather_index(isi, bui)
    }

    pub fn dsr(&self, fwi: f32) -> f32 {
        daily_severity_rating(fwi)
    }
}

impl Default for FwiModelConfig {
    fn default() -> Self {
        Self::new("vanwagner-1985")
    }
}
