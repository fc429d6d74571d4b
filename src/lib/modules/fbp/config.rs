/// Wind-effect model: equilibrium reports steady-state spread, while the
/// instantaneous model accelerates a point-ignition fire over elapsed time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindEffectModel {
    Instantaneous,
    Equilibrium,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrownFireModel {
    Enabled,
    Disabled,
}

/// configuration structure for model config
#[derive(Debug, Clone)]
pub struct FbpModelConfig {
    pub wind_effect: WindEffectModel,
    pub crown_model: CrownFireModel,
    /// elapsed time since ignition [min], used by the cell-wise runs
    pub elapsed_time: f32,
}

impl FbpModelConfig {
    pub fn new(wind_effect_str: &str, crown_model_str: &str) -> Self {
        let wind_effect = match wind_effect_str {
            "instantaneous" => WindEffectModel::Instantaneous,
            "equilibrium" => WindEffectModel::Equilibrium,
            _ => WindEffectModel::Equilibrium,
        };
        let crown_model = match crown_model_str {
            "disabled" => CrownFireModel::Disabled,
            "enabled" => CrownFireModel::Enabled,
            _ => CrownFireModel::Enabled,
        };

        FbpModelConfig {
            wind_effect,
            crown_model,
            elapsed_time: 60.0,
        }
    }

    pub fn with_elapsed_time(mut self, elapsed_time: f32) -> Self {
        self.elapsed_time = elapsed_time;
        self
    }
}

impl Default for FbpModelConfig {
    fn default() -> Self {
        Self::new("equilibrium", "enabled")
    }
}
