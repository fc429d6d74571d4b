pub const NODATAVAL: f32 = -9999.0;
