//! Fixed video-length buckets

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DurationBand {
    Under15,
    From15To30,
    From30To45,
    From45To60,
    Over60,
}

impl DurationBand {
    pub fn as_str(&self) -> &'static str {
        match self {
            DurationBand::Under15 => "under_15",
            DurationBand::From15To30 => "15_30",
            DurationBand::From30To45 => "30_45",
            DurationBand::From45To60 => "45_60",
            DurationBand::Over60 => "over_60",
        }
    }

    /// Bucket a duration in seconds.
    ///
    /// Boundaries are checked in order: `< 15`, `< 30`, `<= 45`, `<= 60`.
    /// Exactly 45 lands in `30_45` and exactly 60 in `45_60`.
    pub fn from_seconds(seconds: f64) -> Self {
        if seconds < 15.0 {
            DurationBand::Under15
        } else if seconds < 30.0 {
            DurationBand::From15To30
        } else if seconds <= 45.0 {
            DurationBand::From30To45
        } else if seconds <= 60.0 {
            DurationBand::From45To60
        } else {
            DurationBand::Over60
        }
    }

    /// Canonical table order
    pub fn all() -> [DurationBand; 5] {
        [
            DurationBand::Under15,
            DurationBand::From15To30,
            DurationBand::From30To45,
            DurationBand::From45To60,
            DurationBand::Over60,
        ]
    }
}

/// Label for a duration in seconds
pub fn duration_band(seconds: f64) -> &'static str {
    DurationBand::from_seconds(seconds).as_str()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries() {
        assert_eq!(duration_band(0.0), "under_15");
        assert_eq!(duration_band(14.99), "under_15");
        assert_eq!(duration_band(15.0), "15_30");
        assert_eq!(duration_band(29.9), "15_30");
        assert_eq!(duration_band(30.0), "30_45");
        assert_eq!(duration_band(45.0), "30_45");
        assert_eq!(duration_band(45.1), "45_60");
        assert_eq!(duration_band(60.0), "45_60");
        assert_eq!(duration_band(60.1), "over_60");
    }

    #[test]
    fn test_negative_and_nan() {
        assert_eq!(duration_band(-5.0), "under_15");
        assert_eq!(duration_band(f64::NAN), "over_60");
    }
}
