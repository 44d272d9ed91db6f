//! Resting place for [PresentableMeasurement]

use std::fmt::Display;
use std::time::Duration;
use once_cell::sync::Lazy;


/// How a scaled value should be written
#[derive(Debug, Clone, Copy)]
enum Precision {
    /// no decimal places
    Units,
    /// 2 decimal places
    Hundredths,
    /// the value is a number of seconds, shown as [Duration]'s `Debug` does
    Duration,
}

/// := (threshold, scale, unit suffix, precision)
type AutoScaleEntry = (f64, f64, &'static str, Precision);

/// Holds and present measurements with auto-scaling
pub struct PresentableMeasurement {
    pub(crate) value: f64,
    /// the first entry whose threshold is not above `value` is used
    auto_scale: &'static [AutoScaleEntry],
}

impl Display for PresentableMeasurement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (scaled_value, suffix, precision) = self.auto_scale.iter()
            .find(|&&(threshold, _, _, _)| self.value >= threshold)
            .map_or(
                (self.value, "", Precision::Hundredths),
                |&(_threshold, rate, suffix, precision)| (self.value / rate, suffix, precision));
        match precision {
            Precision::Units      => write!(f, "{:.0}{}", scaled_value, suffix),
            Precision::Hundredths => write!(f, "{:.2}{}", scaled_value, suffix),
            Precision::Duration   => write!(f, "{:?}", Duration::from_secs_f64(scaled_value.max(0.0))),
        }
    }
}

/// Builds a [PresentableMeasurement] able to display
/// quantities representing "a duration".
pub fn duration_measurement(duration: Duration) -> PresentableMeasurement {
    const AUTO_SCALE_DATA: &[AutoScaleEntry] = &[
        (0.0, 1.0, "", Precision::Duration),
    ];

    PresentableMeasurement {
        value: duration.as_secs_f64(),
        auto_scale: AUTO_SCALE_DATA,
    }
}

/// Builds a [PresentableMeasurement] able to display & auto-scale
/// quantities representing "a number of bytes".
pub fn bytes_measurement(value: f64) -> PresentableMeasurement {
    static AUTO_SCALE_DATA: Lazy<Vec<AutoScaleEntry>> = Lazy::new(|| {
        [
            ((1u64<<40) as f64, "TiB", Precision::Hundredths),
            ((1u64<<30) as f64, "GiB", Precision::Hundredths),
            ((1u64<<20) as f64, "MiB", Precision::Hundredths),
            ((1u64<<10) as f64, "KiB", Precision::Hundredths),
            (1.0,               "b",   Precision::Units),
            (0.0,               "b",   Precision::Units),
        ]
        .into_iter()
        .map(|(threshold, suffix, precision)| (
            threshold,
            if threshold != 0.0 { threshold } else { 1.0 },
            suffix,
            precision,
        ))
        .collect()
    });

    PresentableMeasurement {
        value,
        auto_scale: AUTO_SCALE_DATA.as_slice(),
    }
}
