use std::time::Duration;

const NANOS_PER_MICRO: f64 = 1_000.0;
const NANOS_PER_MILLI: u128 = 1_000_000;
const NANOS_PER_SEC: u128 = 1_000_000_000;

/// Unit a request duration is reported in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DurationUnit {
    Micros,
    Millis,
    Seconds,
}

impl DurationUnit {
    /// Largest unit whose count stays at or above one.
    pub fn for_nanos(nanos: u128) -> DurationUnit {
        if nanos < NANOS_PER_MILLI {
            DurationUnit::Micros
        } else if nanos < NANOS_PER_SEC {
            DurationUnit::Millis
        } else {
            DurationUnit::Seconds
        }
    }
}

/// Renders an elapsed time as `(12.3µs)`, `(4.5ms)` or `(1.25s)`.
pub fn format_duration(elapsed: Duration) -> String {
    format_nanos(elapsed.as_nanos())
}

pub(crate) fn format_nanos(nanos: u128) -> String {
    let nanos_f = nanos as f64;

    match DurationUnit::for_nanos(nanos) {
        DurationUnit::Micros => format!("({:.1}µs)", nanos_f / NANOS_PER_MICRO),
        DurationUnit::Millis => format!("({:.1}ms)", nanos_f / NANOS_PER_MILLI as f64),
        DurationUnit::Seconds => format!("({:.2}s)", nanos_f / NANOS_PER_SEC as f64),
    }
}
