/// Nominal mains voltage used to derive power from measured current.
pub const NOMINAL_VOLTAGE: f64 = 230.0;

/// A single-value sensor record with running min/max statistics.
///
/// `min` and `max` start at `0.0`, which doubles as the "no reading
/// recorded yet" sentinel. A genuine reading of exactly zero is therefore
/// indistinguishable from an absent one and is skipped by
/// [`update_minmax`](Self::update_minmax).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScalarSensor {
    /// Latest reading, set by the caller before updating the statistics.
    pub current: f32,
    /// Lowest non-zero reading observed so far, `0.0` while unset.
    pub min: f32,
    /// Highest non-zero reading observed so far, `0.0` while unset.
    pub max: f32,
}

impl ScalarSensor {
    /// Folds `current` into the running min/max.
    ///
    /// A zero reading is treated as "no reading" and leaves the record
    /// untouched. The first non-zero reading sets both bounds, so
    /// `min <= current <= max` holds from then on.
    pub fn update_minmax(&mut self) {
        if self.current == 0.0 {
            return;
        }

        if self.min == 0.0 || self.current < self.min {
            self.min = self.current;
        }

        if self.max == 0.0 || self.current > self.max {
            self.max = self.current;
        }
    }
}

/// A mains-current sensor record with running min/max statistics and
/// power fields derived at [`NOMINAL_VOLTAGE`].
///
/// Same zero-sentinel convention as [`ScalarSensor`], at `f64` precision.
/// The watt fields carry no state of their own: every update that sees a
/// non-zero current overwrites all three from the ampere fields. A zero
/// current skips the whole update, so the watt fields keep whatever values
/// the previous update left behind.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CurrentPowerSensor {
    /// Latest current reading in amperes, set by the caller before
    /// updating the statistics.
    pub ampere_current: f64,
    /// Lowest non-zero current observed so far, `0.0` while unset.
    pub ampere_min: f64,
    /// Highest non-zero current observed so far, `0.0` while unset.
    pub ampere_max: f64,
    /// Power in watts derived from `ampere_current`.
    pub watts_current: f64,
    /// Power in watts derived from `ampere_min`.
    pub watts_min: f64,
    /// Power in watts derived from `ampere_max`.
    pub watts_max: f64,
}

impl CurrentPowerSensor {
    /// Folds `ampere_current` into the running min/max and recomputes the
    /// derived watt fields.
    ///
    /// A zero current is treated as "no reading": the ampere statistics
    /// and the watt fields are all left untouched.
    pub fn update_minmax(&mut self) {
        if self.ampere_current == 0.0 {
            return;
        }

        if self.ampere_min == 0.0 || self.ampere_current < self.ampere_min {
            self.ampere_min = self.ampere_current;
        }

        if self.ampere_max == 0.0 || self.ampere_current > self.ampere_max {
            self.ampere_max = self.ampere_current;
        }

        self.watts_current = self.ampere_current * NOMINAL_VOLTAGE;
        self.watts_min = self.ampere_min * NOMINAL_VOLTAGE;
        self.watts_max = self.ampere_max * NOMINAL_VOLTAGE;
    }
}
