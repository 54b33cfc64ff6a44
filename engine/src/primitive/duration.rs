//! ISO 8601 durations (`xsd:duration`).

use std::fmt;
use std::str::FromStr;

use crate::error::FormatError;

const DATE_UNITS: &str = "YMWD";
const TIME_UNITS: &str = "HMS";

/// An ISO 8601 duration such as `P1DT12H` or `-PT30.5S`.
///
/// Components are kept exactly as written (an absent component stays `None`,
/// an explicit zero stays `Some(0)`) so a decoded duration re-encodes to the
/// same text.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Duration {
    /// Leading `-`.
    pub negative: bool,
    /// `nY`.
    pub years: Option<u64>,
    /// `nM` before the `T`.
    pub months: Option<u64>,
    /// `nW`.
    pub weeks: Option<u64>,
    /// `nD`.
    pub days: Option<u64>,
    /// `nH`.
    pub hours: Option<u64>,
    /// `nM` after the `T`.
    pub minutes: Option<u64>,
    /// `nS`, the only component allowed a fraction.
    pub seconds: Option<f64>,
}

impl Duration {
    /// Returns the approximate length in seconds, counting a year as 365 days
    /// and a month as 30 days.
    #[must_use]
    pub fn total_seconds(&self) -> f64 {
        const DAY: f64 = 86_400.0;
        let whole = |c: Option<u64>, unit: f64| c.unwrap_or(0) as f64 * unit;
        let total = whole(self.years, 365.0 * DAY)
            + whole(self.months, 30.0 * DAY)
            + whole(self.weeks, 7.0 * DAY)
            + whole(self.days, DAY)
            + whole(self.hours, 3_600.0)
            + whole(self.minutes, 60.0)
            + self.seconds.unwrap_or(0.0);
        if self.negative {
            -total
        } else {
            total
        }
    }

    fn has_time(&self) -> bool {
        self.hours.is_some() || self.minutes.is_some() || self.seconds.is_some()
    }
}

impl FromStr for Duration {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || FormatError::Duration(s.to_owned());
        let (negative, rest) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let rest = rest.strip_prefix('P').ok_or_else(invalid)?;
        let (date, time) = match rest.split_once('T') {
            Some((_, "")) => return Err(invalid()),
            Some((date, time)) => (date, Some(time)),
            None => (rest, None),
        };

        let mut duration = Duration {
            negative,
            ..Duration::default()
        };
        let mut any = false;

        let mut rank = 0;
        for (number, unit) in components(date).ok_or_else(invalid)? {
            let position = DATE_UNITS.find(unit).ok_or_else(invalid)?;
            if position < rank {
                return Err(invalid());
            }
            rank = position + 1;
            let value = number.parse::<u64>().map_err(|_| invalid())?;
            match unit {
                'Y' => duration.years = Some(value),
                'M' => duration.months = Some(value),
                'W' => duration.weeks = Some(value),
                _ => duration.days = Some(value),
            }
            any = true;
        }

        if let Some(time) = time {
            let mut rank = 0;
            for (number, unit) in components(time).ok_or_else(invalid)? {
                let position = TIME_UNITS.find(unit).ok_or_else(invalid)?;
                if position < rank {
                    return Err(invalid());
                }
                rank = position + 1;
                match unit {
                    'H' => duration.hours = Some(number.parse().map_err(|_| invalid())?),
                    'M' => duration.minutes = Some(number.parse().map_err(|_| invalid())?),
                    _ => {
                        let seconds: f64 = number.parse().map_err(|_| invalid())?;
                        if !seconds.is_finite() {
                            return Err(invalid());
                        }
                        duration.seconds = Some(seconds);
                    }
                }
                any = true;
            }
        }

        if any {
            Ok(duration)
        } else {
            Err(invalid())
        }
    }
}

/// Splits `3Y6M` into `[("3", 'Y'), ("6", 'M')]`. Returns `None` for a
/// trailing number without a unit or a unit without a number.
fn components(s: &str) -> Option<Vec<(&str, char)>> {
    let mut out = Vec::new();
    let mut start = 0;
    for (i, c) in s.char_indices() {
        if c.is_ascii_digit() || c == '.' {
            continue;
        }
        let number = &s[start..i];
        if number.is_empty() || number.starts_with('.') || number.ends_with('.') {
            return None;
        }
        out.push((number, c));
        start = i + c.len_utf8();
    }
    (start == s.len()).then_some(out)
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        f.write_str("P")?;
        for (component, unit) in [
            (self.years, 'Y'),
            (self.months, 'M'),
            (self.weeks, 'W'),
            (self.days, 'D'),
        ] {
            if let Some(n) = component {
                write!(f, "{n}{unit}")?;
            }
        }
        let date_written = [self.years, self.months, self.weeks, self.days]
            .iter()
            .any(Option::is_some);
        if !self.has_time() {
            // A bare `P` is not a duration.
            return if date_written { Ok(()) } else { f.write_str("T0S") };
        }
        f.write_str("T")?;
        if let Some(n) = self.hours {
            write!(f, "{n}H")?;
        }
        if let Some(n) = self.minutes {
            write!(f, "{n}M")?;
        }
        if let Some(n) = self.seconds {
            write!(f, "{n}S")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parses_date_and_time_components() {
        let d: Duration = "P1Y2M3DT4H5M6.5S".parse().unwrap();
        assert_eq!(d.years, Some(1));
        assert_eq!(d.months, Some(2));
        assert_eq!(d.days, Some(3));
        assert_eq!(d.hours, Some(4));
        assert_eq!(d.minutes, Some(5));
        assert_eq!(d.seconds, Some(6.5));
        assert!(!d.negative);
    }

    #[test]
    fn minutes_and_months_are_told_apart_by_the_designator() {
        let d: Duration = "P1MT1M".parse().unwrap();
        assert_eq!(d.months, Some(1));
        assert_eq!(d.minutes, Some(1));
    }

    #[test]
    fn rejects_malformed_durations() {
        for s in ["", "P", "PT", "1D", "P1", "PD", "P1H", "PT1D", "P1D2Y", "PT1.5H", "P1.D", "-"] {
            assert!(s.parse::<Duration>().is_err(), "{s:?} should be rejected");
        }
    }

    #[test]
    fn re_encodes_as_written() {
        for s in ["PT2H", "P5D", "-P1W", "PT0S", "P0D", "P1Y2M3DT4H5M6.5S", "PT1M30S"] {
            let d: Duration = s.parse().unwrap();
            assert_eq!(d.to_string(), s);
        }
    }

    #[test]
    fn default_encodes_as_zero_seconds() {
        assert_eq!(Duration::default().to_string(), "PT0S");
    }

    #[test]
    fn total_seconds_counts_every_component() {
        let d: Duration = "-P1DT1H1M1S".parse().unwrap();
        assert_eq!(d.total_seconds(), -(86_400.0 + 3_600.0 + 60.0 + 1.0));
    }

    proptest! {
        #[test]
        fn prop_whole_components_round_trip(
            days in proptest::option::of(0u64..10_000),
            hours in proptest::option::of(0u64..100),
            seconds in proptest::option::of(0u32..100_000),
        ) {
            prop_assume!(days.is_some() || hours.is_some() || seconds.is_some());
            let d = Duration {
                days,
                hours,
                seconds: seconds.map(f64::from),
                ..Duration::default()
            };
            let parsed: Duration = d.to_string().parse().unwrap();
            prop_assert_eq!(parsed, d);
        }
    }
}
