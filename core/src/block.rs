//! Daily demand blocks and their fixed clock bounds.

use crate::error::GenError;
use chrono::NaiveTime;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Block {
    Morning,
    Midday,
    Evening,
    Night,
}

/// Static bounds for one block. `end` is inclusive (hh:59).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockSpan {
    pub start_hour: u32,
    pub end_hour: u32,
    /// Average orders handled per labor hour (ODH).
    pub orders_per_hour: f64,
}

impl Block {
    pub const ALL: [Block; 4] = [Block::Morning, Block::Midday, Block::Evening, Block::Night];

    pub fn span(&self) -> BlockSpan {
        match self {
            Self::Morning => BlockSpan {
                start_hour: 7,
                end_hour: 10,
                orders_per_hour: 3.0,
            },
            Self::Midday => BlockSpan {
                start_hour: 11,
                end_hour: 14,
                orders_per_hour: 4.0,
            },
            Self::Evening => BlockSpan {
                start_hour: 15,
                end_hour: 18,
                orders_per_hour: 5.0,
            },
            Self::Night => BlockSpan {
                start_hour: 19,
                end_hour: 22,
                orders_per_hour: 3.0,
            },
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Morning => "morning",
            Self::Midday => "midday",
            Self::Evening => "evening",
            Self::Night => "night",
        }
    }

    pub fn start_time(&self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.span().start_hour, 0, 0)
            .expect("block start hours are valid clock times")
    }

    pub fn end_time(&self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.span().end_hour, 59, 0)
            .expect("block end hours are valid clock times")
    }

    /// Workers needed to cover `forecast` orders, rounded half away from zero.
    /// Negative forecasts yield zero.
    pub fn headcount(&self, forecast: f64) -> u32 {
        let raw = (forecast / self.span().orders_per_hour).round();
        if raw.is_nan() || raw <= 0.0 {
            0
        } else {
            raw as u32
        }
    }
}

impl FromStr for Block {
    type Err = GenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Block::ALL
            .into_iter()
            .find(|b| b.as_str() == s)
            .ok_or_else(|| GenError::UnknownBlock { name: s.to_string() })
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_four_names() {
        for b in Block::ALL {
            assert_eq!(b.as_str().parse::<Block>().unwrap(), b);
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = "afternoon".parse::<Block>().unwrap_err();
        assert!(matches!(err, GenError::UnknownBlock { ref name } if name == "afternoon"));
        assert!("Morning".parse::<Block>().is_err(), "match is case-sensitive");
    }

    #[test]
    fn bounds_cover_seven_to_eleven_pm_without_overlap() {
        let mut prev_end: Option<u32> = None;
        for b in Block::ALL {
            let span = b.span();
            assert!(span.start_hour <= span.end_hour);
            if let Some(end) = prev_end {
                assert_eq!(
                    span.start_hour,
                    end + 1,
                    "{b} should start right after the previous block"
                );
            }
            prev_end = Some(span.end_hour);
        }
        assert_eq!(Block::Morning.start_time().to_string(), "07:00:00");
        assert_eq!(Block::Night.end_time().to_string(), "22:59:00");
    }

    #[test]
    fn every_block_has_clock_bounds() {
        for b in Block::ALL {
            assert!(b.start_time() < b.end_time(), "{b} bounds out of order");
            assert_eq!(b.end_time().format("%M").to_string(), "59");
        }
    }

    #[test]
    fn headcount_rounds_to_nearest() {
        assert_eq!(Block::Morning.headcount(12.0), 4);
        assert_eq!(Block::Midday.headcount(9.9), 2);
        assert_eq!(Block::Evening.headcount(12.4), 2);
        assert_eq!(Block::Night.headcount(0.0), 0);
    }

    #[test]
    fn headcount_ties_round_away_from_zero() {
        // 10 / 4 = 2.5
        assert_eq!(Block::Midday.headcount(10.0), 3);
        // 7.5 / 5 = 1.5
        assert_eq!(Block::Evening.headcount(7.5), 2);
    }

    #[test]
    fn negative_forecast_is_zero_headcount() {
        assert_eq!(Block::Morning.headcount(-4.2), 0);
    }
}
