//! Simulated day-by-day account balance.
//!
//! The curve is not a ledger: it spreads each deposit over the days of its phase in proportion to
//! the traffic of that day. A [`BalanceSchedule`] lists the phase windows and the dated
//! [`Transition`]s, and [`BalanceSchedule::simulate`] folds them over the daily series.
//!
//! The reported balance of the snapshot is a separate value and is never consulted here.

use crate::snapshot::DailyRecord;
use chrono::NaiveDate;
use derive_more::Deref;

/// What happens to the running balance on a boundary day.
///
/// `share` is the day's requests divided by the total requests of the referenced phase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transition {
    /// `balance = deposit - share * burn_scale`
    Open { deposit: f64, burn_scale: f64, phase: usize },
    /// `balance -= share * burn_scale`
    Burn { burn_scale: f64, phase: usize },
    /// `balance = 0`
    Deplete,
}

impl Transition {
    pub fn apply(&self, balance: f64, requests: u64, phase_totals: &[f64]) -> f64 {
        let share = |phase: usize| requests as f64 / phase_totals.get(phase).copied().unwrap_or(1.0);
        match *self {
            Transition::Open {
                deposit,
                burn_scale,
                phase,
            } => deposit - share(phase) * burn_scale,
            Transition::Burn { burn_scale, phase } => balance - share(phase) * burn_scale,
            Transition::Deplete => 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PhaseWindow {
    pub dates: Vec<NaiveDate>,
}

impl PhaseWindow {
    /// Requests summed over the days inside the window, floored at 1.
    pub fn total_requests(&self, daily: &[DailyRecord]) -> f64 {
        let total: u64 = daily
            .iter()
            .filter(|day| self.dates.contains(&day.date))
            .map(|day| day.requests)
            .sum();
        total.max(1) as f64
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Boundary {
    pub date: NaiveDate,
    pub transition: Transition,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BalanceSchedule {
    pub phases: Vec<PhaseWindow>,
    /// Ordered by date.
    pub boundaries: Vec<Boundary>,
}

/// Simulated balance per day, aligned with the daily series it was computed from.
#[derive(Debug, Clone, Default, Deref, PartialEq)]
pub struct BalanceCurve(Vec<f64>);

impl BalanceCurve {
    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn round_cents(value: f64) -> f64 {
    let rounded = (value * 100.0).round() / 100.0;
    // Avoid rendering `-0.00`.
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

impl Default for BalanceSchedule {
    /// The February 2026 account: $1,000 burned between Feb 4 and Feb 7, then $1,300 reloaded on
    /// Feb 8.
    fn default() -> Self {
        let first_burn_scale = 1000.0;
        let second_burn_scale = 1300.42;
        Self {
            phases: vec![
                PhaseWindow {
                    dates: (4..=7).map(|day| date(2026, 2, day)).collect(),
                },
                PhaseWindow {
                    dates: (8..=9).map(|day| date(2026, 2, day)).collect(),
                },
            ],
            boundaries: vec![
                Boundary {
                    date: date(2026, 2, 4),
                    transition: Transition::Open {
                        deposit: 1000.0,
                        burn_scale: first_burn_scale,
                        phase: 0,
                    },
                },
                Boundary {
                    date: date(2026, 2, 5),
                    transition: Transition::Burn {
                        burn_scale: first_burn_scale,
                        phase: 0,
                    },
                },
                Boundary {
                    date: date(2026, 2, 6),
                    transition: Transition::Burn {
                        burn_scale: first_burn_scale,
                        phase: 0,
                    },
                },
                Boundary {
                    date: date(2026, 2, 7),
                    transition: Transition::Deplete,
                },
                Boundary {
                    date: date(2026, 2, 8),
                    transition: Transition::Open {
                        deposit: 1300.0,
                        burn_scale: second_burn_scale,
                        phase: 1,
                    },
                },
                Boundary {
                    date: date(2026, 2, 9),
                    transition: Transition::Burn {
                        burn_scale: second_burn_scale,
                        phase: 1,
                    },
                },
            ],
        }
    }
}

impl BalanceSchedule {
    /// Date of the first transition; the balance is zero before it.
    pub fn starts_on(&self) -> Option<NaiveDate> {
        self.boundaries.first().map(|boundary| boundary.date)
    }

    pub fn phase_totals(&self, daily: &[DailyRecord]) -> Vec<f64> {
        self.phases.iter().map(|phase| phase.total_requests(daily)).collect()
    }

    /// Sum of every deposit the schedule opens.
    pub fn total_deposited(&self) -> f64 {
        self.boundaries
            .iter()
            .filter_map(|boundary| match boundary.transition {
                Transition::Open { deposit, .. } => Some(deposit),
                _ => None,
            })
            .sum()
    }

    /// The deposit opened on `date`, if any.
    pub fn deposit_on(&self, date: NaiveDate) -> Option<f64> {
        self.boundaries
            .iter()
            .find(|boundary| boundary.date == date)
            .and_then(|boundary| match boundary.transition {
                Transition::Open { deposit, .. } => Some(deposit),
                _ => None,
            })
    }

    /// Runs the schedule over `daily`, which must be sorted by date.
    ///
    /// Days before [`Self::starts_on`] are zero, boundary days apply their transition and all
    /// other days carry the previous balance forward. Values are rounded to cents.
    pub fn simulate(&self, daily: &[DailyRecord]) -> BalanceCurve {
        let totals = self.phase_totals(daily);
        let start = self.starts_on();
        trace!(?totals, ?start, "Simulating balance");

        let (_, balances) = daily
            .iter()
            .fold((0.0, Vec::with_capacity(daily.len())), |(balance, mut out), day| {
                let balance = match start {
                    Some(start) if day.date >= start => self
                        .boundaries
                        .iter()
                        .find(|boundary| boundary.date == day.date)
                        .map_or(balance, |boundary| {
                            boundary.transition.apply(balance, day.requests, &totals)
                        }),
                    _ => 0.0,
                };
                out.push(round_cents(balance));
                (balance, out)
            });

        BalanceCurve(balances)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn day(date_str: &str, requests: u64, errors: u64) -> DailyRecord {
        DailyRecord {
            date: date_str.parse().unwrap(),
            requests,
            errors,
        }
    }

    #[test]
    fn burns_first_deposit_by_traffic_share() {
        let daily = [
            day("2026-02-03", 10, 0),
            day("2026-02-04", 50, 0),
            day("2026-02-05", 30, 2),
        ];
        let curve = BalanceSchedule::default().simulate(&daily);
        assert_eq!(curve.into_inner(), vec![0.0, 375.0, 0.0]);
    }

    #[test]
    fn curve_is_aligned_and_rounded_to_cents() {
        let daily = [
            day("2026-01-31", 3, 0),
            day("2026-02-04", 7, 0),
            day("2026-02-05", 11, 0),
            day("2026-02-06", 13, 0),
            day("2026-02-07", 17, 48),
            day("2026-02-08", 19, 0),
            day("2026-02-09", 23, 0),
            day("2026-02-10", 29, 0),
        ];
        let curve = BalanceSchedule::default().simulate(&daily);

        assert_eq!(curve.len(), daily.len());
        for value in curve.iter() {
            assert_eq!((value * 100.0).round() / 100.0, *value);
        }
        // 1000 - 7/48 * 1000
        assert_eq!(curve[1], 854.17);
        // Depletion resets whatever the simulation computed.
        assert_eq!(curve[4], 0.0);
        // 1300 - 19/42 * 1300.42
        assert_eq!(curve[5], 711.71);
        // The day after the last boundary carries the balance forward.
        assert_eq!(curve[7], curve[6]);
    }

    #[test]
    fn zero_traffic_does_not_divide_by_zero() {
        let daily = [
            day("2026-02-04", 0, 0),
            day("2026-02-05", 0, 0),
            day("2026-02-08", 0, 0),
            day("2026-02-09", 0, 0),
        ];
        let curve = BalanceSchedule::default().simulate(&daily);
        assert_eq!(curve.into_inner(), vec![1000.0, 1000.0, 1300.0, 1300.0]);
    }

    #[test]
    fn days_before_first_boundary_are_zero() {
        let daily = [day("2026-01-01", 500, 0), day("2026-02-03", 500, 0)];
        let curve = BalanceSchedule::default().simulate(&daily);
        assert_eq!(curve.into_inner(), vec![0.0, 0.0]);
    }

    #[test]
    fn empty_series_gives_empty_curve() {
        assert!(BalanceSchedule::default().simulate(&[]).is_empty());
    }

    #[test]
    fn each_transition_applies_its_rule() {
        let totals = [80.0];
        let open = Transition::Open {
            deposit: 1000.0,
            burn_scale: 1000.0,
            phase: 0,
        };
        let burn = Transition::Burn {
            burn_scale: 1000.0,
            phase: 0,
        };
        assert_eq!(open.apply(-5.0, 40, &totals), 500.0);
        assert_eq!(burn.apply(500.0, 20, &totals), 250.0);
        assert_eq!(Transition::Deplete.apply(250.0, 20, &totals), 0.0);
        // Unknown phases behave like an empty phase.
        let orphan = Transition::Burn {
            burn_scale: 1.0,
            phase: 3,
        };
        assert_eq!(orphan.apply(10.0, 4, &totals), 6.0);
    }

    #[test]
    fn schedule_summaries() {
        let schedule = BalanceSchedule::default();
        assert_eq!(schedule.starts_on(), Some(date(2026, 2, 4)));
        assert_eq!(schedule.total_deposited(), 2300.0);
        assert_eq!(schedule.deposit_on(date(2026, 2, 8)), Some(1300.0));
        assert_eq!(schedule.deposit_on(date(2026, 2, 7)), None);
    }

    #[test]
    fn custom_schedule() {
        let schedule = BalanceSchedule {
            phases: vec![PhaseWindow {
                dates: vec![date(2026, 3, 1), date(2026, 3, 2)],
            }],
            boundaries: vec![
                Boundary {
                    date: date(2026, 3, 1),
                    transition: Transition::Open {
                        deposit: 100.0,
                        burn_scale: 100.0,
                        phase: 0,
                    },
                },
                Boundary {
                    date: date(2026, 3, 2),
                    transition: Transition::Deplete,
                },
            ],
        };
        let curve = schedule.simulate(&[day("2026-03-01", 1, 0), day("2026-03-02", 3, 0)]);
        assert_eq!(curve.into_inner(), vec![75.0, 0.0]);
        assert_eq!(schedule.total_deposited(), 100.0);
    }
}
