use crate::{
    balance::{
        BalanceCurve,
        BalanceSchedule,
    },
    snapshot::{
        DailyRecord,
        Snapshot,
    },
};
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeakHour {
    /// UTC hour, 0-23.
    pub hour: usize,
    pub requests: u64,
}

/// Everything the sections need that is not stored in the snapshot.
#[derive(Debug, Clone)]
pub struct DerivedMetrics {
    /// Simulated balance per day, see [`BalanceSchedule::simulate`].
    pub simulated_balances: BalanceCurve,
    pub max_daily_requests: u64,
    pub peak_day: NaiveDate,
    pub peak_hour: PeakHour,
}

impl DerivedMetrics {
    pub fn compute(snapshot: &Snapshot, schedule: &BalanceSchedule) -> Self {
        let peak_day = first_max_by_key(&snapshot.daily, |day: &DailyRecord| day.requests);
        let (hour, peak_hour_requests) = first_max_by_key(&snapshot.hourly, |hour| hour.requests)
            .map(|(hour, record)| (hour, record.requests))
            .unwrap_or_default();

        let metrics = Self {
            simulated_balances: schedule.simulate(&snapshot.daily),
            max_daily_requests: peak_day.map(|(_, day)| day.requests).unwrap_or_default(),
            peak_day: peak_day.map(|(_, day)| day.date).unwrap_or_default(),
            peak_hour: PeakHour {
                hour,
                requests: peak_hour_requests,
            },
        };
        debug!(
            max_daily_requests = metrics.max_daily_requests,
            peak_day = %metrics.peak_day,
            peak_hour = metrics.peak_hour.hour,
            "Derived metrics computed"
        );
        metrics
    }
}

/// Like `Iterator::max_by_key` but keeps the first of several equal maxima.
fn first_max_by_key<T>(items: &[T], key: impl Fn(&T) -> u64) -> Option<(usize, &T)> {
    items.iter().enumerate().fold(None, |best, (index, item)| match best {
        Some((_, current)) if key(item) <= key(current) => best,
        _ => Some((index, item)),
    })
}
