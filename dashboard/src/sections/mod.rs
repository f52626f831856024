//! # Sections
//!
//! The report is a fixed sequence of sections, each rendering part of the snapshot:
//!
//! 1. **`Header`**: title and the headline numbers
//! 2. **`CreditBurnTimeline`**: one row per day with traffic, errors, simulated balance and events
//! 3. **`TrafficByCountry`**: top countries with flags and bars
//! 4. **`CreditEvents`**: top-ups and depletions, and the reported balance
//! 5. **`ApiHealth`**: message outcomes and success rate
//! 6. **`HourlyTraffic`**: 24-hour sparkline and the peak hour
//! 7. **`Footer`**: link, balance status and a one-line summary
//!
//! Sections never fail: everything they read was validated when the snapshot was loaded.

mod api_health;
mod countries;
mod credit_events;
mod footer;
mod header;
mod hourly;
mod report;
mod timeline;

pub use api_health::ApiHealth;
pub use countries::TrafficByCountry;
pub use credit_events::CreditEvents;
pub use footer::Footer;
pub use header::Header;
pub use hourly::HourlyTraffic;
pub use report::Report;
pub use timeline::CreditBurnTimeline;

use crate::{
    balance::BalanceSchedule,
    metrics::DerivedMetrics,
    render::{
        cents,
        paint,
        Theme,
    },
    snapshot::Snapshot,
};
use chrono::NaiveDate;
use credit_burn_config::Config;
use strum::{
    Display,
    EnumIter,
};

/// Everything a section may read while formatting.
pub struct ReportContext<'a> {
    pub snapshot: &'a Snapshot,
    pub metrics: &'a DerivedMetrics,
    pub schedule: &'a BalanceSchedule,
    pub config: &'a Config,
    pub theme: &'a Theme,
}

/// One block of the report.
pub trait Section {
    /// Renders the section, newline-terminated.
    fn format(&self, ctx: &ReportContext<'_>) -> String;
}

#[derive(Debug, Clone, Copy, Display, EnumIter, PartialEq, Eq)]
#[strum(serialize_all = "kebab-case")]
pub enum SectionKind {
    Header,
    CreditBurnTimeline,
    TrafficByCountry,
    CreditEvents,
    ApiHealth,
    HourlyTraffic,
    Footer,
}

impl SectionKind {
    pub fn section(self) -> Box<dyn Section> {
        match self {
            SectionKind::Header => Box::new(Header),
            SectionKind::CreditBurnTimeline => Box::new(CreditBurnTimeline),
            SectionKind::TrafficByCountry => Box::new(TrafficByCountry),
            SectionKind::CreditEvents => Box::new(CreditEvents),
            SectionKind::ApiHealth => Box::new(ApiHealth),
            SectionKind::HourlyTraffic => Box::new(HourlyTraffic),
            SectionKind::Footer => Box::new(Footer),
        }
    }
}

impl ReportContext<'_> {
    /// Muted horizontal rule spanning the panel.
    pub fn rule(&self) -> String {
        format!("  {}\n", paint(self.theme.muted, "─".repeat(self.config.panel_width)))
    }

    /// Section title followed by an optional muted note, then a rule.
    pub fn heading(&self, title: &str, note: Option<&str>) -> String {
        let mut out = format!("  {}", paint(self.theme.heading, title));
        if let Some(note) = note {
            out.push_str(&format!("  {}", paint(self.theme.muted, note)));
        }
        out.push('\n');
        out.push_str(&self.rule());
        out
    }

    /// The reported balance, flagged as unpaid when negative.
    pub fn balance_status(&self) -> String {
        let balance = &self.snapshot.balance;
        if balance.is_unpaid() {
            format!(
                "{} {}",
                paint(self.theme.danger_strong, cents(balance.amount, "US")),
                paint(self.theme.danger, "UNPAID")
            )
        } else {
            paint(self.theme.success, cents(balance.amount, "US")).to_string()
        }
    }
}

/// `Feb 8`
pub(crate) fn short_date(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::snapshot::tests::sample;

    /// Renders one section of the sample snapshot with the plain theme.
    pub(crate) fn render(kind: SectionKind) -> String {
        render_with(kind, &sample(), &Config::default())
    }

    pub(crate) fn render_with(kind: SectionKind, snapshot: &Snapshot, config: &Config) -> String {
        let schedule = BalanceSchedule::default();
        let metrics = DerivedMetrics::compute(snapshot, &schedule);
        let theme = Theme::plain();
        let ctx = ReportContext {
            snapshot,
            metrics: &metrics,
            schedule: &schedule,
            config,
            theme: &theme,
        };
        kind.section().format(&ctx)
    }

    #[test]
    fn short_dates_drop_leading_zero() {
        assert_eq!(short_date(NaiveDate::from_ymd_opt(2026, 2, 8).unwrap()), "Feb 8");
        assert_eq!(short_date(NaiveDate::from_ymd_opt(2026, 1, 31).unwrap()), "Jan 31");
    }
}
