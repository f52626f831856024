use crate::{
    balance::BalanceSchedule,
    metrics::DerivedMetrics,
    render::Theme,
    sections::{
        ReportContext,
        SectionKind,
    },
    snapshot::Snapshot,
};
use credit_burn_config::Config;
use strum::IntoEnumIterator;

/// Computes the derived metrics once and renders every section in order.
pub struct Report<'a> {
    snapshot: &'a Snapshot,
    config: &'a Config,
    theme: Theme,
    schedule: BalanceSchedule,
    metrics: DerivedMetrics,
}

impl<'a> Report<'a> {
    /// A report using the February 2026 balance schedule.
    pub fn new(snapshot: &'a Snapshot, config: &'a Config, theme: Theme) -> Self {
        let schedule = BalanceSchedule::default();
        let metrics = DerivedMetrics::compute(snapshot, &schedule);
        Self {
            snapshot,
            config,
            theme,
            schedule,
            metrics,
        }
    }

    pub fn metrics(&self) -> &DerivedMetrics {
        &self.metrics
    }

    pub fn format(&self) -> String {
        let ctx = ReportContext {
            snapshot: self.snapshot,
            metrics: &self.metrics,
            schedule: &self.schedule,
            config: self.config,
            theme: &self.theme,
        };

        SectionKind::iter()
            .map(|kind| {
                trace!(section = %kind, "Rendering section");
                kind.section().format(&ctx)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::tests::sample;
    use pretty_assertions::assert_eq;

    #[test]
    fn sections_appear_in_order() {
        let snapshot = sample();
        let config = Config::default();
        let report = Report::new(&snapshot, &config, Theme::plain()).format();

        let headings = [
            "Terminal Usage Report",
            "CREDIT BURN TIMELINE",
            "TRAFFIC BY COUNTRY",
            "CREDIT EVENTS",
            "AI TERMINAL HEALTH",
            "HOURLY TRAFFIC (UTC)",
            "requests burned through",
        ];
        let positions: Vec<usize> = headings
            .iter()
            .map(|heading| report.find(heading).unwrap_or_else(|| panic!("missing {heading}")))
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
        assert_eq!(SectionKind::iter().count(), headings.len());
    }

    #[test]
    fn styled_report_strips_to_plain_report() {
        let snapshot = sample();
        let config = Config::default();
        let plain = Report::new(&snapshot, &config, Theme::plain()).format();
        let styled = Report::new(&snapshot, &config, Theme::default()).format();

        let stripped = String::from_utf8(strip_ansi_escapes::strip(styled.as_bytes())).unwrap();
        assert_eq!(stripped, plain);
    }

    #[test]
    fn simulated_and_reported_balances_stay_separate() {
        let snapshot = sample();
        let config = Config::default();
        let report = Report::new(&snapshot, &config, Theme::plain());

        assert_eq!(report.metrics().simulated_balances.last().copied(), Some(-0.42));
        // Depletion day: the simulation says zero, whatever the account reports.
        assert_eq!(report.metrics().simulated_balances[7], 0.0);
        assert_eq!(snapshot.balance.amount, -0.42);
    }
}
