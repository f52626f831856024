use super::{
    ReportContext,
    Section,
};
use crate::{
    render::{
        paint,
        sparkline,
    },
    snapshot::HOURS_PER_DAY,
};

const SPARK_WIDTH: usize = 3;
const LABEL_EVERY_HOURS: usize = 3;

pub struct HourlyTraffic;

impl Section for HourlyTraffic {
    fn format(&self, ctx: &ReportContext<'_>) -> String {
        let theme = ctx.theme;
        let requests: Vec<f64> = ctx.snapshot.hourly.iter().map(|hour| hour.requests as f64).collect();
        let peak = ctx.metrics.peak_hour;
        let local_hour = (peak.hour as i64 + ctx.config.local_utc_offset_hours).rem_euclid(HOURS_PER_DAY as i64);

        let mut out = ctx.heading("HOURLY TRAFFIC (UTC)", None);
        out.push_str(&format!("  {}\n", paint(theme.muted, hour_axis())));
        out.push_str(&format!("  {}\n", paint(theme.success, sparkline(&requests, SPARK_WIDTH))));
        out.push_str(&format!(
            "  {}\n",
            paint(
                theme.muted,
                format!(
                    "Peak: {}:00 UTC ({local_hour}:00 {}) — {} requests",
                    peak.hour, ctx.config.local_zone_label, peak.requests
                )
            )
        ));
        out.push_str(&ctx.rule());
        out.push('\n');
        out
    }
}

/// Hour labels lined up with the sparkline columns.
fn hour_axis() -> String {
    let column = LABEL_EVERY_HOURS * SPARK_WIDTH;
    (0..HOURS_PER_DAY)
        .step_by(LABEL_EVERY_HOURS)
        .map(|hour| format!("{hour:02}{}", " ".repeat(column - 2)))
        .collect::<String>()
        .trim_end()
        .to_string()
}
