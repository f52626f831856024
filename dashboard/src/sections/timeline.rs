use super::{
    short_date,
    ReportContext,
    Section,
};
use crate::{
    render::{
        bar,
        cents,
        paint,
        sparkline,
        whole_dollars,
        Theme,
        FULL_BLOCK,
    },
    snapshot::{
        CreditEventKind,
        DailyRecord,
    },
};
use chrono::{
    Datelike,
    NaiveDate,
};
use crossterm::style::ContentStyle;

const BAR_WIDTH: usize = 25;
const ERROR_COLUMN_WIDTH: usize = 16;
const SPARK_WIDTH: usize = 2;

/// Daily traffic next to the simulated balance and the credit events of each day.
pub struct CreditBurnTimeline;

impl Section for CreditBurnTimeline {
    fn format(&self, ctx: &ReportContext<'_>) -> String {
        let theme = ctx.theme;
        let daily = &ctx.snapshot.daily;
        let max_requests = ctx.metrics.max_daily_requests;

        let mut out = ctx.heading("CREDIT BURN TIMELINE", date_span(daily).as_deref());

        for (day, balance) in daily.iter().zip(ctx.metrics.simulated_balances.iter()) {
            let errors = if day.errors > 0 {
                paint(theme.danger, format!("{:<ERROR_COLUMN_WIDTH$}", format!(" ✖ {} err", day.errors))).to_string()
            } else {
                " ".repeat(ERROR_COLUMN_WIDTH)
            };
            let (balance_style, balance_text) = balance_cell(*balance, day.date, ctx.schedule.starts_on(), theme);

            out.push_str(&format!(
                "  {}  {} {}{} {}{}\n",
                paint(theme.muted, day.date.format("%m-%d")),
                bar(day.requests as f64, max_requests as f64, BAR_WIDTH, FULL_BLOCK, theme.success, theme),
                paint(theme.emphasis, format!("{:>4}", day.requests)),
                errors,
                paint(balance_style, format!("bal {balance_text:>8}")),
                event_annotation(ctx, day),
            ));
        }
        out.push_str(&ctx.rule());

        let requests: Vec<f64> = daily.iter().map(|day| day.requests as f64).collect();
        out.push_str(&format!(
            "  {} {}  {}\n\n",
            paint(theme.muted, "traffic:"),
            paint(theme.success, sparkline(&requests, SPARK_WIDTH)),
            paint(
                theme.muted,
                format!("peak: {} ({max_requests} reqs)", short_date(ctx.metrics.peak_day))
            ),
        ));
        out
    }
}

/// `Jan 31 — Feb 9, 2026`
fn date_span(daily: &[DailyRecord]) -> Option<String> {
    let first = daily.first()?.date;
    let last = daily.last()?.date;
    let first = if first.year() == last.year() {
        short_date(first)
    } else {
        format!("{}, {}", short_date(first), first.year())
    };
    Some(format!("{first} — {}, {}", short_date(last), last.year()))
}

fn balance_cell(balance: f64, date: NaiveDate, start: Option<NaiveDate>, theme: &Theme) -> (ContentStyle, String) {
    if balance > 0.0 {
        (theme.warning, whole_dollars(balance))
    } else if balance == 0.0 && start.is_some_and(|start| date >= start) {
        (theme.danger, "$0".to_string())
    } else if balance < 0.0 {
        (theme.danger, cents(balance, ""))
    } else {
        (theme.muted, "—".to_string())
    }
}

fn event_annotation(ctx: &ReportContext<'_>, day: &DailyRecord) -> String {
    let theme = ctx.theme;
    match ctx.snapshot.credit_event_on(day.date) {
        Some(event) => match event.kind {
            CreditEventKind::Topup => format!("  {}", paint(theme.success, format!("▲ {}", event.label))),
            CreditEventKind::Depleted => format!(
                "  {}",
                paint(theme.danger, format!("▼ {} — {} errors!", event.label, day.errors))
            ),
            CreditEventKind::Other => String::new(),
        },
        None => String::new(),
    }
}
