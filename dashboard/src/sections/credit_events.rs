use super::{
    short_date,
    ReportContext,
    Section,
};
use crate::{
    render::{
        cents,
        paint,
        whole_dollars,
    },
    snapshot::{
        CreditEvent,
        CreditEventKind,
    },
};

const DATE_WIDTH: usize = 6;
const LABEL_WIDTH: usize = 30;

/// Top-ups and depletions in date order, closed by the reported balance.
pub struct CreditEvents;

impl Section for CreditEvents {
    fn format(&self, ctx: &ReportContext<'_>) -> String {
        let theme = ctx.theme;
        let mut events: Vec<&CreditEvent> = ctx.snapshot.credit_events.iter().collect();
        events.sort_by_key(|event| event.date);

        let mut out = ctx.heading("CREDIT EVENTS", None);
        let mut last_topup: Option<&CreditEvent> = None;
        for event in events {
            let date = paint(theme.muted, format!("{:<DATE_WIDTH$}", short_date(event.date)));
            match event.kind {
                CreditEventKind::Topup => {
                    out.push_str(&format!(
                        "  {date}  {}\n",
                        paint(theme.success, format!("▲ {}", event.label))
                    ));
                    last_topup = Some(event);
                }
                CreditEventKind::Depleted => {
                    let errors = ctx.snapshot.daily_on(event.date).map_or(0, |day| day.errors);
                    out.push_str(&format!(
                        "  {date}  {}  {}\n",
                        paint(theme.danger, format!("{:<LABEL_WIDTH$}", format!("▼ {}", event.label))),
                        paint(theme.danger_strong, format!("{errors} errors")),
                    ));
                    if let Some(burned) = last_topup.and_then(|topup| burn_note(ctx, topup, event)) {
                        out.push_str(&format!(
                            "  {}  {}\n",
                            " ".repeat(DATE_WIDTH),
                            paint(theme.muted, burned)
                        ));
                    }
                }
                CreditEventKind::Other => {
                    out.push_str(&format!("  {date}  {}\n", paint(theme.muted, format!("• {}", event.label))));
                }
            }
        }

        let balance = &ctx.snapshot.balance;
        let as_of = ctx.snapshot.daily.last().map(|day| short_date(day.date)).unwrap_or_default();
        let status = format!("● Balance: {}", cents(balance.amount, ""));
        out.push_str(&format!(
            "  {}  {}",
            paint(theme.muted, format!("{as_of:<DATE_WIDTH$}")),
            paint(theme.judge(!balance.is_unpaid()), format!("{status:<LABEL_WIDTH$}")),
        ));
        if balance.is_unpaid() {
            out.push_str(&format!("  {}", paint(theme.danger, "Still unpaid.")));
        }
        out.push('\n');
        out.push_str(&ctx.rule());
        out.push('\n');
        out
    }
}

/// `$1,000 burned in ~72 hours`, when the schedule knows what was deposited at the top-up.
fn burn_note(ctx: &ReportContext<'_>, topup: &CreditEvent, depleted: &CreditEvent) -> Option<String> {
    let deposit = ctx.schedule.deposit_on(topup.date)?;
    let hours = (depleted.date - topup.date).num_hours();
    Some(format!("{} burned in ~{hours} hours", whole_dollars(deposit)))
}

#[cfg(test)]
mod tests {
    use crate::{
        sections::{
            tests::{
                render,
                render_with,
            },
            SectionKind,
        },
        snapshot::tests::sample,
    };
    use credit_burn_config::Config;
    use pretty_assertions::assert_eq;

    #[test]
    fn events_in_date_order_with_burn_duration() {
        let out = render(SectionKind::CreditEvents);
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], "  CREDIT EVENTS");
        assert_eq!(lines[2], "  Feb 4   ▲ +$1,000 topped up");
        assert_eq!(lines[3], format!("  Feb 7   {:<30}  48 errors", "▼ Credits depleted"));
        assert_eq!(lines[4], "          $1,000 burned in ~72 hours");
        assert_eq!(lines[5], "  Feb 8   ▲ +$1,300 topped up");
        assert_eq!(lines[6], format!("  Feb 9   {:<30}  Still unpaid.", "● Balance: -$0.42"));
        assert!(lines[7].starts_with("  ─"));
    }

    #[test]
    fn unsorted_events_and_positive_balance() {
        let mut snapshot = sample();
        snapshot.credit_events.reverse();
        snapshot.balance.amount = 250.0;
        let out = render_with(SectionKind::CreditEvents, &snapshot, &Config::default());
        let lines: Vec<&str> = out.lines().collect();

        assert!(lines[2].contains("▲ +$1,000 topped up"));
        assert_eq!(lines[6].trim_end(), "  Feb 9   ● Balance: $250.00");
    }
}
