use super::{
    ReportContext,
    Section,
};
use crate::render::{
    fit,
    paint,
    whole_dollars,
};

const LINK_WIDTH: usize = 46;

pub struct Footer;

impl Section for Footer {
    fn format(&self, ctx: &ReportContext<'_>) -> String {
        let theme = ctx.theme;
        let snapshot = ctx.snapshot;

        let mut out = String::from("  ");
        if let Some(link) = &ctx.config.footer_link {
            out.push_str(&paint(theme.muted, fit(link, LINK_WIDTH)).to_string());
        }
        out.push_str(&ctx.balance_status());
        out.push('\n');

        // Days covered by the simulation, i.e. since the first deposit.
        let burn_days = snapshot
            .daily
            .iter()
            .filter(|day| ctx.schedule.starts_on().map_or(true, |start| day.date >= start))
            .count();
        let powered_by = ctx
            .config
            .model
            .as_ref()
            .map(|model| format!("Powered by {model} · "))
            .unwrap_or_default();
        out.push_str(&format!(
            "  {}\n\n",
            paint(
                theme.muted,
                format!(
                    "{powered_by}{} requests burned through {} in {burn_days} days",
                    snapshot.summary.total_requests,
                    whole_dollars(ctx.schedule.total_deposited()),
                )
            )
        ));
        out
    }
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
    fn summary_line() {
        let out = render(SectionKind::Footer);
        assert_eq!(
            out,
            "  -US$0.42 UNPAID\n  1098 requests burned through $2,300 in 6 days\n\n"
        );
    }

    #[test]
    fn link_and_model() {
        let config = Config {
            model: Some("Sonnet".to_string()),
            footer_link: Some("clawshi.app/terminal".to_string()),
            ..Config::default()
        };
        let out = render_with(SectionKind::Footer, &sample(), &config);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], format!("  {:<46}-US$0.42 UNPAID", "clawshi.app/terminal"));
        assert_eq!(lines[1], "  Powered by Sonnet · 1098 requests burned through $2,300 in 6 days");
    }
}
