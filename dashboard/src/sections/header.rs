use super::{
    ReportContext,
    Section,
};
use crate::render::{
    paint,
    percent,
};

pub struct Header;

impl Section for Header {
    fn format(&self, ctx: &ReportContext<'_>) -> String {
        let theme = ctx.theme;
        let snapshot = ctx.snapshot;
        let api = &snapshot.api_messages;

        let mut out = String::from("\n");
        out.push_str(&ctx.rule());
        out.push_str(&format!("  {}", paint(theme.strong, format!("  ⟁  {}", ctx.config.title))));
        if let Some(model) = &ctx.config.model {
            out.push_str(&format!("     {}", paint(theme.success, format!("Model: {model}"))));
        }
        out.push('\n');
        out.push_str(&ctx.rule());
        out.push('\n');

        out.push_str(&format!(
            "  {} requests   {} users   {} countries   {} AI messages   {} success   {}\n\n",
            paint(theme.strong, snapshot.summary.total_requests),
            paint(theme.strong, snapshot.summary.unique_users),
            paint(theme.strong, snapshot.countries.len()),
            paint(theme.strong, api.total),
            paint(theme.success, percent(api.success_rate)),
            ctx.balance_status(),
        ));
        out
    }
}
