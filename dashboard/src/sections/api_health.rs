use super::{
    ReportContext,
    Section,
};
use crate::render::{
    bar,
    paint,
    percent,
    FULL_BLOCK,
};

const BAR_WIDTH: usize = 20;
/// Success rates above this are shown as healthy.
const HEALTHY_SUCCESS_RATE: f64 = 80.0;

pub struct ApiHealth;

impl Section for ApiHealth {
    fn format(&self, ctx: &ReportContext<'_>) -> String {
        let theme = ctx.theme;
        let api = &ctx.snapshot.api_messages;
        let rate_style = theme.judge(api.success_rate > HEALTHY_SUCCESS_RATE);

        let mut out = ctx.heading("AI TERMINAL HEALTH", None);
        out.push_str(&format!(
            "  Messages: {}  Success: {}  Failed: {}  Timeout: {}\n",
            paint(theme.strong, api.total),
            paint(theme.success, api.success),
            paint(theme.danger, api.failed),
            paint(theme.warning, api.timeout),
        ));
        out.push_str(&format!(
            "  Rate:     {} {}\n",
            bar(api.success_rate, 100.0, BAR_WIDTH, FULL_BLOCK, rate_style, theme),
            paint(rate_style, percent(api.success_rate)),
        ));
        out.push_str(&ctx.rule());
        out.push('\n');
        out
    }
}
