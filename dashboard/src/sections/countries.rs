use super::{
    ReportContext,
    Section,
};
use crate::render::{
    bar,
    fit,
    paint,
    percent,
    Flag,
    FULL_BLOCK,
};

const NAME_WIDTH: usize = 18;
const BAR_WIDTH: usize = 22;

pub struct TrafficByCountry;

impl Section for TrafficByCountry {
    fn format(&self, ctx: &ReportContext<'_>) -> String {
        let theme = ctx.theme;
        let countries = &ctx.snapshot.countries;
        // Sorted descending, so the first entry is the scale of every bar.
        let max_count = countries.first().map_or(0, |country| country.count) as f64;

        let mut out = ctx.heading("TRAFFIC BY COUNTRY", Some(format!("{} total", countries.len()).as_str()));
        for (rank, country) in countries.iter().take(ctx.config.top_countries).enumerate() {
            out.push_str(&format!(
                "  {} {} {} {} {} {}\n",
                paint(theme.muted, format!("{:>2}.", rank + 1)),
                Flag::from_code(&country.code),
                paint(theme.emphasis, fit(&country.country, NAME_WIDTH)),
                bar(country.count as f64, max_count, BAR_WIDTH, FULL_BLOCK, theme.success, theme),
                paint(theme.emphasis, format!("{:>4}", country.count)),
                paint(theme.muted, format!("({})", percent(country.percentage))),
            ));
        }
        out.push_str(&ctx.rule());
        out.push('\n');
        out
    }
}
