use crossterm::style::{
    force_color_output,
    Attribute,
    Color,
    ContentStyle,
    StyledContent,
};
use std::fmt::Display;

/// Named styles used by every section.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub muted: ContentStyle,
    pub emphasis: ContentStyle,
    pub strong: ContentStyle,
    pub heading: ContentStyle,
    pub success: ContentStyle,
    pub warning: ContentStyle,
    pub danger: ContentStyle,
    pub danger_strong: ContentStyle,
}

fn fg(color: Color) -> ContentStyle {
    ContentStyle {
        foreground_color: Some(color),
        ..ContentStyle::new()
    }
}

fn bold(style: ContentStyle) -> ContentStyle {
    let mut style = style;
    style.attributes.set(Attribute::Bold);
    style
}

impl Default for Theme {
    /// The colored theme. Colors are written even when `NO_COLOR` is set.
    fn default() -> Self {
        force_color_output(true);
        Self {
            muted: fg(Color::DarkGrey),
            emphasis: fg(Color::White),
            strong: bold(fg(Color::White)),
            heading: bold(fg(Color::Cyan)),
            success: fg(Color::Green),
            warning: fg(Color::Yellow),
            danger: fg(Color::Red),
            danger_strong: bold(fg(Color::Red)),
        }
    }
}

impl Theme {
    /// A theme without any styling.
    pub fn plain() -> Self {
        let none = ContentStyle::new();
        Self {
            muted: none,
            emphasis: none,
            strong: none,
            heading: none,
            success: none,
            warning: none,
            danger: none,
            danger_strong: none,
        }
    }

    /// `success` when `good`, `danger` otherwise.
    pub fn judge(&self, good: bool) -> ContentStyle {
        if good {
            self.success
        } else {
            self.danger
        }
    }
}

/// Shorthand for `style.apply(content)`, which keeps call sites inside `format!` readable.
pub fn paint<D: Display>(style: ContentStyle, content: D) -> StyledContent<D> {
    style.apply(content)
}
