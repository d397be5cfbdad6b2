use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    symbols,
    text::Span,
    widgets::{Block, Widget},
};

/// Single-line progress bar with eighth-block resolution and an optional
/// centered label.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CustomGauge<'a> {
    block: Option<Block<'a>>,
    ratio: f64,
    label: Option<Span<'a>>,
    use_unicode: bool,
    style: Style,
    filled_style: Style,
    remaining_style: Style,
}

impl<'a> CustomGauge<'a> {
    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    /// Out-of-range ratios are clamped into `[0, 1]`.
    pub fn ratio(mut self, ratio: f64) -> Self {
        self.ratio = if ratio.is_nan() { 0.0 } else { ratio.clamp(0.0, 1.0) };
        self
    }

    pub fn label<T>(mut self, label: T) -> Self
    where
        T: Into<Span<'a>>,
    {
        self.label = Some(label.into());
        self
    }

    pub const fn use_unicode(mut self, use_unicode: bool) -> Self {
        self.use_unicode = use_unicode;
        self
    }

    pub fn style<S: Into<Style>>(mut self, style: S) -> Self {
        self.style = style.into();
        self
    }

    pub fn filled_style<S: Into<Style>>(mut self, style: S) -> Self {
        self.filled_style = style.into();
        self
    }

    pub fn remaining_style<S: Into<Style>>(mut self, style: S) -> Self {
        self.remaining_style = style.into();
        self
    }
}

fn get_unicode_block(frac: f64) -> &'static str {
    match (frac * 8.0).round() as u16 {
        0 => " ",
        1 => symbols::block::ONE_EIGHTH,
        2 => symbols::block::ONE_QUARTER,
        3 => symbols::block::THREE_EIGHTHS,
        4 => symbols::block::HALF,
        5 => symbols::block::FIVE_EIGHTHS,
        6 => symbols::block::THREE_QUARTERS,
        7 => symbols::block::SEVEN_EIGHTHS,
        _ => symbols::block::FULL,
    }
}

impl Widget for CustomGauge<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, self.style);
        if let Some(ref block) = self.block {
            block.render(area, buf);
        }

        let inner = self.block.as_ref().map_or(area, |b| b.inner(area));
        if inner.is_empty() {
            return;
        }

        self.render_gauge(inner, buf);
    }
}

impl CustomGauge<'_> {
    fn render_gauge(&self, area: Rect, buf: &mut Buffer) {
        let filled = area.width as f64 * self.ratio;

        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                let pos = (x - area.left()) as f64;

                let (symbol, style) = if pos < filled {
                    let symbol = if self.use_unicode && pos + 1.0 > filled {
                        get_unicode_block(filled - pos)
                    } else {
                        symbols::block::FULL
                    };
                    (symbol, self.filled_style)
                } else {
                    (symbols::block::FULL, self.remaining_style)
                };

                buf[(x, y)]
                    .set_symbol(symbol)
                    .set_fg(style.fg.unwrap_or_default())
                    .set_bg(self.remaining_style.fg.unwrap_or_default());
            }
        }

        if let Some(label) = self.label.as_ref() {
            let width = (label.width() as u16).min(area.width);
            let col = area.left() + (area.width - width) / 2;
            let row = area.top() + area.height / 2;
            buf.set_span(col, row, label, width);
        }
    }
}
