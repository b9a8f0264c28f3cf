//! Pre-wrapped page content with home-section anchors
//!
//! Pages are built as a flat list of lines wrapped to the body width, so the
//! renderer knows the content height and the line each section starts on.
//! That is what lets it clamp the scroll offset and resolve scroll requests.

use agdeck_core::HomeSection;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::theme::{styles, Palette};

/// Rendered lines of one page
#[derive(Debug, Default)]
pub struct PageContent {
    lines: Vec<Line<'static>>,
    anchors: Vec<(HomeSection, u16)>,
}

impl PageContent {
    pub fn lines(&self) -> &[Line<'static>] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<Line<'static>> {
        self.lines
    }

    pub fn height(&self) -> u16 {
        u16::try_from(self.lines.len()).unwrap_or(u16::MAX)
    }

    /// First line of a home section, if this page has it
    pub fn anchor_line(&self, section: HomeSection) -> Option<u16> {
        self.anchors
            .iter()
            .find(|(s, _)| *s == section)
            .map(|(_, line)| *line)
    }
}

/// Builds a [`PageContent`] for a given width
pub struct PageBuilder<'p> {
    palette: &'p Palette,
    width: usize,
    content: PageContent,
}

impl<'p> PageBuilder<'p> {
    pub fn new(palette: &'p Palette, width: u16) -> Self {
        Self {
            palette,
            width: usize::from(width.max(1)),
            content: PageContent::default(),
        }
    }

    pub fn palette(&self) -> &'p Palette {
        self.palette
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Mark the next line as the start of a home section
    pub fn anchor(&mut self, section: HomeSection) -> &mut Self {
        let line = u16::try_from(self.content.lines.len()).unwrap_or(u16::MAX);
        self.content.anchors.push((section, line));
        self
    }

    pub fn blank(&mut self) -> &mut Self {
        self.content.lines.push(Line::default());
        self
    }

    /// Push a line as-is. The caller keeps it within the width.
    pub fn line(&mut self, line: Line<'static>) -> &mut Self {
        self.content.lines.push(line);
        self
    }

    /// Page title followed by a blank line
    pub fn title(&mut self, text: &str) -> &mut Self {
        let style = styles::heading(self.palette);
        self.text(&text.to_uppercase(), style).blank()
    }

    /// Section heading with an accent rule underneath
    pub fn heading(&mut self, text: &str) -> &mut Self {
        let accent = styles::accent_bold(self.palette);
        let rule_width = UnicodeWidthStr::width(text).min(self.width);
        self.text(text, accent);
        self.content.lines.push(Line::from(Span::styled(
            "─".repeat(rule_width),
            styles::accent(self.palette),
        )));
        self
    }

    /// Wrapped text in one style
    pub fn text(&mut self, text: &str, style: Style) -> &mut Self {
        self.indented("", "", text, style)
    }

    pub fn paragraph(&mut self, text: &str) -> &mut Self {
        let style = styles::text_primary(self.palette);
        self.text(text, style)
    }

    pub fn muted(&mut self, text: &str) -> &mut Self {
        let style = styles::text_secondary(self.palette);
        self.text(text, style)
    }

    /// Bulleted, hanging-indented text
    pub fn bullet(&mut self, text: &str) -> &mut Self {
        let style = styles::text_primary(self.palette);
        self.indented("  • ", "    ", text, style)
    }

    /// Wrapped text where the first line starts with `first` and the
    /// continuation lines with `rest`
    pub fn indented(&mut self, first: &str, rest: &str, text: &str, style: Style) -> &mut Self {
        let indent = UnicodeWidthStr::width(first).max(UnicodeWidthStr::width(rest));
        let available = self.width.saturating_sub(indent).max(1);
        for (i, chunk) in wrap(text, available).into_iter().enumerate() {
            let prefix = if i == 0 { first } else { rest };
            self.content.lines.push(Line::from(vec![
                Span::styled(prefix.to_string(), style),
                Span::styled(chunk, style),
            ]));
        }
        self
    }

    pub fn finish(self) -> PageContent {
        self.content
    }
}

/// Greedy word wrap by display width.
///
/// Words wider than `width` are split. Empty input yields one empty line.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = UnicodeWidthStr::width(word);

        if word_width > width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            for c in word.chars() {
                let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
                if current_width + w > width && !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                current.push(c);
                current_width += w;
            }
            continue;
        }

        let needed = if current.is_empty() {
            word_width
        } else {
            current_width + 1 + word_width
        };
        if needed > width {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_width = word_width;
        } else {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            current_width = needed;
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}
