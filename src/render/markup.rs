use crate::diff::Tag;

/// ANSI escape sequences shared by the renderers and the text report.
pub mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const ON_RED: &str = "\x1b[41m";
    pub const ON_GREEN: &str = "\x1b[42m";
}

/// How the character renderer marks run boundaries and literal text.
pub trait Markup {
    /// Marker emitted when the current run tag changes from `from` to `to`.
    /// `None` stands for "outside any run".
    fn transition(&self, from: Option<Tag>, to: Option<Tag>) -> String;

    /// Appends literal content, escaped as needed.
    fn push_text(&self, out: &mut String, text: &str);

    /// True when `line` shows anything besides markers.
    fn has_content(&self, line: &str) -> bool;

    fn prefix(&self) -> Option<&'static str> {
        None
    }

    fn suffix(&self) -> Option<&'static str> {
        None
    }
}

/// Terminal backgrounds: red for deletions, green for insertions.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiMarkup;

impl AnsiMarkup {
    #[must_use]
    pub const fn background(tag: Option<Tag>) -> &'static str {
        match tag {
            Some(Tag::Delete) => ansi::ON_RED,
            Some(Tag::Insert) => ansi::ON_GREEN,
            Some(Tag::Equal) | None => "",
        }
    }
}

impl Markup for AnsiMarkup {
    fn transition(&self, _from: Option<Tag>, to: Option<Tag>) -> String {
        format!("{}{}", ansi::RESET, Self::background(to))
    }

    fn push_text(&self, out: &mut String, text: &str) {
        out.push_str(text);
    }

    fn has_content(&self, line: &str) -> bool {
        !console::strip_ansi_codes(line).is_empty()
    }
}

/// `<ins>`/`<del>` elements inside a `<pre>` block.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlMarkup;

impl HtmlMarkup {
    const fn element(tag: Option<Tag>) -> Option<&'static str> {
        match tag {
            Some(Tag::Insert) => Some("ins"),
            Some(Tag::Delete) => Some("del"),
            Some(Tag::Equal) | None => None,
        }
    }
}

impl Markup for HtmlMarkup {
    fn transition(&self, from: Option<Tag>, to: Option<Tag>) -> String {
        let mut markers = String::new();
        if let Some(element) = Self::element(from) {
            markers.push_str("</");
            markers.push_str(element);
            markers.push('>');
        }
        if let Some(element) = Self::element(to) {
            markers.push('<');
            markers.push_str(element);
            markers.push('>');
        }
        markers
    }

    fn push_text(&self, out: &mut String, text: &str) {
        push_escaped_html(out, text);
    }

    fn has_content(&self, line: &str) -> bool {
        !line.is_empty()
    }

    fn prefix(&self) -> Option<&'static str> {
        Some("<pre>")
    }

    fn suffix(&self) -> Option<&'static str> {
        Some("</pre>")
    }
}

/// Escapes `& < > " '` the way HTML attribute and text content expect.
pub fn push_escaped_html(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
}

#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    push_escaped_html(&mut out, text);
    out
}
