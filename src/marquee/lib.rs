//! # Marquee - Named Styles and Bordered Frames
//!
//! Small presentation toolkit for terminal output, split into two parts:
//!
//! - [`Styles`]: a registry of named `console::Style` objects. Code refers
//!   to styles by semantic name ("header", "muted") instead of embedding
//!   color choices at every call site. Unknown names are flagged with a
//!   configurable indicator so typos surface in the output instead of
//!   silently dropping styling.
//! - [`frame`]: wraps a complete text block in a bordered box with
//!   padding and margin, in the spirit of the classic `boxen` look.
//!
//! Width accounting is ANSI-aware (via `console::measure_text_width`), so
//! already-styled text can be framed without the escape codes skewing the
//! layout.
//!
//! ## Example
//!
//! ```rust
//! use marquee::{frame, BorderStyle, FrameOptions, Styles};
//! use console::Style;
//!
//! let styles = Styles::new().add("ok", Style::new().green());
//! let body = styles.apply("ok", "All systems go");
//!
//! let boxed = frame(
//!     &body,
//!     &FrameOptions {
//!         padding: 1,
//!         border: BorderStyle::Rounded,
//!         ..FrameOptions::default()
//!     },
//! );
//! println!("{}", boxed);
//! ```

use console::{measure_text_width, Style};
use std::collections::HashMap;

/// Default prefix shown when a style name is not found.
pub const DEFAULT_MISSING_STYLE_INDICATOR: &str = "(!?)";

/// Horizontal padding and margin are scaled by this factor, matching the
/// roughly 1:3 aspect ratio of terminal cells.
const HORIZONTAL_SCALE: usize = 3;

/// A collection of named styles.
///
/// Styles are registered by name and applied by name. When a style name is
/// not found, a configurable indicator is prepended to the text to help
/// catch typos (defaults to `(!?)`).
#[derive(Clone)]
pub struct Styles {
    styles: HashMap<String, Style>,
    missing_indicator: String,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            styles: HashMap::new(),
            missing_indicator: DEFAULT_MISSING_STYLE_INDICATOR.to_string(),
        }
    }
}

impl Styles {
    /// Creates an empty style registry with the default missing style indicator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom indicator to prepend when a style name is not found.
    /// Set to empty string to disable.
    pub fn missing_indicator(mut self, indicator: &str) -> Self {
        self.missing_indicator = indicator.to_string();
        self
    }

    /// Adds a named style. Returns self for chaining.
    ///
    /// If a style with the same name exists, it is replaced.
    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.styles.insert(name.to_string(), style);
        self
    }

    /// Applies a named style to text.
    ///
    /// If the style exists, returns the styled string (with ANSI codes).
    /// If not found, prepends the missing indicator (unless it's empty).
    pub fn apply(&self, name: &str, text: &str) -> String {
        match self.styles.get(name) {
            Some(style) => style.apply_to(text).to_string(),
            None if self.missing_indicator.is_empty() => text.to_string(),
            None => format!("{} {}", self.missing_indicator, text),
        }
    }

    /// Applies style checking without ANSI codes (plain text mode).
    ///
    /// If the style exists, returns the text unchanged.
    /// If not found, prepends the missing indicator (unless it's empty).
    pub fn apply_plain(&self, name: &str, text: &str) -> String {
        if self.styles.contains_key(name) || self.missing_indicator.is_empty() {
            text.to_string()
        } else {
            format!("{} {}", self.missing_indicator, text)
        }
    }

    /// Returns true if a style with the given name exists.
    pub fn has(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    /// Returns the number of registered styles.
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Returns true if no styles are registered.
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

/// The character set used to draw a frame border.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderStyle {
    Single,
    Double,
    Rounded,
}

struct BorderChars {
    top_left: char,
    top_right: char,
    bottom_left: char,
    bottom_right: char,
    horizontal: char,
    vertical: char,
}

impl BorderStyle {
    fn chars(self) -> BorderChars {
        match self {
            BorderStyle::Single => BorderChars {
                top_left: '┌',
                top_right: '┐',
                bottom_left: '└',
                bottom_right: '┘',
                horizontal: '─',
                vertical: '│',
            },
            BorderStyle::Double => BorderChars {
                top_left: '╔',
                top_right: '╗',
                bottom_left: '╚',
                bottom_right: '╝',
                horizontal: '═',
                vertical: '║',
            },
            BorderStyle::Rounded => BorderChars {
                top_left: '╭',
                top_right: '╮',
                bottom_left: '╰',
                bottom_right: '╯',
                horizontal: '─',
                vertical: '│',
            },
        }
    }
}

/// Layout options for [`frame`].
///
/// `padding` is the space between the border and the text; `margin` is the
/// space between the border and the surrounding output. Both count lines
/// vertically and are tripled horizontally.
#[derive(Clone)]
pub struct FrameOptions {
    pub padding: usize,
    pub margin: usize,
    pub border: BorderStyle,
    /// Style applied to the border characters only, never to the content.
    pub border_style: Option<Style>,
}

impl Default for FrameOptions {
    fn default() -> Self {
        Self {
            padding: 0,
            margin: 0,
            border: BorderStyle::Single,
            border_style: None,
        }
    }
}

/// Wraps a text block in a bordered frame.
///
/// Every line of the result has the same display width, sized to the
/// widest content line. Content passes through unmodified; only border
/// characters receive `border_style`. The returned string ends with a
/// newline.
pub fn frame(text: &str, opts: &FrameOptions) -> String {
    let chars = opts.border.chars();
    let lines: Vec<&str> = text.lines().collect();
    let content_width = lines
        .iter()
        .map(|line| measure_text_width(line))
        .max()
        .unwrap_or(0);

    let pad_h = opts.padding * HORIZONTAL_SCALE;
    let inner_width = content_width + pad_h * 2;
    let margin_h = " ".repeat(opts.margin * HORIZONTAL_SCALE);

    let paint = |segment: String| match &opts.border_style {
        Some(style) => style.apply_to(segment).to_string(),
        None => segment,
    };

    let rule: String = chars.horizontal.to_string().repeat(inner_width);
    let top = paint(format!("{}{}{}", chars.top_left, rule, chars.top_right));
    let bottom = paint(format!(
        "{}{}{}",
        chars.bottom_left, rule, chars.bottom_right
    ));
    let side = paint(chars.vertical.to_string());
    let pad_row = format!("{}{}{}{}\n", margin_h, side, " ".repeat(inner_width), side);

    let mut out = String::new();
    for _ in 0..opts.margin {
        out.push('\n');
    }
    out.push_str(&margin_h);
    out.push_str(&top);
    out.push('\n');
    for _ in 0..opts.padding {
        out.push_str(&pad_row);
    }
    for line in &lines {
        let fill = inner_width.saturating_sub(pad_h + measure_text_width(line));
        out.push_str(&margin_h);
        out.push_str(&side);
        out.push_str(&" ".repeat(pad_h));
        out.push_str(line);
        out.push_str(&" ".repeat(fill));
        out.push_str(&side);
        out.push('\n');
    }
    for _ in 0..opts.padding {
        out.push_str(&pad_row);
    }
    out.push_str(&margin_h);
    out.push_str(&bottom);
    out.push('\n');
    for _ in 0..opts.margin {
        out.push('\n');
    }
    out
}

/// Converts an RGB triplet to the nearest ANSI 256-color palette index.
pub fn rgb_to_ansi256((r, g, b): (u8, u8, u8)) -> u8 {
    if r == g && g == b {
        if r < 8 {
            16
        } else if r > 248 {
            231
        } else {
            232 + ((r as u16 - 8) * 24 / 247) as u8
        }
    } else {
        let red = (r as u16 * 5 / 255) as u8;
        let green = (g as u16 * 5 / 255) as u8;
        let blue = (b as u16 * 5 / 255) as u8;
        16 + 36 * red + 6 * green + blue
    }
}
