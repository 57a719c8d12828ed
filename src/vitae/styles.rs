//! Styles for the resume card.
//!
//! All presentation choices live here as named styles in a `marquee`
//! registry; the renderer refers to them by semantic name only. The
//! names describe the data being shown (a section title, an employer),
//! not the colors, so the palette can be iterated without touching the
//! formatting code.

use console::Style;
use marquee::{rgb_to_ansi256, Styles};
use once_cell::sync::Lazy;

/// Semantic style names used by the renderer.
pub mod names {
    /// The name/title banner at the top of the card.
    pub const HEADER: &str = "header";
    /// Section titles (ABOUT, EXPERIENCE, ...).
    pub const SECTION: &str = "section";
    /// Horizontal rules under section titles.
    pub const RULE: &str = "rule";
    /// Contact lines (email, phone, ...).
    pub const CONTACT: &str = "contact";
    /// Leading element of an entry: a position, degree, or project name.
    pub const POSITION: &str = "position";
    /// Secondary element of an entry: a company or field of study.
    pub const COMPANY: &str = "company";
    /// Supporting metadata: durations, locations, years, tech stacks.
    pub const META: &str = "meta";
    /// Project links.
    pub const LINK: &str = "link";
    /// The attribution/date footer.
    pub const FOOTER: &str = "footer";
}

pub static VITAE_THEME: Lazy<Styles> = Lazy::new(|| {
    Styles::new()
        .add(names::HEADER, Style::new().bold().cyan())
        .add(names::SECTION, Style::new().bold().green())
        .add(
            names::RULE,
            Style::new().color256(rgb_to_ansi256((154, 154, 154))),
        )
        .add(names::CONTACT, Style::new().yellow())
        .add(names::POSITION, Style::new().bold().yellow())
        .add(names::COMPANY, Style::new().bold().blue())
        .add(names::META, Style::new().dim())
        .add(names::LINK, Style::new().cyan())
        .add(names::FOOTER, Style::new().dim().italic())
});
