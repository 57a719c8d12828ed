//! Section formatters for the resume card.
//!
//! One pure function per section, each taking the record (or the
//! sub-entity it needs) and returning a finished string. Formatting is
//! stateless: the same input yields byte-identical output, except for
//! the footer's date line. Values pass through verbatim, with no
//! truncation, wrapping, or escaping; absent optional fields remove
//! their line or block entirely rather than leaving it blank.
//!
//! Styling goes through the named styles in [`crate::styles`]. Public
//! functions auto-detect terminal color support through `console`; the
//! `_block` functions take an explicit flag so tests can pin plain
//! output.

use crate::model::{Contact, Education, Experience, Project, Resume, SkillGroup};
use crate::styles::{names, VITAE_THEME};
use chrono::{Local, NaiveDate};
use console::Term;
use unicode_width::UnicodeWidthStr;

/// Width of section rules and the header accent box.
const RULE_WIDTH: usize = 80;

const ATTRIBUTION: &str = "Generated via cargo install vitae";

fn detect_color() -> bool {
    Term::stdout().features().colors_supported()
}

fn paint(name: &str, text: &str, use_color: bool) -> String {
    if use_color {
        VITAE_THEME.apply(name, text)
    } else {
        VITAE_THEME.apply_plain(name, text)
    }
}

fn rule(use_color: bool) -> String {
    paint(names::RULE, &"─".repeat(RULE_WIDTH), use_color)
}

fn section_heading(title: &str, use_color: bool) -> String {
    format!("{}\n{}\n", paint(names::SECTION, title, use_color), rule(use_color))
}

fn center(text: &str, width: usize) -> String {
    let text_width = text.width();
    if text_width >= width {
        return text.to_string();
    }
    let left = (width - text_width) / 2;
    let right = width - text_width - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}

/// The bullet block shared by experience and project entries: one
/// `• {item}` line per achievement, or nothing at all when the list is
/// absent or empty. The leading newline attaches it to the entry block.
fn bullet_block(achievements: &Option<Vec<String>>) -> String {
    match achievements {
        Some(items) if !items.is_empty() => {
            items.iter().map(|a| format!("\n• {}", a)).collect()
        }
        _ => String::new(),
    }
}

/// Name and title centered in a fixed-width double-line accent box.
/// This inner border is drawn directly; the outer frame around the whole
/// card belongs to `marquee`.
pub fn render_header(resume: &Resume) -> String {
    header_block(resume, detect_color())
}

fn header_block(resume: &Resume, use_color: bool) -> String {
    let bar = "═".repeat(RULE_WIDTH);
    let lines = [
        format!("╔{}╗", bar),
        format!("║{}║", center(&resume.name, RULE_WIDTH)),
        format!("║{}║", center(&resume.title, RULE_WIDTH)),
        format!("╚{}╝", bar),
    ];
    let mut out = String::new();
    for line in &lines {
        out.push_str(&paint(names::HEADER, line, use_color));
        out.push('\n');
    }
    out.push('\n');
    out
}

/// One line per contact field, icon and label first, value verbatim.
pub fn render_contact(contact: &Contact) -> String {
    contact_block(contact, detect_color())
}

fn contact_block(contact: &Contact, use_color: bool) -> String {
    let lines = [
        format!("📧 Email: {}", contact.email),
        format!("📱 Phone: {}", contact.phone),
        format!("🌐 LinkedIn: {}", contact.linkedin),
        format!("🔗 GitHub: {}", contact.github),
        format!("📍 Location: {}", contact.location),
    ];
    let mut out = String::new();
    for line in &lines {
        out.push_str(&paint(names::CONTACT, line, use_color));
        out.push('\n');
    }
    out.push('\n');
    out
}

pub fn render_about(resume: &Resume) -> String {
    about_block(resume, detect_color())
}

fn about_block(resume: &Resume, use_color: bool) -> String {
    format!(
        "{}{}\n\n",
        section_heading("ABOUT", use_color),
        resume.about
    )
}

pub fn render_experience(entries: &[Experience]) -> String {
    experience_block(entries, detect_color())
}

fn experience_block(entries: &[Experience], use_color: bool) -> String {
    let blocks: Vec<String> = entries
        .iter()
        .map(|job| {
            format!(
                "{} at {}\n{} | {}\n{}{}",
                paint(names::POSITION, &job.position, use_color),
                paint(names::COMPANY, &job.company, use_color),
                paint(names::META, &job.duration, use_color),
                paint(names::META, &job.location, use_color),
                job.description,
                bullet_block(&job.achievements),
            )
        })
        .collect();
    format!(
        "{}{}\n\n",
        section_heading("EXPERIENCE", use_color),
        blocks.join("\n\n")
    )
}

pub fn render_education(entries: &[Education]) -> String {
    education_block(entries, detect_color())
}

fn education_block(entries: &[Education], use_color: bool) -> String {
    let blocks: Vec<String> = entries
        .iter()
        .map(|edu| {
            let mut block = format!(
                "{} in {}\n{} | {}",
                paint(names::POSITION, &edu.degree, use_color),
                paint(names::COMPANY, &edu.field, use_color),
                edu.institution,
                paint(names::META, &edu.year, use_color),
            );
            if let Some(gpa) = &edu.gpa {
                block.push_str(&format!("\nGPA: {}", gpa));
            }
            block
        })
        .collect();
    format!(
        "{}{}\n\n",
        section_heading("EDUCATION", use_color),
        blocks.join("\n\n")
    )
}

pub fn render_skills(groups: &[SkillGroup]) -> String {
    skills_block(groups, detect_color())
}

fn skills_block(groups: &[SkillGroup], use_color: bool) -> String {
    let lines: Vec<String> = groups
        .iter()
        .map(|group| {
            format!(
                "{}: {}",
                paint(names::POSITION, &group.name, use_color),
                group.items.join(", ")
            )
        })
        .collect();
    format!(
        "{}{}\n\n",
        section_heading("SKILLS", use_color),
        lines.join("\n")
    )
}

/// Returns the empty string when there are no projects: no heading, no
/// rule, nothing. A present but empty list counts as "no projects".
pub fn render_projects(projects: &Option<Vec<Project>>) -> String {
    projects_block(projects, detect_color())
}

fn projects_block(projects: &Option<Vec<Project>>, use_color: bool) -> String {
    let entries = match projects {
        Some(entries) if !entries.is_empty() => entries,
        _ => return String::new(),
    };
    let blocks: Vec<String> = entries
        .iter()
        .map(|project| {
            let mut block = format!(
                "{} | {}\n{}{}",
                paint(names::POSITION, &project.name, use_color),
                paint(names::META, &project.tech, use_color),
                project.description,
                bullet_block(&project.achievements),
            );
            if let Some(link) = &project.link {
                let line = format!("🔗 {}", link);
                block.push_str(&format!("\n{}", paint(names::LINK, &line, use_color)));
            }
            block
        })
        .collect();
    format!(
        "{}{}\n\n",
        section_heading("KEY PROJECTS", use_color),
        blocks.join("\n\n")
    )
}

/// Closing rule, attribution, and the last-updated line from the local
/// clock. The date makes this the one non-deterministic section; use
/// [`render_footer_on`] when the output must be reproducible.
pub fn render_footer() -> String {
    footer_block(Local::now().date_naive(), detect_color())
}

pub fn render_footer_on(date: NaiveDate) -> String {
    footer_block(date, detect_color())
}

fn footer_block(date: NaiveDate, use_color: bool) -> String {
    format!(
        "{}\n{}\n{}\n",
        rule(use_color),
        paint(names::FOOTER, ATTRIBUTION, use_color),
        paint(
            names::FOOTER,
            &format!("Last updated: {}", date.format("%Y-%m-%d")),
            use_color
        ),
    )
}

/// The full card: all eight sections in fixed order, concatenated with
/// no separators beyond what each section already appends.
pub fn render_resume(resume: &Resume) -> String {
    resume_block(resume, detect_color())
}

fn resume_block(resume: &Resume, use_color: bool) -> String {
    let mut out = String::new();
    out.push_str(&header_block(resume, use_color));
    out.push_str(&contact_block(&resume.contact, use_color));
    out.push_str(&about_block(resume, use_color));
    out.push_str(&experience_block(&resume.experience, use_color));
    out.push_str(&education_block(&resume.education, use_color));
    out.push_str(&skills_block(&resume.skills, use_color));
    out.push_str(&projects_block(&resume.projects, use_color));
    out.push_str(&footer_block(Local::now().date_naive(), use_color));
    out
}
