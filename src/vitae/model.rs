//! Core data types for the resume record.
//!
//! Everything here is plain immutable data, built once at startup and
//! handed to the renderer by reference. Optional fields are real
//! `Option`s: an absent achievements list and an empty one both mean
//! "no bullet block", but the type makes the distinction explicit
//! instead of leaning on truthiness.

#[derive(Debug, Clone)]
pub struct Contact {
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub github: String,
    pub location: String,
}

#[derive(Debug, Clone)]
pub struct Experience {
    pub position: String,
    pub company: String,
    pub duration: String,
    pub location: String,
    pub description: String,
    pub achievements: Option<Vec<String>>,
}

#[derive(Debug, Clone)]
pub struct Education {
    pub degree: String,
    pub field: String,
    pub institution: String,
    pub year: String,
    pub gpa: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Project {
    pub name: String,
    pub description: String,
    pub tech: String,
    pub link: Option<String>,
    pub achievements: Option<Vec<String>>,
}

/// One named skill category. Categories and the skills within them are
/// rendered in exactly the order they were declared, so the record keeps
/// them as a sequence rather than a map.
#[derive(Debug, Clone)]
pub struct SkillGroup {
    pub name: String,
    pub items: Vec<String>,
}

impl SkillGroup {
    pub fn new(name: &str, items: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            items: items.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Resume {
    pub name: String,
    pub title: String,
    pub contact: Contact,
    pub about: String,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub skills: Vec<SkillGroup>,
    pub projects: Option<Vec<Project>>,
}
