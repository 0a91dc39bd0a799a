//! Fixed page content, bundled from `assets/profile.json`.

use once_cell::sync::OnceCell;
use serde::Deserialize;

const BUNDLED_PROFILE: &str = include_str!("../assets/profile.json");

/// Link target for buttons that have nowhere to go yet.
pub const PLACEHOLDER_HREF: &str = "#";

static PROFILE: OnceCell<Profile> = OnceCell::new();

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("invalid profile json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("profile is missing a {0}")]
    Missing(&'static str),
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub avatar: String,
    #[serde(default)]
    pub resume_url: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub experience: Vec<Job>,
    #[serde(default)]
    pub education: Vec<Degree>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub image: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub demo_url: Option<String>,
    #[serde(default)]
    pub code_url: Option<String>,
}

impl Project {
    pub fn demo_href(&self) -> &str {
        href_or_placeholder(self.demo_url.as_deref())
    }

    pub fn code_href(&self) -> &str {
        href_or_placeholder(self.code_url.as_deref())
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Job {
    pub company: String,
    pub position: String,
    pub period: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Degree {
    pub degree: String,
    pub school: String,
    pub period: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Certification {
    pub name: String,
    pub year: String,
}

impl Profile {
    pub fn from_json(source: &str) -> Result<Self, ContentError> {
        let profile: Profile = serde_json::from_str(source)?;
        if profile.name.trim().is_empty() {
            return Err(ContentError::Missing("name"));
        }
        Ok(profile)
    }

    pub fn bundled() -> Result<Self, ContentError> {
        Self::from_json(BUNDLED_PROFILE)
    }

    pub fn resume_href(&self) -> &str {
        href_or_placeholder(self.resume_url.as_deref())
    }
}

fn href_or_placeholder(url: Option<&str>) -> &str {
    match url {
        Some(url) if !url.trim().is_empty() => url,
        _ => PLACEHOLDER_HREF,
    }
}

/// Makes `profile` the one returned by [`profile`]. Only the first call wins.
pub fn install(profile: Profile) {
    if PROFILE.set(profile).is_err() {
        tracing::warn!("profile already installed; keeping the first one");
    }
}

/// The page content. Falls back to an empty profile if the bundled one
/// can't be parsed and nothing was installed.
pub fn profile() -> &'static Profile {
    PROFILE.get_or_init(|| {
        Profile::bundled().unwrap_or_else(|err| {
            tracing::error!(%err, "bundled profile is invalid");
            Profile::default()
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_profile_parses() {
        let profile = Profile::bundled().unwrap();
        assert_eq!(profile.name, "John Doe");
        assert_eq!(profile.skills.len(), 12);
        assert_eq!(profile.projects.len(), 3);
        assert_eq!(profile.experience.len(), 2);
        assert_eq!(profile.education.len(), 2);
        assert_eq!(profile.certifications.len(), 2);
    }

    #[test]
    fn test_skills_are_unique() {
        // Skills double as list keys.
        let profile = Profile::bundled().unwrap();
        let mut skills = profile.skills.clone();
        skills.sort();
        skills.dedup();
        assert_eq!(skills.len(), profile.skills.len());
    }

    #[test]
    fn test_missing_links_use_placeholder() {
        let profile = Profile::bundled().unwrap();
        let supply_chain = &profile.projects[2];
        assert_eq!(supply_chain.demo_url, None);
        assert_eq!(supply_chain.demo_href(), PLACEHOLDER_HREF);
        assert_eq!(supply_chain.code_href(), PLACEHOLDER_HREF);
        assert_eq!(profile.resume_href(), PLACEHOLDER_HREF);
    }

    #[test]
    fn test_real_links_pass_through() {
        let profile = Profile::from_json(
            r#"{"name":"A","headline":"B","avatar":"C","resume_url":"/cv.pdf"}"#,
        )
        .unwrap();
        assert_eq!(profile.resume_href(), "/cv.pdf");
        assert!(profile.skills.is_empty());
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let err = Profile::from_json(r#"{"name":" ","headline":"B","avatar":"C"}"#).unwrap_err();
        assert!(matches!(err, ContentError::Missing("name")));
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        let err = Profile::from_json("{").unwrap_err();
        assert!(matches!(err, ContentError::Json(_)));
    }
}
