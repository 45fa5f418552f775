/*
 * Responsibility
 * - profile request/response DTOs
 * - request field names follow the web client's forms (flat social links,
 *   comma-separated skills, "githubusername" / "fieldofstudy" spellings)
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::repos::profile_repo::{
    EducationEntry, ExperienceEntry, ProfileRow, SocialLinks,
};

/// The web client's edit form posts "" for cleared or untouched fields.
/// An empty value means "not provided" and must never overwrite stored data.
pub(crate) fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

#[derive(Debug, Deserialize)]
pub struct UpsertProfileRequest {
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    #[serde(default)]
    pub status: String,
    #[serde(rename = "githubusername")]
    pub github_username: Option<String>,
    // Comma-separated, e.g. "HTML, CSS, JavaScript"
    #[serde(default)]
    pub skills: String,

    pub youtube: Option<String>,
    pub twitter: Option<String>,
    pub facebook: Option<String>,
    pub linkedin: Option<String>,
    pub instagram: Option<String>,
}

impl UpsertProfileRequest {
    pub fn validate(&self) -> Result<(), Vec<&'static str>> {
        let mut errors = Vec::new();

        if self.status.trim().is_empty() {
            errors.push("Status is required");
        }
        if self.skills.trim().is_empty() {
            errors.push("Skills is required");
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub fn skills_list(&self) -> Vec<String> {
        self.skills
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }

    pub fn social_links(&self) -> SocialLinks {
        SocialLinks {
            youtube: non_empty(&self.youtube).map(str::to_string),
            twitter: non_empty(&self.twitter).map(str::to_string),
            facebook: non_empty(&self.facebook).map(str::to_string),
            linkedin: non_empty(&self.linkedin).map(str::to_string),
            instagram: non_empty(&self.instagram).map(str::to_string),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ExperienceRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    pub location: Option<String>,
    #[serde(default)]
    pub from: String,
    pub to: Option<String>,
    #[serde(default)]
    pub current: bool,
    pub description: Option<String>,
}

impl ExperienceRequest {
    pub fn validate(&self) -> Result<(), Vec<&'static str>> {
        let mut errors = Vec::new();

        if self.title.trim().is_empty() {
            errors.push("Title is required");
        }
        if self.company.trim().is_empty() {
            errors.push("Company is required");
        }
        if self.from.trim().is_empty() {
            errors.push("From is required");
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub fn into_entry(self) -> ExperienceEntry {
        ExperienceEntry {
            id: Uuid::new_v4(),
            title: self.title,
            company: self.company,
            location: self.location,
            from: self.from,
            to: self.to,
            current: self.current,
            description: self.description,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct EducationRequest {
    #[serde(default)]
    pub school: String,
    #[serde(default)]
    pub degree: String,
    #[serde(default, rename = "fieldofstudy")]
    pub field_of_study: String,
    #[serde(default)]
    pub from: String,
    pub to: Option<String>,
    #[serde(default)]
    pub current: bool,
    pub description: Option<String>,
}

impl EducationRequest {
    pub fn validate(&self) -> Result<(), Vec<&'static str>> {
        let mut errors = Vec::new();

        if self.school.trim().is_empty() {
            errors.push("School is required");
        }
        if self.degree.trim().is_empty() {
            errors.push("Degree is required");
        }
        if self.field_of_study.trim().is_empty() {
            errors.push("Field of Study is required");
        }
        if self.from.trim().is_empty() {
            errors.push("From is required");
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub fn into_entry(self) -> EducationEntry {
        EducationEntry {
            id: Uuid::new_v4(),
            school: self.school,
            degree: self.degree,
            field_of_study: self.field_of_study,
            from: self.from,
            to: self.to,
            current: self.current,
            description: self.description,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProfileUser {
    pub id: Uuid,
    pub name: String,
    pub avatar: String,
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub id: Uuid,
    pub user: ProfileUser,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    pub status: String,
    #[serde(rename = "githubusername", skip_serializing_if = "Option::is_none")]
    pub github_username: Option<String>,
    pub skills: Vec<String>,
    pub social: SocialLinks,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub updated_at: DateTime<Utc>,
}

impl From<ProfileRow> for ProfileResponse {
    fn from(row: ProfileRow) -> Self {
        Self {
            id: row.id,
            user: ProfileUser {
                id: row.user_id,
                name: row.user_name,
                avatar: row.user_avatar,
            },
            company: row.company,
            website: row.website,
            location: row.location,
            bio: row.bio,
            status: row.status,
            github_username: row.github_username,
            skills: row.skills,
            social: row.social.0,
            experience: row.experience.0,
            education: row.education.0,
            updated_at: row.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upsert_request(status: &str, skills: &str) -> UpsertProfileRequest {
        UpsertProfileRequest {
            company: None,
            website: None,
            location: None,
            bio: None,
            status: status.to_string(),
            github_username: None,
            skills: skills.to_string(),
            youtube: None,
            twitter: None,
            facebook: None,
            linkedin: None,
            instagram: None,
        }
    }

    #[test]
    fn status_and_skills_are_required() {
        let errors = upsert_request("", "").validate().unwrap_err();
        assert_eq!(errors, vec!["Status is required", "Skills is required"]);
    }

    #[test]
    fn skills_list_splits_and_trims() {
        let req = upsert_request("Developer", " HTML, CSS ,JavaScript,,");
        assert_eq!(req.skills_list(), vec!["HTML", "CSS", "JavaScript"]);
    }

    #[test]
    fn cleared_form_fields_are_not_provided_values() {
        let req: UpsertProfileRequest = serde_json::from_value(serde_json::json!({
            "status": "Developer",
            "skills": "Rust",
            "company": "",
            "website": "   ",
            "githubusername": "octocat",
            "youtube": "",
            "twitter": "https://twitter.com/octocat",
        }))
        .unwrap();

        // "" must not become an update that overwrites the stored value.
        assert_eq!(non_empty(&req.company), None);
        assert_eq!(non_empty(&req.website), None);
        assert_eq!(non_empty(&req.github_username), Some("octocat"));

        // Cleared links drop out of the rebuilt social document entirely.
        let social = req.social_links();
        assert_eq!(social.youtube, None);
        assert_eq!(social.twitter.as_deref(), Some("https://twitter.com/octocat"));
        assert_eq!(
            serde_json::to_value(&social).unwrap(),
            serde_json::json!({ "twitter": "https://twitter.com/octocat" })
        );
    }

    #[test]
    fn experience_requires_title_company_from() {
        let req: ExperienceRequest = serde_json::from_str("{}").unwrap();
        let errors = req.validate().unwrap_err();
        assert_eq!(
            errors,
            vec!["Title is required", "Company is required", "From is required"]
        );
    }

    #[test]
    fn education_field_names_follow_the_client() {
        let req: EducationRequest = serde_json::from_value(serde_json::json!({
            "school": "State University",
            "degree": "BSc",
            "fieldofstudy": "Computer Science",
            "from": "2015-09-01",
        }))
        .unwrap();

        assert!(req.validate().is_ok());
        let entry = req.into_entry();
        assert_eq!(entry.field_of_study, "Computer Science");
        assert!(!entry.current);
    }

    #[test]
    fn experience_entry_gets_a_fresh_id() {
        let req: ExperienceRequest = serde_json::from_value(serde_json::json!({
            "title": "Developer",
            "company": "Acme",
            "from": "2020-01-01",
            "current": true,
        }))
        .unwrap();

        let entry = req.into_entry();
        assert!(!entry.id.is_nil());
        assert!(entry.current);
    }
}
