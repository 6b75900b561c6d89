use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The complete content of the CV page. Built once and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeDocument {
    pub name: String,
    pub tagline: String,
    pub contact: ContactInfo,
    pub summary: String,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
    pub education: Vec<Education>,
    pub objective: String,
    pub additional_info: AdditionalInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub location: String,
    pub email: String,
    /// Host-qualified handle, e.g. `github.com/someone`. Rendered behind `https://`.
    pub github: String,
    pub linkedin: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub category: String,
    pub items: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectLink {
    pub url: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub link: ProjectLink,
    pub details: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub period: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioLink {
    pub url: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdditionalInfo {
    pub interests: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portfolio: Option<PortfolioLink>,
    pub availability: String,
}

#[derive(Debug, Error, PartialEq)]
pub enum DocumentError {
    #[error("Duplicate skill category '{0}'")]
    DuplicateSkillCategory(String),

    #[error("Duplicate education degree '{0}'")]
    DuplicateDegree(String),
}

impl ResumeDocument {
    /// Checks the keys the page uses to identify list entries.
    ///
    /// Skill categories and education degrees must be unique within their
    /// sequence. The first repeated key is reported.
    pub fn validate(&self) -> Result<(), DocumentError> {
        if let Some(dup) = first_duplicate(self.skills.iter().map(|s| s.category.as_str())) {
            return Err(DocumentError::DuplicateSkillCategory(dup.to_string()));
        }
        if let Some(dup) = first_duplicate(self.education.iter().map(|e| e.degree.as_str())) {
            return Err(DocumentError::DuplicateDegree(dup.to_string()));
        }
        Ok(())
    }
}

fn first_duplicate<'a>(keys: impl Iterator<Item = &'a str>) -> Option<&'a str> {
    let mut seen = HashSet::new();
    keys.into_iter().find(|k| !seen.insert(*k))
}


#[cfg(test)]
mod tests {
    use super::fixtures::sample_document;
    use super::*;

    #[test]
    fn test_validate_accepts_unique_keys() {
        assert_eq!(sample_document().validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_duplicate_category() {
        let mut doc = sample_document();
        doc.skills.push(doc.skills[0].clone());
        assert_eq!(
            doc.validate(),
            Err(DocumentError::DuplicateSkillCategory("Mathematics".to_string()))
        );
    }

    #[test]
    fn test_validate_rejects_duplicate_degree() {
        let mut doc = sample_document();
        doc.education.push(Education {
            degree: "Private tutoring".to_string(),
            period: "1840s".to_string(),
            link: None,
        });
        assert!(matches!(
            doc.validate(),
            Err(DocumentError::DuplicateDegree(d)) if d == "Private tutoring"
        ));
    }

    #[test]
    fn test_validate_accepts_empty_sequences() {
        let mut doc = sample_document();
        doc.skills.clear();
        doc.education.clear();
        doc.projects.clear();
        assert!(doc.validate().is_ok());
    }

    #[test]
    fn test_json_uses_camel_case_and_skips_absent_options() {
        let json = serde_json::to_value(sample_document()).unwrap();
        assert!(json.get("additionalInfo").is_some());
        assert!(json["additionalInfo"].get("portfolio").is_none());
        assert!(json["projects"][0].get("subtitle").is_none());
    }

    #[test]
    fn test_json_without_optional_fields_deserializes() {
        let raw = r#"{
            "degree": "BSc",
            "period": "2020"
        }"#;
        let edu: Education = serde_json::from_str(raw).unwrap();
        assert_eq!(edu.link, None);
    }
}
