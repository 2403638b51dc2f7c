use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Request body for `POST /api/v1/resumes/parse`.
#[derive(Debug, Clone, Deserialize)]
pub struct ResumeInput {
    /// Raw, unstructured resume text. May be empty.
    pub resume_text: String,
}

/// A single position in the candidate's work history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WorkExperience {
    pub job_title: String,
    pub company: String,
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    /// One entry per responsibility or achievement bullet.
    pub description: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub location: Option<String>,
    pub graduation_date: Option<String>,
}

/// Structured resume returned to the caller.
///
/// This is the single definition of the output shape: the JSON Schema embedded
/// in the extraction prompt is derived from it, and the model's reply is
/// validated by deserializing into it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ResumeOutput {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub linkedin_url: Option<String>,
    pub summary: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub work_experience: Vec<WorkExperience>,
    #[serde(default)]
    pub education: Vec<Education>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_minimal_object_gets_defaults() {
        let out: ResumeOutput = serde_json::from_str("{}").unwrap();
        assert_eq!(out, ResumeOutput::default());
    }

    #[test]
    fn test_optional_fields_serialize_as_null() {
        let value = serde_json::to_value(ResumeOutput::default()).unwrap();
        assert_eq!(
            value,
            json!({
                "full_name": null,
                "email": null,
                "phone_number": null,
                "linkedin_url": null,
                "summary": null,
                "skills": [],
                "work_experience": [],
                "education": []
            })
        );
    }

    #[test]
    fn test_full_resume_deserializes() {
        let json = r#"{
            "full_name": "John Doe",
            "email": "john.doe@email.com",
            "phone_number": "+1 512 555 0100",
            "linkedin_url": "https://linkedin.com/in/johndoe",
            "summary": "Backend engineer.",
            "skills": ["Rust", "PostgreSQL"],
            "work_experience": [{
                "job_title": "Software Engineer",
                "company": "Acme",
                "location": "Austin, TX",
                "start_date": "2020-01",
                "end_date": null,
                "description": ["Built the billing service", "Cut p99 latency by 40%"]
            }],
            "education": [{
                "degree": "BSc Computer Science",
                "institution": "UT Austin",
                "graduation_date": "2019"
            }]
        }"#;

        let out: ResumeOutput = serde_json::from_str(json).unwrap();
        assert_eq!(out.skills, vec!["Rust", "PostgreSQL"]);
        assert_eq!(out.work_experience[0].company, "Acme");
        assert!(out.work_experience[0].end_date.is_none());
        assert_eq!(out.work_experience[0].description.len(), 2);
        assert!(out.education[0].location.is_none());
    }

    #[test]
    fn test_missing_job_title_rejected() {
        let value = json!({
            "work_experience": [{"company": "Acme", "description": []}]
        });
        let err = serde_json::from_value::<ResumeOutput>(value).unwrap_err();
        assert!(err.to_string().contains("job_title"), "{err}");
    }

    #[test]
    fn test_missing_description_rejected() {
        let value = json!({
            "work_experience": [{"job_title": "Engineer", "company": "Acme"}]
        });
        assert!(serde_json::from_value::<ResumeOutput>(value).is_err());
    }

    #[test]
    fn test_missing_institution_rejected() {
        let value = json!({"education": [{"degree": "BA"}]});
        assert!(serde_json::from_value::<ResumeOutput>(value).is_err());
    }

    #[test]
    fn test_wrong_type_rejected() {
        let value = json!({"skills": "Rust, Go"});
        assert!(serde_json::from_value::<ResumeOutput>(value).is_err());
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let value = json!({"full_name": "Jane", "hobbies": ["chess"]});
        let out: ResumeOutput = serde_json::from_value(value).unwrap();
        assert_eq!(out.full_name.as_deref(), Some("Jane"));
    }

    #[test]
    fn test_schema_lists_required_fields() {
        let schema = serde_json::to_value(schemars::schema_for!(ResumeOutput)).unwrap();
        let work = &schema["$defs"]["WorkExperience"];
        let required: Vec<&str> = work["required"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|v| v.as_str())
            .collect();
        assert!(required.contains(&"job_title"));
        assert!(required.contains(&"company"));
        assert!(required.contains(&"description"));
        assert!(!required.contains(&"location"));
    }
}
