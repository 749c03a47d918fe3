//! Structured-output schemas: the response shapes the API is asked to fill.
//!
//! Schema types use the REST API's uppercase names (OBJECT, STRING, ...).

use serde_json::{json, Value};

/// Schema for one full candidate analysis: name, per-criterion scores, and
/// the extracted CV data.
pub fn analysis_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "candidateName": {
                "type": "STRING",
                "description": "The full name of the candidate, extracted from the CV."
            },
            "scores": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "criterionName": { "type": "STRING" },
                        "score": {
                            "type": "NUMBER",
                            "description": "A score from 0 to 100 for the criterion."
                        },
                        "justification": {
                            "type": "STRING",
                            "description": "A brief justification for the score, based on the CV and job description."
                        }
                    },
                    "required": ["criterionName", "score", "justification"]
                }
            },
            "workExperience": {
                "type": "ARRAY",
                "description": "A list of the candidate's relevant work experiences.",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "jobTitle": { "type": "STRING" },
                        "company": { "type": "STRING" },
                        "dates": {
                            "type": "STRING",
                            "description": "e.g., 'Jan 2020 - Present' or '2018 - 2022'"
                        },
                        "description": {
                            "type": "STRING",
                            "description": "A brief summary of responsibilities and achievements."
                        }
                    },
                    "required": ["jobTitle", "company", "dates", "description"]
                }
            },
            "education": {
                "type": "ARRAY",
                "description": "A list of the candidate's educational background.",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "degree": { "type": "STRING" },
                        "institution": { "type": "STRING" },
                        "dates": {
                            "type": "STRING",
                            "description": "e.g., 'Aug 2016 - May 2020'"
                        }
                    },
                    "required": ["degree", "institution", "dates"]
                }
            },
            "skills": {
                "type": "ARRAY",
                "description": "A list of key skills (technical and soft) identified in the CV.",
                "items": { "type": "STRING" }
            }
        },
        "required": ["candidateName", "scores", "workExperience", "education", "skills"]
    })
}

/// Schema for criteria suggestions: an array of {name, weight}.
pub fn suggestion_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "name": {
                    "type": "STRING",
                    "description": "A short, specific name for the evaluation criterion."
                },
                "weight": {
                    "type": "INTEGER",
                    "description": "Importance from 1 (nice to have) to 5 (critical)."
                }
            },
            "required": ["name", "weight"]
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_schema_requires_name_and_scores() {
        let schema = analysis_schema();
        assert_eq!(schema["type"], "OBJECT");
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert!(required.contains(&"candidateName"));
        assert!(required.contains(&"scores"));
    }

    #[test]
    fn test_analysis_schema_score_items_complete() {
        let schema = analysis_schema();
        let items = &schema["properties"]["scores"]["items"];
        assert!(items["properties"].get("criterionName").is_some());
        assert!(items["properties"].get("score").is_some());
        assert!(items["properties"].get("justification").is_some());
    }

    #[test]
    fn test_suggestion_schema_is_array_of_name_weight() {
        let schema = suggestion_schema();
        assert_eq!(schema["type"], "ARRAY");
        let required: Vec<&str> = schema["items"]["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert_eq!(required, vec!["name", "weight"]);
    }
}
