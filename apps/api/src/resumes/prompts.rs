// Resume parsing LLM prompt templates.

pub const RESUME_PARSE_PROMPT_TEMPLATE: &str = r#"You are an expert resume parser. Analyze the following resume text and extract the information
into a structured JSON object. The JSON object must strictly adhere to the following schema.
Do not add any extra explanations or introductory text outside of the JSON object.

JSON Schema:
{json_schema}

Resume Text:
---
{resume_text}
---"#;
