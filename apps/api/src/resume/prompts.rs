// Resume extraction prompt templates.

pub const RESUME_EXTRACT_SYSTEM: &str = "\
You are an AI assistant designed to extract structured resume data. \
Always respond with a strictly valid JSON object. Use `null` for missing values, \
ensuring compliance with JSON standards. Do not include explanations, \
comments, or any additional text outside the JSON structure.";

pub const RESUME_EXTRACT_PROMPT: &str = r#"**Task:** Extract key information from the following resume text.

**Resume Text:**
{context}

**Instructions:**
Please extract the following information and format it in a clear structure:

1. **Contact Information:**
- Name:
- Email:
- Phone Number:
- Website/Portfolio/LinkedIn:
- Github Profile:

2. **Education:**
- Institution Name:
- Degree:
- Graduation Date:

3. **Experience:**
- Job Title:
- Company Name:
- Location:
- Dates of Employment:
- Description:

4. **Skills:**
- Skills:

**Question:**
Extract this information as a structured and valid JSON object. Use `null` for missing or unavailable values. Do not include explanations, comments, or any additional text outside the JSON structure."#;

/// Fills the user prompt template with the extracted resume text.
pub fn build_user_prompt(resume_text: &str) -> String {
    RESUME_EXTRACT_PROMPT.replace("{context}", resume_text)
}
