// Prompt templates for CV tailoring. Both providers receive the same text;
// only the transport differs.

use std::fmt;
use std::str::FromStr;

/// Which prompt variant the providers are asked to answer with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CvFormat {
    /// A single JSON document following `CV_JSON_SCHEMA`. Parsed before returning.
    #[default]
    Json,
    /// A display-ready markdown document. Returned verbatim.
    Markdown,
}

impl FromStr for CvFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(CvFormat::Json),
            "markdown" | "md" => Ok(CvFormat::Markdown),
            other => Err(format!("unknown CV output format '{other}'")),
        }
    }
}

impl fmt::Display for CvFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CvFormat::Json => f.write_str("json"),
            CvFormat::Markdown => f.write_str("markdown"),
        }
    }
}

const JOB_DESCRIPTION_SLOT: &str = "{job_description}";
const CV_TEXT_SLOT: &str = "{cv_text}";

/// Strict-JSON tailoring prompt. Replace `{job_description}` and `{cv_text}` before sending.
pub const TAILOR_JSON_PROMPT_TEMPLATE: &str = r#"You are an expert career consultant. Your task is to analyze the user's master CV and the job description (JD) and generate a **tailored CV in a strict JSON format**.

**CRITICAL INSTRUCTION:**
1. The output MUST be a single, valid JSON object, and NOTHING ELSE. Do not include any conversational text, notes, or markdown fences (like ```).
2. All descriptive fields (summary, experience descriptions, education descriptions) must be formatted using **Markdown** *within* the JSON string values.

---
**JSON Schema to Follow:**
{
  "personalInfo": {
    "name": "Full Name",
    "title": "Tailored Job Title",
    "email": "email@example.com",
    "phone": "+X (XXX) XXX-XXXX",
    "linkedin": "linkedin.com/in/profile",
    "location": "City, Country"
  },
  "summary": "A tailored professional summary (MUST be in Markdown format).",
  "education": [
    {
      "degree": "Degree/Program Name",
      "university": "Institution Name",
      "years": "Start - End",
      "description": "Relevant details as a bulleted list (MUST be in Markdown format)."
    }
  ],
  "experience": [
    {
      "title": "Job Title",
      "company": "Company Name",
      "years": "Start - End",
      "description": "Tailored achievement bullet points (MUST be in Markdown format)."
    }
  ],
  "skills": {
    "Frontend": ["JavaScript (ES6+)", "React", "Next.js"],
    "Backend": ["Node.js", "Python"],
    "Tools & Dev Ops": ["Git", "Jira", "Postman"],
    "Soft Skills": ["Problem Solving", "Collaboration"]
  },
  "languages": ["Language 1", "Language 2"]
}
---

Job Description:
---
{job_description}
---

Original CV Content:
---
{cv_text}
---

**Generate the JSON object now.**"#;

/// Markdown tailoring prompt. Replace `{job_description}` and `{cv_text}` before sending.
pub const TAILOR_MARKDOWN_PROMPT_TEMPLATE: &str = r#"You are an expert career consultant. Tailor the following CV to strictly match the provided job description.
Focus on rephrasing relevant bullet points and ensuring keywords are present, but **do not invent experience**

Job Description:
---
{job_description}
---

Original CV:
---
{cv_text}
---
Output the tailored CV in a single, clean markdown block ready for display"#;

/// Renders the prompt for `format` with both inputs embedded verbatim.
///
/// Substitution is single-pass: placeholder text occurring inside the user's
/// own CV or job description is left untouched.
pub fn build_tailor_prompt(format: CvFormat, cv_text: &str, job_description: &str) -> String {
    let template = match format {
        CvFormat::Json => TAILOR_JSON_PROMPT_TEMPLATE,
        CvFormat::Markdown => TAILOR_MARKDOWN_PROMPT_TEMPLATE,
    };

    let mut out = String::with_capacity(template.len() + cv_text.len() + job_description.len());
    let mut rest = template;
    loop {
        let next = [
            (rest.find(JOB_DESCRIPTION_SLOT), JOB_DESCRIPTION_SLOT, job_description),
            (rest.find(CV_TEXT_SLOT), CV_TEXT_SLOT, cv_text),
        ]
        .into_iter()
        .filter_map(|(pos, slot, value)| pos.map(|p| (p, slot, value)))
        .min_by_key(|(pos, _, _)| *pos);

        match next {
            Some((pos, slot, value)) => {
                out.push_str(&rest[..pos]);
                out.push_str(value);
                rest = &rest[pos + slot.len()..];
            }
            None => {
                out.push_str(rest);
                return out;
            }
        }
    }
}
