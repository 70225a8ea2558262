// Prompt constants for résumé analysis. The extracted text is embedded
// verbatim; the model is asked for five labeled sections.

/// Resume analysis prompt template. Replace `{resume_text}` before sending.
pub const RESUME_ANALYSIS_PROMPT_TEMPLATE: &str = r#"Below is a resume of a candidate. Read the resume carefully, then extract and provide:

1. NAME: (the candidate's full name)
2. EMAIL: (their email address if found, or "Not found" if not present)
3. SUMMARY: (2-3 sentences summarizing their qualifications, focusing on their technical skills and experience)
4. SKILLS: (list their top 5 technical skills based on the resume)
5. EXPERIENCE LEVEL: (junior, mid-level, senior, or executive based on years and depth of experience)

Resume text:
{resume_text}

Format your response exactly as requested above, with clear headings.
"#;

/// Builds the analysis prompt from extracted resume text.
pub fn resume_analysis_prompt(resume_text: &str) -> String {
    RESUME_ANALYSIS_PROMPT_TEMPLATE.replace("{resume_text}", resume_text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resume_text_is_embedded() {
        let prompt = resume_analysis_prompt("Jane Doe\njane@example.com");
        assert!(prompt.contains("Jane Doe\njane@example.com"));
        assert!(!prompt.contains("{resume_text}"));
    }

    #[test]
    fn template_names_all_five_sections() {
        for section in ["NAME:", "EMAIL:", "SUMMARY:", "SKILLS:", "EXPERIENCE LEVEL:"] {
            assert!(RESUME_ANALYSIS_PROMPT_TEMPLATE.contains(section));
        }
    }
}
