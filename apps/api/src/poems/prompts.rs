// Prompt constants for poem generation. Substitution is literal; names go
// into the prompt exactly as the user typed them.

/// Poem prompt template. Replace `{name}` before sending.
pub const POEM_PROMPT_TEMPLATE: &str = "Write a 4 line rhyming poem on {name}'s excellent coding skills. \n    Make the poem upbeat, encouraging and humorous.";

/// Builds the poem prompt for one name.
pub fn poem_prompt(name: &str) -> String {
    POEM_PROMPT_TEMPLATE.replace("{name}", name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_substituted_literally() {
        let prompt = poem_prompt("Grace O'Malley");
        assert!(prompt.contains("Grace O'Malley's excellent coding skills"));
        assert!(!prompt.contains("{name}"));
    }

    #[test]
    fn template_asks_for_four_lines() {
        assert!(POEM_PROMPT_TEMPLATE.contains("4 line rhyming poem"));
    }
}
