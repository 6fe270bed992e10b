//! Prompt assembly for a single reconstruct call.
//!
//! The prompt has four fixed parts: the editor framing, the mode instruction,
//! the formatting constraints, and the input followed by [`OUTPUT_CUE`].

/// Trailing cue marking where the model's answer begins.
///
/// Models sometimes echo it back; the sanitizer strips everything up to its
/// last occurrence.
pub const OUTPUT_CUE: &str = "Refined text:";

/// Templates for generating reconstruct prompts
pub struct PromptTemplate;

impl PromptTemplate {
    /// Fixed framing placed before the mode instruction
    pub fn system_framing() -> &'static str {
        "You are a professional text editor. Your task is to refine text to make it more natural and human-like."
    }

    /// Formatting constraints appended after the mode instruction
    pub fn output_constraints() -> &'static str {
        r#"IMPORTANT INSTRUCTIONS:
- Return ONLY the refined text
- Every word must be complete with all letters
- Do not skip or omit any characters
- Do not include explanations, notes, or metadata
- Do not include the word "undefined"
- Ensure the first letter of every word is present"#
    }

    /// Assemble the full prompt. `text` is embedded verbatim.
    pub fn reconstruct(instruction: &str, text: &str) -> String {
        format!(
            "{}\n\nMode: {}\n\n{}\n\nOriginal text to refine:\n{}\n\n{}",
            Self::system_framing(),
            instruction,
            Self::output_constraints(),
            text,
            OUTPUT_CUE
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::ModeRegistry;

    #[test]
    fn test_prompt_contains_every_part() {
        let instruction = ModeRegistry::resolve(Some("Academic"));
        let prompt = PromptTemplate::reconstruct(instruction, "some input");
        assert!(prompt.starts_with("You are a professional text editor."));
        assert!(prompt.contains(&format!("Mode: {instruction}")));
        assert!(prompt.contains("Return ONLY the refined text"));
        assert!(prompt.contains("Do not include the word \"undefined\""));
        assert!(prompt.contains("Original text to refine:\nsome input"));
    }

    #[test]
    fn test_prompt_ends_with_cue() {
        let prompt = PromptTemplate::reconstruct("x", "input");
        assert!(prompt.ends_with("input\n\nRefined text:"));
    }

    #[test]
    fn test_input_kept_verbatim() {
        let input = "  line one\n\n  line two with {braces} and 100%  ";
        let prompt = PromptTemplate::reconstruct("x", input);
        assert!(prompt.contains(input));
    }
}
