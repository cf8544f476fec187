//! Prompt construction and output shaping.

/// Number of lines kept from the provider's answer.
pub const SUMMARY_LINES: usize = 3;

const INSTRUCTION: &str =
    "Summarize the following text in exactly 3 concise lines. Keep it factual and clear.";

/// Build the summarization prompt. `text` is embedded verbatim.
pub fn build_prompt(text: &str) -> String {
    format!("{INSTRUCTION}\n\nTEXT:\n{text}")
}

/// Keep the first `max_lines` lines of `output`, split on `'\n'`.
///
/// Lines are not re-wrapped or cleaned; a kept line may stop mid-sentence.
pub fn truncate_lines(output: &str, max_lines: usize) -> String {
    output
        .split('\n')
        .take(max_lines)
        .collect::<Vec<_>>()
        .join("\n")
}
