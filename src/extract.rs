//! Extraction of the replacement file content from a model response.
//!
//! The grammar is a fenced code block: an opening ``` fence with an
//! optional language tag on the same line, a body, and a closing bare
//! fence. Only the first block counts; anything before it is model
//! preamble and anything after it is commentary.

/// Extract the body of the first fenced code block in `response`.
///
/// Fallback policy: a response without any fence is returned unchanged —
/// some models answer with the bare file when asked for a code block. An
/// unterminated fence yields everything after the opening line. The body
/// keeps a trailing newline so the written file ends in one.
pub fn extract_code_block(response: &str) -> String {
    let mut lines = response.lines();
    let mut body = Vec::new();
    let mut in_block = false;

    for line in lines.by_ref() {
        if line.trim_start().starts_with("```") {
            in_block = true;
            break;
        }
    }

    if !in_block {
        return response.to_string();
    }

    for line in lines {
        if line.trim_start().starts_with("```") {
            break;
        }
        body.push(line);
    }

    let mut content = body.join("\n");
    content.push('\n');
    content
}
