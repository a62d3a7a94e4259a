//! Fence-aware tokenizer: a two-state scanner that splits doc text into
//! prose and fenced-code segments.
//!
//! The fence markers travel with the code token: for ```` a ```x``` b ````
//! the tokens are `"a "`, ```` "```x```" ````, `" b"`. Concatenating all
//! token contents gives back the input exactly.

/// Triple-backtick fence delimiter.
pub const FENCE: &str = "```";

const FENCE_LEN: usize = FENCE.len();

/// One contiguous slice of the input, tagged as code or prose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub content: &'a str,
    pub is_code: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Prose,
    Code,
}

/// Split `input` into prose and code tokens.
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    tokenize_with(input, |content, is_code| Token { content, is_code })
}

/// Split `input` and map every token through `f`, collecting the results
/// in order.
///
/// Input without any fence yields exactly one prose token (even when empty).
/// Empty prose slices between adjacent fences are skipped. An unterminated
/// fence is flushed at the end as a final code token.
pub fn tokenize_with<'a, T, F>(input: &'a str, mut f: F) -> Vec<T>
where
    F: FnMut(&'a str, bool) -> T,
{
    let bytes = input.as_bytes();
    let mut out = Vec::new();
    let mut state = State::Prose;
    // Start of the pending buffer.
    let mut start = 0;
    // Number of consecutive backticks seen since the last toggle, capped by
    // the fence length. Reset on toggle so a fence never overlaps another.
    let mut window = 0;

    for (i, &b) in bytes.iter().enumerate() {
        if b != b'`' {
            window = 0;
            continue;
        }
        window += 1;
        if window < FENCE_LEN {
            continue;
        }
        window = 0;

        match state {
            State::Prose => {
                // The opening fence starts the code token.
                let fence_start = i + 1 - FENCE_LEN;
                if fence_start > start {
                    out.push(f(&input[start..fence_start], false));
                }
                start = fence_start;
                state = State::Code;
            }
            State::Code => {
                out.push(f(&input[start..=i], true));
                start = i + 1;
                state = State::Prose;
            }
        }
    }

    match state {
        State::Prose => {
            if start < input.len() || out.is_empty() {
                out.push(f(&input[start..], false));
            }
        }
        State::Code => {
            tracing::debug!(
                offset = start,
                "unterminated code fence; emitting trailing text as code"
            );
            out.push(f(&input[start..], true));
        }
    }

    out
}
