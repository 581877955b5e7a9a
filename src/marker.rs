use crate::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerPair {
    pub start: &'static str,

    pub end: &'static str,
}

impl MarkerPair {
    pub const LIST: MarkerPair = MarkerPair {
        start: "<!-- LISTSTART -->",
        end: "<!-- LISTEND -->",
    };

    pub const LIST_FREE: MarkerPair = MarkerPair {
        start: "<!-- LISTFREESTART -->",
        end: "<!-- LISTFREEEND -->",
    };

    pub const LIST_TOLL: MarkerPair = MarkerPair {
        start: "<!-- LISTTOLLSTART -->",
        end: "<!-- LISTTOLLEND -->",
    };

    pub const README: MarkerPair = MarkerPair {
        start: "<!-- READMESTART -->",
        end: "<!-- READMEEND -->",
    };
}

/// Replaces the region between `pair` in `text` with `replacement`, padded by a
/// blank line on each side. `name` only labels the document in errors.
pub fn splice(name: &str, text: &str, pair: &MarkerPair, replacement: &str) -> Result<String, Error> {
    splice_verbatim(name, text, pair, &format!("\n\n{}\n\n", replacement))
}

pub fn splice_verbatim(
    name: &str,
    text: &str,
    pair: &MarkerPair,
    replacement: &str,
) -> Result<String, Error> {
    let (head, tail) = region(name, text, pair)?;

    let mut spliced = String::with_capacity(head + replacement.len() + text.len() - tail);
    spliced.push_str(&text[..head]);
    spliced.push_str(replacement);
    spliced.push_str(&text[tail..]);
    Ok(spliced)
}

// Byte offsets of the end of the start sentinel and the beginning of the end
// sentinel. The end sentinel is only searched for after the start sentinel.
fn region(name: &str, text: &str, pair: &MarkerPair) -> Result<(usize, usize), Error> {
    let head = match text.find(pair.start) {
        Some(index) => index + pair.start.len(),
        None => return Err(not_found(name, pair.start)),
    };

    let tail = match text[head..].find(pair.end) {
        Some(index) => head + index,
        None => return Err(not_found(name, pair.end)),
    };

    Ok((head, tail))
}

fn not_found(name: &str, marker: &str) -> Error {
    Error::MarkerNotFound {
        document: name.to_string(),
        marker: marker.to_string(),
    }
}
