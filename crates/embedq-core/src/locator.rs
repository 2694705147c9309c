use std::ops::Range;

use serde::{Deserialize, Serialize};

pub const OPEN_MARKER: &str = "{Q{";
pub const CLOSE_MARKER: &str = "}Q}";

/// Anchor/focus byte offsets into a single text buffer. Equal offsets
/// represent a caret; no ordering between the two ends is assumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextSelection {
    pub anchor_offset: usize,
    pub focus_offset: usize,
}

impl TextSelection {
    pub fn new(anchor_offset: usize, focus_offset: usize) -> Self {
        Self {
            anchor_offset,
            focus_offset,
        }
    }

    pub fn caret(offset: usize) -> Self {
        Self::new(offset, offset)
    }
}

/// One embed-code placeholder found in a buffer. `content` is the full
/// delimited substring, markers included; `start..end` are byte offsets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedToken {
    pub start: usize,
    pub end: usize,
    pub content: String,
}

impl EmbedToken {
    pub fn span(&self) -> Range<usize> {
        self.start..self.end
    }

    // Hosts may report anchor/focus in either order, so both directions are
    // tried. An endpoint exactly on the opening or closing marker counts as
    // inside when the other endpoint is within the token.
    pub fn contains_selection(&self, selection: &TextSelection) -> bool {
        let (start, end) = (self.start, self.end);
        let anchor = selection.anchor_offset;
        let focus = selection.focus_offset;

        let forward = anchor >= start && anchor < end && focus > start && focus <= end;
        let reverse = anchor > start && anchor <= end && focus >= start && focus < end;
        forward || reverse
    }
}

/// All embed-code tokens in `text`, left to right, non-overlapping. A token
/// runs from an opening marker to the nearest closing marker after it; an
/// opening marker that is never closed ends the scan.
pub fn scan_tokens(text: &str) -> Vec<EmbedToken> {
    let mut tokens = Vec::new();
    let mut from = 0;

    while let Some(open) = text[from..].find(OPEN_MARKER) {
        let start = from + open;
        let body = start + OPEN_MARKER.len();
        let Some(close) = text[body..].find(CLOSE_MARKER) else {
            break;
        };
        let end = body + close + CLOSE_MARKER.len();
        tokens.push(EmbedToken {
            start,
            end,
            content: text[start..end].to_string(),
        });
        from = end;
    }

    tokens
}

/// Find the embed-code token the selection falls inside, if any. `None`
/// selection means the host reported no active range; that, no token in the
/// buffer, and no overlapping token all produce the same `None` result.
///
/// The first overlapping token in scan order wins and the search stops
/// there, rather than looking for a closest or innermost candidate.
/// Previously-authored content depends on this behavior.
pub fn locate(text: &str, selection: Option<&TextSelection>) -> Option<EmbedToken> {
    let selection = selection?;
    scan_tokens(text)
        .into_iter()
        .find(|token| token.contains_selection(selection))
}
