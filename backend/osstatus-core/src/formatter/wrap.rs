use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Greedy word wrap with every line prefixed by `indent`.
///
/// `width` counts the indent. Whitespace runs collapse to a single space and
/// words wider than the space left after the indent are split across lines,
/// starting on the current line when it has room.
/// Blank input yields no lines.
pub fn wrap_indented(text: &str, width: usize, indent: &str) -> Vec<String> {
    let available = width.saturating_sub(indent.width()).max(1);

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();

        if word_width > available {
            let mut rest = word;
            if !current.is_empty() {
                // fill what is left of the current line before breaking
                let room = available.saturating_sub(current_width + 1);
                let (head, tail) = split_at_width(word, room);
                if !head.is_empty() {
                    current.push(' ');
                    current.push_str(head);
                    rest = tail;
                }
                lines.push(std::mem::take(&mut current));
            }
            let mut pieces = split_to_width(rest, available);
            // the tail of a long word can still share a line with what follows
            let tail = pieces.pop().unwrap_or_default();
            lines.extend(pieces);
            current_width = tail.width();
            current = tail;
            continue;
        }

        if current.is_empty() {
            current.push_str(word);
            current_width = word_width;
        } else if current_width + 1 + word_width <= available {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + word_width;
        } else {
            lines.push(std::mem::replace(&mut current, word.to_string()));
            current_width = word_width;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
        .into_iter()
        .map(|line| format!("{indent}{line}"))
        .collect()
}

/// Longest prefix of `word` that fits in `width` columns, and the rest.
fn split_at_width(word: &str, width: usize) -> (&str, &str) {
    let mut used = 0;
    for (index, ch) in word.char_indices() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width > width {
            return word.split_at(index);
        }
        used += ch_width;
    }
    (word, "")
}

fn split_to_width(word: &str, width: usize) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut rest = word;

    while !rest.is_empty() {
        let (mut head, mut tail) = split_at_width(rest, width);
        if head.is_empty() {
            // a single character wider than the line still gets its own piece
            let first = rest.chars().next().map_or(0, char::len_utf8);
            (head, tail) = rest.split_at(first);
        }
        pieces.push(head.to_string());
        rest = tail;
    }
    pieces
}
