//! Big multi-line glyphs for the score display.
//!
//! Font files list glyphs as a `[c]` header line followed by the glyph rows:
//!
//! ```text
//! [1]
//!  ▄█
//!   █
//!  ▄█▄
//! ```

use std::collections::HashMap;

/// Text renderer for score and status strings.
#[derive(Debug, Clone, PartialEq)]
pub enum ScoreFont {
    /// Multi-line glyphs, all padded to `height` rows.
    Glyphs {
        glyphs: HashMap<char, Vec<String>>,
        height: usize,
    },
    /// The terminal's own font: one line of plain text.
    Plain,
}

impl ScoreFont {
    /// Parse a glyph file. Returns `None` if it defines no glyph.
    pub fn parse(source: &str) -> Option<Self> {
        let mut glyphs: HashMap<char, Vec<String>> = HashMap::new();
        let mut current: Option<char> = None;

        for line in source.lines() {
            let line = line.trim_end_matches('\r');
            let mut chars = line.chars();
            if let (Some('['), Some(c), Some(']'), None) =
                (chars.next(), chars.next(), chars.next(), chars.next())
            {
                current = Some(c);
                glyphs.entry(c).or_default();
                continue;
            }
            if let Some(c) = current {
                glyphs.entry(c).or_default().push(line.to_string());
            }
        }

        // Drop trailing blank rows so spacing between glyph blocks is free-form.
        for rows in glyphs.values_mut() {
            while rows.last().is_some_and(|r| r.trim().is_empty()) {
                rows.pop();
            }
        }
        glyphs.retain(|_, rows| !rows.is_empty());
        if glyphs.is_empty() {
            return None;
        }

        let height = glyphs.values().map(Vec::len).max().unwrap_or(1);
        Some(ScoreFont::Glyphs { glyphs, height })
    }

    /// Number of terminal rows one line of text occupies.
    pub fn height(&self) -> usize {
        match self {
            ScoreFont::Glyphs { height, .. } => *height,
            ScoreFont::Plain => 1,
        }
    }

    /// Render `text` into terminal rows. Characters without a glyph fall
    /// back to themselves on the middle row.
    pub fn render(&self, text: &str) -> Vec<String> {
        let (glyphs, height) = match self {
            ScoreFont::Plain => return vec![text.to_string()],
            ScoreFont::Glyphs { glyphs, height } => (glyphs, *height),
        };

        let mut rows = vec![String::new(); height];
        for (i, c) in text.chars().enumerate() {
            if i > 0 {
                rows.iter_mut().for_each(|row| row.push(' '));
            }
            match glyphs.get(&c) {
                Some(glyph) => {
                    let width = glyph.iter().map(|r| r.chars().count()).max().unwrap_or(0);
                    for (r, row) in rows.iter_mut().enumerate() {
                        let part = glyph.get(r).map(String::as_str).unwrap_or("");
                        row.push_str(part);
                        let pad = width - part.chars().count();
                        row.extend(std::iter::repeat(' ').take(pad));
                    }
                }
                None => {
                    for (r, row) in rows.iter_mut().enumerate() {
                        row.push(if r == height / 2 { c } else { ' ' });
                    }
                }
            }
        }
        rows
    }
}
