//! Token-aligned rendering of a [`Rewrite`], used by snapshot tests.
//!
//! ```text
//! I     am     happy  .
//! ╰Pronoun(subject-sg) "You"
//!       ╰╯Agreement "are"
//! ```

use std::fmt::{self, Write};

use unicode_width::UnicodeWidthStr;

use crate::rewriter::{Change, Rewrite};
use crate::Token;

const SPACE_PADDING: usize = 2;

pub struct RewriteDisplay<'a> {
    tokens: &'a [Token],
    rewrite: &'a Rewrite,
    show_quoted: bool,
}

impl<'a> RewriteDisplay<'a> {
    pub fn new(tokens: &'a [Token], rewrite: &'a Rewrite) -> Self {
        Self {
            tokens,
            rewrite,
            show_quoted: false,
        }
    }

    /// Also mark tokens that were skipped because they are quoted.
    pub fn show_quoted(mut self) -> Self {
        self.show_quoted = true;
        self
    }
}

impl<'a> fmt::Display for RewriteDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut starts = Vec::with_capacity(self.tokens.len());
        let mut ends = Vec::with_capacity(self.tokens.len());

        // trailing whitespace shows as its own padded gap
        let mut opening_line = String::new();
        for (idx, token) in self.tokens.iter().enumerate() {
            if idx > 0 {
                opening_line.extend(std::iter::repeat(' ').take(SPACE_PADDING));
            }
            starts.push(UnicodeWidthStr::width(&*opening_line));
            opening_line.push_str(&token.text);
            ends.push(UnicodeWidthStr::width(&*opening_line));

            let gap = token.whitespace.chars().count();
            if gap > 0 && idx + 1 < self.tokens.len() {
                opening_line.extend(std::iter::repeat(' ').take(SPACE_PADDING + gap));
            }
        }
        f.write_str(&opening_line)?;

        for (idx, edit) in self.rewrite.edits().iter().enumerate() {
            let label = match edit.change {
                Change::Unchanged => continue,
                Change::Quoted if !self.show_quoted => continue,
                Change::Quoted => "Quoted".to_string(),
                Change::Pronoun(slot) => format!("Pronoun({}) {:?}", slot, edit.text),
                Change::Contraction => format!("Contraction {:?}", edit.text),
                Change::Agreement => format!("Agreement {:?}", edit.text),
            };
            let (Some(&start), Some(&end)) = (starts.get(idx), ends.get(idx)) else {
                continue;
            };

            f.write_char('\n')?;
            for _ in 0..start {
                f.write_char(' ')?;
            }
            f.write_char('╰')?;
            for _ in (start + 1)..end.saturating_sub(1) {
                f.write_char('─')?;
            }
            if end - start > 1 {
                f.write_char('╯')?;
            }
            f.write_str(&label)?;
        }

        Ok(())
    }
}
