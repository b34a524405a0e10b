//! Quoted-span exclusion.
//!
//! Every quote delimiter flips the exclusion flag. Delimiters are not
//! paired or validated: an odd number of them leaves the rest of the
//! input excluded.
//!
//! ```text
//! I  said  "  I  am  fine  "  to  her  .
//!          ╰──────────────╯ excluded
//! ```

use crate::Token;

/// Exclusion state threaded through a single rewrite.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuoteSpan {
    excluded: bool,
}

impl QuoteSpan {
    pub fn new() -> Self {
        Self::default()
    }

    /// State after seeing `token`; delimiters toggle, other tokens keep it.
    pub fn step(self, token: &Token) -> Self {
        if token.is_quote {
            Self {
                excluded: !self.excluded,
            }
        } else {
            self
        }
    }

    pub fn is_excluded(self) -> bool {
        self.excluded
    }
}
