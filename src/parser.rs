//! The parsing seam.

use crate::Token;

/// Turns raw text into annotated tokens.
///
/// Implementations must fill dependency labels, morphology (possibly
/// partial), case shapes, quote and sentence-start flags, and the
/// `lefts`/`ancestors`/`children` relations. [`DocBuilder`](crate::DocBuilder)
/// derives everything but the labels and features.
pub trait Parser {
    type Error: std::error::Error + Send + Sync + 'static;

    fn parse(&self, text: &str) -> Result<Vec<Token>, Self::Error>;
}

impl<P: Parser + ?Sized> Parser for &P {
    type Error = P::Error;

    fn parse(&self, text: &str) -> Result<Vec<Token>, Self::Error> {
        (**self).parse(text)
    }
}
