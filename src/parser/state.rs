use crate::lexer::tokens::TokenKind;

/// Which token kinds the grammar accepts next. Each state maps to its
/// whitelist through `expected`, keeping the transition table in one
/// place instead of re-derived at every step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserState {
    AwaitingPart,
    AwaitingDelimiterOrEnd,
    AwaitingArgumentsDelimiterOrEnd,
    AwaitingReturnsOrEnd,
    AwaitingEndOnly,
}

impl ParserState {
    pub fn expected(&self) -> &'static [TokenKind] {
        match self {
            ParserState::AwaitingPart => &[TokenKind::String],
            ParserState::AwaitingDelimiterOrEnd => {
                &[TokenKind::Delimiter, TokenKind::EndOfStream]
            }
            ParserState::AwaitingArgumentsDelimiterOrEnd => &[
                TokenKind::Delimiter,
                TokenKind::EndOfStream,
                TokenKind::Arguments,
            ],
            ParserState::AwaitingReturnsOrEnd => {
                &[TokenKind::EndOfStream, TokenKind::Returns]
            }
            ParserState::AwaitingEndOnly => &[TokenKind::EndOfStream],
        }
    }

    pub fn accepts(&self, kind: TokenKind) -> bool {
        self.expected().contains(&kind)
    }
}
