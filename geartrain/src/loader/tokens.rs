/// Whitespace tokenizer with line tracking.

/// One whitespace-separated token and the 1-based line it starts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Token<'a> {
    pub text: &'a str,
    pub line: usize,
}

/// Cursor over the tokens of a scene source.
pub(crate) struct Tokens<'a> {
    tokens: Vec<Token<'a>>,
    position: usize,
}

impl<'a> Tokens<'a> {
    pub fn new(source: &'a str) -> Self {
        let tokens = source
            .lines()
            .enumerate()
            .flat_map(|(index, line)| {
                line.split_whitespace().map(move |text| Token { text, line: index + 1 })
            })
            .collect();
        Self { tokens, position: 0 }
    }

    /// Next token, or `None` at end of input
    pub fn next_token(&mut self) -> Option<Token<'a>> {
        let token = self.tokens.get(self.position).copied();
        if token.is_some() {
            self.position += 1;
        }
        token
    }

    /// Skip an optional `=` between a tag and its values
    pub fn skip_separator(&mut self) {
        if self.tokens.get(self.position).is_some_and(|token| token.text == "=") {
            self.position += 1;
        }
    }
}
