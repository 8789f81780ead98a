// Dokument: wynik przejścia potoku

/// Token z anotacjami. `lemma` jest pusty, gdy lematyzator nie był uruchomiony,
/// a `tag` ustawia tylko tagger.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Token {
    pub text: String,
    pub lemma: String,
    pub tag: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Doc {
    tokens: Vec<Token>,
}

impl Doc {
    pub fn new(tokens: Vec<Token>) -> Self {
        Doc { tokens }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    pub fn lemmas(&self) -> Vec<String> {
        self.tokens.iter().map(|t| t.lemma.clone()).collect()
    }

    pub fn into_lemmas(self) -> Vec<String> {
        self.tokens.into_iter().map(|t| t.lemma).collect()
    }
}

impl<'a> IntoIterator for &'a Doc {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
