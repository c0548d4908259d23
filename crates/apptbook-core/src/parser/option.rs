/// Field selected by the `o/` option marker of `find`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FindOption {
    Name,
    Address,
    Phone,
    Email,
    Tag,
}

impl FindOption {
    pub const ALL: [FindOption; 5] = [
        FindOption::Name,
        FindOption::Address,
        FindOption::Phone,
        FindOption::Email,
        FindOption::Tag,
    ];

    /// Classifies an option token. Unknown tokens are left to the caller.
    pub fn resolve(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|option| option.token() == token)
    }

    pub fn token(self) -> &'static str {
        match self {
            FindOption::Name => "n",
            FindOption::Address => "a",
            FindOption::Phone => "p",
            FindOption::Email => "e",
            FindOption::Tag => "t",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::FindOption;

    #[test]
    fn resolve_known_tokens() {
        assert_eq!(FindOption::resolve("n"), Some(FindOption::Name));
        assert_eq!(FindOption::resolve("a"), Some(FindOption::Address));
        assert_eq!(FindOption::resolve("p"), Some(FindOption::Phone));
        assert_eq!(FindOption::resolve("e"), Some(FindOption::Email));
        assert_eq!(FindOption::resolve("t"), Some(FindOption::Tag));
    }

    #[test]
    fn resolve_is_exact() {
        assert_eq!(FindOption::resolve("N"), None);
        assert_eq!(FindOption::resolve("name"), None);
        assert_eq!(FindOption::resolve("x"), None);
    }
}
