/// The operators of the logic language.
///
/// Each operator accepts several spellings. Matching is exact and
/// case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `not`, `N`, `~`, `[-]`, `!`
    Not,
    /// `and`, `K`, `&`, `[*]`
    And,
    /// `or`, `A`, `||`, `[+]`
    Or,
    /// `implies`, `imp`, `C`, `=>`
    Implies,
    /// `iff`, `E`, `<=>`
    Iff,
    /// `set`
    Set,
    /// `let`
    Let,
}

impl Operator {
    /// Every operator, in resolution order.
    pub const ALL: [Self; 7] = [Self::Not,
                                Self::And,
                                Self::Or,
                                Self::Implies,
                                Self::Iff,
                                Self::Set,
                                Self::Let];

    /// The accepted spellings of this operator.
    #[must_use]
    pub const fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Not => &["not", "N", "~", "[-]", "!"],
            Self::And => &["and", "K", "&", "[*]"],
            Self::Or => &["or", "A", "||", "[+]"],
            Self::Implies => &["implies", "imp", "C", "=>"],
            Self::Iff => &["iff", "E", "<=>"],
            Self::Set => &["set"],
            Self::Let => &["let"],
        }
    }

    /// The number of terms that must follow this operator.
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::Not => 1,
            Self::And | Self::Or | Self::Implies | Self::Iff | Self::Set => 2,
            Self::Let => 3,
        }
    }

    /// Looks up the operator spelled `name`.
    ///
    /// # Example
    /// ```
    /// use proplisp::interpreter::parser::operator::Operator;
    ///
    /// assert_eq!(Operator::resolve("<=>"), Some(Operator::Iff));
    /// assert_eq!(Operator::resolve("[*]"), Some(Operator::And));
    /// assert_eq!(Operator::resolve("AND"), None);
    /// ```
    #[must_use]
    pub fn resolve(name: &str) -> Option<Self> {
        Self::ALL.into_iter()
                 .find(|op| op.aliases().contains(&name))
    }
}
