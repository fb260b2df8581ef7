use std::fmt;

use ordered_float::OrderedFloat;

use crate::error::SyntaxError;

/// A node of the generic symbolic-expression tree.
///
/// `SExpr` is the intermediate representation produced by the reader. It knows
/// nothing about logic: a line such as `(and x T)` reads as a list of the
/// symbol `and`, the symbol `x` and the literal `True`. Lists are chains of
/// [`SExpr::Pair`] nodes terminated by [`SExpr::Empty`], and every pair owns
/// its head and tail outright.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SExpr {
    /// A numeric atom such as `1` or `0.5`.
    Constant(OrderedFloat<f64>),
    /// Any non-numeric, non-boolean atom, operator glyphs included.
    Symbol(String),
    /// The literal `true` (also `T`, in any case).
    True,
    /// The literal `false` (also `F`, in any case).
    False,
    /// A list cell.
    Pair {
        /// First element of the list.
        head: Box<Self>,
        /// The rest of the list; normally another pair or `Empty`.
        tail: Box<Self>,
    },
    /// The empty list, also returned for empty input.
    Empty,
}

impl SExpr {
    /// Builds a single pair from a head and a tail.
    #[must_use]
    pub fn cons(head: Self, tail: Self) -> Self {
        Self::Pair { head: Box::new(head),
                     tail: Box::new(tail), }
    }

    /// Builds a proper list holding `items` in order.
    ///
    /// # Example
    /// ```
    /// use proplisp::sexpr::SExpr;
    ///
    /// let list = SExpr::list([SExpr::Symbol("and".to_string()), SExpr::True, SExpr::False]);
    /// assert_eq!(list.to_string(), "List(Symbol(and) True False)");
    /// ```
    #[must_use]
    pub fn list<I>(items: I) -> Self
        where I: IntoIterator<Item = Self>,
              I::IntoIter: DoubleEndedIterator
    {
        items.into_iter()
             .rev()
             .fold(Self::Empty, |tail, head| Self::cons(head, tail))
    }

    /// Builds a numeric constant.
    #[must_use]
    pub const fn constant(value: f64) -> Self {
        Self::Constant(OrderedFloat(value))
    }

    /// Builds a symbol.
    #[must_use]
    pub fn symbol(name: impl Into<String>) -> Self {
        Self::Symbol(name.into())
    }

    /// Returns the elements of a proper list, borrowing them in order.
    ///
    /// `Empty` yields no elements.
    ///
    /// # Errors
    /// Returns [`SyntaxError::NotAList`] for atoms and for pair chains that do
    /// not end in `Empty`.
    pub fn to_list(&self) -> Result<Vec<&Self>, SyntaxError> {
        let mut items = Vec::new();
        let mut current = self;
        loop {
            match current {
                Self::Pair { head, tail } => {
                    items.push(head.as_ref());
                    current = tail.as_ref();
                },
                Self::Empty => return Ok(items),
                other => return Err(SyntaxError::NotAList { kind: other.kind() }),
            }
        }
    }

    /// Whether this node is a pair or the empty list.
    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self, Self::Pair { .. } | Self::Empty)
    }

    /// Whether this node is an atom, i.e. neither a pair nor the empty list.
    #[must_use]
    pub const fn is_atom(&self) -> bool {
        !self.is_list()
    }

    /// A short name for the kind of node, used in error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Constant(_) => "constant",
            Self::Symbol(_) => "symbol",
            Self::True => "true",
            Self::False => "false",
            Self::Pair { .. } => "pair",
            Self::Empty => "empty list",
        }
    }
}

impl fmt::Display for SExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant(value) => write!(f, "Constant({value})"),
            Self::Symbol(name) => write!(f, "Symbol({name})"),
            Self::True => write!(f, "True"),
            Self::False => write!(f, "False"),
            Self::Empty => write!(f, "Empty"),
            Self::Pair { head, tail } => match self.to_list() {
                Ok(items) => {
                    write!(f, "List(")?;
                    for (i, item) in items.iter().enumerate() {
                        if i > 0 {
                            write!(f, " ")?;
                        }
                        write!(f, "{item}")?;
                    }
                    write!(f, ")")
                },
                Err(_) => write!(f, "Pair({head} . {tail})"),
            },
        }
    }
}
