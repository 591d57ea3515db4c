use std::fmt;

/// A binary arithmetic operator.
///
/// The parser maps operator tokens to these values and the evaluator combines
/// two operands according to them. `Add` and `Sub` share the lowest
/// precedence; `Mul` and `Div` bind tighter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

impl BinaryOperator {
    /// Returns the source symbol of the operator.
    ///
    /// # Example
    /// ```
    /// use exprcalc::ast::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::Div.symbol(), '/');
    /// ```
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }

    /// Binding strength used when rendering trees back to text.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// An arithmetic expression tree.
///
/// Every composite node owns its children outright, so a tree is never shared
/// and never cyclic. Children are built before their parent, and nothing in a
/// tree changes after construction: evaluating it any number of times gives
/// the same result.
///
/// Trees come either from the parser or from the constructors below.
///
/// # Example
/// ```
/// use exprcalc::ast::Expr;
///
/// // 2 * (3 + 4)
/// let expr = Expr::multiply(Expr::constant(2.0),
///                           Expr::add(Expr::constant(3.0), Expr::constant(4.0)));
/// assert_eq!(expr.evaluate().unwrap(), 14.0);
/// assert_eq!(expr.to_string(), "2 * (3 + 4)");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric leaf.
    Constant {
        /// The stored value.
        value: f64,
    },
    /// `left + right`
    Add {
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
    /// `left - right`
    Subtract {
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
    /// `left * right`
    Multiply {
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
    /// `left / right`; fails to evaluate when `right` is zero.
    Divide {
        /// Dividend.
        left:  Box<Self>,
        /// Divisor.
        right: Box<Self>,
    },
    /// Prefix negation, `-operand`.
    Negate {
        /// The negated expression.
        operand: Box<Self>,
    },
}

impl Expr {
    /// Creates a constant leaf.
    #[must_use]
    pub const fn constant(value: f64) -> Self {
        Self::Constant { value }
    }

    /// Creates `left + right`.
    #[must_use]
    pub fn add(left: Self, right: Self) -> Self {
        Self::Add { left:  Box::new(left),
                    right: Box::new(right), }
    }

    /// Creates `left - right`.
    #[must_use]
    pub fn subtract(left: Self, right: Self) -> Self {
        Self::Subtract { left:  Box::new(left),
                         right: Box::new(right), }
    }

    /// Creates `left * right`.
    #[must_use]
    pub fn multiply(left: Self, right: Self) -> Self {
        Self::Multiply { left:  Box::new(left),
                         right: Box::new(right), }
    }

    /// Creates `left / right`.
    #[must_use]
    pub fn divide(left: Self, right: Self) -> Self {
        Self::Divide { left:  Box::new(left),
                       right: Box::new(right), }
    }

    /// Creates `-operand`.
    #[must_use]
    pub fn negate(operand: Self) -> Self {
        Self::Negate { operand: Box::new(operand) }
    }

    /// Creates the binary node matching `op`.
    ///
    /// # Example
    /// ```
    /// use exprcalc::ast::{BinaryOperator, Expr};
    ///
    /// let expr = Expr::binary(BinaryOperator::Sub, Expr::constant(10.0), Expr::constant(4.0));
    /// assert_eq!(expr, Expr::subtract(Expr::constant(10.0), Expr::constant(4.0)));
    /// ```
    #[must_use]
    pub fn binary(op: BinaryOperator, left: Self, right: Self) -> Self {
        match op {
            BinaryOperator::Add => Self::add(left, right),
            BinaryOperator::Sub => Self::subtract(left, right),
            BinaryOperator::Mul => Self::multiply(left, right),
            BinaryOperator::Div => Self::divide(left, right),
        }
    }

    /// Returns the operator of a binary node, or `None` for constants and
    /// negations.
    #[must_use]
    pub const fn operator(&self) -> Option<BinaryOperator> {
        match self {
            Self::Add { .. } => Some(BinaryOperator::Add),
            Self::Subtract { .. } => Some(BinaryOperator::Sub),
            Self::Multiply { .. } => Some(BinaryOperator::Mul),
            Self::Divide { .. } => Some(BinaryOperator::Div),
            Self::Constant { .. } | Self::Negate { .. } => None,
        }
    }

    /// Returns both operands of a binary node.
    #[must_use]
    pub fn operands(&self) -> Option<(&Self, &Self)> {
        match self {
            Self::Add { left, right }
            | Self::Subtract { left, right }
            | Self::Multiply { left, right }
            | Self::Divide { left, right } => Some((left, right)),
            Self::Constant { .. } | Self::Negate { .. } => None,
        }
    }

    /// Binding strength of the node's outermost construct.
    ///
    /// Leaves and negations are atomic and never need parentheses.
    const fn precedence(&self) -> u8 {
        match self.operator() {
            Some(op) => op.precedence(),
            None => 3,
        }
    }

    fn fmt_operand(f: &mut fmt::Formatter<'_>, operand: &Self, min_precedence: u8) -> fmt::Result {
        if operand.precedence() < min_precedence {
            write!(f, "({operand})")
        } else {
            write!(f, "{operand}")
        }
    }
}

impl From<f64> for Expr {
    fn from(value: f64) -> Self {
        Self::constant(value)
    }
}

/// Renders the tree as infix text.
///
/// Parentheses appear only where the parser would otherwise group operands
/// differently: around a lower-precedence left operand, and around a right
/// operand of equal or lower precedence (both operator levels are
/// left-associative). Negative constants print with a leading `-`, which reads
/// back as a negation of the same value.
///
/// Text printed from a tree whose constants are all finite parses back to the
/// same value. Infinite and NaN constants print as `inf` and `NaN`, which are
/// not literals, so such text does not parse.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant { value } => write!(f, "{value}"),
            Self::Negate { operand } => {
                write!(f, "-")?;
                Self::fmt_operand(f, operand, 3)
            },
            Self::Add { left, right }
            | Self::Subtract { left, right }
            | Self::Multiply { left, right }
            | Self::Divide { left, right } => {
                let precedence = self.precedence();
                Self::fmt_operand(f, left, precedence)?;
                if let Some(op) = self.operator() {
                    write!(f, " {op} ")?;
                }
                Self::fmt_operand(f, right, precedence + 1)
            },
        }
    }
}
