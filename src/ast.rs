use std::{fmt, rc::Rc};

/// Binary operators recognized by the precedence-climbing parser.
///
/// Assignment (`=`) is not part of this enum; it shares the climbing loop but
/// produces an [`Expr::Assign`] node instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`: numeric addition or string concatenation.
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`: floating-point remainder.
    Mod,
    /// `&&`
    And,
    /// `||`
    Or,
    /// `<`
    Less,
    /// `>`
    Greater,
    /// `<=`
    LessEqual,
    /// `>=`
    GreaterEqual,
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
}

/// Binding power of `=`, the loosest operator.
pub const ASSIGN_PRECEDENCE: u8 = 1;

impl BinaryOperator {
    /// Maps an operator token to its operator, if it names one.
    ///
    /// # Example
    /// ```
    /// use tora::ast::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::from_symbol("<="), Some(BinaryOperator::LessEqual));
    /// assert_eq!(BinaryOperator::from_symbol("=>"), None);
    /// ```
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Some(match symbol {
            "+" => Self::Add,
            "-" => Self::Sub,
            "*" => Self::Mul,
            "/" => Self::Div,
            "%" => Self::Mod,
            "&&" => Self::And,
            "||" => Self::Or,
            "<" => Self::Less,
            ">" => Self::Greater,
            "<=" => Self::LessEqual,
            ">=" => Self::GreaterEqual,
            "==" => Self::Equal,
            "!=" => Self::NotEqual,
            _ => return None,
        })
    }

    /// Returns the operator as written in source.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::And => "&&",
            Self::Or => "||",
            Self::Less => "<",
            Self::Greater => ">",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
            Self::Equal => "==",
            Self::NotEqual => "!=",
        }
    }

    /// Returns the binding power of the operator. Higher binds tighter.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Or => 2,
            Self::And => 3,
            Self::Less
            | Self::Greater
            | Self::LessEqual
            | Self::GreaterEqual
            | Self::Equal
            | Self::NotEqual => 7,
            Self::Add | Self::Sub => 10,
            Self::Mul | Self::Div | Self::Mod => 20,
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// One `key: value` slot of an array literal.
///
/// Positional entries get a numeric key equal to the number of entries before
/// them.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayEntry {
    /// Expression producing the key.
    pub key:   Expr,
    /// Expression producing the stored value.
    pub value: Expr,
}

/// A function literal: `func [name](params) body`.
///
/// Lambdas are reference counted so that evaluating one into a value does
/// not copy its body.
#[derive(Debug, Clone, PartialEq)]
pub struct Lambda {
    /// Name the function binds itself to when evaluated, if any.
    pub name:   Option<String>,
    /// Parameter names, bound in order at call time.
    pub params: Vec<String>,
    /// The function body.
    pub body:   Expr,
    /// Line of the `func` keyword.
    pub line:   usize,
}

impl Lambda {
    /// Name used in diagnostics and logs.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("<lambda>")
    }
}

/// An abstract syntax tree (AST) node representing an expression in the
/// language.
///
/// Every construct of the language, statements included, is an expression.
/// Each node records the line it started on for error reporting.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A string literal.
    String {
        /// Literal contents after escape processing.
        value: String,
        /// Source line.
        line:  usize,
    },
    /// A numeric literal.
    Numeric {
        /// The literal value.
        value: f64,
        /// Source line.
        line:  usize,
    },
    /// `true` or `false`.
    Boolean {
        /// The literal value.
        value: bool,
        /// Source line.
        line:  usize,
    },
    /// A variable reference such as `x`.
    Variable {
        /// The name of the variable.
        name: String,
        /// Source line.
        line: usize,
    },
    /// An array literal such as `[1, 2, "k": 3]`.
    Array {
        /// The entries in source order.
        entries: Vec<ArrayEntry>,
        /// Source line.
        line:    usize,
    },
    /// An indexing expression such as `a[i]`.
    ArrayIndex {
        /// Expression producing the array.
        array: Box<Self>,
        /// Expression producing the key.
        index: Box<Self>,
        /// Source line.
        line:  usize,
    },
    /// An assignment `target = value`.
    Assign {
        /// The assigned place; only variables and array indexes are valid.
        target: Box<Self>,
        /// The value expression.
        value:  Box<Self>,
        /// Source line.
        line:   usize,
    },
    /// A binary operation such as `a + b`.
    Binary {
        /// The operator.
        op:    BinaryOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
        /// Source line.
        line:  usize,
    },
    /// Arithmetic negation `-expr`.
    NegativeUnary {
        /// The negated expression.
        expr: Box<Self>,
        /// Source line.
        line: usize,
    },
    /// A function literal.
    Lambda(Rc<Lambda>),
    /// A call `callee(args)`.
    Call {
        /// Expression producing the function.
        callee:    Box<Self>,
        /// Argument expressions in order.
        arguments: Vec<Self>,
        /// Source line.
        line:      usize,
    },
    /// `while cond body`.
    While {
        /// Loop condition; must evaluate to a boolean.
        condition: Box<Self>,
        /// Loop body.
        body:      Box<Self>,
        /// Source line.
        line:      usize,
    },
    /// `if cond then [else alt]`.
    IfThenElse {
        /// Condition; must evaluate to a boolean.
        condition:   Box<Self>,
        /// Branch taken when the condition is true.
        then_branch: Box<Self>,
        /// Branch taken otherwise.
        else_branch: Option<Box<Self>>,
        /// Source line.
        line:        usize,
    },
    /// A block or whole program: statements evaluated in order.
    Prog {
        /// The statements.
        statements: Vec<Self>,
        /// Source line.
        line:       usize,
    },
    /// `return expr`.
    Return {
        /// The returned expression.
        value: Box<Self>,
        /// Source line.
        line:  usize,
    },
}

impl Expr {
    /// Returns the line the node starts on.
    #[must_use]
    pub fn line(&self) -> usize {
        match self {
            Self::Lambda(lambda) => lambda.line,
            Self::String { line, .. }
            | Self::Numeric { line, .. }
            | Self::Boolean { line, .. }
            | Self::Variable { line, .. }
            | Self::Array { line, .. }
            | Self::ArrayIndex { line, .. }
            | Self::Assign { line, .. }
            | Self::Binary { line, .. }
            | Self::NegativeUnary { line, .. }
            | Self::Call { line, .. }
            | Self::While { line, .. }
            | Self::IfThenElse { line, .. }
            | Self::Prog { line, .. }
            | Self::Return { line, .. } => *line,
        }
    }
}
