//! Typed view of the syntax the extraction engine reads.
//!
//! tree-sitter hands out untyped nodes tagged by a kind string. The engine
//! only ever consumes a small slice of the TypeScript grammar, so that slice
//! is lowered once into the enums below and every later stage matches on
//! them exhaustively. Kinds outside the slice lower to an `Unsupported`
//! variant carrying the original kind, never to a guess.

mod lower;

pub use lower::{lower_expr, lower_function, lower_params, lower_type, lower_type_annotation};
pub(crate) use lower::lower_members;

/// Predefined type keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    String,
    Number,
    Boolean,
    Void,
    Undefined,
    Null,
    Any,
    Unknown,
    Never,
    BigInt,
    Symbol,
    Object,
}

impl Keyword {
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "string" => Self::String,
            "number" => Self::Number,
            "boolean" => Self::Boolean,
            "void" => Self::Void,
            "undefined" => Self::Undefined,
            "null" => Self::Null,
            "any" => Self::Any,
            "unknown" => Self::Unknown,
            "never" => Self::Never,
            "bigint" => Self::BigInt,
            "symbol" => Self::Symbol,
            "object" => Self::Object,
            _ => return None,
        })
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Void => "void",
            Self::Undefined => "undefined",
            Self::Null => "null",
            Self::Any => "any",
            Self::Unknown => "unknown",
            Self::Never => "never",
            Self::BigInt => "bigint",
            Self::Symbol => "symbol",
            Self::Object => "object",
        }
    }
}

/// Prefix type operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeOperator {
    KeyOf,
    Readonly,
    Unique,
}

impl TypeOperator {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::KeyOf => "keyof",
            Self::Readonly => "readonly",
            Self::Unique => "unique",
        }
    }
}

/// A type annotation.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeNode {
    Keyword(Keyword),
    Array(Box<TypeNode>),
    /// Members in source order, nested unions flattened.
    Union(Vec<TypeNode>),
    Intersection(Vec<TypeNode>),
    Tuple(Vec<TypeNode>),
    /// `"primary"`, `42`, `true`.
    Literal(Expr),
    /// `Name` or `Name<Args>`; qualified names keep their dots.
    Reference {
        name: String,
        args: Vec<TypeNode>,
    },
    /// Inline `{ ... }` type literal.
    Object(Vec<TypeMember>),
    /// The body of a registered interface.
    InterfaceBody(Vec<TypeMember>),
    Function {
        params: Vec<FnTypeParam>,
        ret: Option<Box<TypeNode>>,
    },
    Parenthesized(Box<TypeNode>),
    /// `typeof target`
    Query(String),
    /// `T[K]`
    IndexedAccess {
        object: Box<TypeNode>,
        index: Box<TypeNode>,
    },
    Conditional {
        check: Box<TypeNode>,
        extends: Box<TypeNode>,
        then: Box<TypeNode>,
        otherwise: Box<TypeNode>,
    },
    /// `{ [K in Keys]: T }`
    Mapped {
        param: String,
        value: Option<Box<TypeNode>>,
    },
    Rest(Box<TypeNode>),
    Optional(Box<TypeNode>),
    Operator {
        op: TypeOperator,
        inner: Box<TypeNode>,
    },
    Unsupported(String),
}

impl TypeNode {
    #[must_use]
    pub const fn is_reference(&self) -> bool {
        matches!(self, Self::Reference { .. })
    }

    /// Name of a bare or generic reference.
    #[must_use]
    pub fn reference_name(&self) -> Option<&str> {
        match self {
            Self::Reference { name, .. } => Some(name),
            _ => None,
        }
    }
}

/// A member of an object type or interface body.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeMember {
    Property(PropertySignature),
    /// Methods, call/construct/index signatures. Kept only so the member
    /// count is honest; no stage reads them.
    Other(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PropertySignature {
    /// `None` for string, numeric and computed keys.
    pub name: Option<String>,
    pub optional: bool,
    pub annotation: Option<TypeNode>,
}

/// A parameter of a function type.
#[derive(Debug, Clone, PartialEq)]
pub struct FnTypeParam {
    pub name: Option<String>,
    pub optional: bool,
    pub annotation: Option<TypeNode>,
}

/// An expression, modeled only as deep as display rendering needs.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Contents between the quotes.
    String(String),
    /// Source text.
    Number(String),
    Bool(bool),
    Null,
    Undefined,
    Regex {
        pattern: String,
        flags: String,
    },
    Identifier(String),
    /// Raw text between the backticks; `None` when it interpolates.
    Template(Option<String>),
    Array(Vec<Expr>),
    /// Property-like members only; spreads and methods are dropped.
    Object(Vec<ObjectMember>),
    Arrow,
    Function,
    Binary {
        left: Box<Expr>,
        op: String,
        right: Box<Expr>,
    },
    Unary {
        op: String,
        argument: Box<Expr>,
    },
    Conditional {
        condition: Box<Expr>,
        consequence: Box<Expr>,
        alternative: Box<Expr>,
    },
    Member {
        object: Box<Expr>,
        property: MemberProperty,
        optional: bool,
    },
    Call {
        callee: Box<Expr>,
        args: Vec<Expr>,
    },
    New {
        callee: Box<Expr>,
        args: Vec<Expr>,
    },
    Spread(Box<Expr>),
    Jsx,
    JsxFragment,
    Parenthesized(Box<Expr>),
    Unsupported(String),
}

impl Expr {
    /// Whether the expression is element or fragment markup.
    #[must_use]
    pub const fn is_jsx(&self) -> bool {
        matches!(self, Self::Jsx | Self::JsxFragment)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MemberProperty {
    Named(String),
    Computed(Box<Expr>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ObjectMember {
    pub key: ObjectKey,
    pub value: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ObjectKey {
    Name(String),
    /// String key, contents between the quotes.
    Quoted(String),
    /// Computed or numeric key.
    Other,
}

/// A function parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum Param {
    /// `{ a, b = 1 }: Props`
    Object {
        fields: Vec<PatternField>,
        annotation: Option<TypeNode>,
    },
    /// `props: Props`
    Identifier {
        name: String,
        annotation: Option<TypeNode>,
    },
    Unsupported(String),
}

/// One identifier-keyed entry of an object destructuring pattern.
#[derive(Debug, Clone, PartialEq)]
pub struct PatternField {
    pub key: String,
    pub default: Option<Expr>,
}

/// A function declaration, function expression or arrow function.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionNode {
    pub params: Vec<Param>,
    pub body: FunctionBody,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FunctionBody {
    /// Arrow function with an expression body.
    Expression(Expr),
    /// Arguments of every `return` reachable without entering a nested
    /// function or class, in source order. `None` for a bare `return;`.
    Block { returns: Vec<Option<Expr>> },
}
