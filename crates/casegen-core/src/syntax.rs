//! Host-agnostic syntax tree.
//!
//! Input nodes (`SyntaxNode` and its children) are produced by a front end
//! such as `casegen-rust` and only ever read by the rules. Output nodes
//! (`Expression`, `Declaration`) are always freshly built by a rule and
//! rendered by a back end.

use std::fmt;

use serde::{Deserialize, Serialize};

// =============================================================================
// INPUT NODES
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum SyntaxNode {
    Expr(ExprNode),
    Decl(DeclNode),
    Invocation(Invocation),
}

impl SyntaxNode {
    pub fn kind_name(&self) -> &'static str {
        match self {
            SyntaxNode::Expr(_) => "an expression",
            SyntaxNode::Decl(_) => "a declaration",
            SyntaxNode::Invocation(_) => "a macro invocation",
        }
    }
}

impl From<DeclNode> for SyntaxNode {
    fn from(decl: DeclNode) -> Self {
        SyntaxNode::Decl(decl)
    }
}

impl From<ExprNode> for SyntaxNode {
    fn from(expr: ExprNode) -> Self {
        SyntaxNode::Expr(expr)
    }
}

impl From<Invocation> for SyntaxNode {
    fn from(invocation: Invocation) -> Self {
        SyntaxNode::Invocation(invocation)
    }
}

/// An expression, kept as the exact text the front end read it from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExprNode {
    pub source: String,
}

impl ExprNode {
    pub fn new(source: impl Into<String>) -> Self {
        Self { source: source.into() }
    }
}

/// A freestanding macro call such as `stringified!(a + b)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invocation {
    pub name: String,
    pub arguments: Vec<ExprNode>,
}

impl Invocation {
    pub fn new(name: impl Into<String>, arguments: Vec<ExprNode>) -> Self {
        Self {
            name: name.into(),
            arguments,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclKind {
    Enum,
    Struct,
    Union,
    Trait,
    Function,
    Other(String),
}

impl fmt::Display for DeclKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeclKind::Enum => write!(f, "enum"),
            DeclKind::Struct => write!(f, "struct"),
            DeclKind::Union => write!(f, "union"),
            DeclKind::Trait => write!(f, "trait"),
            DeclKind::Function => write!(f, "fn"),
            DeclKind::Other(kind) => write!(f, "{}", kind),
        }
    }
}

/// A type declaration with its inheritance clause and direct members.
///
/// For an enum, the first entry of `inherited` is its raw-value type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclNode {
    pub kind: DeclKind,
    pub name: String,
    #[serde(default)]
    pub inherited: Vec<TypeRef>,
    #[serde(default)]
    pub members: Vec<Member>,
}

impl DeclNode {
    pub fn new(kind: DeclKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            inherited: Vec::new(),
            members: Vec::new(),
        }
    }

    pub fn enumeration(name: impl Into<String>) -> Self {
        Self::new(DeclKind::Enum, name)
    }

    pub fn inheriting(mut self, ty: TypeRef) -> Self {
        self.inherited.push(ty);
        self
    }

    pub fn with_member(mut self, member: Member) -> Self {
        self.members.push(member);
        self
    }

    /// Appends one case declaration holding every element in `elements`.
    pub fn with_cases<I>(self, elements: I) -> Self
    where
        I: IntoIterator<Item = CaseElementNode>,
    {
        self.with_member(Member::Case(CaseDecl {
            elements: elements.into_iter().collect(),
        }))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "member", rename_all = "snake_case")]
pub enum Member {
    Case(CaseDecl),
    Other { source: String },
}

/// One `case a, b, c` line; Rust front ends emit one per variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseDecl {
    pub elements: Vec<CaseElementNode>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseElementNode {
    pub name: String,
    #[serde(default)]
    pub raw_value: Option<Literal>,
    #[serde(default)]
    pub has_payload: bool,
}

impl CaseElementNode {
    pub fn unit(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            raw_value: None,
            has_payload: false,
        }
    }

    pub fn with_raw_value(name: impl Into<String>, literal: Literal) -> Self {
        Self {
            raw_value: Some(literal),
            ..Self::unit(name)
        }
    }
}

/// A literal as written in the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Literal {
    Str(String),
    Number(String),
}

impl Literal {
    pub fn str(value: impl Into<String>) -> Self {
        Literal::Str(value.into())
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Literal::Str(value) => Some(value),
            Literal::Number(_) => None,
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Str(value) => write!(f, "{:?}", value),
            Literal::Number(value) => write!(f, "{}", value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeRef {
    pub name: String,
}

impl TypeRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

// =============================================================================
// OUTPUT NODES
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "expr", rename_all = "snake_case")]
pub enum Expression {
    Tuple { elements: Vec<Expression> },
    /// An input expression re-embedded unchanged.
    Embedded(ExprNode),
    StringLiteral { value: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "decl", rename_all = "snake_case")]
pub enum Declaration {
    Case(CaseDeclaration),
    Initializer(Initializer),
    Accessor(Accessor),
    Extension(Extension),
}

impl Declaration {
    pub fn as_case(&self) -> Option<&CaseDeclaration> {
        match self {
            Declaration::Case(case) => Some(case),
            _ => None,
        }
    }

    pub fn as_initializer(&self) -> Option<&Initializer> {
        match self {
            Declaration::Initializer(init) => Some(init),
            _ => None,
        }
    }

    pub fn as_accessor(&self) -> Option<&Accessor> {
        match self {
            Declaration::Accessor(accessor) => Some(accessor),
            _ => None,
        }
    }

    pub fn as_extension(&self) -> Option<&Extension> {
        match self {
            Declaration::Extension(extension) => Some(extension),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseDeclaration {
    pub name: String,
}

impl CaseDeclaration {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A constructor taking one string parameter and assigning `self` through
/// its switch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Initializer {
    pub name: String,
    pub parameter: String,
    pub body: Switch,
}

/// A computed, read-only property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accessor {
    pub name: String,
    pub body: Switch,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extension {
    pub target: TypeRef,
    pub conformance: Conformance,
    pub body: Switch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Conformance {
    Decodable,
    Encodable,
}

impl fmt::Display for Conformance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Conformance::Decodable => write!(f, "Decodable"),
            Conformance::Encodable => write!(f, "Encodable"),
        }
    }
}

/// Declaration-ordered dispatch with a single trailing default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Switch {
    pub subject: Subject,
    pub arms: Vec<Arm>,
    pub default: Branch,
}

impl Switch {
    /// Number of branches including the default.
    pub fn branch_count(&self) -> usize {
        self.arms.len() + 1
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Subject {
    Parameter(String),
    SelfValue,
    /// The single string read from a decoder.
    DecodedString,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Arm {
    pub pattern: Pattern,
    pub branch: Branch,
}

impl Arm {
    pub fn new(pattern: Pattern, branch: Branch) -> Self {
        Self { pattern, branch }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Pattern {
    /// Exact, case-sensitive string equality.
    Str(String),
    /// `self` is the named case.
    Case(String),
    /// Equality with the named case's computed raw value.
    RawValueOf(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Branch {
    AssignCase(String),
    ReturnStr(String),
}

impl Branch {
    pub fn assigned_case(&self) -> Option<&str> {
        match self {
            Branch::AssignCase(case) => Some(case),
            Branch::ReturnStr(_) => None,
        }
    }

    pub fn returned_str(&self) -> Option<&str> {
        match self {
            Branch::ReturnStr(value) => Some(value),
            Branch::AssignCase(_) => None,
        }
    }
}
