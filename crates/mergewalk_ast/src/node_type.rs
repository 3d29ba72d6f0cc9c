//! Node type definitions.
//!
//! These are the node kinds of the ESTree specification, up to ES2022.
//! See: https://github.com/estree/estree

use std::fmt;

use serde::{Deserialize, Serialize};

/// Node types for ESTree trees.
///
/// Serialized with their ESTree names, so `NodeType::ForStatement`
/// round-trips as `"ForStatement"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum NodeType {
    // Program structure
    /// Root node of a script or module.
    Program,

    // Identifiers and literals
    Identifier,
    PrivateIdentifier,
    Literal,
    TemplateLiteral,
    TemplateElement,
    TaggedTemplateExpression,

    // Functions and classes
    FunctionDeclaration,
    FunctionExpression,
    ArrowFunctionExpression,
    ClassDeclaration,
    ClassExpression,
    ClassBody,
    MethodDefinition,
    PropertyDefinition,
    StaticBlock,

    // Statements
    ExpressionStatement,
    Directive,
    BlockStatement,
    EmptyStatement,
    DebuggerStatement,
    WithStatement,
    ReturnStatement,
    LabeledStatement,
    BreakStatement,
    ContinueStatement,
    IfStatement,
    SwitchStatement,
    SwitchCase,
    ThrowStatement,
    TryStatement,
    CatchClause,
    WhileStatement,
    DoWhileStatement,
    ForStatement,
    ForInStatement,
    ForOfStatement,

    // Declarations
    VariableDeclaration,
    VariableDeclarator,

    // Expressions
    ThisExpression,
    Super,
    ArrayExpression,
    ObjectExpression,
    Property,
    UnaryExpression,
    UpdateExpression,
    BinaryExpression,
    AssignmentExpression,
    LogicalExpression,
    MemberExpression,
    ChainExpression,
    ConditionalExpression,
    CallExpression,
    NewExpression,
    SequenceExpression,
    YieldExpression,
    AwaitExpression,
    ImportExpression,
    MetaProperty,
    SpreadElement,

    // Patterns
    ObjectPattern,
    ArrayPattern,
    RestElement,
    AssignmentPattern,

    // Modules
    ImportDeclaration,
    ImportSpecifier,
    ImportDefaultSpecifier,
    ImportNamespaceSpecifier,
    ExportNamedDeclaration,
    ExportSpecifier,
    ExportDefaultDeclaration,
    ExportAllDeclaration,
}

impl NodeType {
    /// Returns true if this node type is a statement.
    #[inline]
    pub const fn is_statement(&self) -> bool {
        matches!(
            self,
            NodeType::ExpressionStatement
                | NodeType::Directive
                | NodeType::BlockStatement
                | NodeType::EmptyStatement
                | NodeType::DebuggerStatement
                | NodeType::WithStatement
                | NodeType::ReturnStatement
                | NodeType::LabeledStatement
                | NodeType::BreakStatement
                | NodeType::ContinueStatement
                | NodeType::IfStatement
                | NodeType::SwitchStatement
                | NodeType::ThrowStatement
                | NodeType::TryStatement
                | NodeType::WhileStatement
                | NodeType::DoWhileStatement
                | NodeType::ForStatement
                | NodeType::ForInStatement
                | NodeType::ForOfStatement
        )
    }

    /// Returns true if this node type is a declaration.
    #[inline]
    pub const fn is_declaration(&self) -> bool {
        matches!(
            self,
            NodeType::FunctionDeclaration
                | NodeType::ClassDeclaration
                | NodeType::VariableDeclaration
                | NodeType::ImportDeclaration
                | NodeType::ExportNamedDeclaration
                | NodeType::ExportDefaultDeclaration
                | NodeType::ExportAllDeclaration
        )
    }

    /// Returns true if this node type introduces a function scope.
    #[inline]
    pub const fn is_function(&self) -> bool {
        matches!(
            self,
            NodeType::FunctionDeclaration
                | NodeType::FunctionExpression
                | NodeType::ArrowFunctionExpression
        )
    }

    /// Returns true if this node type is a loop statement.
    #[inline]
    pub const fn is_loop(&self) -> bool {
        matches!(
            self,
            NodeType::WhileStatement
                | NodeType::DoWhileStatement
                | NodeType::ForStatement
                | NodeType::ForInStatement
                | NodeType::ForOfStatement
        )
    }

    /// Returns true if this node type is a destructuring pattern.
    #[inline]
    pub const fn is_pattern(&self) -> bool {
        matches!(
            self,
            NodeType::ObjectPattern
                | NodeType::ArrayPattern
                | NodeType::RestElement
                | NodeType::AssignmentPattern
        )
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Variant names are the ESTree names.
        fmt::Debug::fmt(self, f)
    }
}
