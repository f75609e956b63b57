//! Context classification.
//!
//! The classifier looks at one ancestor of the cursor at a time and decides
//! whether it determines the completion context:
//!
//! | ancestor                      | target                                 | exclusions                 |
//! |-------------------------------|----------------------------------------|----------------------------|
//! | switch label / switch         | references in the discriminant         | every case label value     |
//! | call                          | parameter at the cursor's argument     | the cursor's argument      |
//! | assignment to a name          | the assigned variable                  | right-hand side            |
//! | assignment to an array element| element type of the array variable     | none                       |
//! | variable declaration          | the declared variable                  | its initializer            |
//! | binary expression             | left operand variable / method         | right operand              |
//! | return                        | return type of the enclosing method    | the whole return statement |

use rowan::NodeOrToken;

use super::filter::FilterPolicy;
use crate::base::TextRange;
use crate::hir::{DeclId, SymbolHost};
use crate::parser::{
    ArgList, AssignExpr, AstNode, BinaryExpr, CallExpr, Expr, SwitchStmt, SyntaxKind, SyntaxNode,
    Variable,
};

/// A recognised completion context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConstContext {
    /// Inside a switch: discriminant references are tried in order
    Switch {
        discriminants: Vec<DeclId>,
        case_values: Vec<SyntaxNode>,
    },
    CallArgument {
        parameter: DeclId,
        argument: Option<SyntaxNode>,
    },
    Assignment {
        target: DeclId,
        rhs: Option<SyntaxNode>,
    },
    /// `array[i] = |`: offers the element type's group, never excluded
    ArrayElement { array: DeclId },
    Declaration {
        variable: DeclId,
        initializer: Option<SyntaxNode>,
    },
    /// Binary expression with a variable or method on the left
    Comparison {
        operand: DeclId,
        rhs: Option<SyntaxNode>,
    },
    Return { method: DeclId, statement: SyntaxNode },
}

impl ConstContext {
    pub fn policy(&self) -> FilterPolicy {
        match self {
            ConstContext::Switch { .. } => FilterPolicy::PerFieldSkip,
            _ => FilterPolicy::StrictAbort,
        }
    }

    /// Whether the climb continues past this context when it yields no group.
    pub fn falls_through(&self) -> bool {
        matches!(self, ConstContext::Comparison { .. })
    }
}

/// Outcome of classifying one ancestor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Classified {
    Context(ConstContext),
    /// The ancestor owns the cursor position but offers nothing
    Stop,
    /// Not a context node, keep climbing
    Continue,
}

/// State carried from one ancestor to the next during a climb.
#[derive(Clone, Debug, Default)]
pub struct ClimbState {
    /// Variable whose initializer holds the cursor, consumed by the
    /// enclosing declaration.
    variable: Option<(DeclId, Option<SyntaxNode>)>,
}

/// Classify `node`, an ancestor of the cursor token at `cursor`.
pub fn classify<H: SymbolHost + ?Sized>(
    host: &H,
    node: &SyntaxNode,
    cursor: TextRange,
    state: &mut ClimbState,
) -> Classified {
    match node.kind() {
        SyntaxKind::SWITCH_LABEL | SyntaxKind::SWITCH_STMT => classify_switch(host, node),
        SyntaxKind::CALL_EXPR => classify_call(host, node, cursor),
        SyntaxKind::ASSIGN_EXPR => classify_assignment(host, node),
        SyntaxKind::VARIABLE => {
            mark_variable(host, node, cursor, state);
            Classified::Continue
        }
        SyntaxKind::LOCAL_VAR_DECL | SyntaxKind::FIELD_DECL => match state.variable.take() {
            Some((variable, initializer)) => Classified::Context(ConstContext::Declaration {
                variable,
                initializer,
            }),
            None => Classified::Stop,
        },
        SyntaxKind::BINARY_EXPR => classify_comparison(host, node),
        SyntaxKind::RETURN_STMT => match host.enclosing_method(node) {
            Some(method) => Classified::Context(ConstContext::Return {
                method,
                statement: node.clone(),
            }),
            None => Classified::Stop,
        },
        _ => Classified::Continue,
    }
}

fn classify_switch<H: SymbolHost + ?Sized>(host: &H, node: &SyntaxNode) -> Classified {
    let Some(switch) = node.ancestors().find_map(SwitchStmt::cast) else {
        return Classified::Stop;
    };
    let discriminants = switch
        .expr()
        .map(|expr| {
            expr.syntax()
                .descendants()
                .filter(|n| matches!(n.kind(), SyntaxKind::REF_EXPR | SyntaxKind::FIELD_EXPR))
                .filter_map(|n| host.resolve_reference(&n))
                .collect()
        })
        .unwrap_or_default();
    let case_values = switch
        .body()
        .map(|body| {
            body.labels()
                .flat_map(|label| label.values().map(|v| v.syntax().clone()).collect::<Vec<_>>())
                .collect()
        })
        .unwrap_or_default();
    Classified::Context(ConstContext::Switch {
        discriminants,
        case_values,
    })
}

fn classify_call<H: SymbolHost + ?Sized>(host: &H, node: &SyntaxNode, cursor: TextRange) -> Classified {
    let Some(call) = CallExpr::cast(node.clone()) else {
        return Classified::Stop;
    };
    let Some(args) = call
        .arg_list()
        .filter(|args| args.syntax().text_range().contains_range(cursor))
    else {
        // Cursor in the callee or receiver
        return Classified::Stop;
    };
    let (position, argument) = argument_position(&args, cursor);
    let parameter = host
        .resolve_call(&call)
        .and_then(|method| host.declaration(method)?.params.get(position).copied());
    match parameter {
        Some(parameter) => Classified::Context(ConstContext::CallArgument { parameter, argument }),
        None => {
            tracing::trace!(position, "no parameter for argument");
            Classified::Stop
        }
    }
}

/// Index of the argument holding the cursor, and that argument's node.
///
/// Every `COMMA` before the cursor advances the position; the walk stops at
/// the argument containing the cursor.
fn argument_position(args: &ArgList, cursor: TextRange) -> (usize, Option<SyntaxNode>) {
    let mut position = 0;
    for element in args.syntax().children_with_tokens() {
        match element {
            NodeOrToken::Token(token) if token.kind() == SyntaxKind::COMMA => {
                if token.text_range().start() >= cursor.end() {
                    break;
                }
                position += 1;
            }
            NodeOrToken::Node(node) if node.text_range().contains_range(cursor) => {
                return (position, Some(node));
            }
            _ => {}
        }
    }
    (position, None)
}

fn classify_assignment<H: SymbolHost + ?Sized>(host: &H, node: &SyntaxNode) -> Classified {
    let Some(assign) = AssignExpr::cast(node.clone()) else {
        return Classified::Stop;
    };
    match assign.lhs() {
        Some(lhs @ (Expr::Ref(_) | Expr::Field(_))) => match host.resolve_reference(lhs.syntax()) {
            Some(target) => Classified::Context(ConstContext::Assignment {
                target,
                rhs: assign.rhs().map(|e| e.syntax().clone()),
            }),
            None => Classified::Stop,
        },
        Some(Expr::Index(index)) => {
            let array = index.base().and_then(|base| match base {
                Expr::Ref(_) | Expr::Field(_) => host.resolve_reference(base.syntax()),
                _ => None,
            });
            match array {
                Some(array) => Classified::Context(ConstContext::ArrayElement { array }),
                None => Classified::Stop,
            }
        }
        _ => Classified::Continue,
    }
}

fn mark_variable<H: SymbolHost + ?Sized>(
    host: &H,
    node: &SyntaxNode,
    cursor: TextRange,
    state: &mut ClimbState,
) {
    let Some(variable) = Variable::cast(node.clone()) else {
        return;
    };
    let initializer = variable.initializer().map(|e| e.syntax().clone());
    let in_initializer = initializer
        .as_ref()
        .is_some_and(|init| init.text_range().contains_range(cursor));
    if !in_initializer {
        return;
    }
    if let Some(decl) = host.declaration_of(node) {
        state.variable = Some((decl, initializer));
    }
}

fn classify_comparison<H: SymbolHost + ?Sized>(host: &H, node: &SyntaxNode) -> Classified {
    let Some(binary) = BinaryExpr::cast(node.clone()) else {
        return Classified::Continue;
    };
    let operand = match binary.lhs() {
        Some(lhs @ (Expr::Ref(_) | Expr::Field(_))) => host.resolve_reference(lhs.syntax()),
        Some(Expr::Call(call)) => host.resolve_call(&call),
        _ => None,
    };
    match operand {
        Some(operand) => Classified::Context(ConstContext::Comparison {
            operand,
            rhs: binary.rhs().map(|e| e.syntax().clone()),
        }),
        None => Classified::Continue,
    }
}
