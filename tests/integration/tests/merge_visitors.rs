//! Integration tests for merged visitors
//!
//! Runs composed visitors over `tenTimes`, loaded from ESTree JSON:
//!
//! ```js
//! function tenTimes (cb) {
//!   for (var i = 0; i < 10; i += 1) {
//!     cb();
//!   }
//! }
//! ```

use std::cell::RefCell;

use mergewalk_ast::visitor::{FnVisitor, replace, traverse};
use mergewalk_ast::{AstArena, Controller, Node, NodeType, VisitOption, VisitResult, Visitor};
use mergewalk_core::{MergedVisitor, replace_merged, traverse_merged};
use mergewalk_estree::parse_estree_json;
use rstest::rstest;

type Logs = RefCell<Vec<String>>;

fn ten_times(arena: &AstArena) -> &Node<'_> {
    parse_estree_json(arena, include_str!("fixtures/ten_times.json")).unwrap()
}

fn ten_times_wrapped(arena: &AstArena) -> &Node<'_> {
    parse_estree_json(arena, include_str!("fixtures/ten_times_wrapped.json")).unwrap()
}

fn logged(node: &Node<'_>) -> bool {
    matches!(
        node.node_type,
        NodeType::ForStatement | NodeType::CallExpression | NodeType::FunctionDeclaration
    )
}

/// Callback that logs `name: when Type` for the nodes of interest.
fn log_as<'v, 'a>(
    name: &'v str,
    when: &'v str,
    logs: &'v Logs,
) -> impl FnMut(&mut dyn Controller<'a>, &'a Node<'a>, Option<&'a Node<'a>>) -> VisitResult<'a> + 'v
{
    move |_, node, _| {
        if logged(node) {
            logs.borrow_mut()
                .push(format!("{}: {} {}", name, when, node.node_type));
        }
        Ok(VisitOption::Continue)
    }
}

fn logger<'v, 'a>(name: &'v str, logs: &'v Logs) -> FnVisitor<'v, 'a> {
    FnVisitor::new()
        .on_enter(log_as(name, "entering", logs))
        .on_leave(log_as(name, "leaving", logs))
}

/// `v2` of the replace scenarios: wraps `cb()` as `wrap(cb())` on leave.
fn wrapping_logger<'v, 'a>(arena: &'a AstArena, logs: &'v Logs) -> FnVisitor<'v, 'a>
where
    'a: 'v,
{
    FnVisitor::new()
        .on_enter(log_as("v2", "entering", logs))
        .on_leave(move |_, node, _| {
            if !logged(node) {
                return Ok(VisitOption::Continue);
            }
            logs.borrow_mut().push(format!("v2: leaving {}", node.node_type));
            let calls_cb = node.node_type == NodeType::CallExpression
                && node.children().first().and_then(|callee| callee.name()) == Some("cb");
            if !calls_cb {
                return Ok(VisitOption::Continue);
            }
            let wrap = arena.alloc_node(Node::new_identifier(node.span, "wrap"));
            Ok(VisitOption::Replace(arena.alloc_node(Node::new_parent(
                NodeType::CallExpression,
                node.span,
                arena.alloc_children(&[wrap, node]),
            ))))
        })
}

/// `v1` of the skip scenarios: skips the `for` loop on enter.
fn skipping_logger<'v, 'a>(logs: &'v Logs, via_controller: bool) -> FnVisitor<'v, 'a> {
    FnVisitor::new()
        .on_enter(move |controller, node, _| match node.node_type {
            NodeType::ForStatement => {
                logs.borrow_mut()
                    .push(format!("v1: going to skip {}", node.node_type));
                if via_controller {
                    controller.skip();
                    Ok(VisitOption::Continue)
                } else {
                    Ok(VisitOption::Skip)
                }
            }
            NodeType::CallExpression | NodeType::FunctionDeclaration => {
                logs.borrow_mut()
                    .push(format!("v1: entering {}", node.node_type));
                Ok(VisitOption::Continue)
            }
            _ => Ok(VisitOption::Continue),
        })
        .on_leave(log_as("v1", "leaving", logs))
}

const IN_ORDER: &[&str] = &[
    "v1: entering FunctionDeclaration",
    "v2: entering FunctionDeclaration",
    "v1: entering ForStatement",
    "v2: entering ForStatement",
    "v1: entering CallExpression",
    "v2: entering CallExpression",
    "v2: leaving CallExpression",
    "v1: leaving CallExpression",
    "v2: leaving ForStatement",
    "v1: leaving ForStatement",
    "v2: leaving FunctionDeclaration",
    "v1: leaving FunctionDeclaration",
];

const SKIPPED_BY_V1: &[&str] = &[
    "v1: entering FunctionDeclaration",
    "v2: entering FunctionDeclaration",
    "v1: going to skip ForStatement",
    "v2: entering ForStatement",
    "v2: entering CallExpression",
    "v2: leaving CallExpression",
    "v2: leaving ForStatement",
    "v1: leaving ForStatement",
    "v2: leaving FunctionDeclaration",
    "v1: leaving FunctionDeclaration",
];

mod composition {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn runs_visitors_in_order() {
        let arena = AstArena::new();
        let logs = Logs::default();

        let visitors: Vec<Box<dyn Visitor<'_> + '_>> =
            vec![Box::new(logger("v1", &logs)), Box::new(logger("v2", &logs))];
        traverse_merged(ten_times(&arena), visitors).unwrap();

        assert_eq!(logs.into_inner(), IN_ORDER);
    }

    #[test]
    fn mixes_enter_only_and_leave_only_visitors() {
        let arena = AstArena::new();
        let logs = Logs::default();

        let mut merged = MergedVisitor::new()
            .with(FnVisitor::new().on_enter(log_as("v1", "entering", &logs)))
            .with(FnVisitor::new().on_leave(log_as("v2", "leaving", &logs)));
        traverse(ten_times(&arena), &mut merged).unwrap();
        drop(merged);

        assert_eq!(
            logs.into_inner(),
            vec![
                "v1: entering FunctionDeclaration",
                "v1: entering ForStatement",
                "v1: entering CallExpression",
                "v2: leaving CallExpression",
                "v2: leaving ForStatement",
                "v2: leaving FunctionDeclaration",
            ]
        );
    }

    #[test]
    fn traversal_leaves_tree_untouched() {
        let arena = AstArena::new();
        let logs = Logs::default();
        let root = ten_times(&arena);

        let visitors: Vec<Box<dyn Visitor<'_> + '_>> = vec![Box::new(wrapping_logger(&arena, &logs))];
        traverse_merged(root, visitors).unwrap();

        assert!(root.same_shape(ten_times(&arena)));
    }
}

mod interrupt {
    use super::*;
    use pretty_assertions::assert_eq;

    #[rstest]
    #[case::returned(false)]
    #[case::controller(true)]
    fn skip_on_enter_only_affects_skipping_visitor(#[case] via_controller: bool) {
        let arena = AstArena::new();
        let logs = Logs::default();

        let mut merged = MergedVisitor::new()
            .with(skipping_logger(&logs, via_controller))
            .with(logger("v2", &logs));
        traverse(ten_times(&arena), &mut merged).unwrap();
        drop(merged);

        assert_eq!(logs.into_inner(), SKIPPED_BY_V1);
    }

    #[rstest]
    #[case::returned(false)]
    #[case::controller(true)]
    fn break_on_enter_only_affects_breaking_visitor(#[case] via_controller: bool) {
        let arena = AstArena::new();
        let logs = Logs::default();

        let breaker = FnVisitor::new()
            .on_enter(|controller, node, _| match node.node_type {
                NodeType::ForStatement => {
                    logs.borrow_mut()
                        .push(format!("v1: going to break from {}", node.node_type));
                    if via_controller {
                        controller.stop();
                        Ok(VisitOption::Continue)
                    } else {
                        Ok(VisitOption::Break)
                    }
                }
                NodeType::CallExpression | NodeType::FunctionDeclaration => {
                    logs.borrow_mut()
                        .push(format!("v1: entering {}", node.node_type));
                    Ok(VisitOption::Continue)
                }
                _ => Ok(VisitOption::Continue),
            })
            .on_leave(log_as("v1", "leaving", &logs));
        let mut merged = MergedVisitor::new().with(breaker).with(logger("v2", &logs));
        traverse(ten_times(&arena), &mut merged).unwrap();
        drop(merged);

        assert_eq!(
            logs.into_inner(),
            vec![
                "v1: entering FunctionDeclaration",
                "v2: entering FunctionDeclaration",
                "v1: going to break from ForStatement",
                "v2: entering ForStatement",
                "v2: entering CallExpression",
                "v2: leaving CallExpression",
                "v2: leaving ForStatement",
                "v2: leaving FunctionDeclaration",
            ]
        );
    }

    #[rstest]
    #[case::returned(false)]
    #[case::controller(true)]
    fn break_on_leave_only_affects_breaking_visitor(#[case] via_controller: bool) {
        let arena = AstArena::new();
        let logs = Logs::default();

        let breaker = FnVisitor::new()
            .on_enter(log_as("v1", "entering", &logs))
            .on_leave(|controller, node, _| match node.node_type {
                NodeType::ForStatement => {
                    logs.borrow_mut().push(format!(
                        "v1: going to break from {} on leave",
                        node.node_type
                    ));
                    if via_controller {
                        controller.stop();
                        Ok(VisitOption::Continue)
                    } else {
                        Ok(VisitOption::Break)
                    }
                }
                NodeType::CallExpression | NodeType::FunctionDeclaration => {
                    logs.borrow_mut()
                        .push(format!("v1: leaving {}", node.node_type));
                    Ok(VisitOption::Continue)
                }
                _ => Ok(VisitOption::Continue),
            });
        let mut merged = MergedVisitor::new().with(breaker).with(logger("v2", &logs));
        traverse(ten_times(&arena), &mut merged).unwrap();
        drop(merged);

        assert_eq!(
            logs.into_inner(),
            vec![
                "v1: entering FunctionDeclaration",
                "v2: entering FunctionDeclaration",
                "v1: entering ForStatement",
                "v2: entering ForStatement",
                "v1: entering CallExpression",
                "v2: entering CallExpression",
                "v2: leaving CallExpression",
                "v1: leaving CallExpression",
                "v2: leaving ForStatement",
                "v1: going to break from ForStatement on leave",
                "v2: leaving FunctionDeclaration",
            ]
        );
    }
}

mod replacement {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn returns_replaced_node_from_merged_visitor() {
        let arena = AstArena::new();
        let logs = Logs::default();
        let root = ten_times(&arena);

        let visitors: Vec<Box<dyn Visitor<'_> + '_>> = vec![
            Box::new(logger("v1", &logs)),
            Box::new(wrapping_logger(&arena, &logs)),
        ];
        let actual = replace_merged(&arena, root, visitors).unwrap();

        assert_eq!(logs.into_inner(), IN_ORDER);
        assert!(Node::ptr_eq(actual, root));
        assert!(actual.same_shape(ten_times_wrapped(&arena)));
    }

    #[test]
    fn mixes_skipping_and_replacing_visitors() {
        let arena = AstArena::new();
        let logs = Logs::default();

        let mut merged = MergedVisitor::new()
            .with(skipping_logger(&logs, false))
            .with(wrapping_logger(&arena, &logs));
        let actual = replace(&arena, ten_times(&arena), &mut merged).unwrap();
        drop(merged);

        assert_eq!(logs.into_inner(), SKIPPED_BY_V1);
        assert!(actual.same_shape(ten_times_wrapped(&arena)));
    }

    #[test]
    fn conflicting_replacements_leave_tree_unchanged() {
        let arena = AstArena::new();
        let logs = Logs::default();

        let visitors: Vec<Box<dyn Visitor<'_> + '_>> = vec![
            Box::new(wrapping_logger(&arena, &logs)),
            Box::new(wrapping_logger(&arena, &logs)),
        ];
        let actual = replace_merged(&arena, ten_times(&arena), visitors).unwrap();

        assert!(actual.same_shape(ten_times(&arena)));
        assert!(!actual.same_shape(ten_times_wrapped(&arena)));
    }
}
