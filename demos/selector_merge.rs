//! Example: merging two selector chains and enumerating their weavings.
//!
//! Run with:
//! `cargo run --example selector_merge`

use seqmerge::{lcs, paths_in, LcsEngineBuilder, Node, NodeEquality, NodeId, Scope, Value};

/// Type selectors are case-insensitive; everything else compares exactly.
/// The merged element keeps the spelling from the second chain.
fn selector_eq(scope: &Scope<String>, a: NodeId, b: NodeId) -> Option<NodeId> {
    match (scope.get(a), scope.get(b)) {
        (Node::Leaf(l), Node::Leaf(r)) => {
            let is_type = |s: &str| s.chars().next().is_some_and(|c| c.is_ascii_alphabetic());
            let same = if is_type(l.as_str()) && is_type(r.as_str()) {
                l.eq_ignore_ascii_case(r)
            } else {
                l == r
            };
            same.then_some(b)
        }
        _ => scope.deep_eq(a, b).then_some(a),
    }
}

fn chain(items: &[&str]) -> Value<String> {
    Value::seq(items.iter().map(|s| s.to_string()))
}

fn render(scope: &Scope<String>, id: NodeId) -> String {
    match scope.export(id) {
        Value::Seq(items) => items
            .iter()
            .map(|v| match v {
                Value::Leaf(s) => s.clone(),
                Value::Nil => "nil".to_string(),
                Value::Seq(_) => "(..)".to_string(),
            })
            .collect::<Vec<_>>()
            .join(" "),
        other => format!("{other:?}"),
    }
}

fn main() {
    let mut scope = Scope::new();
    let x = scope.import(&chain(&["DIV", ".nav", ">", "ul", ".item"]));
    let y = scope.import(&chain(&["div", "ul", "li", ".item"]));

    let merged = lcs(x, y, selector_eq, &mut scope);
    println!("x:       {}", render(&scope, x));
    println!("y:       {}", render(&scope, y));
    println!("merged:  {}", render(&scope, merged));

    let strict = lcs(x, y, NodeEquality, &mut scope);
    println!("strict:  {}", render(&scope, strict));

    let legacy = LcsEngineBuilder::new(selector_eq)
        .mirror_first_operand(true)
        .build()
        .run(&mut scope, x, y);
    println!("legacy:  {}", render(&scope, legacy));

    let groups = scope.import(&Value::nested([
        Value::nested([chain(&[".a"]), chain(&[".b"])]),
        Value::nested([chain(&[".c", ".d"])]),
        Value::nested([chain(&[".e"]), chain(&[".f"])]),
    ]));
    let woven = paths_in(&mut scope, groups);
    println!("paths:");
    for &combo in scope.children(woven) {
        let parts: Vec<String> = scope
            .children(combo)
            .iter()
            .map(|&part| render(&scope, part))
            .collect();
        println!("  {}", parts.join(" | "));
    }
}
