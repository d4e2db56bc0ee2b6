use seqmerge::{
    build_table, InScope, LcsEngine, LcsTable, NodeEquality, NodeId, OperandMode, Scope,
};
use proptest::prelude::*;

/// Augmented children of `seq`: a fresh nil sentinel followed by the
/// original children.
fn augmented(scope: &mut Scope<u8>, seq: NodeId) -> Vec<NodeId> {
    let sentinel = scope.nil();
    std::iter::once(sentinel)
        .chain(scope.children(seq).iter().copied())
        .collect()
}

fn table_for(scope: &mut Scope<u8>, x: NodeId, y: NodeId) -> LcsTable {
    let xs = augmented(scope, x);
    let ys = augmented(scope, y);
    build_table(&xs, &ys, &InScope::new(scope, &NodeEquality))
}

proptest! {
    #[test]
    fn table_is_monotone(a in "[ABC]{0,12}", b in "[ABC]{0,12}") {
        let mut scope = Scope::new();
        let x = scope.seq_of(a.bytes());
        let y = scope.seq_of(b.bytes());
        let table = table_for(&mut scope, x, y);

        prop_assert_eq!(table.rows(), a.len() + 1);
        prop_assert_eq!(table.cols(), b.len() + 1);
        prop_assert!(table.row(0).iter().all(|&v| v == 0));
        for i in 0..table.rows() {
            prop_assert_eq!(table[(i, 0)], 0);
        }
        for i in 1..table.rows() {
            for j in 1..table.cols() {
                prop_assert!(table[(i, j)] >= table[(i - 1, j)]);
                prop_assert!(table[(i, j)] >= table[(i, j - 1)]);
                prop_assert!(table[(i, j)] <= table[(i - 1, j - 1)] + 1);
            }
        }
    }

    #[test]
    fn result_length_matches_table(a in "[ABC]{0,12}", b in "[ABC]{0,12}") {
        let mut scope = Scope::new();
        let x = scope.seq_of(a.bytes());
        let y = scope.seq_of(b.bytes());
        let expected = table_for(&mut scope, x, y).lcs_len();

        let (len, out) = LcsEngine::default().run_with_length(&mut scope, x, y);
        prop_assert_eq!(len, expected);
        prop_assert_eq!(scope.children(out).len(), expected as usize);
    }

    #[test]
    fn mirrored_length_follows_first_operand(a in "[ABC]{0,12}", b in "[ABC]{0,12}") {
        let mut scope = Scope::new();
        let x = scope.seq_of(a.bytes());
        let y = scope.seq_of(b.bytes());
        let engine = LcsEngine::with_mode(NodeEquality, OperandMode::MirrorFirst);
        let (len, out) = engine.run_with_length(&mut scope, x, y);

        prop_assert_eq!(len, table_for(&mut scope, x, x).lcs_len());
        prop_assert_eq!(len as usize, a.len());
        prop_assert!(scope.deep_eq(out, x));
    }

    #[test]
    fn repeated_runs_agree(a in "[AB]{0,10}", b in "[AB]{0,10}") {
        let mut scope = Scope::new();
        let x = scope.seq_of(a.bytes());
        let y = scope.seq_of(b.bytes());
        let engine = LcsEngine::default();
        let first = engine.run(&mut scope, x, y);
        let second = engine.run(&mut scope, x, y);
        prop_assert!(scope.deep_eq(first, second));
    }
}

#[test]
fn operands_are_never_mutated() {
    let mut scope = Scope::new();
    let x = scope.seq_of(*b"selector");
    let y = scope.seq_of(*b"select");
    let before_x = scope.export(x);
    let before_y = scope.export(y);
    for mode in [OperandMode::Distinct, OperandMode::MirrorFirst] {
        LcsEngine::with_mode(NodeEquality, mode).run(&mut scope, x, y);
        assert_eq!(scope.export(x), before_x);
        assert_eq!(scope.export(y), before_y);
    }
}
