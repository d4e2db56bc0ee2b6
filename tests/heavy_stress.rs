#![cfg(feature = "heavy")]
use rand::{rngs::StdRng, Rng, SeedableRng};
use seqmerge::{paths, LcsEngine, Scope};

fn random_dna(rng: &mut StdRng, len: usize) -> Vec<u8> {
    const ALPHABET: &[u8] = b"ACGT";
    (0..len)
        .map(|_| {
            let idx = rng.gen_range(0..ALPHABET.len());
            ALPHABET[idx]
        })
        .collect()
}

#[test]
fn heavy_stress_lcs_deep_backtrack() {
    // Backtracking walks up to n + m cells; this must not exhaust the stack.
    let mut rng = StdRng::seed_from_u64(123);
    let s = random_dna(&mut rng, 4_000);
    let t = random_dna(&mut rng, 4_000);
    let mut scope = Scope::with_capacity(16_000);
    let x = scope.seq_of(s);
    let y = scope.seq_of(t);
    let (len, out) = LcsEngine::default().run_with_length(&mut scope, x, y);
    assert!(len <= 4_000);
    assert_eq!(scope.children(out).len(), len as usize);
}

#[test]
fn heavy_stress_disjoint_inputs() {
    let s = vec![b'A'; 6_000];
    let t = vec![b'C'; 6_000];
    let mut scope = Scope::new();
    let x = scope.seq_of(s);
    let y = scope.seq_of(t);
    let out = LcsEngine::default().run(&mut scope, x, y);
    assert!(scope.children(out).is_empty());
}

#[test]
fn heavy_stress_wide_paths() {
    let groups: Vec<Vec<u16>> = (0..8).map(|g| (0..5).map(|e| g * 10 + e).collect()).collect();
    let out = paths(&groups);
    assert_eq!(out.len(), 5usize.pow(8));
    assert_eq!(out[0], vec![0, 10, 20, 30, 40, 50, 60, 70]);
    assert_eq!(out[1], vec![1, 10, 20, 30, 40, 50, 60, 70]);
    assert_eq!(out.last().map(|c| c[7]), Some(74));
}
