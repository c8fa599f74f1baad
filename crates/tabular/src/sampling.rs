//! Uniform index sampling shared by row and column picking.

use rand::Rng;

/// Draws `n` indices uniformly from `0..total`, never drawing indices in
/// `exclude`.
///
/// Returns `(picked, unpicked)`: `picked` in draw order, `unpicked` the
/// remaining indices ascending (excluded indices land in `unpicked`).
/// Without replacement, `n` clamps to the number of pickable indices.
/// Degenerate ranges (`total == 0`, `n == 0`, or everything excluded)
/// pick nothing.
pub fn random_pick<R: Rng>(
    rng: &mut R,
    total: usize,
    n: usize,
    with_replacement: bool,
    exclude: &[usize],
) -> (Vec<usize>, Vec<usize>) {
    let mut picked = Vec::new();

    let pickable = (0..total).filter(|i| !exclude.contains(i)).count();
    if total > 0 && pickable > 0 {
        let want = if with_replacement { n } else { n.min(pickable) };
        while picked.len() < want {
            let idx = rng.gen_range(0..total);
            if exclude.contains(&idx) {
                continue;
            }
            if !with_replacement && picked.contains(&idx) {
                continue;
            }
            picked.push(idx);
        }
    }

    let unpicked = (0..total).filter(|i| !picked.contains(i)).collect();
    (picked, unpicked)
}
