use rand::Rng;
use rand::rngs::StdRng;

use super::union_find::UnionFind;
use crate::maze::{Cell, Direction};

/// Upper bound (exclusive) for candidate edge weights.
const WEIGHT_RANGE: u32 = 6_000;

/// A candidate passage between two adjacent cells, identified by their
/// row-major arena indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Edge {
    pub src: u16,
    pub dest: u16,
    pub weight: u32,
}

/// Emits one directed candidate edge toward each in-bounds neighbor of every
/// cell, each with an independently drawn weight.
///
/// Cells are scanned row-major and neighbors visited west, east, north, south;
/// this is the only place generation consumes randomness, so the fixed scan
/// order is what makes a seed reproduce the same maze.
pub(crate) fn candidate_edges(width: u8, height: u8, rng: &mut StdRng) -> Vec<Edge> {
    let at = |x: u8, y: u8| y as u16 * width as u16 + x as u16;
    let mut edges = Vec::new();
    for y in 0..height {
        for x in 0..width {
            let src = at(x, y);
            let mut draw = |dest: u16| {
                edges.push(Edge {
                    src,
                    dest,
                    weight: rng.random_range(0..WEIGHT_RANGE),
                });
            };
            if x > 0 {
                draw(at(x - 1, y));
            }
            if x + 1 < width {
                draw(at(x + 1, y));
            }
            if y > 0 {
                draw(at(x, y - 1));
            }
            if y + 1 < height {
                draw(at(x, y + 1));
            }
        }
    }
    edges
}

/// Selects the spanning tree from the candidate edges: stable sort ascending
/// by weight, then greedily accept every edge whose endpoints are still in
/// different components, stopping once `total - 1` edges are in.
///
/// Each internal adjacency appears twice in the candidate list (once per
/// direction); whichever half sorts first decides the adjacency, and the
/// other half is later discarded as a cycle edge.
pub(crate) fn select_tree(mut edges: Vec<Edge>, total: u16) -> Vec<Edge> {
    // Stable: ties keep candidate scan order.
    edges.sort_by_key(|e| e.weight);

    let mut dset = UnionFind::new(total);
    let mut tree = Vec::with_capacity(total.saturating_sub(1) as usize);
    for edge in edges {
        let src_root = dset.find(edge.src);
        let dest_root = dset.find(edge.dest);
        if src_root == dest_root {
            continue;
        }
        dset.unite(src_root, dest_root);
        tree.push(edge);
        if tree.len() == total as usize - 1 {
            break;
        }
    }
    debug_assert_eq!(tree.len(), total.saturating_sub(1) as usize);
    tree
}

/// Derives each cell's wall-open flags from the accepted tree edges: both
/// directed halves of an accepted edge become open flags on its endpoints.
pub(crate) fn wall_masks(tree: &[Edge], width: u8, total: u16) -> Vec<Cell> {
    let mut cells = vec![Cell::default(); total as usize];
    for edge in tree {
        let dir = direction_between(edge.src, edge.dest, width);
        cells[edge.src as usize].set_open(dir);
        cells[edge.dest as usize].set_open(dir.opposite());
    }
    cells
}

fn direction_between(src: u16, dest: u16, width: u8) -> Direction {
    let width = width as u16;
    if dest == src + 1 {
        Direction::East
    } else if src == dest + 1 {
        Direction::West
    } else if dest == src + width {
        Direction::South
    } else if src == dest + width {
        Direction::North
    } else {
        panic!("edge {src}-{dest} does not connect adjacent cells")
    }
}

/// Carves a spanning tree over a `width x height` grid and returns the cell
/// arena with wall-open flags set.
pub(crate) fn carve(width: u8, height: u8, rng: &mut StdRng) -> Vec<Cell> {
    let total = width as u16 * height as u16;
    if total <= 1 {
        // Nothing to carve; a 1x1 maze is a spanning tree of one cell.
        return vec![Cell::default(); total as usize];
    }
    let edges = candidate_edges(width, height, rng);
    tracing::debug!(width, height, candidates = edges.len(), "carving maze");
    let tree = select_tree(edges, total);
    wall_masks(&tree, width, total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::get_rng;

    #[test]
    fn candidates_cover_every_adjacency_in_both_directions() {
        let edges = candidate_edges(3, 2, &mut get_rng(425));
        // 3x2 grid: 7 internal adjacencies, two directed halves each.
        assert_eq!(edges.len(), 14);
        assert!(edges.iter().all(|e| e.weight < WEIGHT_RANGE));
        for edge in &edges {
            assert!(
                edges.iter().any(|e| e.src == edge.dest && e.dest == edge.src),
                "missing reverse half of {edge:?}"
            );
        }
    }

    #[test]
    fn candidates_are_deterministic_per_seed() {
        let a = candidate_edges(10, 6, &mut get_rng(425));
        let b = candidate_edges(10, 6, &mut get_rng(425));
        assert_eq!(a, b);
    }

    #[test]
    fn tree_has_exactly_cells_minus_one_edges() {
        for (width, height) in [(2u8, 2u8), (10, 6), (1, 9), (9, 1)] {
            let total = width as u16 * height as u16;
            let edges = candidate_edges(width, height, &mut get_rng(7));
            let tree = select_tree(edges, total);
            assert_eq!(tree.len(), total as usize - 1);
        }
    }

    /// Regression pin for the 2x2 reference scenario: with these weights the
    /// left, right, and bottom adjacencies win and the top one is rejected as
    /// a cycle edge, giving the exact wall configuration the reference run
    /// produced (top row cells open only to the south, bottom-left open
    /// north+east, bottom-right open north+west).
    #[test]
    fn pinned_two_by_two_wall_configuration() {
        // Arena: 0=(0,0) 1=(1,0) 2=(0,1) 3=(1,1). Directed halves of the
        // four adjacencies, reverse directions drawn heavier.
        let edge = |src, dest, weight| Edge { src, dest, weight };
        let edges = vec![
            edge(0, 2, 100), // left vertical
            edge(2, 0, 150),
            edge(1, 3, 200), // right vertical
            edge(3, 1, 250),
            edge(2, 3, 300), // bottom horizontal
            edge(3, 2, 350),
            edge(0, 1, 400), // top horizontal, loses to the rest
            edge(1, 0, 450),
        ];

        let tree = select_tree(edges, 4);
        assert_eq!(tree.len(), 3);
        let cells = wall_masks(&tree, 2, 4);

        // Top-left: open only to the south.
        assert!(!cells[0].north && cells[0].south && !cells[0].east && !cells[0].west);
        // Top-right: open only to the south.
        assert!(!cells[1].north && cells[1].south && !cells[1].east && !cells[1].west);
        // Bottom-left: open north and east.
        assert!(cells[2].north && !cells[2].south && cells[2].east && !cells[2].west);
        // Bottom-right: open north and west.
        assert!(cells[3].north && !cells[3].south && !cells[3].east && cells[3].west);
    }

    #[test]
    fn each_adjacency_is_accepted_at_most_once() {
        let edges = candidate_edges(4, 4, &mut get_rng(425));
        let tree = select_tree(edges, 16);
        // No adjacency may be accepted twice.
        for (i, a) in tree.iter().enumerate() {
            for b in &tree[i + 1..] {
                assert!(
                    !(a.src == b.dest && a.dest == b.src),
                    "both halves of an adjacency accepted: {a:?} / {b:?}"
                );
            }
        }
    }

    #[test]
    #[should_panic(expected = "does not connect adjacent cells")]
    fn wall_masks_reject_non_adjacent_edges() {
        let tree = [Edge {
            src: 0,
            dest: 3,
            weight: 1,
        }];
        wall_masks(&tree, 2, 4);
    }
}
