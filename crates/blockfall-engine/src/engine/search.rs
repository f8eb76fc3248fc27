use std::collections::{HashSet, VecDeque};

use arrayvec::ArrayVec;

use crate::{
    core::{board::Board, piece::PieceKind, point::Point},
    engine::placement::{self, Placement},
};

/// Enumerates every resting placement of `kind` reachable from `spawn`.
///
/// Breadth-first traversal of the implicit move graph whose nodes are
/// (anchor, orientation) pairs and whose edges are the four move inputs:
/// shift left, shift right, shift down, rotate one step (per the piece's
/// rotation-adjacency table). A node is an end state iff shifting it one
/// row down is illegal (resting on the floor or on stacked tiles). End
/// states are still expanded: sliding sideways off a resting position can
/// uncover columns further down, including cavities under overhangs.
///
/// The returned set is exact and order-free; since this is exhaustive
/// reachability rather than shortest path, any traversal order yields the
/// same set. The state space is bounded by width × height × 4, so the
/// traversal always terminates.
///
/// A session never runs the search while terminal; called with an illegal
/// spawn configuration this returns the empty set.
#[must_use]
pub fn reachable_placements(board: &Board, kind: PieceKind, spawn: Point) -> Vec<Placement> {
    let start = Placement::spawn(spawn);
    if !placement::is_legal(board, kind, start) {
        return Vec::new();
    }

    let mut visited: HashSet<Placement> = HashSet::new();
    let mut frontier: VecDeque<Placement> = VecDeque::new();
    let mut end_states = Vec::new();

    visited.insert(start);
    frontier.push_back(start);

    while let Some(current) = frontier.pop_front() {
        if !placement::is_legal(board, kind, current.shifted_down()) {
            end_states.push(current);
        }

        // At most three shifts plus two rotation steps.
        let mut neighbors: ArrayVec<Placement, 5> = ArrayVec::new();
        neighbors.push(Placement::new(current.anchor + Point::LEFT, current.orientation));
        neighbors.push(Placement::new(current.anchor + Point::RIGHT, current.orientation));
        neighbors.push(current.shifted_down());
        for &orientation in kind.rotation_neighbors(current.orientation) {
            neighbors.push(Placement::new(current.anchor, orientation));
        }

        for next in neighbors {
            if placement::is_legal(board, kind, next) && visited.insert(next) {
                frontier.push_back(next);
            }
        }
    }

    end_states
}
