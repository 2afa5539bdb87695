//! Starting positions for the force simulation.
//!
//! Connected nodes are seeded around the most connected one so the
//! simulation starts close to a sensible arrangement. Isolated nodes never
//! enter the simulation; they are stacked in a column to the right of the
//! connected cluster afterwards. When nothing is connected every node goes
//! on a square grid.

use std::{cmp::Reverse, f64::consts::TAU};

use erlay_core::geometry::{Bounds, Point, Size};

use crate::graph::AdjacencyIndex;

/// Distance from the centroid of placed neighbours, in ideal lengths.
const NEIGHBOR_OFFSET: f64 = 0.8;

/// Grid pitch, in ideal lengths.
const GRID_PITCH: f64 = 1.5;

/// Gap between the connected cluster and the isolated column, in ideal lengths.
const ISOLATED_COLUMN_OFFSET: f64 = 1.2;

/// Vertical pitch of the isolated column, in ideal lengths.
const ISOLATED_ROW_PITCH: f64 = 0.8;

/// Returns the preferred centre-to-centre distance of connected nodes.
///
/// It is the larger of the average width and average height over all nodes,
/// scaled by `factor`. An empty slice yields zero.
pub fn ideal_length(sizes: &[Size], factor: f64) -> f64 {
    if sizes.is_empty() {
        return 0.0;
    }

    let count = sizes.len() as f64;
    let (width, height) = sizes.iter().fold((0.0, 0.0), |(w, h), size| {
        (w + f64::from(size.width()), h + f64::from(size.height()))
    });

    (width / count).max(height / count) * factor
}

/// Orders `connected` by degree, highest first, keeping input order on ties.
pub fn rank_by_degree(connected: &[usize], adjacency: &AdjacencyIndex) -> Vec<usize> {
    let mut ranked = connected.to_vec();
    ranked.sort_by_key(|&node| Reverse(adjacency.degree(node)));
    ranked
}

/// Seeds the centres of the `ranked` nodes.
///
/// The first node goes at `(c, c)` with `c = ideal * sqrt(n) / 2 + margin`.
/// Node `i` goes at angle `2πi/n`: `0.8 * ideal` away from the centroid of its
/// already placed neighbours when it has any, otherwise on a ring of radius
/// `ideal * (1 + i/n)` around the first node.
pub fn place_connected(
    centers: &mut [Point],
    ranked: &[usize],
    adjacency: &AdjacencyIndex,
    ideal: f64,
    margin: f64,
) {
    let count = ranked.len() as f64;
    let c = ideal * count.sqrt() / 2.0 + margin;
    let origin = Point::new(c, c);
    let mut placed = vec![false; centers.len()];

    for (i, &node) in ranked.iter().enumerate() {
        if i == 0 {
            centers[node] = origin;
            placed[node] = true;
            continue;
        }

        let direction = Point::from_angle(TAU * i as f64 / count);
        let (sum, found) = adjacency
            .neighbors(node)
            .iter()
            .filter(|&&neighbor| placed[neighbor])
            .fold((Point::default(), 0usize), |(sum, found), &neighbor| {
                (sum.add_point(centers[neighbor]), found + 1)
            });

        centers[node] = if found > 0 {
            let centroid = sum.scale(1.0 / found as f64);
            centroid.add_point(direction.scale(ideal * NEIGHBOR_OFFSET))
        } else {
            let radius = ideal * (1.0 + i as f64 / count);
            origin.add_point(direction.scale(radius))
        };
        placed[node] = true;
    }
}

/// Places `members` on a square grid.
///
/// The grid has `max(1, floor(sqrt(n)))` columns and a pitch of
/// `1.5 * ideal`. The first cell is centred at `(margin, margin)`.
pub fn place_grid(centers: &mut [Point], members: &[usize], ideal: f64, margin: f64) {
    let columns = ((members.len() as f64).sqrt().floor() as usize).max(1);
    let pitch = ideal * GRID_PITCH;

    for (i, &node) in members.iter().enumerate() {
        let column = (i % columns) as f64;
        let row = (i / columns) as f64;
        centers[node] = Point::new(margin + column * pitch, margin + row * pitch);
    }
}

/// Stacks `isolated` nodes in a column to the right of the `anchors`.
///
/// The column sits `1.2 * ideal` right of the rightmost anchor centre and
/// starts at the topmost anchor centre, one node every `0.8 * ideal`.
/// Nothing is placed when there are no anchors.
pub fn place_isolated(centers: &mut [Point], anchors: &[usize], isolated: &[usize], ideal: f64) {
    let Some(bounds) = Bounds::enclosing(anchors.iter().map(|&node| centers[node])) else {
        return;
    };

    let start = Point::new(
        bounds.max_x() + ideal * ISOLATED_COLUMN_OFFSET,
        bounds.min_y(),
    );
    for (k, &node) in isolated.iter().enumerate() {
        centers[node] = start.add_point(Point::new(0.0, k as f64 * ideal * ISOLATED_ROW_PITCH));
    }
}
