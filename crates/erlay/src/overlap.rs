//! Pairwise overlap removal.
//!
//! Two boxes overlap when their centres are closer than half their combined
//! extent plus the gap on *both* axes. Each overlapping pair is pushed apart
//! along the axis that needs the smaller correction. Passes repeat until one
//! completes without moving anything or the pass budget runs out.

use log::{debug, trace};

use erlay_core::geometry::{Point, Size};

/// Extra gap used when the resolved centres are about to be floored to whole
/// pixels. Flooring moves each box by less than one pixel, so one pixel of
/// slack keeps the integer layout free of overlaps.
pub const PIXEL_SNAP_ALLOWANCE: f64 = 1.0;

/// Outcome of [`resolve_overlaps`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    passes: usize,
    settled: bool,
}

impl Resolution {
    /// Returns the number of passes that ran
    pub fn passes(&self) -> usize {
        self.passes
    }

    /// Returns true if the last pass found no overlap
    pub fn settled(&self) -> bool {
        self.settled
    }
}

/// Pushes overlapping boxes apart.
///
/// `centers` and `sizes` are indexed by node. Only the nodes listed in
/// `members` take part, and pairs are visited in `members` order: for
/// `i < j`, the pair `(members[i], members[j])`. The first node of a pair
/// moves towards negative coordinates when it lies before the second on the
/// chosen axis, and towards positive coordinates otherwise, including when
/// both coordinates are equal.
///
/// A layout without overlaps is left untouched.
///
/// # Examples
///
/// ```
/// # use erlay::overlap::resolve_overlaps;
/// # use erlay_core::geometry::{Point, Size};
/// let sizes = [Size::new(100, 50), Size::new(100, 50)];
/// let mut centers = [Point::new(0.0, 0.0), Point::new(10.0, 0.0)];
///
/// // x needs 120 more and y only 80 more, so the pair moves apart vertically
/// let resolution = resolve_overlaps(&mut centers, &sizes, &[0, 1], 30.0, 100);
/// assert!(resolution.settled());
/// assert_eq!(centers[1].x() - centers[0].x(), 10.0);
/// assert!(centers[0].y() - centers[1].y() >= 80.0);
/// ```
pub fn resolve_overlaps(
    centers: &mut [Point],
    sizes: &[Size],
    members: &[usize],
    gap: f64,
    max_passes: usize,
) -> Resolution {
    let mut passes = 0;

    while passes < max_passes {
        passes += 1;
        let mut moved = 0usize;

        for (i, &first) in members.iter().enumerate() {
            for &second in &members[i + 1..] {
                if separate(centers, sizes, first, second, gap) {
                    moved += 1;
                }
            }
        }

        trace!(pass = passes, moved; "Overlap pass");

        if moved == 0 {
            debug!(passes, members = members.len(); "Overlaps resolved");
            return Resolution {
                passes,
                settled: true,
            };
        }
    }

    debug!(passes, members = members.len(); "Overlap pass budget exhausted");
    Resolution {
        passes,
        settled: false,
    }
}

/// Pushes one pair apart, returning true if it overlapped.
fn separate(centers: &mut [Point], sizes: &[Size], first: usize, second: usize, gap: f64) -> bool {
    let a = centers[first];
    let b = centers[second];

    let Some(deficit) = deficit(a, sizes[first], b, sizes[second], gap) else {
        return false;
    };

    let offset = if deficit.x() < deficit.y() {
        let push = deficit.x() / 2.0 + 1.0;
        Point::new(if a.x() < b.x() { -push } else { push }, 0.0)
    } else {
        let push = deficit.y() / 2.0 + 1.0;
        Point::new(0.0, if a.y() < b.y() { -push } else { push })
    };

    centers[first] = a.add_point(offset);
    centers[second] = b.sub_point(offset);
    true
}

/// Returns how far two boxes fall short of the required separation on each
/// axis, or `None` if they do not overlap.
fn deficit(a: Point, a_size: Size, b: Point, b_size: Size, gap: f64) -> Option<Point> {
    let min_distance = a_size
        .half_extent()
        .add_point(b_size.half_extent())
        .add_point(Point::new(gap, gap));
    let distance = b.sub_point(a).abs();

    (distance.x() < min_distance.x() && distance.y() < min_distance.y())
        .then(|| min_distance.sub_point(distance))
}

/// Returns true if any two `members` overlap under the gap-expanded test
pub fn has_overlap(centers: &[Point], sizes: &[Size], members: &[usize], gap: f64) -> bool {
    members.iter().enumerate().any(|(i, &first)| {
        members[i + 1..].iter().any(|&second| {
            deficit(centers[first], sizes[first], centers[second], sizes[second], gap).is_some()
        })
    })
}
