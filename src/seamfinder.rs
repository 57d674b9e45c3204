// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Find the cheapest vertical seam in an energy map
//!
//! The cost map is built from the bottom up: every cell holds the
//! cheapest total energy of any path that starts there and runs to the
//! bottom row.  The seam is then read off from the top, always
//! stepping to the cheapest of the (at most) three cells below.

use crate::energy::EnergyMap;
use crate::error::CarveError;
use crate::twodmap::TwoDimensionalMap;

/// Cheapest path-to-the-bottom cost per cell.
pub type CostMap = TwoDimensionalMap<f64>;

/// One x-coordinate per row, top to bottom.
pub type Seam = Vec<u32>;

fn ensure_not_degenerate<P: Copy>(map: &TwoDimensionalMap<P>) -> Result<(), CarveError> {
    let (width, height) = map.dimensions();
    if width == 0 || height == 0 {
        return Err(CarveError::DegenerateGrid { width, height });
    }
    Ok(())
}

/// Build the cost map for an energy map.  Row `y` needs row `y + 1`
/// finished, so rows are done strictly bottom to top.
///
/// Neighbors past the left or right edge are clamped to the edge
/// column rather than excluded.
pub fn accumulate_cost(energy: &EnergyMap) -> Result<CostMap, CarveError> {
    ensure_not_degenerate(energy)?;
    let (width, height) = energy.dimensions();
    let maxwidth = width - 1;

    let mut cost = CostMap::new(width, height);
    for x in 0..width {
        cost[(x, height - 1)] = energy[(x, height - 1)];
    }

    for y in (0..height - 1).rev() {
        for x in 0..width {
            let below = (x.saturating_sub(1)..=(x + 1).min(maxwidth))
                .map(|bx| cost[(bx, y + 1)])
                .fold(f64::INFINITY, f64::min);
            cost[(x, y)] = energy[(x, y)] + below;
        }
    }
    Ok(cost)
}

/// Trace the cheapest seam through a cost map.  The first column
/// holding the lowest cost in row 0 starts the seam; each step below
/// prefers straight down, then down-right, then down-left, taking a
/// diagonal only when it is strictly cheaper.
pub fn cost_to_seam(cost: &CostMap) -> Result<Seam, CarveError> {
    ensure_not_degenerate(cost)?;
    let (width, height) = cost.dimensions();
    let maxwidth = width - 1;

    let mut seam_col = (1..width).fold(0, |best, x| {
        if cost[(x, 0)] < cost[(best, 0)] {
            x
        } else {
            best
        }
    });

    let mut seam = Vec::with_capacity(height as usize);
    seam.push(seam_col);
    for y in 1..height {
        let (left, right) = (seam_col.saturating_sub(1), (seam_col + 1).min(maxwidth));
        let mut best = seam_col;
        for candidate in [right, left].iter() {
            if cost[(*candidate, y)] < cost[(best, y)] {
                best = *candidate;
            }
        }
        seam_col = best;
        seam.push(seam_col);
    }
    Ok(seam)
}

/// Anything that can hand back its next vertical seam.
pub trait SeamFinder {
    fn find_vertical_seam(&self) -> Result<Seam, CarveError>;
}

impl SeamFinder for EnergyMap {
    fn find_vertical_seam(&self) -> Result<Seam, CarveError> {
        cost_to_seam(&accumulate_cost(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(width: u32, height: u32, data: &[f64]) -> EnergyMap {
        TwoDimensionalMap::from_vec(width, height, data.to_vec()).unwrap()
    }

    fn is_connected(seam: &[u32], width: u32) -> bool {
        seam.iter().all(|x| *x < width)
            && seam
                .windows(2)
                .all(|pair| (i64::from(pair[0]) - i64::from(pair[1])).abs() <= 1)
    }

    #[test]
    fn cost_accumulates_from_the_bottom() {
        let energy = map(3, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
        let cost = accumulate_cost(&energy).unwrap();
        let rows: Vec<Vec<f64>> = cost.rows().map(|row| row.to_vec()).collect();
        assert_eq!(rows[2], vec![7.0, 8.0, 9.0]);
        assert_eq!(rows[1], vec![11.0, 12.0, 14.0]);
        assert_eq!(rows[0], vec![12.0, 13.0, 15.0]);
    }

    #[test]
    fn edge_neighbors_are_clamped() {
        // With clamping, x = 0 looks at columns 0 and 1 only.
        let energy = map(3, 2, &[0.0, 0.0, 0.0, 5.0, 1.0, 0.0]);
        let cost = accumulate_cost(&energy).unwrap();
        assert_eq!(cost[(0, 0)], 1.0);
        assert_eq!(cost[(1, 0)], 0.0);
        assert_eq!(cost[(2, 0)], 0.0);
    }

    #[test]
    fn a_single_row_is_its_own_cost() {
        let energy = map(5, 1, &[4.0, 2.0, 7.0, 2.0, 9.0]);
        let cost = accumulate_cost(&energy).unwrap();
        assert_eq!(cost.row(0), energy.row(0));
        assert_eq!(cost_to_seam(&cost).unwrap(), vec![1]);
    }

    #[test]
    fn straight_down_wins_ties() {
        let cost = map(3, 2, &[0.0, 0.0, 0.0, 1.0, 1.0, 1.0]);
        assert_eq!(cost_to_seam(&cost).unwrap(), vec![0, 0]);

        let cost = map(3, 2, &[5.0, 0.0, 5.0, 1.0, 1.0, 1.0]);
        assert_eq!(cost_to_seam(&cost).unwrap(), vec![1, 1]);
    }

    #[test]
    fn right_beats_left_on_ties() {
        let cost = map(3, 2, &[5.0, 0.0, 5.0, 1.0, 2.0, 1.0]);
        assert_eq!(cost_to_seam(&cost).unwrap(), vec![1, 2]);

        let cost = map(3, 2, &[5.0, 0.0, 5.0, 0.5, 2.0, 1.0]);
        assert_eq!(cost_to_seam(&cost).unwrap(), vec![1, 0]);
    }

    #[test]
    fn seams_follow_the_valley() {
        #[rustfmt::skip]
        let energy = map(5, 4, &[
            9.0, 9.0, 0.0, 9.0, 9.0,
            9.0, 1.0, 9.0, 8.0, 9.0,
            9.0, 9.0, 9.0, 9.0, 0.0,
            9.0, 9.0, 9.0, 0.0, 9.0,
        ]);
        let seam = energy.find_vertical_seam().unwrap();
        assert_eq!(seam, vec![2, 3, 4, 3]);
    }

    #[test]
    fn seams_are_connected_and_in_range() {
        for (width, height) in [(1, 1), (1, 7), (7, 1), (4, 9), (13, 6)].iter() {
            let energy = TwoDimensionalMap::from_fn(*width, *height, |x, y| {
                f64::from((x * 7919 + y * 104_729) % 97)
            });
            let seam = energy.find_vertical_seam().unwrap();
            assert_eq!(seam.len(), *height as usize);
            assert!(is_connected(&seam, *width), "{:?}", seam);
        }
    }

    #[test]
    fn empty_maps_are_refused() {
        let energy = EnergyMap::new(0, 3);
        match accumulate_cost(&energy) {
            Err(CarveError::DegenerateGrid { width: 0, height: 3 }) => (),
            other => panic!("expected DegenerateGrid, got {:?}", other),
        }
        assert!(cost_to_seam(&EnergyMap::new(4, 0)).is_err());
    }
}
