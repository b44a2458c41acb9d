//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Tile indices and extents

use crate::grid::MAX_ZOOM;
use std::fmt;

/// Projected extent in Web Mercator meters
#[derive(PartialEq, Clone, Debug)]
pub struct Extent {
    pub minx: f64,
    pub miny: f64,
    pub maxx: f64,
    pub maxy: f64,
}

impl Extent {
    pub fn width(&self) -> f64 {
        self.maxx - self.minx
    }
    pub fn height(&self) -> f64 {
        self.maxy - self.miny
    }
    pub fn center(&self) -> (f64, f64) {
        (
            self.minx + self.width() / 2.0,
            self.miny + self.height() / 2.0,
        )
    }
    /// True for zero area, inverted or non-finite extents
    pub fn is_empty(&self) -> bool {
        let finite = self.minx.is_finite()
            && self.miny.is_finite()
            && self.maxx.is_finite()
            && self.maxy.is_finite();
        !finite || self.width() <= 0.0 || self.height() <= 0.0
    }
    /// Closed outer ring, counter-clockwise starting at (minx, miny)
    pub fn ring(&self) -> [(f64, f64); 5] {
        [
            (self.minx, self.miny),
            (self.maxx, self.miny),
            (self.maxx, self.maxy),
            (self.minx, self.maxy),
            (self.minx, self.miny),
        ]
    }
}

/// XYZ tile address (row 0 at the top)
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct TileIndex {
    pub z: u8,
    pub x: u32,
    pub y: u32,
}

impl TileIndex {
    pub fn new(z: u8, x: u32, y: u32) -> TileIndex {
        TileIndex { z, x, y }
    }
}

impl fmt::Display for TileIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.z, self.x, self.y)
    }
}

/// Inclusive min and max tile column/row numbers.
///
/// Limits are signed, a range computed for an extent reaching beyond the
/// projection bounds may start below 0 or end past the last column.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct TileRange {
    pub minx: i64,
    pub miny: i64,
    pub maxx: i64,
    pub maxy: i64,
}

impl TileRange {
    pub fn is_empty(&self) -> bool {
        self.minx > self.maxx || self.miny > self.maxy
    }
    /// Number of cells covered by the range
    pub fn count(&self) -> u64 {
        if self.is_empty() {
            0
        } else {
            let cols = self.maxx as i128 - self.minx as i128 + 1;
            let rows = self.maxy as i128 - self.miny as i128 + 1;
            cols.checked_mul(rows)
                .map_or(u64::MAX, |n| n.min(u64::MAX as i128) as u64)
        }
    }
    /// Intersection with the valid index space `[0, 2^zoom)`
    pub fn clip(&self, zoom: u8) -> TileRange {
        let last = (1i64 << zoom.min(MAX_ZOOM)) - 1;
        TileRange {
            minx: self.minx.max(0),
            miny: self.miny.max(0),
            maxx: self.maxx.min(last),
            maxy: self.maxy.min(last),
        }
    }
}
