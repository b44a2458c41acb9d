//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use tile_grid::{Extent, TileIndex};

/// Outline of a single tile
#[derive(PartialEq, Clone, Debug)]
pub struct TileBoundary {
    pub tile: TileIndex,
    pub extent: Extent,
}

impl TileBoundary {
    /// `z/x/y` label
    pub fn label(&self) -> String {
        self.tile.to_string()
    }
    /// Closed polygon ring
    pub fn ring(&self) -> Vec<(f64, f64)> {
        self.extent.ring().to_vec()
    }
}
