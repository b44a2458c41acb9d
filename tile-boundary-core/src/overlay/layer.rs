//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::overlay::{OverlayError, TileBoundary};
use tile_grid::{Extent, MercatorGrid};

/// Tile boundaries covering a viewport at one zoom level
#[derive(Clone, Debug)]
pub struct BoundaryLayer {
    pub zoom: u8,
    pub tile_size: u32,
    pub boundaries: Vec<TileBoundary>,
}

impl BoundaryLayer {
    /// Collect the boundaries of all tiles intersecting `extent`.
    ///
    /// Fails without enumerating tiles when more than `max_tiles` would be created.
    pub fn build(
        grid: &MercatorGrid,
        extent: &Extent,
        zoom: u8,
        max_tiles: usize,
    ) -> Result<BoundaryLayer, OverlayError> {
        if !extent.is_empty() {
            let count = grid.tile_range(extent, zoom)?.clip(zoom).count();
            if count > max_tiles as u64 {
                return Err(OverlayError::TooManyTiles {
                    count,
                    zoom,
                    max: max_tiles,
                });
            }
        }
        let boundaries = grid
            .tile_grid(extent, zoom)?
            .into_iter()
            .map(|tile| {
                grid.tile_extent(tile.x, tile.y, tile.z)
                    .map(|extent| TileBoundary { tile, extent })
            })
            .collect::<Result<Vec<_>, _>>()?;
        debug!(
            "{} tile boundaries at zoom level {} ({}px tiles)",
            boundaries.len(),
            zoom,
            grid.tile_size()
        );
        Ok(BoundaryLayer {
            zoom,
            tile_size: grid.tile_size(),
            boundaries,
        })
    }
    pub fn len(&self) -> usize {
        self.boundaries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.boundaries.is_empty()
    }
}
