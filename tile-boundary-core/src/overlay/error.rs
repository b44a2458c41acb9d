//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use thiserror::Error;
use tile_grid::GridError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum OverlayError {
    #[error(transparent)]
    Grid(#[from] GridError),

    #[error("Unsupported viewport SRID {0} (expected 3857 or 4326)")]
    UnsupportedSrid(i32),

    #[error("Display scale required for automatic zoom level")]
    MissingScale,

    #[error("Viewport covers {count} tiles at zoom level {zoom} (limit: {max})")]
    TooManyTiles { count: u64, zoom: u8, max: usize },
}
