//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::grid::MAX_ZOOM;
use thiserror::Error;

/// Rejected grid calculation input
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GridError {
    #[error("Invalid tile size {0} (must be a positive number of pixels)")]
    InvalidTileSize(u32),

    #[error("Invalid zoom level {0} (must be between 0 and {max})", max = MAX_ZOOM)]
    InvalidZoom(u8),

    #[error("Invalid display scale {0} (must be a positive number)")]
    InvalidScale(f64),

    #[error("Invalid DPI {0} (must be a positive number)")]
    InvalidDpi(f64),
}
