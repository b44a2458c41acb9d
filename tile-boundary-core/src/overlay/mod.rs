//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Tile boundaries for a map viewport

mod boundary;
mod error;
mod layer;
mod manager;
mod viewport;

pub use self::boundary::TileBoundary;
pub use self::error::OverlayError;
pub use self::layer::BoundaryLayer;
pub use self::manager::BoundaryOverlay;
pub use self::viewport::Viewport;
