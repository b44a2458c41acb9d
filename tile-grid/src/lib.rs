//! A library for Web Mercator tile grid calculations
//!
//! ## Tile extents
//!
//! ```rust
//! use tile_grid::{Extent, MercatorGrid, ORIGIN_SHIFT};
//!
//! let grid = MercatorGrid::xyz();
//! assert_eq!(
//!     grid.tile_extent(0, 0, 0).unwrap(),
//!     Extent {
//!         minx: -ORIGIN_SHIFT,
//!         miny: -ORIGIN_SHIFT,
//!         maxx: ORIGIN_SHIFT,
//!         maxy: ORIGIN_SHIFT,
//!     }
//! );
//! assert_eq!(grid.tile_index(1000.0, 1000.0, 1).unwrap(), (1, 0));
//! ```
//!
//! ## Tiles covering a viewport
//!
//! ```rust
//! use tile_grid::{Extent, MercatorGrid};
//!
//! let grid = MercatorGrid::vector();
//! let viewport = Extent {
//!     minx: -1000.0,
//!     miny: -1000.0,
//!     maxx: 1000.0,
//!     maxy: 1000.0,
//! };
//! for tile in grid.tile_grid(&viewport, 4).unwrap() {
//!     println!("Tile {}", tile);
//! }
//! ```
//!
//! ## Zoom level from display scale
//!
//! ```rust
//! use tile_grid::MercatorGrid;
//!
//! let grid = MercatorGrid::xyz();
//! let scale = grid.scale_denominator(12, 96.0).unwrap();
//! assert_eq!(grid.estimate_zoom(scale, 96.0).unwrap(), 12);
//! ```

mod error;
mod grid;
mod grid_iterator;
#[cfg(test)]
mod grid_test;
mod tile;

pub use error::GridError;
pub use grid::{
    clamp_zoom, extent_wgs84_to_merc, lonlat_to_merc, MercatorGrid, TileType, EARTH_RADIUS,
    INCHES_PER_METER, MAX_LATITUDE, MAX_ZOOM, ORIGIN_SHIFT,
};
pub use grid_iterator::TileIter;
pub use tile::{Extent, TileIndex, TileRange};
