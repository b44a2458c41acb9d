//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Web Mercator tile grid

use crate::error::GridError;
use crate::grid_iterator::TileIter;
use crate::tile::{Extent, TileIndex, TileRange};
use std::f64::consts;

/// Half the Web Mercator world width in meters
pub const ORIGIN_SHIFT: f64 = 20037508.342789244;
/// Spherical Mercator earth radius
pub const EARTH_RADIUS: f64 = 6378137.0;
/// Latitude where the Web Mercator square ends
pub const MAX_LATITUDE: f64 = 85.0511287798066;
/// Highest supported zoom level
pub const MAX_ZOOM: u8 = 30;
/// Inches per meter, as used for screen scale conversions
pub const INCHES_PER_METER: f64 = 39.37;

// Tolerance in tile units for extent limits
const EPSILON: f64 = 0.0000001;

pub type Result<T> = std::result::Result<T, GridError>;

/// Tile size presets
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum TileType {
    /// Classic XYZ raster tiles (256px)
    Xyz,
    /// Vector tiles (512px)
    Vector,
}

impl TileType {
    pub fn tile_size(&self) -> u32 {
        match self {
            TileType::Xyz => 256,
            TileType::Vector => 512,
        }
    }
}

/// Web Mercator tile grid with a fixed tile size
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct MercatorGrid {
    /// The width and height of an individual tile, in pixels.
    tile_size: u32,
}

impl MercatorGrid {
    pub fn new(tile_size: u32) -> Result<MercatorGrid> {
        if tile_size == 0 {
            return Err(GridError::InvalidTileSize(tile_size));
        }
        Ok(MercatorGrid { tile_size })
    }
    /// XYZ raster tile grid (Google maps compatible)
    pub fn xyz() -> MercatorGrid {
        MercatorGrid::from(TileType::Xyz)
    }
    /// Vector tile grid
    pub fn vector() -> MercatorGrid {
        MercatorGrid::from(TileType::Vector)
    }
    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }
    /// Full projected extent of the grid
    pub fn extent() -> Extent {
        Extent {
            minx: -ORIGIN_SHIFT,
            miny: -ORIGIN_SHIFT,
            maxx: ORIGIN_SHIFT,
            maxy: ORIGIN_SHIFT,
        }
    }
    /// Ground units per pixel
    pub fn resolution(&self, zoom: u8) -> Result<f64> {
        check_zoom(zoom)?;
        Ok((2.0 * ORIGIN_SHIFT) / (self.tile_size as f64 * (zoom as f64).exp2()))
    }
    /// Ground units covered by one tile
    fn tile_span(&self, zoom: u8) -> Result<f64> {
        Ok(self.tile_size as f64 * self.resolution(zoom)?)
    }
    /// Fractional column and row of a projected point
    fn tile_coords(&self, x: f64, y: f64, zoom: u8) -> Result<(f64, f64)> {
        let span = self.tile_span(zoom)?;
        Ok(((x + ORIGIN_SHIFT) / span, (ORIGIN_SHIFT - y) / span))
    }
    /// Column and row of the tile containing a projected point.
    ///
    /// Points outside the projection bounds give indices outside `[0, 2^zoom)`,
    /// check them with [`MercatorGrid::is_valid_tile`].
    pub fn tile_index(&self, x: f64, y: f64, zoom: u8) -> Result<(i64, i64)> {
        let (tx, ty) = self.tile_coords(x, y, zoom)?;
        Ok((tx.floor() as i64, ty.floor() as i64))
    }
    /// Extent of a given tile in XYZ adressing scheme
    pub fn tile_extent(&self, xtile: u32, ytile: u32, zoom: u8) -> Result<Extent> {
        let span = self.tile_span(zoom)?;
        Ok(Extent {
            minx: xtile as f64 * span - ORIGIN_SHIFT,
            miny: ORIGIN_SHIFT - (ytile as f64 + 1.0) * span,
            maxx: (xtile as f64 + 1.0) * span - ORIGIN_SHIFT,
            maxy: ORIGIN_SHIFT - ytile as f64 * span,
        })
    }
    /// Check whether a tile lies within the grid at zoom level `zoom`
    pub fn is_valid_tile(&self, xtile: i64, ytile: i64, zoom: u8) -> bool {
        if zoom > MAX_ZOOM {
            return false;
        }
        let ntiles = 1i64 << zoom;
        (0..ntiles).contains(&xtile) && (0..ntiles).contains(&ytile)
    }
    /// Nearest zoom level for a display scale denominator at a given screen DPI
    ///
    /// Fractional levels are rounded half away from zero. The result is not
    /// limited to `0..=MAX_ZOOM`, see [`clamp_zoom`].
    pub fn estimate_zoom(&self, scale: f64, dpi: f64) -> Result<i32> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(GridError::InvalidScale(scale));
        }
        if !dpi.is_finite() || dpi <= 0.0 {
            return Err(GridError::InvalidDpi(dpi));
        }
        let meters_per_pixel = scale / (INCHES_PER_METER * dpi);
        let zoom = ((2.0 * ORIGIN_SHIFT) / (self.tile_size as f64 * meters_per_pixel)).log2();
        Ok(round_zoom(zoom))
    }
    /// Display scale denominator matching a zoom level at a given screen DPI
    pub fn scale_denominator(&self, zoom: u8, dpi: f64) -> Result<f64> {
        if !dpi.is_finite() || dpi <= 0.0 {
            return Err(GridError::InvalidDpi(dpi));
        }
        Ok(self.resolution(zoom)? * INCHES_PER_METER * dpi)
    }
    /// Tile index limits covering extent
    ///
    /// Edges falling on a tile border don't include the neighbouring tile.
    pub fn tile_range(&self, extent: &Extent, zoom: u8) -> Result<TileRange> {
        // Based on mapcache_grid_compute_limits
        let (x0, y0) = self.tile_coords(extent.minx, extent.miny, zoom)?;
        let (x1, y1) = self.tile_coords(extent.maxx, extent.maxy, zoom)?;
        let (minx, maxx) = (x0.min(x1), x0.max(x1));
        // y axis is inverted
        let (miny, maxy) = (y0.min(y1), y0.max(y1));
        let (minx, maxx) = covering_limits(minx, maxx);
        let (miny, maxy) = covering_limits(miny, maxy);
        Ok(TileRange {
            minx,
            miny,
            maxx,
            maxy,
        })
    }
    /// All valid tiles intersecting extent, column by column
    pub fn tile_grid(&self, extent: &Extent, zoom: u8) -> Result<Vec<TileIndex>> {
        check_zoom(zoom)?;
        if extent.is_empty() {
            return Ok(Vec::new());
        }
        let range = self.tile_range(extent, zoom)?;
        Ok(TileIter::new(zoom, &range)
            .filter(|tile| self.is_valid_tile(tile.x as i64, tile.y as i64, zoom))
            .collect())
    }
}

impl From<TileType> for MercatorGrid {
    fn from(tile_type: TileType) -> MercatorGrid {
        MercatorGrid {
            tile_size: tile_type.tile_size(),
        }
    }
}

impl Default for MercatorGrid {
    fn default() -> MercatorGrid {
        MercatorGrid::xyz()
    }
}

fn check_zoom(zoom: u8) -> Result<()> {
    if zoom > MAX_ZOOM {
        Err(GridError::InvalidZoom(zoom))
    } else {
        Ok(())
    }
}

/// First and last tile touched by the fractional tile interval `lo..hi`
fn covering_limits(lo: f64, hi: f64) -> (i64, i64) {
    let first = (lo + EPSILON).floor() as i64;
    let last = ((hi - EPSILON).ceil() as i64).saturating_sub(1);
    if last >= first {
        return (first, last);
    }
    // Interval thinner than EPSILON: keep the tile containing it
    let first = lo.floor() as i64;
    let last = (hi.ceil() as i64).saturating_sub(1).max(first);
    (first, last)
}

pub(crate) fn round_zoom(zoom: f64) -> i32 {
    zoom.round() as i32
}

/// Limit an estimated zoom level to `0..=maxzoom`
pub fn clamp_zoom(zoom: i32, maxzoom: u8) -> u8 {
    zoom.max(0).min(maxzoom.min(MAX_ZOOM) as i32) as u8
}

/// Returns the Spherical Mercator (x, y) in meters
pub fn lonlat_to_merc(lon: f64, lat: f64) -> (f64, f64) {
    let lat = lat.max(-MAX_LATITUDE).min(MAX_LATITUDE);
    let x = EARTH_RADIUS * lon.to_radians();
    let y = EARTH_RADIUS * ((consts::PI * 0.25) + (0.5 * lat.to_radians())).tan().ln();
    (x, y)
}

/// Projected extent
pub fn extent_wgs84_to_merc(extent: &Extent) -> Extent {
    let (minx, miny) = lonlat_to_merc(extent.minx, extent.miny);
    let (maxx, maxy) = lonlat_to_merc(extent.maxx, extent.maxy);
    Extent {
        minx,
        miny,
        maxx,
        maxy,
    }
}
