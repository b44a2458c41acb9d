//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::overlay::OverlayError;
use std::str::FromStr;
use tile_grid::{extent_wgs84_to_merc, Extent};

/// Visible map area as reported by the map view
#[derive(Clone, Debug)]
pub struct Viewport {
    pub extent: Extent,
    /// SRID of `extent` (3857 or 4326)
    pub srid: i32,
    /// Display scale denominator
    pub scale: Option<f64>,
    /// Logical screen DPI
    pub dpi: Option<f64>,
}

impl Viewport {
    /// Viewport in Web Mercator coordinates
    pub fn new(extent: Extent) -> Viewport {
        Viewport {
            extent,
            srid: 3857,
            scale: None,
            dpi: None,
        }
    }
    pub fn with_srid(mut self, srid: i32) -> Viewport {
        self.srid = srid;
        self
    }
    pub fn with_scale(mut self, scale: f64) -> Viewport {
        self.scale = Some(scale);
        self
    }
    pub fn with_dpi(mut self, dpi: f64) -> Viewport {
        self.dpi = Some(dpi);
        self
    }
    /// Viewport extent in Web Mercator coordinates
    pub fn projected_extent(&self) -> Result<Extent, OverlayError> {
        match self.srid {
            3857 | 900913 => Ok(self.extent.clone()),
            4326 => Ok(extent_wgs84_to_merc(&self.extent)),
            srid => Err(OverlayError::UnsupportedSrid(srid)),
        }
    }
}

impl FromStr for Viewport {
    type Err = String;

    /// Parse `minx,miny,maxx,maxy[,srid]`
    fn from_str(s: &str) -> Result<Viewport, String> {
        let arr = s
            .split(',')
            .map(|v| v.trim().parse::<f64>())
            .collect::<Result<Vec<f64>, _>>()
            .map_err(|_| format!("Error parsing '{}' as list of float values", s))?;
        let srid = match arr.len() {
            4 => 3857,
            5 if arr[4].fract() == 0.0 => arr[4] as i32,
            _ => return Err(format!("Expected minx,miny,maxx,maxy[,srid], got '{}'", s)),
        };
        let extent = Extent {
            minx: arr[0],
            miny: arr[1],
            maxx: arr[2],
            maxy: arr[3],
        };
        Ok(Viewport::new(extent).with_srid(srid))
    }
}
