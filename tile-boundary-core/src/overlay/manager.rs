//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::config::{ApplicationCfg, OverlayCfg};
use crate::core::Config;
use crate::overlay::{BoundaryLayer, OverlayError, Viewport};
use tile_grid::{clamp_zoom, GridError, MercatorGrid, MAX_ZOOM};

/// Keeps the tile boundaries of the current viewport.
///
/// The map view calls [`BoundaryOverlay::update`] whenever its extent or scale
/// changes. Each update replaces the previous layer.
pub struct BoundaryOverlay {
    grid: MercatorGrid,
    config: OverlayCfg,
    current: Option<BoundaryLayer>,
}

impl BoundaryOverlay {
    pub fn new(grid: MercatorGrid, config: OverlayCfg) -> BoundaryOverlay {
        BoundaryOverlay {
            grid,
            config,
            current: None,
        }
    }
    pub fn grid(&self) -> &MercatorGrid {
        &self.grid
    }
    /// Configured zoom level or estimation from the viewport scale
    pub fn zoom_level(&self, viewport: &Viewport) -> Result<u8, OverlayError> {
        if let Some(zoom) = self.config.zoom {
            if zoom > MAX_ZOOM {
                return Err(GridError::InvalidZoom(zoom).into());
            }
            return Ok(zoom);
        }
        let scale = viewport.scale.ok_or(OverlayError::MissingScale)?;
        let dpi = viewport.dpi.unwrap_or(self.config.dpi);
        let estimated = self.grid.estimate_zoom(scale, dpi)?;
        let zoom = clamp_zoom(estimated, self.config.maxzoom);
        if zoom as i32 != estimated {
            warn!(
                "Estimated zoom level {} out of range, using {}",
                estimated, zoom
            );
        }
        debug!("Scale 1:{} at {} dpi -> zoom level {}", scale, dpi, zoom);
        Ok(zoom)
    }
    /// Rebuild the tile boundaries for a changed viewport.
    ///
    /// The previous layer is dropped even when the update fails.
    pub fn update(&mut self, viewport: &Viewport) -> Result<&BoundaryLayer, OverlayError> {
        self.current = None;
        let zoom = self.zoom_level(viewport)?;
        let extent = viewport.projected_extent()?;
        let layer = BoundaryLayer::build(&self.grid, &extent, zoom, self.config.max_tiles)?;
        Ok(self.current.get_or_insert(layer))
    }
    /// Layer of the last successful update
    pub fn current(&self) -> Option<&BoundaryLayer> {
        self.current.as_ref()
    }
    pub fn clear(&mut self) -> Option<BoundaryLayer> {
        self.current.take()
    }
}

impl<'a> Config<'a, ApplicationCfg> for BoundaryOverlay {
    fn from_config(config: &ApplicationCfg) -> Result<Self, String> {
        let grid = MercatorGrid::from_config(&config.grid)?;
        if let Some(zoom) = config.overlay.zoom {
            if zoom > MAX_ZOOM {
                return Err(GridError::InvalidZoom(zoom).to_string());
            }
        }
        Ok(BoundaryOverlay::new(grid, config.overlay.clone()))
    }
    fn gen_config() -> String {
        let mut config = String::new();
        config.push_str(&MercatorGrid::gen_config());
        config.push_str(
            r#"
[overlay]
# Fixed zoom level, estimated from the display scale when not set
#zoom = 10
# Screen DPI used for zoom estimation
dpi = 96.0
# Maximal estimated zoom level
maxzoom = 22
# Maximal number of tiles per viewport
max_tiles = 10000
"#,
        );
        config
    }
}
