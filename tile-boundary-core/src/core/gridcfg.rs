//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::config::GridCfg;
use crate::core::Config;
use tile_grid::{MercatorGrid, TileType};

pub fn tile_type_from_str(name: &str) -> Result<TileType, String> {
    match name.to_lowercase().as_str() {
        "xyz" | "raster" => Ok(TileType::Xyz),
        "vector" | "mvt" => Ok(TileType::Vector),
        _ => Err(format!("Unknown tile type '{}'", name)),
    }
}

impl<'a> Config<'a, GridCfg> for MercatorGrid {
    fn from_config(grid_cfg: &GridCfg) -> Result<Self, String> {
        let tile_type = tile_type_from_str(grid_cfg.tile_type.as_deref().unwrap_or("xyz"))?;
        match grid_cfg.tile_size {
            Some(size) => {
                if grid_cfg.tile_type.is_some() && size != tile_type.tile_size() {
                    info!(
                        "Using tile size {} instead of {:?} preset",
                        size, tile_type
                    );
                }
                MercatorGrid::new(size).map_err(|e| e.to_string())
            }
            None => Ok(MercatorGrid::from(tile_type)),
        }
    }
    fn gen_config() -> String {
        let toml = r#"
[grid]
# Tile size preset: "xyz" (256px raster tiles) or "vector" (512px vector tiles)
tile_type = "xyz"
# Custom tile size in pixels
#tile_size = 256
"#;
        toml.to_string()
    }
}
