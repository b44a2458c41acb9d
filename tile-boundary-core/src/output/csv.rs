//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::overlay::BoundaryLayer;

/// One line per tile: `z,x,y,minx,miny,maxx,maxy`
pub fn layer_to_csv(layer: &BoundaryLayer) -> String {
    let mut csv = String::from("z,x,y,minx,miny,maxx,maxy\n");
    for boundary in &layer.boundaries {
        let (tile, extent) = (&boundary.tile, &boundary.extent);
        csv.push_str(&format!(
            "{},{},{},{},{},{},{}\n",
            tile.z, tile.x, tile.y, extent.minx, extent.miny, extent.maxx, extent.maxy
        ));
    }
    csv
}
