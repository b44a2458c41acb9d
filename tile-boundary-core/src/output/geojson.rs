//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::overlay::{BoundaryLayer, TileBoundary};
use serde_json::Value;

fn boundary_feature(boundary: &TileBoundary) -> Value {
    let ring: Vec<[f64; 2]> = boundary.ring().into_iter().map(|(x, y)| [x, y]).collect();
    json!({
        "type": "Feature",
        "geometry": {
            "type": "Polygon",
            "coordinates": [ring]
        },
        "properties": {
            "z": boundary.tile.z,
            "x": boundary.tile.x,
            "y": boundary.tile.y,
            "label": boundary.label()
        }
    })
}

/// GeoJSON FeatureCollection in EPSG:3857
pub fn layer_to_geojson(layer: &BoundaryLayer) -> Value {
    let features: Vec<Value> = layer.boundaries.iter().map(boundary_feature).collect();
    json!({
        "type": "FeatureCollection",
        "name": "tile_boundary",
        "crs": {
            "type": "name",
            "properties": { "name": "urn:ogc:def:crs:EPSG::3857" }
        },
        "features": features
    })
}
