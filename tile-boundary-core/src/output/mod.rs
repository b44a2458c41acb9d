//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Boundary layer encoders

mod csv;
mod geojson;

pub use self::csv::layer_to_csv;
pub use self::geojson::layer_to_geojson;
