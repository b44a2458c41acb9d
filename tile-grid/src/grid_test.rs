//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::error::GridError;
use crate::grid::{
    clamp_zoom, extent_wgs84_to_merc, lonlat_to_merc, round_zoom, MercatorGrid, TileType,
    INCHES_PER_METER, MAX_LATITUDE, MAX_ZOOM, ORIGIN_SHIFT,
};
use crate::tile::{Extent, TileIndex, TileRange};

fn assert_extent_eq(actual: Extent, expected: Extent) {
    const TOLERANCE: f64 = 0.000001;
    assert!(
        (actual.minx - expected.minx).abs() < TOLERANCE
            && (actual.miny - expected.miny).abs() < TOLERANCE
            && (actual.maxx - expected.maxx).abs() < TOLERANCE
            && (actual.maxy - expected.maxy).abs() < TOLERANCE,
        "{:?} != {:?}",
        actual,
        expected
    );
}

#[test]
fn test_bbox() {
    let grid = MercatorGrid::xyz();

    let extent000 = grid.tile_extent(0, 0, 0).unwrap();
    assert_eq!(
        extent000,
        Extent {
            minx: -20037508.342789244,
            miny: -20037508.342789244,
            maxx: 20037508.342789244,
            maxy: 20037508.342789244,
        }
    );

    let extent = grid.tile_extent(486, 332, 10).unwrap();
    assert_extent_eq(
        extent,
        Extent {
            minx: -1017529.7205322646,
            miny: 7005300.768279834,
            maxx: -978393.9620502554,
            maxy: 7044436.526761843,
        },
    );

    let extent_ch = grid.tile_extent(1073, 717, 11).unwrap();
    assert_extent_eq(
        extent_ch,
        Extent {
            minx: 958826.0828092508,
            miny: 5987771.047747567,
            maxx: 978393.9620502554,
            maxy: 6007338.926988572,
        },
    );

    // A 512px tile covers the same ground as a 256px tile one level up
    let grid = MercatorGrid::vector();
    assert_eq!(grid.tile_extent(0, 0, 1).unwrap().minx, -ORIGIN_SHIFT);
    assert_eq!(grid.tile_extent(0, 0, 1).unwrap().maxy, ORIGIN_SHIFT);
    assert_eq!(
        grid.tile_extent(1, 1, 1).unwrap(),
        MercatorGrid::xyz().tile_extent(1, 1, 1).unwrap()
    );
}

#[test]
fn test_resolutions() {
    let grid = MercatorGrid::xyz();
    assert!((grid.resolution(3).unwrap() - 19567.87924100512).abs() < 0.000001);
    assert!((grid.resolution(0).unwrap() - 156543.03392804097).abs() < 0.000001);
    assert!((grid.resolution(10).unwrap() - 152.8740565703525).abs() < 0.000001);

    for tile_size in &[1, 256, 512, 1000] {
        let grid = MercatorGrid::new(*tile_size).unwrap();
        let resolutions: Vec<f64> = (0..=MAX_ZOOM)
            .map(|z| grid.resolution(z).unwrap())
            .collect();
        assert!(resolutions.iter().all(|res| *res > 0.0));
        assert!(resolutions.windows(2).all(|pair| pair[0] > pair[1]));
    }

    assert_eq!(
        MercatorGrid::vector().resolution(4).unwrap(),
        MercatorGrid::xyz().resolution(5).unwrap()
    );
}

#[test]
fn test_invalid_params() {
    assert_eq!(MercatorGrid::new(0), Err(GridError::InvalidTileSize(0)));
    assert_eq!(MercatorGrid::new(256), Ok(MercatorGrid::xyz()));
    assert_eq!(MercatorGrid::from(TileType::Vector).tile_size(), 512);

    let grid = MercatorGrid::xyz();
    assert_eq!(grid.resolution(31), Err(GridError::InvalidZoom(31)));
    assert_eq!(grid.tile_index(0.0, 0.0, 255), Err(GridError::InvalidZoom(255)));
    assert_eq!(grid.tile_extent(0, 0, 31), Err(GridError::InvalidZoom(31)));
    assert_eq!(
        grid.tile_grid(&MercatorGrid::extent(), 40),
        Err(GridError::InvalidZoom(40))
    );
    assert_eq!(
        format!("{}", GridError::InvalidZoom(31)),
        "Invalid zoom level 31 (must be between 0 and 30)"
    );
}

#[test]
fn test_tile_index() {
    let grid = MercatorGrid::xyz();
    assert_eq!(grid.tile_index(0.0, 0.0, 0).unwrap(), (0, 0));
    assert_eq!(grid.tile_index(-1.0, 1.0, 1).unwrap(), (0, 0));
    assert_eq!(grid.tile_index(1.0, -1.0, 1).unwrap(), (1, 1));
    // Borders belong to the tile right of / below them
    assert_eq!(grid.tile_index(0.0, 0.0, 1).unwrap(), (1, 1));
    assert_eq!(
        grid.tile_index(-ORIGIN_SHIFT, ORIGIN_SHIFT, 5).unwrap(),
        (0, 0)
    );
    // Outside of the world
    assert_eq!(
        grid.tile_index(-ORIGIN_SHIFT - 1.0, ORIGIN_SHIFT + 1.0, 2).unwrap(),
        (-1, -1)
    );
    assert_eq!(
        grid.tile_index(ORIGIN_SHIFT, -ORIGIN_SHIFT, 2).unwrap(),
        (4, 4)
    );

    // Zurich
    assert_eq!(
        grid.tile_index(950000.0, 6000000.0, 11).unwrap(),
        (1072, 717)
    );
}

#[test]
fn test_round_trip() {
    for grid in &[MercatorGrid::xyz(), MercatorGrid::vector()] {
        for zoom in 0..6 {
            let ntiles = 1u32 << zoom;
            for x in 0..ntiles {
                for y in 0..ntiles {
                    let extent = grid.tile_extent(x, y, zoom).unwrap();
                    let (cx, cy) = extent.center();
                    assert_eq!(
                        grid.tile_index(cx, cy, zoom).unwrap(),
                        (x as i64, y as i64)
                    );
                }
            }
        }
        for &(x, y, zoom) in &[(486, 332, 10), (1073, 717, 11), (70000, 12345, 18)] {
            let (cx, cy) = grid.tile_extent(x, y, zoom).unwrap().center();
            assert_eq!(
                grid.tile_index(cx, cy, zoom).unwrap(),
                (x as i64, y as i64)
            );
        }
    }
}

#[test]
fn test_is_valid_tile() {
    let grid = MercatorGrid::xyz();
    assert!(grid.is_valid_tile(0, 0, 0));
    assert!(!grid.is_valid_tile(1, 0, 0));
    assert!(!grid.is_valid_tile(0, 1, 0));
    assert!(!grid.is_valid_tile(-1, 0, 3));
    assert!(!grid.is_valid_tile(0, -1, 3));
    assert!(!grid.is_valid_tile(8, 7, 3));
    assert!(!grid.is_valid_tile(7, 8, 3));
    for x in 0..8 {
        for y in 0..8 {
            assert!(grid.is_valid_tile(x, y, 3));
        }
    }
    assert!(grid.is_valid_tile((1 << 30) - 1, 0, 30));
    assert!(!grid.is_valid_tile(0, 0, 31));
}

#[test]
fn test_tile_range() {
    let grid = MercatorGrid::xyz();

    let range = grid
        .tile_range(&grid.tile_extent(0, 0, 0).unwrap(), 10)
        .unwrap();
    assert_eq!(
        range,
        TileRange {
            minx: 0,
            miny: 0,
            maxx: 1023,
            maxy: 1023,
        }
    );

    let range = grid
        .tile_range(&grid.tile_extent(486, 332, 10).unwrap(), 10)
        .unwrap();
    assert_eq!(
        range,
        TileRange {
            minx: 486,
            miny: 332,
            maxx: 486,
            maxy: 332,
        }
    );
    assert_eq!(range.count(), 1);

    // Extent beyond the projection bounds is not clipped
    let range = grid
        .tile_range(
            &Extent {
                minx: -ORIGIN_SHIFT * 2.0,
                miny: -100.0,
                maxx: -ORIGIN_SHIFT + 100.0,
                maxy: ORIGIN_SHIFT * 1.5,
            },
            1,
        )
        .unwrap();
    assert_eq!(
        range,
        TileRange {
            minx: -1,
            miny: -1,
            maxx: 0,
            maxy: 1,
        }
    );
    assert_eq!(
        range.clip(1),
        TileRange {
            minx: 0,
            miny: 0,
            maxx: 0,
            maxy: 1,
        }
    );
}

#[test]
fn test_tile_grid() {
    let grid = MercatorGrid::xyz();

    // Exactly one tile
    for &(x, y, zoom) in &[(0, 0, 0), (1, 0, 1), (486, 332, 10), (1073, 717, 11)] {
        let extent = grid.tile_extent(x, y, zoom).unwrap();
        assert_eq!(
            grid.tile_grid(&extent, zoom).unwrap(),
            vec![TileIndex::new(zoom, x, y)]
        );
    }

    // Full world
    for zoom in 0..6 {
        let tiles = grid.tile_grid(&MercatorGrid::extent(), zoom).unwrap();
        assert_eq!(tiles.len(), 1 << (2 * zoom));
        assert!(tiles
            .iter()
            .all(|t| grid.is_valid_tile(t.x as i64, t.y as i64, zoom)));
    }

    // Column-major order
    let tiles = grid.tile_grid(&MercatorGrid::extent(), 1).unwrap();
    assert_eq!(
        tiles,
        vec![
            TileIndex::new(1, 0, 0),
            TileIndex::new(1, 0, 1),
            TileIndex::new(1, 1, 0),
            TileIndex::new(1, 1, 1),
        ]
    );

    // Viewport around the origin touches the four center tiles
    let viewport = Extent {
        minx: -1000.0,
        miny: -1000.0,
        maxx: 1000.0,
        maxy: 1000.0,
    };
    let tiles = grid.tile_grid(&viewport, 3).unwrap();
    assert_eq!(
        tiles,
        vec![
            TileIndex::new(3, 3, 3),
            TileIndex::new(3, 3, 4),
            TileIndex::new(3, 4, 3),
            TileIndex::new(3, 4, 4),
        ]
    );
    assert_eq!(grid.tile_grid(&viewport, 3).unwrap(), tiles);

    // Larger than the world
    let viewport = Extent {
        minx: -3.0 * ORIGIN_SHIFT,
        miny: -3.0 * ORIGIN_SHIFT,
        maxx: 3.0 * ORIGIN_SHIFT,
        maxy: 3.0 * ORIGIN_SHIFT,
    };
    assert_eq!(grid.tile_grid(&viewport, 2).unwrap().len(), 16);

    // Completely outside
    let viewport = Extent {
        minx: ORIGIN_SHIFT + 10.0,
        miny: 0.0,
        maxx: ORIGIN_SHIFT + 1000.0,
        maxy: 1000.0,
    };
    assert!(grid.tile_grid(&viewport, 4).unwrap().is_empty());
}

#[test]
fn test_empty_viewport() {
    let grid = MercatorGrid::xyz();
    let point = Extent {
        minx: 1000.0,
        miny: 1000.0,
        maxx: 1000.0,
        maxy: 1000.0,
    };
    assert!(point.is_empty());
    assert!(grid.tile_grid(&point, 5).unwrap().is_empty());

    let inverted = Extent {
        minx: 1000.0,
        miny: 0.0,
        maxx: 0.0,
        maxy: 1000.0,
    };
    assert!(grid.tile_grid(&inverted, 5).unwrap().is_empty());

    let nan = Extent {
        minx: f64::NAN,
        miny: 0.0,
        maxx: 1000.0,
        maxy: 1000.0,
    };
    assert!(grid.tile_grid(&nan, 5).unwrap().is_empty());
}

#[test]
fn test_estimate_zoom() {
    let grid = MercatorGrid::xyz();
    assert_eq!(grid.estimate_zoom(500000.0, 96.0).unwrap(), 10);
    assert_eq!(grid.estimate_zoom(1000000.0, 96.0).unwrap(), 9);
    assert_eq!(grid.estimate_zoom(25000.0, 96.0).unwrap(), 15);
    assert_eq!(grid.estimate_zoom(1000.0, 96.0).unwrap(), 19);
    // Whole world at once
    assert_eq!(grid.estimate_zoom(1000000000.0, 96.0).unwrap(), -1);
    // Vector tiles are one level lower
    assert_eq!(
        MercatorGrid::vector().estimate_zoom(1000000.0, 96.0).unwrap(),
        8
    );

    let scales = [
        1000.0, 5000.0, 25000.0, 100000.0, 1e6, 1e7, 1e8, 5e8, 1e9, 5e9,
    ];
    let zooms: Vec<i32> = scales
        .iter()
        .map(|scale| grid.estimate_zoom(*scale, 96.0).unwrap())
        .collect();
    assert!(zooms.windows(2).all(|pair| pair[0] >= pair[1]));
    assert!(zooms[0] > zooms[zooms.len() - 1]);

    for zoom in 0..=22 {
        for dpi in &[72.0, 96.0, 192.0] {
            let scale = grid.scale_denominator(zoom, *dpi).unwrap();
            assert_eq!(grid.estimate_zoom(scale, *dpi).unwrap(), zoom as i32);
        }
    }
    assert!((grid.scale_denominator(10, 96.0).unwrap() - 577790.5542887787).abs() < 0.0001);
}

#[test]
fn test_zoom_rounding() {
    // Ties round away from zero
    assert_eq!(round_zoom(2.5), 3);
    assert_eq!(round_zoom(-0.5), -1);
    assert_eq!(round_zoom(2.4999), 2);
    assert_eq!(round_zoom(9.2086), 9);

    assert_eq!(clamp_zoom(-3, 22), 0);
    assert_eq!(clamp_zoom(12, 22), 12);
    assert_eq!(clamp_zoom(25, 22), 22);
    assert_eq!(clamp_zoom(40, 255), MAX_ZOOM);

    // Scales halfway between two levels go through the same rounding
    let grid = MercatorGrid::xyz();
    let dpi = 96.0;
    for zoom in 0..=21u8 {
        let scale = grid.scale_denominator(zoom, dpi).unwrap() / 2f64.sqrt();
        let meters_per_pixel = scale / (INCHES_PER_METER * dpi);
        let level = ((2.0 * ORIGIN_SHIFT) / (256.0 * meters_per_pixel)).log2();
        assert!((level - (zoom as f64 + 0.5)).abs() < 1e-9);
        let estimated = grid.estimate_zoom(scale, dpi).unwrap();
        assert_eq!(estimated, round_zoom(level));
        assert!(estimated == zoom as i32 || estimated == zoom as i32 + 1);
    }
}

#[test]
fn test_thin_viewport() {
    let grid = MercatorGrid::xyz();

    // Narrower than the covering tolerance, right of the center line
    let viewport = Extent {
        minx: 0.0001,
        miny: 1000.0,
        maxx: 0.0002,
        maxy: 2000.0,
    };
    assert!(!viewport.is_empty());
    assert_eq!(
        grid.tile_grid(&viewport, 1).unwrap(),
        vec![TileIndex::new(1, 1, 0)]
    );

    // Mirrored to the left of the center line
    let viewport = Extent {
        minx: -0.0002,
        miny: 1000.0,
        maxx: -0.0001,
        maxy: 2000.0,
    };
    assert_eq!(
        grid.tile_grid(&viewport, 1).unwrap(),
        vec![TileIndex::new(1, 0, 0)]
    );

    // Flat in y, just below the equator
    let viewport = Extent {
        minx: 1000.0,
        miny: -0.0002,
        maxx: 2000.0,
        maxy: -0.0001,
    };
    assert_eq!(
        grid.tile_grid(&viewport, 1).unwrap(),
        vec![TileIndex::new(1, 1, 1)]
    );

    // Thin box straddling a tile border touches both tiles
    let viewport = Extent {
        minx: -0.0001,
        miny: 1000.0,
        maxx: 0.0001,
        maxy: 2000.0,
    };
    assert_eq!(
        grid.tile_grid(&viewport, 1).unwrap(),
        vec![TileIndex::new(1, 0, 0), TileIndex::new(1, 1, 0)]
    );

    // Thin boxes at high zoom still yield one tile
    let viewport = Extent {
        minx: 950000.0,
        miny: 6000000.0,
        maxx: 950000.00001,
        maxy: 6000000.00001,
    };
    assert_eq!(
        grid.tile_grid(&viewport, 11).unwrap(),
        vec![TileIndex::new(11, 1072, 717)]
    );
}

#[test]
fn test_estimate_zoom_invalid() {
    let grid = MercatorGrid::xyz();
    assert_eq!(
        grid.estimate_zoom(0.0, 96.0),
        Err(GridError::InvalidScale(0.0))
    );
    assert_eq!(
        grid.estimate_zoom(-5.0, 96.0),
        Err(GridError::InvalidScale(-5.0))
    );
    assert!(grid.estimate_zoom(f64::NAN, 96.0).is_err());
    assert_eq!(
        grid.estimate_zoom(1000.0, 0.0),
        Err(GridError::InvalidDpi(0.0))
    );
    assert!(grid.scale_denominator(3, f64::INFINITY).is_err());
}

#[test]
fn test_lonlat_to_merc() {
    let (x, y) = lonlat_to_merc(180.0, 0.0);
    assert!((x - ORIGIN_SHIFT).abs() < 0.000001);
    assert!(y.abs() < 0.000001);

    let (_, y) = lonlat_to_merc(0.0, MAX_LATITUDE);
    assert!((y - ORIGIN_SHIFT).abs() < 0.01);
    // Poles are clamped to the projection bounds
    assert_eq!(lonlat_to_merc(10.0, 90.0), lonlat_to_merc(10.0, MAX_LATITUDE));

    let extent = extent_wgs84_to_merc(&Extent {
        minx: -180.0,
        miny: -90.0,
        maxx: 180.0,
        maxy: 90.0,
    });
    assert_eq!(
        MercatorGrid::xyz().tile_grid(&extent, 2).unwrap().len(),
        16
    );
}
