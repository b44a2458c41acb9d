//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Grid iterators

use crate::tile::{TileIndex, TileRange};
use std::convert::TryFrom;

/// Column-major iterator over the valid tiles of a tile range
pub struct TileIter {
    z: u8,
    x: i64,
    y: i64,
    limit: TileRange,
    finished: bool,
}

impl TileIter {
    pub fn new(zoom: u8, range: &TileRange) -> TileIter {
        let limit = range.clip(zoom);
        TileIter {
            z: zoom,
            x: limit.minx,
            y: limit.miny,
            finished: limit.is_empty(),
            limit,
        }
    }
}

impl Iterator for TileIter {
    type Item = TileIndex;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let current = TileIndex::new(self.z, self.x as u32, self.y as u32);
        if self.y < self.limit.maxy {
            self.y += 1;
        } else if self.x < self.limit.maxx {
            self.x += 1;
            self.y = self.limit.miny;
        } else {
            self.finished = true;
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.finished {
            return (0, Some(0));
        }
        let rows = (self.limit.maxy - self.limit.miny + 1) as u64;
        let remaining = ((self.limit.maxx - self.x) as u64)
            .checked_mul(rows)
            .and_then(|n| n.checked_add((self.limit.maxy - self.y + 1) as u64))
            .and_then(|n| usize::try_from(n).ok());
        match remaining {
            Some(n) => (n, Some(n)),
            None => (usize::MAX, None),
        }
    }
}

#[test]
fn test_mercator_iter() {
    let range = TileRange {
        minx: 0,
        miny: 0,
        maxx: 1,
        maxy: 1,
    };
    let cells = TileIter::new(1, &range).collect::<Vec<_>>();
    assert_eq!(
        cells,
        vec![
            TileIndex::new(1, 0, 0),
            TileIndex::new(1, 0, 1),
            TileIndex::new(1, 1, 0),
            TileIndex::new(1, 1, 1),
        ]
    );

    let cells = TileIter::new(0, &range).collect::<Vec<_>>();
    assert_eq!(cells, vec![TileIndex::new(0, 0, 0)]);

    let range = TileRange {
        minx: 2,
        miny: 1,
        maxx: 3,
        maxy: 3,
    };
    let iter = TileIter::new(2, &range);
    assert_eq!(iter.size_hint(), (6, Some(6)));
    let cells = iter.map(|t| (t.x, t.y)).collect::<Vec<_>>();
    assert_eq!(cells, vec![(2, 1), (2, 2), (2, 3), (3, 1), (3, 2), (3, 3)]);
}

#[test]
fn test_out_of_range() {
    // partly outside
    let range = TileRange {
        minx: -2,
        miny: -1,
        maxx: 0,
        maxy: 5,
    };
    let cells = TileIter::new(1, &range).collect::<Vec<_>>();
    assert_eq!(cells, vec![TileIndex::new(1, 0, 0), TileIndex::new(1, 0, 1)]);

    // completely outside
    let range = TileRange {
        minx: 4,
        miny: 0,
        maxx: 6,
        maxy: 1,
    };
    assert_eq!(TileIter::new(2, &range).count(), 0);

    // inverted
    let range = TileRange {
        minx: 1,
        miny: 0,
        maxx: 0,
        maxy: 1,
    };
    assert_eq!(TileIter::new(3, &range).count(), 0);
}

#[test]
fn test_size_hint_full_world() {
    let range = TileRange {
        minx: 0,
        miny: 0,
        maxx: i64::MAX,
        maxy: i64::MAX,
    };
    let mut iter = TileIter::new(30, &range);
    let total: u64 = 1 << 60;
    let expected = match usize::try_from(total) {
        Ok(n) => (n, Some(n)),
        Err(_) => (usize::MAX, None),
    };
    assert_eq!(iter.size_hint(), expected);
    assert_eq!(iter.next(), Some(TileIndex::new(30, 0, 0)));
    assert_eq!(iter.next(), Some(TileIndex::new(30, 0, 1)));
    if let Ok(n) = usize::try_from(total - 2) {
        assert_eq!(iter.size_hint(), (n, Some(n)));
    }
}
