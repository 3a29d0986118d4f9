//! Brute-force reference distances for checking relaxation.

#![allow(dead_code)]

use std::collections::VecDeque;

use influence_map::{Adjacency, Field, Neighbors, Point};

/// Multi-source BFS from every goal cell of `raw`, stepping only onto cells
/// that are not `bad`. Goal and bad cells keep their values, unreached
/// cells keep `unreached`.
pub fn bfs(raw: &Field<i64>, adjacency: Adjacency) -> Vec<Vec<i64>> {
    let s = *raw.sentinels();
    let bounds = raw.bounds();
    let mut out = raw.to_rows();
    let mut dist: Vec<Option<i64>> = vec![None; bounds.len()];
    let mut queue = VecDeque::new();
    for p in bounds {
        if raw.value(p).unwrap() == s.goal {
            dist[bounds.index(p).unwrap()] = Some(0);
            queue.push_back(p);
        }
    }
    let mut nb = Neighbors::new();
    while let Some(p) = queue.pop_front() {
        let d = dist[bounds.index(p).unwrap()].unwrap();
        let next: Vec<Point> = nb.of(adjacency, p, bounds).to_vec();
        for n in next {
            let i = bounds.index(n).unwrap();
            if dist[i].is_some() || raw.value(n).unwrap() == s.bad {
                continue;
            }
            dist[i] = Some(d + 1);
            queue.push_back(n);
        }
    }
    for p in bounds {
        let v = raw.value(p).unwrap();
        if v == s.bad || v == s.goal {
            continue;
        }
        if let Some(d) = dist[bounds.index(p).unwrap()] {
            out[p.row as usize][p.col as usize] = s.goal + d;
        }
    }
    out
}

/// Octile distance between two points.
pub fn octile(a: Point, b: Point) -> f64 {
    let dr = (a.row - b.row).abs() as f64;
    let dc = (a.col - b.col).abs() as f64;
    let (lo, hi) = if dr < dc { (dr, dc) } else { (dc, dr) };
    (hi - lo) + lo * std::f64::consts::SQRT_2
}
