use std::collections::VecDeque;

use common::Coordinate;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment {
    pub position: Coordinate,
    pub ttl: i32,
}

impl Segment {
    pub fn new(position: Coordinate, ttl: i32) -> Self {
        Self { position, ttl }
    }
}

/// Snake body, head at the front. A segment leaves the body once its TTL
/// runs out, so length only changes through the TTLs.
#[derive(Clone, Debug)]
pub struct Body {
    segments: VecDeque<Segment>,
}

impl Body {
    /// The i-th cell (from the head) gets TTL `len - i`.
    pub fn from_cells(cells: &[Coordinate]) -> Option<Self> {
        if cells.is_empty() {
            return None;
        }
        let length = cells.len() as i32;
        let segments = cells
            .iter()
            .enumerate()
            .map(|(i, &position)| Segment::new(position, length - i as i32))
            .collect();
        Some(Self { segments })
    }

    pub fn head(&self) -> Segment {
        // Never empty: built non-empty and `retire_expired` runs right after a push.
        self.segments[0]
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter()
    }

    pub fn occupies(&self, cell: Coordinate) -> bool {
        self.segments.iter().any(|segment| segment.position == cell)
    }

    /// Decrements every TTL and returns the cells whose TTL hit zero.
    pub fn age(&mut self) -> Vec<Coordinate> {
        let mut expired = Vec::new();
        for segment in self.segments.iter_mut() {
            segment.ttl -= 1;
            if segment.ttl == 0 {
                expired.push(segment.position);
            }
        }
        expired
    }

    pub fn push_head(&mut self, segment: Segment) {
        self.segments.push_front(segment);
    }

    pub fn retire_expired(&mut self) {
        self.segments.retain(|segment| segment.ttl > 0);
    }
}
