//! Explicit chain stack for Andrew's monotone chain.
//!
//! Protocol
//! - Push the sorted points in increasing order (first chain).
//! - `seal_chain` freezes everything pushed so far.
//! - Push the same points in decreasing order (closing chain).
//! - `finish` trims the duplicated start point and returns the `Hull`.
//!
//! A point is popped while it and its predecessor make a non-right turn
//! (`cross >= 0`) with the incoming point, so the kept chain turns strictly
//! clockwise and collinear points never survive.

use super::Hull;
use crate::orient::cross;
use crate::point::Point;

#[derive(Clone, Debug)]
pub struct HullBuilder {
    stack: Vec<Point>,
    /// Pops never shrink the stack to `floor` entries or fewer.
    floor: usize,
}

impl Default for HullBuilder {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}

impl HullBuilder {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            stack: Vec::with_capacity(capacity),
            floor: 1,
        }
    }

    /// Append `p`, first discarding trailing points that `p` makes redundant.
    pub fn push(&mut self, p: Point) {
        while self.stack.len() > self.floor {
            let n = self.stack.len();
            if cross(self.stack[n - 2], self.stack[n - 1], p) < 0 {
                break;
            }
            self.stack.pop();
        }
        self.stack.push(p);
    }

    /// End the first chain; later pushes cannot remove any point kept so far.
    pub fn seal_chain(&mut self) {
        self.floor = self.stack.len().max(1);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Drop the closing duplicate of the start point. When the first two
    /// entries coincide every input point was identical, and one more entry
    /// goes so that a single point remains.
    pub fn finish(self) -> Hull {
        let mut h = self.stack;
        if h.len() >= 2 {
            let all_identical = h[0] == h[1];
            h.pop();
            if all_identical {
                h.pop();
            }
        }
        Hull { vertices: h }
    }
}
