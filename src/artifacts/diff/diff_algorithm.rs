//! Myers' O(ND) shortest edit script, in linear space
//!
//! Instead of keeping the frontier of every round, each step searches from
//! both ends at once for the "middle snake" of the shortest path, then solves
//! the two halves on either side of it recursively. Common prefixes and
//! suffixes are stripped before every search, so unchanged regions cost a
//! single scan.
//!
//! Within a run of changes every deletion is listed before the insertions
//! that replace it.

use derive_new::new;
use std::ops::Range;

/// One step of an edit script, borrowing from the compared sequences
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit<'d, T> {
    Equal(&'d T),
    Delete(&'d T),
    Insert(&'d T),
}

pub trait DiffAlgorithm<'d, T> {
    /// Edits turning the old sequence into the new one, in order
    fn diff(&self) -> Vec<Edit<'d, T>>;
}

/// Furthest x reached on each diagonal `k = x - y` in the current round
#[derive(Debug, Clone)]
struct Frontier {
    offset: isize,
    reach: Vec<isize>,
}

impl Frontier {
    fn new(max_rounds: usize) -> Self {
        // one spare slot on each side so k ± 1 stays in bounds
        Frontier {
            offset: max_rounds as isize + 1,
            reach: vec![0; 2 * max_rounds + 3],
        }
    }

    fn get(&self, k: isize) -> isize {
        self.reach[(k + self.offset) as usize]
    }

    fn set(&mut self, k: isize, x: isize) {
        self.reach[(k + self.offset) as usize] = x;
    }

    /// Whether the best path onto diagonal `k` in round `d` is an insertion
    fn comes_from_insertion(&self, k: isize, d: isize) -> bool {
        k == -d || (k != d && self.get(k - 1) < self.get(k + 1))
    }

    /// Position on diagonal `k` before following its snake
    fn step(&self, k: isize, d: isize) -> isize {
        if self.comes_from_insertion(k, d) {
            self.get(k + 1)
        } else {
            self.get(k - 1) + 1
        }
    }
}

fn common_prefix<T: Eq>(a: &[T], b: &[T]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}

fn common_suffix<T: Eq>(a: &[T], b: &[T]) -> usize {
    a.iter()
        .rev()
        .zip(b.iter().rev())
        .take_while(|(x, y)| x == y)
        .count()
}

fn max_rounds(n: usize, m: usize) -> usize {
    (n + m).div_ceil(2) + 1
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct MyersDiff<'d, T> {
    old: &'d [T],
    new: &'d [T],
}

impl<'d, T: Eq> MyersDiff<'d, T> {
    fn conquer(
        &self,
        mut old: Range<usize>,
        mut new: Range<usize>,
        forward: &mut Frontier,
        backward: &mut Frontier,
        script: &mut Vec<Edit<'d, T>>,
    ) {
        let (a, b) = (self.old, self.new);

        let prefix = common_prefix(&a[old.clone()], &b[new.clone()]);
        script.extend(a[old.start..old.start + prefix].iter().map(Edit::Equal));
        old.start += prefix;
        new.start += prefix;

        let suffix = common_suffix(&a[old.clone()], &b[new.clone()]);
        old.end -= suffix;
        new.end -= suffix;
        let unchanged_tail = old.end..old.end + suffix;

        if old.is_empty() {
            script.extend(b[new].iter().map(Edit::Insert));
        } else if new.is_empty() {
            script.extend(a[old].iter().map(Edit::Delete));
        } else {
            match self.middle_snake(old.clone(), new.clone(), forward, backward) {
                Some((x, y)) => {
                    self.conquer(old.start..x, new.start..y, forward, backward, script);
                    self.conquer(x..old.end, y..new.end, forward, backward, script);
                }
                None => {
                    script.extend(a[old].iter().map(Edit::Delete));
                    script.extend(b[new].iter().map(Edit::Insert));
                }
            }
        }

        script.extend(a[unchanged_tail].iter().map(Edit::Equal));
    }

    /// Split point of the shortest path between the two ranges
    ///
    /// Both ranges are non-empty and differ in their first and last elements,
    /// so the point returned is strictly inside the box and each half is
    /// smaller than the whole.
    fn middle_snake(
        &self,
        old: Range<usize>,
        new: Range<usize>,
        forward: &mut Frontier,
        backward: &mut Frontier,
    ) -> Option<(usize, usize)> {
        let (a, b) = (&self.old[old.clone()], &self.new[new.clone()]);
        let (n, m) = (a.len() as isize, b.len() as isize);
        let delta = n - m;
        let odd = delta % 2 != 0;

        forward.set(1, 0);
        backward.set(1, 0);

        for d in 0..max_rounds(a.len(), b.len()) as isize {
            for k in (-d..=d).step_by(2) {
                let x = forward.step(k, d);
                let y = x - k;
                let mut end = x;
                if x < n && y < m {
                    end += common_prefix(&a[x as usize..], &b[y as usize..]) as isize;
                }
                forward.set(k, end);

                if odd && (delta - k).abs() < d && end + backward.get(delta - k) >= n {
                    return Some((old.start + x as usize, new.start + y as usize));
                }
            }

            for k in (-d..=d).step_by(2) {
                let mut x = backward.step(k, d);
                let mut y = x - k;
                if x < n && y < m {
                    let run = common_suffix(&a[..(n - x) as usize], &b[..(m - y) as usize]) as isize;
                    x += run;
                    y += run;
                }
                backward.set(k, x);

                if !odd && (delta - k).abs() <= d && x + forward.get(delta - k) >= n {
                    return Some((old.start + (n - x) as usize, new.start + (m - y) as usize));
                }
            }
        }

        None
    }
}

/// Reorder each run of changes so its deletions come before its insertions
fn group_replacements<T>(script: Vec<Edit<'_, T>>) -> Vec<Edit<'_, T>> {
    let mut grouped = Vec::with_capacity(script.len());
    let mut inserts = Vec::new();

    for edit in script {
        match edit {
            Edit::Insert(_) => inserts.push(edit),
            Edit::Delete(_) => grouped.push(edit),
            Edit::Equal(_) => {
                grouped.append(&mut inserts);
                grouped.push(edit);
            }
        }
    }
    grouped.append(&mut inserts);

    grouped
}

impl<'d, T: Eq> DiffAlgorithm<'d, T> for MyersDiff<'d, T> {
    fn diff(&self) -> Vec<Edit<'d, T>> {
        let rounds = max_rounds(self.old.len(), self.new.len());
        let mut forward = Frontier::new(rounds);
        let mut backward = Frontier::new(rounds);
        let mut script = Vec::with_capacity(self.old.len() + self.new.len());

        self.conquer(
            0..self.old.len(),
            0..self.new.len(),
            &mut forward,
            &mut backward,
            &mut script,
        );

        group_replacements(script)
    }
}
