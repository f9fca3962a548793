//! Random insert / erase operation traces.

use crate::fuzzer::Fuzzer;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Insert(i64),
    Erase(i64),
}

impl Op {
    pub fn key(&self) -> i64 {
        match *self {
            Op::Insert(k) | Op::Erase(k) => k,
        }
    }
}

/// Shape of a generated trace.
#[derive(Clone, Copy, Debug)]
pub struct TraceBuilder {
    /// Number of operations.
    pub len: usize,
    /// Keys are drawn from `0..=max_key`. A small range forces duplicate
    /// inserts and erases of present keys.
    pub max_key: i64,
    /// Probability of an insert over an erase.
    pub insert_ratio: f64,
}

impl Default for TraceBuilder {
    fn default() -> Self {
        Self {
            len: 1_000,
            max_key: 200,
            insert_ratio: 0.6,
        }
    }
}

impl TraceBuilder {
    pub fn len(mut self, len: usize) -> Self {
        self.len = len;
        self
    }

    pub fn max_key(mut self, max_key: i64) -> Self {
        self.max_key = max_key;
        self
    }

    pub fn insert_ratio(mut self, ratio: f64) -> Self {
        self.insert_ratio = ratio;
        self
    }

    pub fn build(&self, fuzzer: &mut Fuzzer) -> Vec<Op> {
        let (max_key, ratio) = (self.max_key, self.insert_ratio);
        fuzzer.repeat(self.len, |f| {
            let key = f.random_int(0, max_key);
            if f.random_bool(ratio) {
                Op::Insert(key)
            } else {
                Op::Erase(key)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_requested_shape() {
        let mut fuzzer = Fuzzer::new(Some([9; 32]));
        let ops = TraceBuilder::default().len(300).max_key(10).build(&mut fuzzer);
        assert_eq!(ops.len(), 300);
        assert!(ops.iter().all(|op| (0..=10).contains(&op.key())));
        assert!(ops.iter().any(|op| matches!(op, Op::Insert(_))));
        assert!(ops.iter().any(|op| matches!(op, Op::Erase(_))));
    }

    #[test]
    fn insert_only_trace() {
        let mut fuzzer = Fuzzer::new(Some([5; 32]));
        let ops = TraceBuilder::default().len(50).insert_ratio(1.0).build(&mut fuzzer);
        assert!(ops.iter().all(|op| matches!(op, Op::Insert(_))));
    }

    #[test]
    fn replays_from_seed() {
        let builder = TraceBuilder::default().len(100);
        let a = builder.build(&mut Fuzzer::new(Some([6; 32])));
        let b = builder.build(&mut Fuzzer::new(Some([6; 32])));
        assert_eq!(a, b);
    }
}
