/// A source of uniformly distributed indices.
pub(crate) trait RandomSource {
    /// Return an index in `0..len`. Callers never pass a zero `len`.
    fn next_index(&mut self, len: usize) -> usize;
}

impl RandomSource for fastrand::Rng {
    fn next_index(&mut self, len: usize) -> usize {
        self.usize(..len)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_index(&mut self, len: usize) -> usize {
        (**self).next_index(len)
    }
}

/// Replays a fixed list of indices, wrapping around once it runs out.
///
/// Each index is reduced modulo the requested length.
#[cfg(test)]
#[derive(Clone, Debug)]
pub(crate) struct ScriptedSource {
    indices: Vec<usize>,
    consumed: usize,
}

#[cfg(test)]
impl ScriptedSource {
    pub(crate) fn new<I: IntoIterator<Item = usize>>(indices: I) -> Self {
        let indices: Vec<usize> = indices.into_iter().collect();
        assert!(!indices.is_empty(), "scripted source needs at least one index");
        Self { indices, consumed: 0 }
    }

    /// How many indices have been handed out so far.
    pub(crate) fn consumed(&self) -> usize {
        self.consumed
    }
}

#[cfg(test)]
impl RandomSource for ScriptedSource {
    fn next_index(&mut self, len: usize) -> usize {
        let index = self.indices[self.consumed % self.indices.len()];
        self.consumed += 1;
        index % len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fastrand_stays_in_range() {
        let mut rng = fastrand::Rng::with_seed(42);
        for len in 1..50 {
            assert!(rng.next_index(len) < len);
        }
    }

    #[test]
    fn seeded_runs_repeat() {
        let mut first = fastrand::Rng::with_seed(3);
        let mut second = fastrand::Rng::with_seed(3);
        let a: Vec<usize> = (0..10).map(|_| first.next_index(100)).collect();
        let b: Vec<usize> = (0..10).map(|_| second.next_index(100)).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn script_wraps_around() {
        let mut rng = ScriptedSource::new([1, 5]);
        let drawn: Vec<usize> = (0..4).map(|_| rng.next_index(3)).collect();
        assert_eq!(drawn, [1, 2, 1, 2]);
        assert_eq!(rng.consumed(), 4);
    }
}
