/// Describes how neighbor lookups behave at the field's bounds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EdgePolicy {
    /// Cells outside the field are skipped.
    #[default]
    Clamped,
    /// Bounds of the field are stitched together.
    Torus,
}

impl EdgePolicy {
    /// Resolves coordinate `pos + delta` on an axis of length `len`.
    ///
    /// Returns `None` when the probe falls outside and the policy is [`EdgePolicy::Clamped`].
    pub fn resolve(self, pos: usize, delta: isize, len: usize) -> Option<usize> {
        let p = pos as isize + delta;
        match self {
            EdgePolicy::Clamped => (0..len as isize).contains(&p).then_some(p as usize),
            EdgePolicy::Torus => Some(p.rem_euclid(len as isize) as usize),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::EdgePolicy;

    #[test]
    fn test_resolve() {
        assert_eq!(EdgePolicy::Clamped.resolve(0, -1, 5), None);
        assert_eq!(EdgePolicy::Clamped.resolve(4, 1, 5), None);
        assert_eq!(EdgePolicy::Clamped.resolve(2, 1, 5), Some(3));
        assert_eq!(EdgePolicy::Torus.resolve(0, -1, 5), Some(4));
        assert_eq!(EdgePolicy::Torus.resolve(4, 1, 5), Some(0));
        assert_eq!(EdgePolicy::Torus.resolve(0, 1, 1), Some(0));
    }
}
