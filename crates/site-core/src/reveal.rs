/// One-shot reveal flags for the page sections, indexed in document order.
#[derive(Clone, Debug, Default)]
pub struct RevealSet {
    revealed: Vec<bool>,
}

impl RevealSet {
    pub fn new(sections: usize) -> Self {
        Self {
            revealed: vec![false; sections],
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    /// Feed an intersection observation. Returns true only on the call that
    /// flips the section to revealed; later crossings, in either direction,
    /// never change it again.
    pub fn observe(&mut self, index: usize, intersecting: bool) -> bool {
        let Some(flag) = self.revealed.get_mut(index) else {
            return false;
        };
        if *flag || !intersecting {
            return false;
        }
        *flag = true;
        true
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.iter().filter(|r| **r).count()
    }
}
