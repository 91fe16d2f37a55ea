use super::list::SkipList;

/// Iterator over the keys of a [`SkipList`] in non-decreasing order.
pub struct Iter<'a, K, R> {
    list: &'a SkipList<K, R>,
    curr: Option<usize>,
    remaining: usize,
}

impl<'a, K, R> Iter<'a, K, R> {
    pub(super) fn new(list: &'a SkipList<K, R>) -> Self {
        Self {
            list,
            curr: list.head[0],
            remaining: list.len(),
        }
    }
}

impl<'a, K, R> Iterator for Iter<'a, K, R> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.curr?;
        let node = self.list.node(idx);
        // Advance at level 0
        self.curr = node.forward[0];
        self.remaining -= 1;
        Some(&node.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, R> ExactSizeIterator for Iter<'_, K, R> {}
