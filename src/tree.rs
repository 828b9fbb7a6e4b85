pub trait TreeOps<T> {
    fn add(&mut self, item: T);
    fn contains(&self, item: &T) -> bool;
    fn search(&self, item: &T) -> Option<&T>;
    fn remove(&mut self, item: &T) -> bool;
    fn clear(&mut self);
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Adds every item in order, one `add` at a time.
    fn add_range<I: IntoIterator<Item = T>>(&mut self, items: I)
    where
        Self: Sized,
    {
        for item in items {
            self.add(item);
        }
    }
}
