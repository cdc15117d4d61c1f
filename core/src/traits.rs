use crate::view::View;

/// Read-only, index-based access to a sequence.
///
/// This is all a consumer such as a renderer needs: it never learns about
/// stores, offsets or capacity, and never assumes it owns the elements.
pub trait SequenceView<E> {
    fn len(&self) -> usize;

    fn get(&self, index: usize) -> Option<E>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Clone> SequenceView<T> for View<T> {
    fn len(&self) -> usize {
        View::len(self)
    }

    fn get(&self, index: usize) -> Option<T> {
        View::get(self, index).ok()
    }
}
