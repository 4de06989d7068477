/// Turn what a sequence hands out into its element type.
///
/// Sequences that hand out owned values decay to themselves; sequences that
/// hand out borrows decay by cloning.
pub trait Decay<V> {
    fn decay(self) -> V;
}

impl<T> Decay<T> for T {
    #[inline]
    fn decay(self) -> T {
        self
    }
}

impl<T: Clone> Decay<T> for &T {
    #[inline]
    fn decay(self) -> T {
        self.clone()
    }
}
