/// Classifies how `self` sits relative to another primitive.
pub trait Relation<T> {
    type Relate;

    fn relate(&self, to: &T) -> Self::Relate;
}
