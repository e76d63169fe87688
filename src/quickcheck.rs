use compare::Compare;
use quickcheck::{Arbitrary, Gen};
use super::AvlTree;

impl<T, C> Arbitrary for AvlTree<T, C>
    where T: Arbitrary, C: 'static + Clone + Compare<T> + Default {

    fn arbitrary(gen: &mut Gen) -> Self { Vec::<T>::arbitrary(gen).into_iter().collect() }

    fn shrink(&self) -> Box<dyn Iterator<Item=Self>> {
        let mut vec: Vec<T> = Vec::with_capacity(self.len());
        super::node::walk(&self.root, &mut |value: &T| vec.push(value.clone()));
        Box::new(vec.shrink().map(|vec| vec.into_iter().collect()))
    }
}
