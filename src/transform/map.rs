use crate::core::{Result, Transform};
use std::marker::PhantomData;

/// Applies a closure to every input element, emitting exactly one output per
/// input.
pub struct Map<F, In, Out> {
    f: F,
    _marker: PhantomData<fn(In) -> Out>,
}

impl<F, In, Out> Map<F, In, Out>
where
    F: FnMut(In) -> Out,
{
    pub fn new(f: F) -> Self {
        Self {
            f,
            _marker: PhantomData,
        }
    }
}

impl<F, In, Out> Transform for Map<F, In, Out>
where
    F: FnMut(In) -> Out + Send + 'static,
    In: Send + 'static,
    Out: Send + 'static,
{
    type Input = In;
    type Output = Out;

    fn on_element(&mut self, element: In) -> Result<Vec<Out>> {
        Ok(vec![(self.f)(element)])
    }
}
