//! Transformer trait for data transformation

use eyre::Result;

/// Transformer trait for transforming data
///
/// Implementors define one cleaning step or a composition of steps:
/// - Removing duplicate rows
/// - Filling missing values
/// - Type coercion
///
/// # Example
/// ```
/// use employee_etl::etl::Transformer;
/// use employee_etl::table::RecordSet;
/// use eyre::Result;
///
/// struct HeadTransformer(usize);
///
/// impl Transformer for HeadTransformer {
///     type Input = RecordSet;
///     type Output = RecordSet;
///
///     fn transform(&self, mut input: Self::Input) -> Result<Self::Output> {
///         let mut seen = 0;
///         input.retain_rows(|_| {
///             seen += 1;
///             seen <= self.0
///         });
///         Ok(input)
///     }
/// }
/// ```
pub trait Transformer: Send + Sync {
    /// Input type
    type Input: Send;

    /// Output type after transformation
    type Output: Send;

    /// Transform the input
    ///
    /// # Errors
    /// Returns an error if transformation fails
    fn transform(&self, input: Self::Input) -> Result<Self::Output>;
}

/// Chains two transformers, feeding the first one's output to the second
///
/// # Example
/// ```
/// use employee_etl::etl::{Chain, Transformer};
/// use employee_etl::transform::{Deduplicator, DefaultFiller};
///
/// let steps = Chain::new(Deduplicator, DefaultFiller);
/// ```
pub struct Chain<A, B> {
    first: A,
    second: B,
}

impl<A, B> Chain<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A, B> Transformer for Chain<A, B>
where
    A: Transformer,
    B: Transformer<Input = A::Output>,
{
    type Input = A::Input;
    type Output = B::Output;

    fn transform(&self, input: Self::Input) -> Result<Self::Output> {
        self.second.transform(self.first.transform(input)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct AddOne;

    impl Transformer for AddOne {
        type Input = i32;
        type Output = i32;
        fn transform(&self, input: i32) -> Result<i32> {
            Ok(input + 1)
        }
    }

    #[test]
    fn test_chain_runs_in_order() {
        let chain = Chain::new(AddOne, Chain::new(AddOne, AddOne));
        assert_eq!(chain.transform(1).unwrap(), 3);
    }
}
