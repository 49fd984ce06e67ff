//! Link-level building blocks shared by the public containers.
//!
//! - [`SingleChain`](single::SingleChain): singly-linked, head + tail
//! - [`DoubleChain`](double::DoubleChain): doubly-linked, head + tail
//!
//! The containers are thin wrappers that pick a chain and name its
//! operations. The helpers below cover what every container does the same
//! way: concatenation into a fresh container, `Display` rendering and the
//! serde sequence form.

pub(crate) mod double;
pub(crate) mod single;

use std::fmt;

/// Clones the elements of `first` followed by those of `second` into a new
/// container.
pub(crate) fn concat<'a, T, C, A, B>(first: A, second: B) -> C
where
    T: Clone + 'a,
    A: IntoIterator<Item = &'a T>,
    B: IntoIterator<Item = &'a T>,
    C: FromIterator<T>,
{
    first.into_iter().chain(second).cloned().collect()
}

/// Renders a traversal as `[a, b, c]`.
pub(crate) fn fmt_sequence<'a, T, I>(formatter: &mut fmt::Formatter<'_>, elements: I) -> fmt::Result
where
    T: fmt::Display + 'a,
    I: IntoIterator<Item = &'a T>,
{
    write!(formatter, "[")?;
    let mut first = true;
    for element in elements {
        if first {
            first = false;
        } else {
            write!(formatter, ", ")?;
        }
        write!(formatter, "{element}")?;
    }
    write!(formatter, "]")
}

// =============================================================================
// Serde Support
// =============================================================================

/// Writes a traversal as a flat sequence.
#[cfg(feature = "serde")]
pub(crate) fn serialize_elements<'a, T, I, S>(serializer: S, elements: I) -> Result<S::Ok, S::Error>
where
    T: serde::Serialize + 'a,
    I: ExactSizeIterator<Item = &'a T>,
    S: serde::Serializer,
{
    use serde::ser::SerializeSeq;
    let mut seq = serializer.serialize_seq(Some(elements.len()))?;
    for element in elements {
        seq.serialize_element(element)?;
    }
    seq.end()
}

/// Reads a flat sequence in stored order.
#[cfg(feature = "serde")]
pub(crate) fn deserialize_elements<'de, T, D>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    T: serde::Deserialize<'de>,
    D: serde::Deserializer<'de>,
{
    deserializer.deserialize_seq(ElementsVisitor::new())
}

#[cfg(feature = "serde")]
struct ElementsVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<T> ElementsVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for ElementsVisitor<T>
where
    T: serde::Deserialize<'de>,
{
    type Value = Vec<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut elements = Vec::with_capacity(capacity);
        while let Some(element) = seq.next_element()? {
            elements.push(element);
        }
        Ok(elements)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    struct Shown<'a>(&'a [i32]);

    impl fmt::Display for Shown<'_> {
        fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            fmt_sequence(formatter, self.0)
        }
    }

    #[rstest]
    #[case(&[], "[]")]
    #[case(&[7], "[7]")]
    #[case(&[1, 2, 3], "[1, 2, 3]")]
    fn test_fmt_sequence(#[case] values: &[i32], #[case] expected: &str) {
        assert_eq!(Shown(values).to_string(), expected);
    }

    #[rstest]
    fn test_concat_preserves_order_and_inputs() {
        let first = vec![1, 2];
        let second = vec![3];
        let joined: Vec<i32> = concat(&first, &second);
        assert_eq!(joined, vec![1, 2, 3]);
        assert_eq!(first, vec![1, 2]);
        assert_eq!(second, vec![3]);
    }
}
