use crate::iter::{Cloneable, Iter};

/// Clones each `&T` the upstream yields.
#[derive(Debug)]
pub struct Cloned<'a, I> {
    upstream: &'a mut I,
}

impl<'a, I> Cloned<'a, I> {
    pub(crate) fn new(upstream: &'a mut I) -> Self {
        Self { upstream }
    }
}

impl<'b, I, T> Iter for Cloned<'_, I>
where
    I: Iter<Item = &'b T>,
    T: Cloneable + 'b,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.upstream.next().cloned()
    }
}

#[cfg(test)]
mod tests {
    use crate::iter::{IntoIterable, Iter};
    use crate::{String, ToString, vec};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_clones_are_independent() {
        let source = vec!["x".to_string(), "y".to_string()];
        let mut it = IntoIterable::iter(&source);
        let mut copies = it.cloned().collect().unwrap();
        copies[0].push('!');
        assert_eq!(copies, ["x!", "y"]);
        assert_eq!(source, ["x", "y"]);
    }

    #[test]
    fn test_uses_custom_clone() {
        #[derive(Debug, PartialEq)]
        struct Tagged(String);

        impl Clone for Tagged {
            fn clone(&self) -> Self {
                Tagged(self.0.clone() + "'")
            }
        }

        let source = [Tagged("a".to_string())];
        let mut it = IntoIterable::iter(&source);
        assert_eq!(it.cloned().next(), Some(Tagged("a'".to_string())));
    }
}
