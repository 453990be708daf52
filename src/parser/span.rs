use std::ops::Range;

/// Store the endpoints of a text span, for use in error messaging.
/// `r` is set such that `span.l..span.r` will return the correct span of chars.
#[derive(Hash, Debug, Copy, Clone, Eq, PartialEq)]
pub struct Span {
    /// Left index of the span
    pub l: usize,
    /// Right index of the span
    pub r: usize,
}

impl Span {
    pub fn new(range: Range<usize>) -> Self {
        Self {
            l: range.start,
            r: range.end,
        }
    }

    /// Combine two optional [`Span`]s into one covering both.
    pub fn combine(left: Option<Span>, right: Option<Span>) -> Option<Span> {
        match (left, right) {
            (Some(x), None) | (None, Some(x)) => Some(x),
            (Some(ls), Some(rs)) => Some(Span { l: ls.l, r: rs.r }),
            (None, None) => None,
        }
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Self::new(range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_takes_endpoints_from_the_range() {
        let span = Span::new(2..5);

        assert_eq!(span.l, 2);
        assert_eq!(span.r, 5);
    }

    #[test]
    fn test_combine_covers_both_spans() {
        let left = Some(Span::new(0..3));
        let right = Some(Span::new(6..9));

        assert_eq!(Span::combine(left, right), Some(Span::new(0..9)));
    }

    #[test]
    fn test_combine_handles_missing_sides() {
        let span = Some(Span::new(1..2));

        assert_eq!(Span::combine(span, None), span);
        assert_eq!(Span::combine(None, span), span);
        assert_eq!(Span::combine(None, None), None);
    }
}
