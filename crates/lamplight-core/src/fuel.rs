//! Link fueling: how a source's radius satisfies lamps on its links.
//!
//! A source's radius is a single illumination extent. Applying it to a link
//! raises that source's side to `max(current, radius)`; applying the same
//! radius twice changes nothing.

use crate::link::Link;
use crate::source::Source;

/// What [`apply`] did to a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FuelEffect {
    /// The source's side grew.
    Raised { from: i64, to: i64 },
    /// The side already held a value at least as large as the radius.
    Unchanged,
    /// The source is not an endpoint of the link; nothing was touched.
    NotEndpoint,
}

/// Fuels `link` from `source`'s side with the source's current radius.
pub fn apply(link: &mut Link, source: &Source) -> FuelEffect {
    let radius = source.radius();
    match link.side_mut(source.id) {
        None => FuelEffect::NotEndpoint,
        Some(side) if radius > *side => {
            let from = *side;
            *side = radius;
            FuelEffect::Raised { from, to: radius }
        }
        Some(_) => FuelEffect::Unchanged,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::SourceId;

    fn source_with_radius(id: u32, radius: i64) -> Source {
        let mut s = Source::new(SourceId(id));
        s.grow(radius).unwrap();
        s
    }

    #[test]
    fn apply_updates_only_matching_side() {
        let mut link = Link::new(SourceId(1), SourceId(2), 10);
        let b = source_with_radius(2, 4);

        assert_eq!(apply(&mut link, &b), FuelEffect::Raised { from: 0, to: 4 });
        assert_eq!(link.satisfied_a(), 0);
        assert_eq!(link.satisfied_b(), 4);
    }

    #[test]
    fn apply_takes_max_not_sum() {
        let mut link = Link::new(SourceId(1), SourceId(2), 10);
        let a = source_with_radius(1, 3);

        apply(&mut link, &a);
        assert_eq!(apply(&mut link, &a), FuelEffect::Unchanged);
        assert_eq!(link.total_satisfied(), 3);
    }

    #[test]
    fn smaller_radius_never_lowers_a_side() {
        let mut link = Link::new(SourceId(1), SourceId(2), 10);
        apply(&mut link, &source_with_radius(1, 6));
        assert_eq!(apply(&mut link, &source_with_radius(1, 2)), FuelEffect::Unchanged);
        assert_eq!(link.satisfied_a(), 6);
    }

    #[test]
    fn non_endpoint_is_noop() {
        let mut link = Link::new(SourceId(1), SourceId(2), 10);
        let stranger = source_with_radius(7, 9);

        assert_eq!(apply(&mut link, &stranger), FuelEffect::NotEndpoint);
        assert_eq!(link.total_satisfied(), 0);
    }

    #[test]
    fn self_loop_fuels_first_side_only() {
        let mut link = Link::new(SourceId(5), SourceId(5), 8);
        apply(&mut link, &source_with_radius(5, 8));
        assert_eq!(link.satisfied_a(), 8);
        assert_eq!(link.satisfied_b(), 0);
        assert!(!link.is_open());
    }
}
