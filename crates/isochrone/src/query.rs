//! Query parameters for a reachability request.

use geo::Point;

/// Contour duration used when the host does not ask for anything else.
pub const DEFAULT_CONTOUR_MINUTES: u16 = 15;

/// Travel mode the reachability contour is computed for.
///
/// The wire form is the lowercase path segment of the service URL.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TravelProfile {
    #[default]
    Walking,
    Cycling,
    Driving,
}

impl TravelProfile {
    pub fn as_path_segment(&self) -> &'static str {
        match self {
            Self::Walking => "walking",
            Self::Cycling => "cycling",
            Self::Driving => "driving",
        }
    }
}

/// One reachability question: how far can you get from `center` within
/// `contour_minutes` using `profile`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IsochroneQuery {
    pub center: Point,
    pub profile: TravelProfile,
    pub contour_minutes: u16,
}

impl IsochroneQuery {
    /// Walking query with the default contour duration.
    pub fn new(center: Point) -> Self {
        Self {
            center,
            profile: TravelProfile::default(),
            contour_minutes: DEFAULT_CONTOUR_MINUTES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_path_segments() {
        assert_eq!(TravelProfile::Walking.as_path_segment(), "walking");
        assert_eq!(TravelProfile::Cycling.as_path_segment(), "cycling");
        assert_eq!(TravelProfile::Driving.as_path_segment(), "driving");
    }

    #[test]
    fn test_query_defaults() {
        let query = IsochroneQuery::new(Point::new(-73.99, 40.73));
        assert_eq!(query.profile, TravelProfile::Walking);
        assert_eq!(query.contour_minutes, DEFAULT_CONTOUR_MINUTES);
    }
}
