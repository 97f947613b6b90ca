#[allow(unused_imports)]
pub use itertools::Itertools;
#[allow(unused_imports)]
pub use num_traits;

#[allow(unused_imports)]
pub use anyhow::{anyhow, bail, Context, Result};
#[allow(unused_imports)]
pub use tracing::{debug, error, info, warn};

#[allow(unused_imports)]
pub use crate::{
    core::{
        collision::{
            aabb::{aabb_overlap, point_in_aabb},
            circle::{
                circle_contained_in, circles_intersect, point_in_circle,
                rect_fully_inside_circle, rect_partly_inside_circle, rect_partly_outside_circle,
                segment_intersects_circle, Annulus,
            },
            containment::{
                point_in_convex_polygon, point_in_rect_by_dot, rects_overlap_by_dot, side_of_line,
            },
            gjk::{gjk, gjk_overlap, GjkOutcome},
            half_plane::{shapes_overlap, Corridor},
            sat::sat_overlap,
            Algorithm, Polygonal,
        },
        config::*,
        schedule::{Cadence, IntervalPoll, Monitor},
        shape::{Circle, Plane, Shape, ShapeBuilder},
    },
    util::{
        assert::*,
        gg_float::Scalar,
        linalg::{AxisAlignedExtent, Point2, Transform, Vec2},
    },
};
