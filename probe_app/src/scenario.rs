//! Scenario files
//!
//! A scenario is a RON list of named queries. Shapes are written with plain
//! tuples so files stay readable:
//!
//! ```ron
//! (cases: [
//!     (
//!         name: "crates overlap",
//!         query: Planar(
//!             a: Box(pos: (0.0, 0.0), half: (1.0, 1.0)),
//!             b: Box(pos: (1.5, 0.0), half: (1.0, 1.0)),
//!         ),
//!         expect: Some(true),
//!     ),
//! ])
//! ```
//!
//! `exists` defaults to `true`, `ignore_exist_flag` to `false` and OBB
//! rotations (roll, pitch, yaw in degrees) to zero.

use std::path::Path;

use collision_core::foundation::math::utils::deg_to_rad;
use collision_core::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::ProbeError;

const fn existing() -> bool {
    true
}

/// Parsed scenario file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Cases in file order
    #[serde(default)]
    pub cases: Vec<ProbeCase>,
}

impl Scenario {
    /// Parse scenario text; `origin` names the source in errors
    pub fn parse(text: &str, origin: &str) -> Result<Self, ProbeError> {
        ron::from_str(text).map_err(|e| ProbeError::Scenario {
            path: origin.to_string(),
            message: e.to_string(),
        })
    }

    /// Read and parse a scenario file
    pub fn load(path: &Path) -> Result<Self, ProbeError> {
        let origin = path.display().to_string();
        let text = std::fs::read_to_string(path).map_err(|e| ProbeError::Scenario {
            path: origin.clone(),
            message: e.to_string(),
        })?;
        Self::parse(&text, &origin)
    }
}

/// One named query with an optional expected hit result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbeCase {
    /// Label used in the log
    pub name: String,
    /// What to test
    pub query: Query,
    /// Expected hit result; `None` only reports
    #[serde(default)]
    pub expect: Option<bool>,
}

/// A pairwise test or a ray cast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Query {
    /// Two 2D shapes
    Planar {
        /// Left operand
        a: PlanarShape,
        /// Right operand
        b: PlanarShape,
        /// Skip the exists gate
        #[serde(default)]
        ignore_exist_flag: bool,
    },
    /// Two 3D shapes
    Spatial {
        /// Left operand
        a: SpatialShape,
        /// Right operand
        b: SpatialShape,
        /// Skip the exists gate
        #[serde(default)]
        ignore_exist_flag: bool,
    },
    /// Line through `start` and `end` against a box
    Ray {
        /// First point on the line
        start: [f32; 3],
        /// Second point on the line
        end: [f32; 3],
        /// Box to intersect
        target: RayTarget,
    },
}

/// 2D shape as written in a scenario
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PlanarShape {
    /// Axis-aligned box
    Box {
        /// Center
        pos: [f32; 2],
        /// Half extents
        half: [f32; 2],
        /// Participates in tests
        #[serde(default = "existing")]
        exists: bool,
    },
    /// Circle
    Circle {
        /// Center
        pos: [f32; 2],
        /// Radius
        radius: f32,
        /// Participates in tests
        #[serde(default = "existing")]
        exists: bool,
    },
}

impl From<PlanarShape> for Collider2D {
    fn from(shape: PlanarShape) -> Self {
        match shape {
            PlanarShape::Box { pos, half, exists } => {
                Box2D::new(pos[0], pos[1], half[0], half[1], exists).into()
            }
            PlanarShape::Circle { pos, radius, exists } => {
                Circle::new(pos[0], pos[1], radius, exists).into()
            }
        }
    }
}

/// 3D shape as written in a scenario
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SpatialShape {
    /// Axis-aligned box
    Aabb {
        /// Center
        pos: [f32; 3],
        /// Half extents
        half: [f32; 3],
        /// Participates in tests
        #[serde(default = "existing")]
        exists: bool,
    },
    /// Sphere
    Sphere {
        /// Center
        pos: [f32; 3],
        /// Radius
        radius: f32,
        /// Participates in tests
        #[serde(default = "existing")]
        exists: bool,
    },
    /// Oriented box
    Obb {
        /// Center
        pos: [f32; 3],
        /// Half extents along the local axes
        half: [f32; 3],
        /// Roll, pitch and yaw in degrees, about X, Y and Z
        #[serde(default)]
        rotation: [f32; 3],
        /// Participates in tests
        #[serde(default = "existing")]
        exists: bool,
    },
}

impl From<SpatialShape> for Collider3D {
    fn from(shape: SpatialShape) -> Self {
        match shape {
            SpatialShape::Aabb { pos, half, exists } => {
                AABB::new(pos[0], pos[1], pos[2], half[0], half[1], half[2], exists).into()
            }
            SpatialShape::Sphere { pos, radius, exists } => {
                Sphere::new(pos[0], pos[1], pos[2], radius, exists).into()
            }
            SpatialShape::Obb { pos, half, rotation, exists } => {
                let [roll, pitch, yaw] = rotation.map(deg_to_rad);
                let orientation = Quat::from_euler_angles(roll, pitch, yaw);
                OBB::new(Vec3::from(pos), Vec3::from(half), orientation, exists).into()
            }
        }
    }
}

/// Ray target box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RayTarget {
    /// Center
    pub pos: [f32; 3],
    /// Half extents
    pub half: [f32; 3],
}

impl From<RayTarget> for AABB {
    fn from(target: RayTarget) -> Self {
        Self::from_center_extents(Vec3::from(target.pos), Vec3::from(target.half))
    }
}

/// Result of evaluating a [`Query`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    /// Pairwise test result
    Hit(bool),
    /// Ray cast result
    Ray(RayIntersectResult),
}

impl Outcome {
    /// Whether the query reported contact
    pub const fn is_hit(&self) -> bool {
        match self {
            Self::Hit(hit) => *hit,
            Self::Ray(result) => result.is_intersect,
        }
    }
}

impl Query {
    /// Run the query through the collision library
    pub fn evaluate(&self) -> Outcome {
        match self {
            Self::Planar { a, b, ignore_exist_flag } => {
                let (a, b) = (Collider2D::from(*a), Collider2D::from(*b));
                Outcome::Hit(a.is_hit(&b, *ignore_exist_flag))
            }
            Self::Spatial { a, b, ignore_exist_flag } => {
                let (a, b) = (Collider3D::from(*a), Collider3D::from(*b));
                Outcome::Hit(a.is_hit(&b, *ignore_exist_flag))
            }
            Self::Ray { start, end, target } => Outcome::Ray(calc_intersection_point(
                Vec3::from(*start),
                Vec3::from(*end),
                &AABB::from(*target),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
        (cases: [
            (
                name: "boxes overlap",
                query: Planar(
                    a: Box(pos: (0.0, 0.0), half: (1.0, 1.0)),
                    b: Box(pos: (1.5, 0.0), half: (1.0, 1.0)),
                ),
                expect: Some(true),
            ),
            (
                name: "hidden sphere",
                query: Spatial(
                    a: Sphere(pos: (0.0, 0.0, 0.0), radius: 1.0, exists: false),
                    b: Obb(pos: (0.5, 0.0, 0.0), half: (1.0, 1.0, 1.0), rotation: (0.0, 45.0, 0.0)),
                ),
                expect: Some(false),
            ),
            (
                name: "ray along x",
                query: Ray(
                    start: (-5.0, 0.0, 0.0),
                    end: (5.0, 0.0, 0.0),
                    target: (pos: (0.0, 0.0, 0.0), half: (1.0, 1.0, 1.0)),
                ),
            ),
        ])
    "#;

    #[test]
    fn test_parse_sample() {
        let scenario = Scenario::parse(SAMPLE, "sample").unwrap();

        assert_eq!(scenario.cases.len(), 3);
        assert_eq!(scenario.cases[0].expect, Some(true));
        assert_eq!(scenario.cases[2].expect, None);
        assert!(matches!(
            scenario.cases[1].query,
            Query::Spatial { ignore_exist_flag: false, .. }
        ));
    }

    #[test]
    fn test_defaults_for_optional_fields() {
        let scenario = Scenario::parse(SAMPLE, "sample").unwrap();

        let Query::Planar { a, .. } = scenario.cases[0].query else {
            panic!("expected a planar query");
        };
        assert_eq!(a, PlanarShape::Box { pos: [0.0, 0.0], half: [1.0, 1.0], exists: true });
    }

    #[test]
    fn test_evaluate_sample() {
        let scenario = Scenario::parse(SAMPLE, "sample").unwrap();
        let outcomes: Vec<_> = scenario.cases.iter().map(|case| case.query.evaluate()).collect();

        assert_eq!(outcomes[0], Outcome::Hit(true));
        assert_eq!(outcomes[1], Outcome::Hit(false));

        let Outcome::Ray(result) = outcomes[2] else {
            panic!("expected a ray outcome");
        };
        assert!(result.is_intersect);
        assert_eq!(result.normal, Vec3::new(-1.0, 0.0, 0.0));
    }

    #[test]
    fn test_obb_rotation_is_in_degrees() {
        let shape = SpatialShape::Obb {
            pos: [0.0, 0.0, 0.0],
            half: [1.0, 1.0, 1.0],
            rotation: [0.0, 0.0, 90.0],
            exists: true,
        };
        let Collider3D::Obb(obb) = Collider3D::from(shape) else {
            panic!("expected an OBB");
        };

        approx::assert_relative_eq!(obb.right(), Vec3::new(0.0, 1.0, 0.0), epsilon = 1e-6);
    }

    #[test]
    fn test_ignore_exist_flag_reaches_predicate() {
        let hidden = PlanarShape::Circle { pos: [0.0, 0.0], radius: 1.0, exists: false };
        let rect = PlanarShape::Box { pos: [0.5, 0.0], half: [1.0, 1.0], exists: true };

        let gated = Query::Planar { a: hidden, b: rect, ignore_exist_flag: false };
        let ignored = Query::Planar { a: hidden, b: rect, ignore_exist_flag: true };

        assert!(!gated.evaluate().is_hit());
        assert!(ignored.evaluate().is_hit());
    }

    #[test]
    fn test_parse_error_names_origin() {
        let err = Scenario::parse("(cases: [ (name: 3) ])", "broken.ron").unwrap_err();

        assert!(matches!(&err, ProbeError::Scenario { path, .. } if path == "broken.ron"));
    }

    #[test]
    fn test_missing_file_is_scenario_error() {
        let result = Scenario::load(Path::new("definitely/not/here.ron"));
        assert!(matches!(result, Err(ProbeError::Scenario { .. })));
    }
}
