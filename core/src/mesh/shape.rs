//! The closed set of generated shapes.
//!
//! [`Shape`] ties the generators together: [`Shape::build`] validates the
//! parameters, then runs vertex generation, triangulation and attribute
//! synthesis in that order and returns a checked [`ShapeGeometry`].

use bitflags::bitflags;

use super::{attributes, indices, primitives, Decomposition, ShapeGeometry};
use crate::error::{GeometryError, GeometryResult};
use crate::profile_scope;

bitflags! {
    /// Which per-vertex attribute arrays a build should synthesize.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct AttributeFlags: u32 {
        /// Rainbow placeholder colors.
        const COLOR = 1 << 0;
        /// Texture coordinates.
        const TEXCOORD = 1 << 1;
        /// Normals.
        const NORMAL = 1 << 2;
    }
}

impl Default for AttributeFlags {
    fn default() -> Self {
        Self::all()
    }
}

/// Build options for a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ShapeOptions {
    /// Triangles or wireframe lines.
    pub decomposition: Decomposition,
    /// Attribute arrays to synthesize. Unrequested arrays stay empty.
    pub attributes: AttributeFlags,
}

impl ShapeOptions {
    /// Triangles with every attribute.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the decomposition.
    pub fn with_decomposition(mut self, decomposition: Decomposition) -> Self {
        self.decomposition = decomposition;
        self
    }

    /// Set the attribute arrays to synthesize.
    pub fn with_attributes(mut self, attributes: AttributeFlags) -> Self {
        self.attributes = attributes;
        self
    }
}

/// The measurements a triangle is solved from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TriangleSpec {
    /// Three side lengths: origin to apex, origin to base vertex, base
    /// vertex to apex.
    SideSideSide { a: f32, b: f32, c: f32 },
    /// Two sides and the angle (radians) between them at the origin vertex.
    SideAngleSide { a: f32, angle: f32, b: f32 },
    /// Angle at the origin vertex, side from the origin to the apex, angle
    /// at the base vertex (radians).
    AngleSideAngle { angle_a: f32, side: f32, angle_c: f32 },
}

/// Vertex layout of a rectangular prism.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RectangularPrismLayout {
    /// 24 vertices, four per face, each face with its own normal and UVs.
    #[default]
    Full,
    /// 8 shared corners. Compact, but without normals or texcoords.
    Limited,
}

/// A parameterised shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Triangle(TriangleSpec),
    Rectangle {
        length: f32,
        width: f32,
    },
    RegularPolygon {
        sides: usize,
        radius: f32,
    },
    RectangularPrism {
        length: f32,
        width: f32,
        height: f32,
        layout: RectangularPrismLayout,
    },
    Sphere {
        radius: f32,
        layers: usize,
        points_per_layer: usize,
    },
    Cone {
        radius: f32,
        height: f32,
        segments: usize,
    },
    Bicone {
        radius: f32,
        height: f32,
        segments: usize,
    },
    Prism {
        radius: f32,
        height: f32,
        segments: usize,
    },
}

impl Shape {
    /// Short name used for labels, logs and errors.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Triangle(_) => "triangle",
            Self::Rectangle { .. } => "rectangle",
            Self::RegularPolygon { .. } => "regular polygon",
            Self::RectangularPrism {
                layout: RectangularPrismLayout::Full,
                ..
            } => "rectangular prism",
            Self::RectangularPrism {
                layout: RectangularPrismLayout::Limited,
                ..
            } => "rectangular prism (limited)",
            Self::Sphere { .. } => "sphere",
            Self::Cone { .. } => "cone",
            Self::Bicone { .. } => "bicone",
            Self::Prism { .. } => "prism",
        }
    }

    /// Whether the shape lies in the XY plane.
    pub fn is_planar(&self) -> bool {
        matches!(
            self,
            Self::Triangle(_) | Self::Rectangle { .. } | Self::RegularPolygon { .. }
        )
    }

    /// Check the parameters without generating anything.
    pub fn validate(&self) -> GeometryResult<()> {
        match *self {
            Self::Triangle(TriangleSpec::SideSideSide { a, b, c }) => {
                primitives::validate_triangle_sss(a, b, c)
            }
            Self::Triangle(TriangleSpec::SideAngleSide { a, angle, b }) => {
                primitives::validate_triangle_sas(a, angle, b)
            }
            Self::Triangle(TriangleSpec::AngleSideAngle {
                angle_a,
                side,
                angle_c,
            }) => primitives::validate_triangle_asa(angle_a, side, angle_c),
            Self::Rectangle { length, width } => {
                primitives::require_positive("length", length)?;
                primitives::require_positive("width", width)
            }
            Self::RegularPolygon { sides, radius } => {
                primitives::require_sides("sides", sides)?;
                primitives::require_positive("radius", radius)
            }
            Self::RectangularPrism {
                length,
                width,
                height,
                ..
            } => {
                primitives::require_positive("length", length)?;
                primitives::require_positive("width", width)?;
                primitives::require_positive("height", height)
            }
            Self::Sphere {
                radius,
                points_per_layer,
                ..
            } => {
                primitives::require_positive("radius", radius)?;
                primitives::require_sides("points per layer", points_per_layer)
            }
            Self::Cone {
                radius,
                height,
                segments,
            }
            | Self::Bicone {
                radius,
                height,
                segments,
            }
            | Self::Prism {
                radius,
                height,
                segments,
            } => primitives::validate_extrusion(radius, height, segments),
        }
    }

    /// Number of vertices the generator produces.
    pub fn vertex_count(&self) -> usize {
        match *self {
            Self::Triangle(_) => 3,
            Self::Rectangle { .. } => 4,
            Self::RegularPolygon { sides, .. } => sides,
            Self::RectangularPrism {
                layout: RectangularPrismLayout::Full,
                ..
            } => primitives::PRISM_FULL_VERTEX_COUNT,
            Self::RectangularPrism {
                layout: RectangularPrismLayout::Limited,
                ..
            } => primitives::PRISM_LIMITED_VERTEX_COUNT,
            Self::Sphere {
                layers,
                points_per_layer,
                ..
            } => layers * points_per_layer + 2,
            Self::Cone { segments, .. } => segments + 1,
            Self::Bicone { segments, .. } => segments + 2,
            Self::Prism { segments, .. } => segments * 2,
        }
    }

    /// Whether an index generator exists for `decomposition`.
    ///
    /// Triangles are always available. Lines are available for the planar
    /// shapes and for the limited prism, whose shared corners map directly
    /// onto the 12 box edges.
    pub fn supports(&self, decomposition: Decomposition) -> bool {
        match decomposition {
            Decomposition::Triangles => true,
            Decomposition::Lines => {
                self.is_planar()
                    || matches!(
                        self,
                        Self::RectangularPrism {
                            layout: RectangularPrismLayout::Limited,
                            ..
                        }
                    )
            }
        }
    }

    /// Generate the vertex positions.
    pub fn vertices(&self) -> GeometryResult<Vec<[f32; 3]>> {
        match *self {
            Self::Triangle(TriangleSpec::SideSideSide { a, b, c }) => {
                primitives::triangle_sss(a, b, c)
            }
            Self::Triangle(TriangleSpec::SideAngleSide { a, angle, b }) => {
                primitives::triangle_sas(a, angle, b)
            }
            Self::Triangle(TriangleSpec::AngleSideAngle {
                angle_a,
                side,
                angle_c,
            }) => primitives::triangle_asa(angle_a, side, angle_c),
            Self::Rectangle { length, width } => primitives::rectangle(length, width),
            Self::RegularPolygon { sides, radius } => primitives::regular_polygon(sides, radius),
            Self::RectangularPrism {
                length,
                width,
                height,
                layout: RectangularPrismLayout::Full,
            } => primitives::rectangular_prism(length, width, height),
            Self::RectangularPrism {
                length,
                width,
                height,
                layout: RectangularPrismLayout::Limited,
            } => primitives::rectangular_prism_limited(length, width, height),
            Self::Sphere {
                radius,
                layers,
                points_per_layer,
            } => primitives::sphere(radius, layers, points_per_layer),
            Self::Cone {
                radius,
                height,
                segments,
            } => primitives::cone(radius, height, segments),
            Self::Bicone {
                radius,
                height,
                segments,
            } => primitives::bicone(radius, height, segments),
            Self::Prism {
                radius,
                height,
                segments,
            } => primitives::prism(radius, height, segments),
        }
    }

    /// Generate the index buffer for `decomposition`.
    pub fn indices(&self, decomposition: Decomposition) -> GeometryResult<Vec<u32>> {
        self.validate()?;
        if !self.supports(decomposition) {
            return Err(GeometryError::UnsupportedDecomposition {
                shape: self.name(),
                decomposition,
            });
        }

        let indices = match (*self, decomposition) {
            (Self::RectangularPrism { layout, .. }, decomposition) => {
                match (layout, decomposition) {
                    (RectangularPrismLayout::Full, _) => indices::prism_full_triangulation(),
                    (RectangularPrismLayout::Limited, Decomposition::Triangles) => {
                        indices::prism_limited_triangulation()
                    }
                    (RectangularPrismLayout::Limited, Decomposition::Lines) => {
                        indices::prism_limited_wireframe()
                    }
                }
            }
            (
                Self::Sphere {
                    layers,
                    points_per_layer,
                    ..
                },
                _,
            ) => indices::sphere_triangulation(layers, points_per_layer),
            (Self::Cone { segments, .. }, _) => indices::cone_triangulation(segments),
            (Self::Bicone { segments, .. }, _) => indices::bicone_triangulation(segments),
            (Self::Prism { segments, .. }, _) => indices::prism_extrusion_triangulation(segments),
            (_, Decomposition::Triangles) => indices::fan_triangulation(self.vertex_count()),
            (_, Decomposition::Lines) => indices::wireframe_loop(self.vertex_count()),
        };
        Ok(indices)
    }

    /// Rainbow placeholder colors, one per vertex.
    pub fn colors(&self) -> GeometryResult<Vec<[f32; 3]>> {
        self.validate()?;
        Ok(attributes::rainbow_colors(self.vertex_count()))
    }

    /// Texture coordinates, one per vertex.
    ///
    /// Empty for the limited prism, whose shared corners have no single
    /// well-defined UV.
    pub fn texcoords(&self) -> GeometryResult<Vec<[f32; 2]>> {
        let positions = self.vertices()?;
        Ok(self.texcoords_for(&positions))
    }

    /// Normals, one per vertex.
    ///
    /// Empty for the limited prism, whose shared corners have no single
    /// well-defined normal.
    pub fn normals(&self) -> GeometryResult<Vec<[f32; 3]>> {
        let positions = self.vertices()?;
        Ok(self.normals_for(&positions))
    }

    fn texcoords_for(&self, positions: &[[f32; 3]]) -> Vec<[f32; 2]> {
        match self {
            Self::RectangularPrism {
                layout: RectangularPrismLayout::Full,
                ..
            } => attributes::prism_face_texcoords(),
            Self::RectangularPrism {
                layout: RectangularPrismLayout::Limited,
                ..
            } => Vec::new(),
            _ => attributes::planar_texcoords(positions),
        }
    }

    fn normals_for(&self, positions: &[[f32; 3]]) -> Vec<[f32; 3]> {
        match self {
            Self::Triangle(_) | Self::Rectangle { .. } | Self::RegularPolygon { .. } => {
                attributes::planar_normals(positions.len())
            }
            Self::RectangularPrism {
                layout: RectangularPrismLayout::Full,
                ..
            } => attributes::prism_face_normals(),
            Self::RectangularPrism {
                layout: RectangularPrismLayout::Limited,
                ..
            } => Vec::new(),
            Self::Sphere { .. } | Self::Cone { .. } | Self::Bicone { .. } | Self::Prism { .. } => {
                attributes::radial_normals(positions)
            }
        }
    }

    /// Generate the complete mesh.
    ///
    /// Fails before producing any array if a parameter is out of range or
    /// the decomposition is unsupported.
    ///
    /// # Panics
    ///
    /// Panics if a generator emits an index outside the vertex array.
    pub fn build(&self, options: ShapeOptions) -> GeometryResult<ShapeGeometry> {
        profile_scope!("Shape::build");

        self.validate()?;
        if !self.supports(options.decomposition) {
            return Err(GeometryError::UnsupportedDecomposition {
                shape: self.name(),
                decomposition: options.decomposition,
            });
        }

        let positions = self.vertices()?;
        let indices = self.indices(options.decomposition)?;
        let wanted = options.attributes;
        let limited = matches!(
            self,
            Self::RectangularPrism {
                layout: RectangularPrismLayout::Limited,
                ..
            }
        );
        if limited && wanted.intersects(AttributeFlags::TEXCOORD | AttributeFlags::NORMAL) {
            log::debug!("{}: shared corners carry no normals or texcoords", self.name());
        }

        let colors = if wanted.contains(AttributeFlags::COLOR) {
            attributes::rainbow_colors(positions.len())
        } else {
            Vec::new()
        };
        let texcoords = if wanted.contains(AttributeFlags::TEXCOORD) {
            self.texcoords_for(&positions)
        } else {
            Vec::new()
        };
        let normals = if wanted.contains(AttributeFlags::NORMAL) {
            self.normals_for(&positions)
        } else {
            Vec::new()
        };

        let geometry = ShapeGeometry::new(self.name(), options.decomposition, positions, indices)
            .with_colors(colors)
            .with_texcoords(texcoords)
            .with_normals(normals);

        log::debug!(
            "Built {} ({} vertices, {} {:?} indices)",
            self.name(),
            geometry.vertex_count(),
            geometry.index_count(),
            options.decomposition
        );

        Ok(geometry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_prism(layout: RectangularPrismLayout) -> Shape {
        Shape::RectangularPrism {
            length: 1.0,
            width: 1.0,
            height: 1.0,
            layout,
        }
    }

    #[test]
    fn test_rectangle_build() {
        let geometry = Shape::Rectangle {
            length: 2.0,
            width: 1.0,
        }
        .build(ShapeOptions::new())
        .unwrap();
        assert_eq!(geometry.indices(), &[0, 1, 2, 0, 2, 3]);
        assert_eq!(geometry.colors().len(), 12);
        assert_eq!(geometry.texcoords().len(), 8);
        assert_eq!(&geometry.normals()[..3], &[0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_attributes_can_be_skipped() {
        let geometry = Shape::RegularPolygon {
            sides: 6,
            radius: 1.0,
        }
        .build(ShapeOptions::new().with_attributes(AttributeFlags::NORMAL))
        .unwrap();
        assert!(geometry.colors().is_empty());
        assert!(geometry.texcoords().is_empty());
        assert_eq!(geometry.normals().len(), 18);
    }

    #[test]
    fn test_vertex_count_matches_generator() {
        let shapes = [
            Shape::Triangle(TriangleSpec::SideSideSide {
                a: 3.0,
                b: 4.0,
                c: 5.0,
            }),
            Shape::RegularPolygon {
                sides: 9,
                radius: 1.0,
            },
            unit_prism(RectangularPrismLayout::Full),
            unit_prism(RectangularPrismLayout::Limited),
            Shape::Sphere {
                radius: 1.0,
                layers: 4,
                points_per_layer: 7,
            },
            Shape::Cone {
                radius: 1.0,
                height: 1.0,
                segments: 5,
            },
            Shape::Bicone {
                radius: 1.0,
                height: 1.0,
                segments: 5,
            },
            Shape::Prism {
                radius: 1.0,
                height: 1.0,
                segments: 5,
            },
        ];
        for shape in shapes {
            assert_eq!(shape.vertices().unwrap().len(), shape.vertex_count(), "{}", shape.name());
        }
    }

    #[test]
    fn test_unsupported_decomposition() {
        let sphere = Shape::Sphere {
            radius: 1.0,
            layers: 2,
            points_per_layer: 8,
        };
        let err = sphere
            .build(ShapeOptions::new().with_decomposition(Decomposition::Lines))
            .unwrap_err();
        assert_eq!(
            err,
            GeometryError::UnsupportedDecomposition {
                shape: "sphere",
                decomposition: Decomposition::Lines,
            }
        );
        assert!(unit_prism(RectangularPrismLayout::Full)
            .indices(Decomposition::Lines)
            .is_err());
    }

    #[test]
    fn test_invalid_parameters_fail_before_decomposition_check() {
        let err = Shape::Sphere {
            radius: -1.0,
            layers: 2,
            points_per_layer: 8,
        }
        .build(ShapeOptions::new().with_decomposition(Decomposition::Lines))
        .unwrap_err();
        assert!(matches!(err, GeometryError::InvalidParameter(_)));
    }

    #[test]
    fn test_limited_prism_has_colors_only() {
        let geometry = unit_prism(RectangularPrismLayout::Limited)
            .build(ShapeOptions::new())
            .unwrap();
        assert_eq!(geometry.vertex_count(), 8);
        assert_eq!(geometry.colors().len(), 24);
        assert!(geometry.texcoords().is_empty());
        assert!(geometry.normals().is_empty());

        let lines = unit_prism(RectangularPrismLayout::Limited)
            .build(ShapeOptions::new().with_decomposition(Decomposition::Lines))
            .unwrap();
        assert_eq!(lines.primitive_count(), 12);
    }

    #[test]
    fn test_sphere_counts() {
        let geometry = Shape::Sphere {
            radius: 1.0,
            layers: 1,
            points_per_layer: 4,
        }
        .build(ShapeOptions::new())
        .unwrap();
        assert_eq!(geometry.vertex_count(), 6);
        assert_eq!(geometry.index_count(), 24);
    }

    #[test]
    fn test_names() {
        assert_eq!(unit_prism(RectangularPrismLayout::Full).name(), "rectangular prism");
        assert!(Shape::Rectangle {
            length: 1.0,
            width: 1.0
        }
        .is_planar());
    }
}
