//! Polytope validation
//!
//! Checks a [`Polytope`] table for data-integrity errors before anything
//! indexes into it: out-of-range or degenerate edges, duplicate edges,
//! out-of-range faces and faces that repeat a vertex.

use std::collections::HashSet;

use crate::polytope::Polytope;

/// Validation error found in a polytope table
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Table has no vertices
    NoVertices,
    /// Vertex has a NaN or infinite coordinate
    NonFiniteVertex(usize),
    /// Edge references a vertex index past the end of the vertex table
    EdgeOutOfRange { edge: usize, vertex: usize },
    /// Edge joins a vertex to itself
    DegenerateEdge(usize),
    /// Edge repeats an earlier edge (in either direction)
    DuplicateEdge(usize),
    /// Face references a vertex index past the end of the vertex table
    FaceOutOfRange { face: usize, vertex: usize },
    /// Face lists the same vertex more than once
    RepeatedFaceVertex(usize),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::NoVertices => write!(f, "Polytope has no vertices"),
            ValidationError::NonFiniteVertex(i) => {
                write!(f, "Vertex {} has a non-finite coordinate", i)
            }
            ValidationError::EdgeOutOfRange { edge, vertex } => {
                write!(f, "Edge {} references missing vertex {}", edge, vertex)
            }
            ValidationError::DegenerateEdge(i) => write!(f, "Edge {} is degenerate", i),
            ValidationError::DuplicateEdge(i) => write!(f, "Edge {} is a duplicate", i),
            ValidationError::FaceOutOfRange { face, vertex } => {
                write!(f, "Face {} references missing vertex {}", face, vertex)
            }
            ValidationError::RepeatedFaceVertex(i) => {
                write!(f, "Face {} repeats a vertex", i)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Polytope validator that checks index integrity
///
/// # Example
/// ```ignore
/// let errors = PolytopeValidator::validate(&polytope);
/// for error in &errors {
///     log::error!("Polytope validation error: {}", error);
/// }
/// ```
pub struct PolytopeValidator;

impl PolytopeValidator {
    /// Validate a polytope, returning all errors found
    ///
    /// Returns an empty vector if the table is consistent.
    pub fn validate(polytope: &Polytope) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        let vertex_count = polytope.vertices.len();

        if vertex_count == 0 {
            errors.push(ValidationError::NoVertices);
        }

        for (i, v) in polytope.vertices.iter().enumerate() {
            if !v.is_finite() {
                errors.push(ValidationError::NonFiniteVertex(i));
            }
        }

        let mut seen_edges = HashSet::new();
        for (i, &[a, b]) in polytope.edges.iter().enumerate() {
            let mut in_range = true;
            for vertex in [a, b] {
                if vertex >= vertex_count {
                    errors.push(ValidationError::EdgeOutOfRange { edge: i, vertex });
                    in_range = false;
                }
            }
            if !in_range {
                continue;
            }
            if a == b {
                errors.push(ValidationError::DegenerateEdge(i));
            } else if !seen_edges.insert((a.min(b), a.max(b))) {
                errors.push(ValidationError::DuplicateEdge(i));
            }
        }

        for (i, face) in polytope.faces.iter().enumerate() {
            for &vertex in face {
                if vertex >= vertex_count {
                    errors.push(ValidationError::FaceOutOfRange { face: i, vertex });
                }
            }
            let distinct: HashSet<usize> = face.iter().copied().collect();
            if distinct.len() != face.len() {
                errors.push(ValidationError::RepeatedFaceVertex(i));
            }
        }

        errors
    }

    /// Validate and return Result (Ok if no errors, Err with all errors)
    pub fn validate_or_error(polytope: &Polytope) -> Result<(), Vec<ValidationError>> {
        let errors = Self::validate(polytope);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
