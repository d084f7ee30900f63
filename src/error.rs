//! Precondition errors.
//!
//! The scan operations never fail: a polygon with too few vertices simply
//! produces no output. `ScanError` exists for callers that want to tell
//! "nothing to draw" apart from "drew nothing", via the `try_*` methods on
//! [`ScanlineEngine`](crate::engine::ScanlineEngine).

use core::fmt;

/// Minimum vertex count for the outline (line) pass.
pub const MIN_OUTLINE_VERTICES: usize = 2;

/// Minimum vertex count for fill and triangulation.
pub const MIN_AREA_VERTICES: usize = 3;

/// Errors reported by the checked engine entry points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    /// The vertex list is shorter than the operation's geometric minimum.
    InsufficientVertices { required: usize, found: usize },
    /// The drawable area has zero width or height.
    EmptyBounds { width: u32, height: u32 },
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InsufficientVertices { required, found } => {
                write!(f, "insufficient vertices: need at least {required}, got {found}")
            }
            Self::EmptyBounds { width, height } => {
                write!(f, "empty drawable area: {width}x{height}")
            }
        }
    }
}

impl std::error::Error for ScanError {}

/// Check that `found` vertices meet `required`.
pub fn check_vertex_count(found: usize, required: usize) -> Result<(), ScanError> {
    if found < required {
        Err(ScanError::InsufficientVertices { required, found })
    } else {
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
