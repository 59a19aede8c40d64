//! The contract shared by every mesh-producing visual.

use crate::buffers::MeshBuffers;
use crate::error::Result;

/// A visual that turns its configuration and data into [`MeshBuffers`].
///
/// Builders follow a configure-then-build protocol: setters record configuration and
/// data and mark the builder stale; [`MeshBuilder::finalize`] runs the build once; the
/// rendering layer then reads [`MeshBuilder::mesh`]. Every build clears the buffers and
/// regenerates them from scratch, visiting cells and segments in index order.
pub trait MeshBuilder {
    /// Returns a short name for the kind of visual (e.g., "`CartGridVisual`").
    fn type_name(&self) -> &'static str;

    /// Clears and regenerates the buffers from the current configuration and data.
    fn build(&mut self) -> Result<()>;

    /// Returns the buffers as produced by the most recent build.
    fn buffers(&self) -> &MeshBuffers;

    /// Returns whether the buffers reflect the current configuration and data.
    fn is_finalized(&self) -> bool;

    /// Builds the buffers if they are stale and returns them.
    fn finalize(&mut self) -> Result<&MeshBuffers> {
        if !self.is_finalized() {
            self.build()?;
            log::debug!(
                "{} finalized: {} vertices, {} triangles",
                self.type_name(),
                self.buffers().num_vertices(),
                self.buffers().num_triangles()
            );
        }
        Ok(self.buffers())
    }

    /// Returns the buffers only if they are up to date.
    fn mesh(&self) -> Option<&MeshBuffers> {
        self.is_finalized().then(|| self.buffers())
    }
}
