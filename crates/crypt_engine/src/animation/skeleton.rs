//! Skeleton data
//!
//! Joint hierarchy, inverse bind pose and per-vertex skin weights. A skeleton
//! is shared between every object built from the same rig.

use crate::foundation::math::Mat4;

/// One joint of a skeleton
#[derive(Debug, Clone, PartialEq)]
pub struct Joint {
    /// Joint id, equal to its index in [`Skeleton::joints`]
    pub id: usize,
    /// Joint name from the source rig
    pub name: String,
    /// Parent joint index, `None` for roots
    pub parent: Option<usize>,
    /// Local transform relative to the parent
    pub transform: Mat4,
}

/// Influence of one joint on one vertex
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexWeight {
    /// Vertex index in the mesh
    pub vertex: usize,
    /// Influencing joint index
    pub joint: usize,
    /// Blend weight
    pub weight: f32,
}

/// Joint hierarchy with bind pose and skin weights
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Skeleton {
    /// Joints, indexed by id
    pub joints: Vec<Joint>,
    /// Inverse bind-pose matrix per joint
    pub inverse_bind_pose: Vec<Mat4>,
    /// Skin weights
    pub weights: Vec<VertexWeight>,
}

impl Skeleton {
    /// Number of joints
    pub fn joint_count(&self) -> usize {
        self.joints.len()
    }

    /// Look up a joint by name
    pub fn joint_by_name(&self, name: &str) -> Option<&Joint> {
        self.joints.iter().find(|joint| joint.name == name)
    }

    /// Indices of the root joints
    pub fn roots(&self) -> impl Iterator<Item = usize> + '_ {
        self.joints.iter().filter(|joint| joint.parent.is_none()).map(|joint| joint.id)
    }
}
