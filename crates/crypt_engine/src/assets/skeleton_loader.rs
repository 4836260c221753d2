//! Skeleton (.skl) and animation (.anm) text formats
//!
//! `.skl`:
//!
//! ```text
//! joints
//! <id> <name> <parent id or -1> <16 floats, row-major>
//! bindpose_inv
//! <id> <16 floats, row-major>
//! weights <count>
//! <vertex id> <joint id> <weight>
//! ```
//!
//! `.anm`:
//!
//! ```text
//! keyframes
//! <time>
//! time <keyframe index>
//! <joint id> <16 floats, row-major>
//! ```

use crate::animation::{Animation, Joint, JointPose, Keyframe, Skeleton, VertexWeight};
use crate::assets::AssetError;
use crate::foundation::math::Mat4;

#[derive(Clone, Copy, PartialEq, Eq)]
enum SklSection {
    None,
    Joints,
    BindPose,
    Weights,
}

/// Parse `.skl` contents
pub fn parse_skeleton(contents: &str) -> Result<Skeleton, AssetError> {
    let mut skeleton = Skeleton::default();
    let mut section = SklSection::None;
    let mut expected_weights = 0;

    for (line_num, line) in contents.lines().enumerate() {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some(&head) = tokens.first() else {
            continue;
        };

        match head {
            "joints" => section = SklSection::Joints,
            "bindpose_inv" => section = SklSection::BindPose,
            "weights" => {
                section = SklSection::Weights;
                expected_weights = match tokens.get(1) {
                    Some(count) => parse_usize(count, line_num)?,
                    None => 0,
                };
            }
            _ => match section {
                SklSection::Joints => {
                    if tokens.len() != 19 {
                        return Err(invalid("skl", line_num, "joint needs id, name, parent and 16 floats"));
                    }
                    let id = parse_usize(tokens[0], line_num)?;
                    if id != skeleton.joints.len() {
                        return Err(invalid("skl", line_num, "joint ids must be sequential"));
                    }
                    let parent: i64 = tokens[2]
                        .parse()
                        .map_err(|_| invalid("skl", line_num, "invalid parent id"))?;
                    skeleton.joints.push(Joint {
                        id,
                        name: tokens[1].to_string(),
                        parent: usize::try_from(parent).ok(),
                        transform: parse_matrix(&tokens[3..], "skl", line_num)?,
                    });
                }
                SklSection::BindPose => {
                    if tokens.len() != 17 {
                        return Err(invalid("skl", line_num, "bind pose needs id and 16 floats"));
                    }
                    skeleton.inverse_bind_pose.push(parse_matrix(&tokens[1..], "skl", line_num)?);
                }
                SklSection::Weights => {
                    if tokens.len() != 3 {
                        return Err(invalid("skl", line_num, "weight needs vertex, joint and weight"));
                    }
                    skeleton.weights.push(VertexWeight {
                        vertex: parse_usize(tokens[0], line_num)?,
                        joint: parse_usize(tokens[1], line_num)?,
                        weight: parse_f32(tokens[2], "skl", line_num)?,
                    });
                }
                SklSection::None => return Err(invalid("skl", line_num, "data before any section")),
            },
        }
    }

    if skeleton.weights.len() != expected_weights {
        log::warn!(
            "Skeleton declares {} weights but lists {}",
            expected_weights,
            skeleton.weights.len()
        );
    }
    if let Some(joint) = skeleton
        .joints
        .iter()
        .find(|joint| joint.parent.is_some_and(|p| p >= skeleton.joints.len()))
    {
        return Err(AssetError::InvalidData(format!(
            "skl: joint '{}' has an unknown parent",
            joint.name
        )));
    }

    Ok(skeleton)
}

/// Parse `.anm` contents into a clip called `name`
pub fn parse_animation(name: &str, contents: &str) -> Result<Animation, AssetError> {
    let mut animation = Animation::new(name);
    let mut in_keyframe_list = false;
    let mut current: Option<usize> = None;

    for (line_num, line) in contents.lines().enumerate() {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some(&head) = tokens.first() else {
            continue;
        };

        match head {
            "keyframes" => in_keyframe_list = true,
            "time" => {
                in_keyframe_list = false;
                let index = tokens
                    .get(1)
                    .ok_or_else(|| invalid("anm", line_num, "time missing keyframe index"))
                    .and_then(|token| parse_usize(token, line_num))?;
                if index >= animation.keyframes.len() {
                    return Err(invalid("anm", line_num, "keyframe index out of range"));
                }
                current = Some(index);
            }
            _ if in_keyframe_list => {
                animation.keyframes.push(Keyframe {
                    time: parse_f32(head, "anm", line_num)?,
                    poses: Vec::new(),
                });
            }
            _ => {
                let index = current.ok_or_else(|| invalid("anm", line_num, "pose before any time block"))?;
                if tokens.len() != 17 {
                    return Err(invalid("anm", line_num, "pose needs joint id and 16 floats"));
                }
                let pose = JointPose {
                    joint: parse_usize(tokens[0], line_num)?,
                    transform: parse_matrix(&tokens[1..], "anm", line_num)?,
                };
                animation.keyframes[index].poses.push(pose);
            }
        }
    }

    Ok(animation)
}

fn parse_matrix(tokens: &[&str], format: &str, line_num: usize) -> Result<Mat4, AssetError> {
    let values = tokens
        .iter()
        .map(|token| parse_f32(token, format, line_num))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Mat4::from_row_slice(&values))
}

fn parse_f32(token: &str, format: &str, line_num: usize) -> Result<f32, AssetError> {
    token
        .parse()
        .map_err(|_| invalid(format, line_num, &format!("invalid float value '{token}'")))
}

fn parse_usize(token: &str, line_num: usize) -> Result<usize, AssetError> {
    token
        .parse()
        .map_err(|_| AssetError::InvalidData(format!("line {}: invalid integer '{token}'", line_num + 1)))
}

fn invalid(format: &str, line_num: usize, message: &str) -> AssetError {
    AssetError::InvalidData(format!("{format} line {}: {message}", line_num + 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const IDENTITY: &str = "1 0 0 0 0 1 0 0 0 0 1 0 0 0 0 1";
    const LIFTED: &str = "1 0 0 0 0 1 0 2 0 0 1 0 0 0 0 1";

    #[test]
    fn test_parse_skeleton_sections() {
        let skl = format!(
            "joints\n0 hips -1 {IDENTITY}\n1 spine 0 {LIFTED}\nbindpose_inv\n0 {IDENTITY}\n1 {IDENTITY}\nweights 2\n0 0 1.0\n1 1 0.5\n"
        );
        let skeleton = parse_skeleton(&skl).unwrap();

        assert_eq!(skeleton.joint_count(), 2);
        assert_eq!(skeleton.joints[0].parent, None);
        assert_eq!(skeleton.joints[1].parent, Some(0));
        assert_eq!(skeleton.inverse_bind_pose.len(), 2);
        assert_eq!(skeleton.weights[1], VertexWeight { vertex: 1, joint: 1, weight: 0.5 });

        // Row-major: translation lives in the last column
        assert_relative_eq!(skeleton.joints[1].transform[(1, 3)], 2.0);
    }

    #[test]
    fn test_unknown_parent_is_rejected() {
        let skl = format!("joints\n0 hips 4 {IDENTITY}\n");
        assert!(parse_skeleton(&skl).is_err());
    }

    #[test]
    fn test_parse_animation_keyframes() {
        let anm = format!("keyframes\n0.0\n0.5\ntime 0\n0 {IDENTITY}\n1 {IDENTITY}\ntime 1\n0 {LIFTED}\n");
        let clip = parse_animation("wave", &anm).unwrap();

        assert_eq!(clip.name, "wave");
        assert_eq!(clip.keyframes.len(), 2);
        assert_eq!(clip.keyframes[0].poses.len(), 2);
        assert_eq!(clip.keyframes[1].poses[0].joint, 0);
        assert_relative_eq!(clip.duration(), 0.5);
    }

    #[test]
    fn test_time_block_out_of_range() {
        let anm = format!("keyframes\n0.0\ntime 3\n0 {IDENTITY}\n");
        let err = parse_animation("wave", &anm).unwrap_err();
        assert!(err.to_string().contains("line 3"), "{err}");
    }
}
