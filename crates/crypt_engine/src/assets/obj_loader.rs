//! OBJ file loader for 3D models
//!
//! Each `usemtl` statement starts a new mesh group so that every sub-part
//! keeps its own material. Polygons are fan triangulated.

use crate::assets::AssetError;
use crate::render::{Mesh, Vertex};

/// One mesh group and the material name it was declared with
#[derive(Debug, Clone)]
pub struct ObjGroup {
    /// Name given to `usemtl`, if any
    pub material_name: Option<String>,
    /// Geometry of the group
    pub mesh: Mesh,
}

/// Parsed OBJ file
#[derive(Debug, Clone, Default)]
pub struct ObjModel {
    /// File named by `mtllib`, relative to the OBJ
    pub material_library: Option<String>,
    /// Non-empty mesh groups in file order
    pub groups: Vec<ObjGroup>,
}

/// OBJ text parser
pub struct ObjLoader;

impl ObjLoader {
    /// Parse OBJ file contents
    pub fn parse(contents: &str) -> Result<ObjModel, AssetError> {
        let mut positions: Vec<[f32; 3]> = Vec::new();
        let mut normals: Vec<[f32; 3]> = Vec::new();
        let mut tex_coords: Vec<[f32; 2]> = Vec::new();

        let mut model = ObjModel::default();
        let mut current = ObjGroup {
            material_name: None,
            mesh: Mesh::default(),
        };

        for (line_num, line) in contents.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let parts: Vec<&str> = line.split_whitespace().collect();
            match parts[0] {
                "v" => positions.push(parse_floats(&parts[1..], line_num)?),
                "vn" => normals.push(parse_floats(&parts[1..], line_num)?),
                "vt" => tex_coords.push(parse_floats(&parts[1..], line_num)?),
                "mtllib" => model.material_library = parts.get(1).map(|name| (*name).to_string()),
                "usemtl" => {
                    let next = ObjGroup {
                        material_name: parts.get(1).map(|name| (*name).to_string()),
                        mesh: Mesh::default(),
                    };
                    let finished = std::mem::replace(&mut current, next);
                    if !finished.mesh.vertices.is_empty() {
                        model.groups.push(finished);
                    }
                }
                "f" => {
                    if parts.len() < 4 {
                        return Err(invalid(line_num, "face needs at least three vertices"));
                    }

                    let mesh = &mut current.mesh;
                    let first = u32::try_from(mesh.vertices.len())
                        .map_err(|_| invalid(line_num, "too many vertices"))?;

                    for corner in &parts[1..] {
                        let mut refs = corner.split('/');
                        let pos_idx = parse_index(refs.next(), positions.len(), line_num)?
                            .ok_or_else(|| invalid(line_num, "face vertex missing position index"))?;
                        let tex_idx = parse_index(refs.next(), tex_coords.len(), line_num)?;
                        let normal_idx = parse_index(refs.next(), normals.len(), line_num)?;

                        let position = *positions
                            .get(pos_idx)
                            .ok_or_else(|| invalid(line_num, "position index out of bounds"))?;
                        let tex_coord = match tex_idx {
                            Some(i) => *tex_coords
                                .get(i)
                                .ok_or_else(|| invalid(line_num, "texture index out of bounds"))?,
                            None => [0.0, 0.0],
                        };
                        let normal = match normal_idx {
                            Some(i) => *normals
                                .get(i)
                                .ok_or_else(|| invalid(line_num, "normal index out of bounds"))?,
                            None => [0.0, 1.0, 0.0],
                        };

                        mesh.vertices.push(Vertex::new(position, normal, tex_coord));
                    }

                    let corners = u32::try_from(parts.len() - 1).map_err(|_| invalid(line_num, "face too large"))?;
                    for i in 1..corners - 1 {
                        mesh.indices.extend_from_slice(&[first, first + i, first + i + 1]);
                    }
                }
                _ => {}
            }
        }

        if !current.mesh.vertices.is_empty() {
            model.groups.push(current);
        }
        if model.groups.is_empty() {
            return Err(AssetError::InvalidData("No faces found in OBJ file".to_string()));
        }

        Ok(model)
    }
}

fn parse_floats<const N: usize>(tokens: &[&str], line_num: usize) -> Result<[f32; N], AssetError> {
    let mut out = [0.0; N];
    for (i, slot) in out.iter_mut().enumerate() {
        let token = tokens
            .get(i)
            .ok_or_else(|| invalid(line_num, &format!("expected {N} values")))?;
        *slot = token
            .parse()
            .map_err(|_| invalid(line_num, &format!("invalid float value '{token}'")))?;
    }
    Ok(out)
}

/// OBJ index to 0-based; empty or absent means not given
///
/// Positive indices are 1-based, negative ones count back from the end of the
/// `len` elements declared so far.
fn parse_index(token: Option<&str>, len: usize, line_num: usize) -> Result<Option<usize>, AssetError> {
    let Some(token) = token.filter(|t| !t.is_empty()) else {
        return Ok(None);
    };
    let index = match token.parse::<isize>() {
        Ok(index) if index > 0 => Some(index.unsigned_abs() - 1),
        Ok(index) if index < 0 => len.checked_sub(index.unsigned_abs()),
        _ => None,
    };
    index
        .map(Some)
        .ok_or_else(|| invalid(line_num, &format!("invalid index '{token}'")))
}

fn invalid(line_num: usize, message: &str) -> AssetError {
    AssetError::InvalidData(format!("obj line {}: {message}", line_num + 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_GROUPS: &str = "\
mtllib marker.mtl
v 0 0 0
v 1 0 0
v 1 1 0
v 0 1 0
vt 0 0
vt 1 0
vt 1 1
vt 0 1
vn 0 0 1
usemtl frame
f 1/1/1 2/2/1 3/3/1 4/4/1
usemtl glow
f 1/1/1 3/3/1 4/4/1
";

    #[test]
    fn test_usemtl_splits_groups() {
        let model = ObjLoader::parse(TWO_GROUPS).unwrap();

        assert_eq!(model.material_library.as_deref(), Some("marker.mtl"));
        assert_eq!(model.groups.len(), 2);
        assert_eq!(model.groups[0].material_name.as_deref(), Some("frame"));
        assert_eq!(model.groups[1].material_name.as_deref(), Some("glow"));
    }

    #[test]
    fn test_quad_is_fan_triangulated() {
        let model = ObjLoader::parse(TWO_GROUPS).unwrap();
        let quad = &model.groups[0].mesh;

        assert_eq!(quad.vertices.len(), 4);
        assert_eq!(quad.indices, vec![0, 1, 2, 0, 2, 3]);
        assert_eq!(quad.vertices[2].tex_coord, [1.0, 1.0]);
        assert_eq!(quad.vertices[2].normal, [0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_position_only_faces_get_defaults() {
        let model = ObjLoader::parse("v 0 0 0\nv 1 0 0\nv 0 0 1\nf 1 2 3\n").unwrap();
        let mesh = &model.groups[0].mesh;
        assert!(model.groups[0].material_name.is_none());
        assert_eq!(mesh.vertices[0].normal, [0.0, 1.0, 0.0]);
        assert_eq!(mesh.vertices[0].tex_coord, [0.0, 0.0]);
    }

    #[test]
    fn test_out_of_range_index_is_rejected() {
        let err = ObjLoader::parse("v 0 0 0\nf 1 2 3\n").unwrap_err();
        assert!(err.to_string().contains("line 2"), "{err}");
    }

    #[test]
    fn test_relative_indices_count_back() {
        let model = ObjLoader::parse("v 0 0 0\nv 5 0 0\nv 0 0 5\nv 5 0 5\nvn 0 1 0\nf -3 -2//-1 -1\n").unwrap();
        let mesh = &model.groups[0].mesh;
        assert_eq!(mesh.vertices[0].position, [5.0, 0.0, 0.0]);
        assert_eq!(mesh.vertices[1].position, [0.0, 0.0, 5.0]);
        assert_eq!(mesh.vertices[2].position, [5.0, 0.0, 5.0]);
        assert_eq!(mesh.vertices[1].normal, [0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_relative_index_past_start_is_rejected() {
        let err = ObjLoader::parse("v 0 0 0\nv 1 0 0\nf -3 -2 -1\n").unwrap_err();
        assert!(err.to_string().contains("invalid index '-3'"), "{err}");
    }

    #[test]
    fn test_empty_file_is_rejected() {
        assert!(ObjLoader::parse("# nothing\n").is_err());
    }
}
