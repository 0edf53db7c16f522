//! Wavefront OBJ parsing into viewer vertices.
//!
//! All models in the file are merged into one triangle list. Missing normals
//! are rebuilt from face normals, missing texcoords default to zero, and
//! tangents are always computed from the texcoord gradients.

use std::io::Cursor;
use glam::{Vec2, Vec3, Vec4};
use crate::error::{Error, Result};
use crate::resource::Vertex;
use super::loader::MeshData;

/// UV-area below which a triangle contributes no tangent
const DEGENERATE_UV_EPSILON: f32 = 1e-8;

/// Parse OBJ text.
///
/// With `flip_to_left_handed`, positions and normals get Z negated, V is
/// flipped and every triangle's winding is reversed.
pub fn parse_obj(bytes: &[u8], flip_to_left_handed: bool) -> Result<MeshData> {
    let options = tobj::LoadOptions {
        triangulate: true,
        single_index: true,
        ..Default::default()
    };
    // Materials are not used; a failing material loader only drops them
    let (models, _materials) = tobj::load_obj_buf(&mut Cursor::new(bytes), &options, |_| {
        Err(tobj::LoadError::OpenFileFailed)
    })
    .map_err(|e| Error::AssetLoadFailed(format!("failed to parse OBJ: {}", e)))?;

    let mut positions: Vec<Vec3> = Vec::new();
    let mut normals: Vec<Vec3> = Vec::new();
    let mut uvs: Vec<Vec2> = Vec::new();
    let mut indices: Vec<u32> = Vec::new();
    let mut all_have_normals = true;

    for model in &models {
        let mesh = &model.mesh;
        let base = positions.len() as u32;
        let count = mesh.positions.len() / 3;

        positions.extend(mesh.positions.chunks_exact(3).map(|p| Vec3::new(p[0], p[1], p[2])));

        if mesh.normals.len() == mesh.positions.len() {
            normals.extend(mesh.normals.chunks_exact(3).map(|n| Vec3::new(n[0], n[1], n[2])));
        } else {
            all_have_normals = false;
            normals.extend(std::iter::repeat(Vec3::ZERO).take(count));
        }

        if mesh.texcoords.len() / 2 == count {
            uvs.extend(mesh.texcoords.chunks_exact(2).map(|t| Vec2::new(t[0], t[1])));
        } else {
            uvs.extend(std::iter::repeat(Vec2::ZERO).take(count));
        }

        indices.extend(mesh.indices.iter().map(|i| base + i));
    }

    if positions.is_empty() || indices.is_empty() {
        return Err(Error::AssetLoadFailed("OBJ contains no triangles".to_string()));
    }
    if let Some(bad) = indices.iter().find(|&&i| i as usize >= positions.len()) {
        return Err(Error::AssetLoadFailed(format!(
            "index {} out of range ({} vertices)",
            bad,
            positions.len()
        )));
    }

    if flip_to_left_handed {
        for p in &mut positions {
            p.z = -p.z;
        }
        for n in &mut normals {
            n.z = -n.z;
        }
        for uv in &mut uvs {
            uv.y = 1.0 - uv.y;
        }
        for triangle in indices.chunks_exact_mut(3) {
            triangle.swap(1, 2);
        }
    }

    if !all_have_normals {
        fill_missing_normals(&positions, &indices, &mut normals);
    }
    for n in &mut normals {
        *n = unit_or_up(*n);
    }

    let tangents = compute_tangents(&positions, &normals, &uvs, &indices);

    let vertices = (0..positions.len())
        .map(|i| Vertex::new(positions[i], uvs[i], normals[i], tangents[i]))
        .collect();

    Ok(MeshData { vertices, indices })
}

/// Area-weighted face normals for vertices that came without one
fn fill_missing_normals(positions: &[Vec3], indices: &[u32], normals: &mut [Vec3]) {
    let missing: Vec<bool> = normals.iter().map(|n| *n == Vec3::ZERO).collect();

    for triangle in indices.chunks_exact(3) {
        let [a, b, c] = [triangle[0] as usize, triangle[1] as usize, triangle[2] as usize];
        let face = (positions[b] - positions[a]).cross(positions[c] - positions[a]);
        for i in [a, b, c] {
            if missing[i] {
                normals[i] += face;
            }
        }
    }

    for (normal, was_missing) in normals.iter_mut().zip(missing) {
        if was_missing {
            *normal = unit_or_up(*normal);
        }
    }
}

fn unit_or_up(v: Vec3) -> Vec3 {
    let unit = v.normalize_or_zero();
    if unit == Vec3::ZERO {
        Vec3::Y
    } else {
        unit
    }
}

/// Per-vertex tangents: accumulated per triangle, then Gram-Schmidt
/// orthogonalized against the normal. `w` holds the bitangent sign.
fn compute_tangents(positions: &[Vec3], normals: &[Vec3], uvs: &[Vec2], indices: &[u32]) -> Vec<Vec4> {
    let mut tangents = vec![Vec3::ZERO; positions.len()];
    let mut bitangents = vec![Vec3::ZERO; positions.len()];

    for triangle in indices.chunks_exact(3) {
        let [a, b, c] = [triangle[0] as usize, triangle[1] as usize, triangle[2] as usize];

        let edge1 = positions[b] - positions[a];
        let edge2 = positions[c] - positions[a];
        let duv1 = uvs[b] - uvs[a];
        let duv2 = uvs[c] - uvs[a];

        let determinant = duv1.x * duv2.y - duv2.x * duv1.y;
        if determinant.abs() < DEGENERATE_UV_EPSILON {
            continue;
        }
        let r = 1.0 / determinant;
        let tangent = (edge1 * duv2.y - edge2 * duv1.y) * r;
        let bitangent = (edge2 * duv1.x - edge1 * duv2.x) * r;

        for i in [a, b, c] {
            tangents[i] += tangent;
            bitangents[i] += bitangent;
        }
    }

    normals
        .iter()
        .zip(tangents.iter().zip(&bitangents))
        .map(|(&normal, (&tangent, &bitangent))| {
            let orthogonal = (tangent - normal * normal.dot(tangent)).normalize_or_zero();
            let orthogonal = if orthogonal == Vec3::ZERO {
                normal.any_orthonormal_vector()
            } else {
                orthogonal
            };
            let handedness = if normal.cross(orthogonal).dot(bitangent) < 0.0 { -1.0 } else { 1.0 };
            orthogonal.extend(handedness)
        })
        .collect()
}

#[cfg(test)]
#[path = "obj_tests.rs"]
mod tests;
