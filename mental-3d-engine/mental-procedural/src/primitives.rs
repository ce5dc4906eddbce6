use crate::mesh::Mesh;

/// A unit square in the XY plane, centered on the origin.
pub fn rectangle() -> Mesh {
    let mut mesh = Mesh::new();

    // top right, bottom right, bottom left, top left
    mesh.push_vertex([0.5, 0.5, 0.0]);
    mesh.push_vertex([0.5, -0.5, 0.0]);
    mesh.push_vertex([-0.5, -0.5, 0.0]);
    mesh.push_vertex([-0.5, 0.5, 0.0]);

    mesh.push_triangle([0, 1, 3]);
    mesh.push_triangle([1, 2, 3]);

    mesh
}

/// A triangle in the XY plane pointing up, centered on the origin.
pub fn triangle() -> Mesh {
    let mut mesh = Mesh::new();

    mesh.push_vertex([0.0, 0.5, 0.0]);
    mesh.push_vertex([-0.5, -0.5, 0.0]);
    mesh.push_vertex([0.5, -0.5, 0.0]);

    mesh.push_triangle([0, 1, 2]);

    mesh
}
