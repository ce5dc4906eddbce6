use mental_procedural::{
    generate_clouds, generate_terrain, CloudParameters, Mesh, PerlinNoise, TerrainParameters,
};

const EPSILON: f32 = 1e-5;

#[test]
fn constant_noise_gives_a_flat_plateau() {
    let parameters = TerrainParameters {
        resolution: 4,
        extent: 4.0,
        ..Default::default()
    };
    let constant = |_: f32, _: f32, _: f32| 0.5;

    let mesh = generate_terrain(&constant, &parameters).unwrap();

    assert_eq!(mesh.vertex_count(), 25);
    assert_eq!(mesh.index_count(), 96);
    assert_eq!(mesh.triangle_count(), 32);
    for position in mesh.positions() {
        assert!(
            (position.y - 1.625).abs() < EPSILON,
            "-1.0 + 0.5 * (3.0 + 1.5 + 0.75) expected, got {}",
            position.y
        );
        assert!(position.x.abs() <= 2.0 && position.z.abs() <= 2.0);
    }
}

#[test]
fn mesh_sizes_follow_the_resolution() {
    let noise = PerlinNoise::new(42);

    for resolution in [1, 2, 3, 8, 50] {
        let parameters = TerrainParameters {
            resolution,
            ..Default::default()
        };
        let mesh = generate_terrain(&noise, &parameters).unwrap();
        let side = resolution as usize + 1;

        assert_eq!(mesh.vertex_count(), side * side);
        assert_eq!(mesh.index_count(), (resolution * resolution * 6) as usize);
        assert!(
            mesh.indices().iter().all(|&index| (index as usize) < mesh.vertex_count()),
            "resolution {resolution} produced an out of range index"
        );
    }
}

#[test]
fn two_by_two_grid_winding() {
    let parameters = TerrainParameters {
        resolution: 2,
        ..Default::default()
    };
    let mesh = generate_terrain(PerlinNoise::shared(), &parameters).unwrap();

    let mut triangles = mesh.triangles();
    assert_eq!(triangles.next(), Some([0, 3, 1]), "top left, bottom left, top right");
    assert_eq!(triangles.next(), Some([1, 3, 4]), "top right, bottom left, bottom right");
}

#[test]
fn generation_is_reproducible() {
    let parameters = TerrainParameters::default();

    let first = generate_terrain(&PerlinNoise::new(2024), &parameters).unwrap();
    let second = generate_terrain(&PerlinNoise::new(2024), &parameters).unwrap();
    let other = generate_terrain(&PerlinNoise::new(2025), &parameters).unwrap();

    assert_eq!(first, second);
    assert_ne!(first.vertices(), other.vertices());
    assert_eq!(first.indices(), other.indices(), "topology does not depend on the noise");
}

#[test]
fn shared_noise_is_readable_from_many_threads() {
    let parameters = TerrainParameters {
        resolution: 16,
        ..Default::default()
    };
    let expected = generate_terrain(PerlinNoise::shared(), &parameters).unwrap();

    let meshes: Vec<Mesh> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| generate_terrain(PerlinNoise::shared(), &parameters).unwrap()))
            .collect();

        handles.into_iter().map(|handle| handle.join().unwrap()).collect()
    });

    assert!(meshes.iter().all(|mesh| *mesh == expected));
}

#[test]
fn generated_geometry_round_trips_through_foreign_buffers() {
    let clouds = generate_clouds(&[
        CloudParameters::default(),
        CloudParameters {
            center: [12.0, 6.0, -4.0],
            segments: 12,
            ..Default::default()
        },
    ])
    .unwrap();

    let (vertices, indices) = clouds.clone().into_parts();
    let imported = Mesh::from_buffers(vertices, indices).unwrap();

    assert_eq!(imported, clouds);
    assert_eq!(imported.vertex_count(), 31 * 31 + 13 * 13);
}
