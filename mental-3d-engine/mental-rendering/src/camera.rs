use glam::{Mat4, Vec3};
use mental_math::Vector3f;
use strum::{Display, EnumIter, EnumString};

use crate::utils::camera_getters_setters;

pub const DEFAULT_YAW: f32 = -90.0;
pub const DEFAULT_PITCH: f32 = 0.0;
pub const DEFAULT_SPEED: f32 = 2.5;
pub const DEFAULT_SENSITIVITY: f32 = 0.1;
pub const DEFAULT_ZOOM: f32 = 45.0;

pub const MIN_ZOOM: f32 = 1.0;
pub const MAX_ZOOM: f32 = 90.0;
pub const PITCH_LIMIT: f32 = 89.0;

pub const NEAR_PLANE: f32 = 0.1;
pub const FAR_PLANE: f32 = 100.0;

/// Directions the camera can be moved in, relative to where it is looking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Movement {
    Forward,
    Backward,
    Left,
    Right,
}

/// A free flying camera steered by yaw and pitch, both in degrees.
#[derive(Copy, Clone, Debug)]
pub struct Camera {
    position: Vector3f,
    world_up: Vec3,

    yaw: f32,
    pitch: f32,

    movement_speed: f32,
    mouse_sensitivity: f32,
    /// Vertical field of view (in degrees)
    zoom: f32,

    front: Vec3,
    right: Vec3,
    up: Vec3,
}

impl Camera {
    /// A camera at `position` looking down the negative Z axis.
    pub fn new(position: Vector3f) -> Self {
        Self::with_orientation(position, Vec3::Y, DEFAULT_YAW, DEFAULT_PITCH)
    }

    pub fn with_orientation(position: Vector3f, world_up: Vec3, yaw: f32, pitch: f32) -> Self {
        let mut camera = Camera {
            position,
            world_up,
            yaw,
            pitch: pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT),
            movement_speed: DEFAULT_SPEED,
            mouse_sensitivity: DEFAULT_SENSITIVITY,
            zoom: DEFAULT_ZOOM,
            front: Vec3::NEG_Z,
            right: Vec3::X,
            up: Vec3::Y,
        };
        camera.update_vectors();

        camera
    }

    camera_getters_setters!(
        position: Vector3f,
        yaw: f32,
        movement_speed: f32,
        mouse_sensitivity: f32
    );

    pub fn get_pitch(&self) -> f32 {
        self.pitch
    }

    pub fn set_pitch(&mut self, pitch: f32) {
        self.pitch = pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.update_vectors();
    }

    pub fn get_zoom(&self) -> f32 {
        self.zoom
    }

    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    pub fn front(&self) -> Vec3 {
        self.front
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Moves the camera along its own axes for `delta_time` seconds.
    pub fn process_movement(&mut self, direction: Movement, delta_time: f32) {
        let velocity = self.movement_speed * delta_time;
        let offset = match direction {
            Movement::Forward => self.front * velocity,
            Movement::Backward => -self.front * velocity,
            Movement::Left => -self.right * velocity,
            Movement::Right => self.right * velocity,
        };

        self.position += Vector3f::from(offset);
    }

    /// Turns the camera by a mouse delta. Pitch stops just short of straight up or down.
    pub fn process_mouse_movement(&mut self, x_offset: f32, y_offset: f32) {
        self.yaw += x_offset * self.mouse_sensitivity;
        self.set_pitch(self.pitch + y_offset * self.mouse_sensitivity);
    }

    /// Scrolling up narrows the field of view.
    pub fn process_zoom(&mut self, y_offset: f32) {
        self.set_zoom(self.zoom - y_offset);
    }

    pub fn view_matrix(&self) -> Mat4 {
        let eye = Vec3::from_array(self.position.to_array());

        Mat4::look_at_rh(eye, eye + self.front, self.up)
    }

    pub fn projection_matrix(&self, aspect_ratio: f32) -> Mat4 {
        Mat4::perspective_rh(self.zoom.to_radians(), aspect_ratio, NEAR_PLANE, FAR_PLANE)
    }

    pub fn view_projection_matrix(&self, aspect_ratio: f32) -> Mat4 {
        self.projection_matrix(aspect_ratio) * self.view_matrix()
    }

    fn update_vectors(&mut self) {
        let (yaw_sin, yaw_cos) = self.yaw.to_radians().sin_cos();
        let (pitch_sin, pitch_cos) = self.pitch.to_radians().sin_cos();

        self.front = Vec3::new(yaw_cos * pitch_cos, pitch_sin, yaw_sin * pitch_cos).normalize();
        self.right = self.front.cross(self.world_up).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vector3f::new(0.0, 0.0, 3.0))
    }
}

#[cfg(test)]
mod test {
    use glam::{Vec3, Vec4};
    use mental_math::Vector3f;
    use strum::IntoEnumIterator;

    use super::*;

    const EPSILON: f32 = 1e-5;

    fn assert_vec_eq(actual: Vec3, expected: Vec3) {
        assert!(
            actual.abs_diff_eq(expected, EPSILON),
            "expected {expected:?}, got {actual:?}"
        );
    }

    #[test]
    fn default_camera_looks_down_negative_z() {
        let camera = Camera::default();

        assert_vec_eq(camera.front(), Vec3::NEG_Z);
        assert_vec_eq(camera.right(), Vec3::X);
        assert_vec_eq(camera.up(), Vec3::Y);
        assert_eq!(camera.get_zoom(), DEFAULT_ZOOM);
        assert_eq!(camera.get_position(), Vector3f::new(0.0, 0.0, 3.0));
    }

    #[test]
    fn movement_follows_the_basis() {
        let mut camera = Camera::new(Vector3f::zero());

        camera.process_movement(Movement::Forward, 2.0);
        assert_vec_eq(camera.get_position().into(), Vec3::new(0.0, 0.0, -5.0));

        camera.process_movement(Movement::Right, 1.0);
        camera.process_movement(Movement::Backward, 2.0);
        assert_vec_eq(camera.get_position().into(), Vec3::new(2.5, 0.0, 0.0));

        camera.process_movement(Movement::Left, 1.0);
        assert_vec_eq(camera.get_position().into(), Vec3::ZERO);
    }

    #[test]
    fn pitch_and_zoom_are_clamped() {
        let mut camera = Camera::default();

        camera.process_mouse_movement(0.0, 10_000.0);
        assert_eq!(camera.get_pitch(), PITCH_LIMIT);
        camera.process_mouse_movement(0.0, -20_000.0);
        assert_eq!(camera.get_pitch(), -PITCH_LIMIT);

        camera.process_zoom(100.0);
        assert_eq!(camera.get_zoom(), MIN_ZOOM);
        camera.process_zoom(-100.0);
        assert_eq!(camera.get_zoom(), MAX_ZOOM);
    }

    #[test]
    fn mouse_turns_by_sensitivity() {
        let mut camera = Camera::default();

        camera.process_mouse_movement(900.0, 0.0);
        assert!((camera.get_yaw() - 0.0).abs() < EPSILON);
        assert_vec_eq(camera.front(), Vec3::X);
    }

    #[test]
    fn view_matrix_moves_the_eye_to_the_origin() {
        let camera = Camera::new(Vector3f::new(1.0, 2.0, 3.0));
        let eye = camera.view_matrix() * Vec4::new(1.0, 2.0, 3.0, 1.0);

        assert!(eye.truncate().abs_diff_eq(Vec3::ZERO, EPSILON));

        let ahead = camera.view_matrix() * Vec4::new(1.0, 2.0, 0.0, 1.0);
        assert!(ahead.z < 0.0, "points in front of the camera end up on negative z");
    }

    #[test]
    fn projection_uses_the_zoom() {
        let mut camera = Camera::default();
        let wide = camera.projection_matrix(1.0);

        camera.set_zoom(30.0);
        let narrow = camera.projection_matrix(1.0);

        assert!(narrow.y_axis.y > wide.y_axis.y, "narrower fov magnifies");
        assert_eq!(
            camera.view_projection_matrix(1.5),
            camera.projection_matrix(1.5) * camera.view_matrix()
        );
    }

    #[test]
    fn movement_names_parse() {
        for movement in Movement::iter() {
            assert_eq!(movement.to_string().parse::<Movement>(), Ok(movement));
        }
        assert_eq!("backward".parse::<Movement>(), Ok(Movement::Backward));
    }
}
