/// Generates `get_` / `set_` pairs for camera fields. Setters refresh the camera basis.
macro_rules! camera_getters_setters {
    ($name: ident: $_type: ty) => {
        paste::paste! {
            pub fn [<get_ $name>](&self) -> $_type {
                self.$name
            }

            pub fn [<set_ $name>](&mut self, $name: $_type) {
                self.$name = $name;
                self.update_vectors();
            }
        }
    };
    ($($name: ident: $_type: ty),*) => {
        $(
            camera_getters_setters!($name: $_type);
        )*
    };
}

pub(crate) use camera_getters_setters;
