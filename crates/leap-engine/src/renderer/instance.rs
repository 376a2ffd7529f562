use bytemuck::{Pod, Zeroable};

/// Draw-kind codes stored in [`DrawInstance::kind`].
pub mod kind {
    pub const RECT: f32 = 0.0;
    pub const CIRCLE: f32 = 1.0;
    pub const TEXTURED_RECT: f32 = 2.0;
}

/// One drawable in screen space, read by the host renderer as flat floats.
/// 10 floats = 40 bytes stride.
///
/// Rects use `x, y` as the top-left corner and `w, h` as size.
/// Circles use `x, y` as the center and `w` as the radius (`h` is unused).
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct DrawInstance {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    /// See [`kind`].
    pub kind: f32,
    /// Normalized fill color; zero for textured rects.
    pub r: f32,
    pub g: f32,
    pub b: f32,
    /// Host texture handle for textured rects; -1 otherwise.
    pub texture: f32,
    pub _pad: f32,
}

impl DrawInstance {
    pub const FLOATS: usize = 10;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Draw list for one frame: structures first, then entities.
pub struct DrawBuffer {
    pub instances: Vec<DrawInstance>,
    /// Index of the first entity instance; everything before it is a structure.
    pub entity_start: u32,
}

impl DrawBuffer {
    pub fn new() -> Self {
        Self {
            instances: Vec::with_capacity(64),
            entity_start: 0,
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
        self.entity_start = 0;
    }

    pub fn push(&mut self, instance: DrawInstance) {
        self.instances.push(instance);
    }

    /// Mark the current end of the buffer as the start of entity instances.
    pub fn begin_entities(&mut self) {
        self.entity_start = self.instances.len() as u32;
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.instances)
    }

    /// Raw pointer to instance data for host reads.
    pub fn instances_ptr(&self) -> *const f32 {
        self.as_floats().as_ptr()
    }
}

impl Default for DrawBuffer {
    fn default() -> Self {
        Self::new()
    }
}
