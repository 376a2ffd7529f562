use serde::{Deserialize, Serialize};

/// 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Color(pub [u8; 3]);

impl Color {
    pub const GREY: Color = Color([100, 100, 100]);
    pub const GREEN: Color = Color([0, 255, 0]);
    pub const RED: Color = Color([255, 0, 0]);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color([r, g, b])
    }

    /// Normalized channels for GPU upload.
    pub fn to_f32(self) -> [f32; 3] {
        let [r, g, b] = self.0;
        [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0]
    }
}

/// Handle to a texture owned by the rendering host. Never dereferenced here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextureId(pub u32);

/// How a body should be drawn. Opaque to the physics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visual {
    Fill(Color),
    Texture(TextureId),
}

impl Default for Visual {
    fn default() -> Self {
        Visual::Fill(Color::GREY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_normalizes() {
        let [r, g, b] = Color::rgb(255, 0, 51).to_f32();
        assert_eq!(r, 1.0);
        assert_eq!(g, 0.0);
        assert!((b - 0.2).abs() < 1e-6);
    }

    #[test]
    fn visual_json_shape() {
        let v: Visual = serde_json::from_str(r#"{ "texture": 3 }"#).unwrap();
        assert_eq!(v, Visual::Texture(TextureId(3)));
        let v: Visual = serde_json::from_str(r#"{ "fill": [1, 2, 3] }"#).unwrap();
        assert_eq!(v, Visual::Fill(Color::rgb(1, 2, 3)));
    }
}
