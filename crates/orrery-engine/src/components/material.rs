use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::assets::registry::TextureHandle;

/// Linear RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// From a packed `0xRRGGBB` value.
    pub fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as f32 / 255.0,
            g: ((hex >> 8) & 0xFF) as f32 / 255.0,
            b: (hex & 0xFF) as f32 / 255.0,
        }
    }

    pub fn to_hex(self) -> u32 {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u32;
        (channel(self.r) << 16) | (channel(self.g) << 8) | channel(self.b)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Which faces get rasterized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    #[default]
    Front,
    Back,
    /// Both faces, so a sphere is visible from the inside too.
    Double,
}

/// Blend mode used when compositing the material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlendMode {
    /// Standard alpha blending (src-alpha, one-minus-src-alpha).
    #[default]
    Normal,
    /// Additive blending for glowing sprites (src-alpha, one).
    Additive,
}

/// Closed set of material models the host renderer knows how to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialKind {
    /// Unlit, flat color/texture.
    Basic,
    /// Diffuse-only lighting.
    Lambert,
    /// Physically based shading, supports normal maps.
    Physical,
    /// Unlit lines.
    LineBasic,
    /// Point sprites.
    Points,
}

impl MaterialKind {
    /// Whether lights affect this material.
    pub fn is_lit(self) -> bool {
        matches!(self, Self::Lambert | Self::Physical)
    }

    pub fn supports_normal_map(self) -> bool {
        matches!(self, Self::Physical)
    }

    pub fn supports_point_size(self) -> bool {
        matches!(self, Self::Points)
    }

    pub fn supports_line_width(self) -> bool {
        matches!(self, Self::LineBasic)
    }
}

/// Optional overrides merged on top of a kind's defaults.
/// Unset fields keep the default.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MaterialParams {
    pub color: Option<Color>,
    pub map: Option<TextureHandle>,
    pub normal_map: Option<TextureHandle>,
    pub normal_scale: Option<Vec2>,
    pub transparent: Option<bool>,
    pub opacity: Option<f32>,
    pub side: Option<Side>,
    pub blending: Option<BlendMode>,
    pub depth_test: Option<bool>,
    pub size: Option<f32>,
    pub line_width: Option<f32>,
}

impl MaterialParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Takes an `Option` so a missing texture can be passed straight through.
    pub fn map(mut self, map: Option<TextureHandle>) -> Self {
        self.map = map;
        self
    }

    pub fn normal_map(mut self, normal_map: Option<TextureHandle>) -> Self {
        self.normal_map = normal_map;
        self
    }

    pub fn normal_scale(mut self, scale: Vec2) -> Self {
        self.normal_scale = Some(scale);
        self
    }

    /// Shorthand for `transparent: true` plus an opacity.
    pub fn translucent(mut self, opacity: f32) -> Self {
        self.transparent = Some(true);
        self.opacity = Some(opacity);
        self
    }

    pub fn side(mut self, side: Side) -> Self {
        self.side = Some(side);
        self
    }

    pub fn blending(mut self, blending: BlendMode) -> Self {
        self.blending = Some(blending);
        self
    }

    pub fn depth_test(mut self, enabled: bool) -> Self {
        self.depth_test = Some(enabled);
        self
    }

    pub fn size(mut self, size: f32) -> Self {
        self.size = Some(size);
        self
    }

    pub fn line_width(mut self, width: f32) -> Self {
        self.line_width = Some(width);
        self
    }
}

/// Surface appearance of a mesh or point cloud.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub kind: MaterialKind,
    pub color: Color,
    pub map: Option<TextureHandle>,
    pub normal_map: Option<TextureHandle>,
    pub normal_scale: Vec2,
    pub transparent: bool,
    pub opacity: f32,
    pub side: Side,
    pub blending: BlendMode,
    pub depth_test: bool,
    /// Point sprite size (only for [`MaterialKind::Points`]).
    pub size: Option<f32>,
    /// Line width (only for [`MaterialKind::LineBasic`]).
    pub line_width: Option<f32>,
}

impl Material {
    pub fn new(kind: MaterialKind) -> Self {
        Self {
            kind,
            color: Color::WHITE,
            map: None,
            normal_map: None,
            normal_scale: Vec2::ONE,
            transparent: false,
            opacity: 1.0,
            side: Side::Front,
            blending: BlendMode::Normal,
            depth_test: true,
            size: kind.supports_point_size().then_some(1.0),
            line_width: kind.supports_line_width().then_some(1.0),
        }
    }

    pub fn basic() -> Self {
        Self::new(MaterialKind::Basic)
    }

    pub fn lambert() -> Self {
        Self::new(MaterialKind::Lambert)
    }

    pub fn physical() -> Self {
        Self::new(MaterialKind::Physical)
    }

    /// Merge overrides into this material.
    ///
    /// Parameters the kind does not accept (normal maps on a Lambert
    /// material, point size on a mesh material) are dropped with a warning.
    pub fn with_params(mut self, params: MaterialParams) -> Self {
        let kind = self.kind;
        if let Some(color) = params.color {
            self.color = color;
        }
        if params.map.is_some() {
            self.map = params.map;
        }
        if let Some(transparent) = params.transparent {
            self.transparent = transparent;
        }
        if let Some(opacity) = params.opacity {
            self.opacity = opacity.clamp(0.0, 1.0);
        }
        if let Some(side) = params.side {
            self.side = side;
        }
        if let Some(blending) = params.blending {
            self.blending = blending;
        }
        if let Some(depth_test) = params.depth_test {
            self.depth_test = depth_test;
        }

        if params.normal_map.is_some() || params.normal_scale.is_some() {
            if kind.supports_normal_map() {
                if params.normal_map.is_some() {
                    self.normal_map = params.normal_map;
                }
                if let Some(scale) = params.normal_scale {
                    self.normal_scale = scale;
                }
            } else {
                log::warn!("{kind:?} material ignores normal map parameters");
            }
        }
        if let Some(size) = params.size {
            if kind.supports_point_size() {
                self.size = Some(size);
            } else {
                log::warn!("{kind:?} material ignores point size");
            }
        }
        if let Some(width) = params.line_width {
            if kind.supports_line_width() {
                self.line_width = Some(width);
            } else {
                log::warn!("{kind:?} material ignores line width");
            }
        }
        self
    }

    /// Every texture this material references.
    pub fn textures(&self) -> impl Iterator<Item = &TextureHandle> {
        self.map.iter().chain(self.normal_map.iter())
    }
}
