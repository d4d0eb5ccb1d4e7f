//! Opaque atlas texture reference

/// Handle for the glyph atlas texture
///
/// The font never looks behind the handle; it is only forwarded to the
/// rendering backend with each draw command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u32);
