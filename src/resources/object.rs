//! Object identity as seen by the material core.

use crate::resources::material::TextureRef;

/// How much detail the viewport draws for an object. Ordered from least to
/// most detailed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum DisplayType {
    Bounds,
    Wire,
    Solid,
    #[default]
    Textured,
}

impl DisplayType {
    /// Objects drawn below textured detail never sample images.
    #[inline]
    #[must_use]
    pub fn shows_textures(self) -> bool {
        self >= Self::Textured
    }
}

/// Identity and display data of the object a material is resolved for.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ObjectInfo {
    /// Unique object name within its library.
    pub name: String,
    /// Name of the external library the object was linked from, if any.
    pub library: Option<String>,
    /// Integer id used by the outline/object-id pass and by fingerprints.
    pub object_id: u32,
    pub display_type: DisplayType,
    /// Image bound to the object's active material slot.
    pub image: Option<TextureRef>,
}

impl ObjectInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_library(mut self, library: impl Into<String>) -> Self {
        self.library = Some(library.into());
        self
    }

    #[must_use]
    pub fn with_object_id(mut self, object_id: u32) -> Self {
        self.object_id = object_id;
        self
    }

    #[must_use]
    pub fn with_display_type(mut self, display_type: DisplayType) -> Self {
        self.display_type = display_type;
        self
    }

    #[must_use]
    pub fn with_image(mut self, image: TextureRef) -> Self {
        self.image = Some(image);
        self
    }
}
