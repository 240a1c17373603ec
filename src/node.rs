//! Thin adapter between the grain compositor and a node-graph host.
//!
//! The host owns image storage and the node-graph engine; this module only
//! models the boundary: an opaque image reference, a fetch/store service
//! trait, and the seven-parameter invocation surface of the film-grain node.

use image::{DynamicImage, GenericImageView};

use crate::error::GrainError;
use crate::operations::film_grain;
use crate::params::NoiseLayerSpec;

/// Opaque identifier of an image held by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    pub image_name: String,
}

impl ImageRef {
    pub fn new(image_name: impl Into<String>) -> Self {
        Self {
            image_name: image_name.into(),
        }
    }
}

/// Where a stored image came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum ResourceOrigin {
    Internal,
    External,
}

/// Coarse classification tag attached to a stored image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum ImageCategory {
    General,
    Control,
    Mask,
}

/// Classification metadata handed to the store service alongside the image.
#[derive(Debug, Clone)]
pub struct StoreMetadata {
    pub origin: ResourceOrigin,
    pub category: ImageCategory,
    pub node_id: String,
    pub session_id: Option<String>,
    pub is_intermediate: bool,
}

/// What the store service reports back: the new opaque reference and the
/// dimensions it recorded.
#[derive(Debug, Clone)]
pub struct StoredImage {
    pub image: ImageRef,
    pub width: u32,
    pub height: u32,
}

/// The host-provided image services. `Error` is the host's own error type;
/// requiring `From<GrainError>` lets compositor failures propagate through it
/// untouched.
pub trait ImageServices {
    type Error: From<GrainError>;

    fn fetch(&self, image: &ImageRef) -> Result<DynamicImage, Self::Error>;
    fn store(&self, image: DynamicImage, metadata: StoreMetadata)
        -> Result<StoredImage, Self::Error>;
}

/// Output of a film-grain invocation, as reported to the host.
#[derive(Debug, Clone)]
pub struct ImageOutput {
    pub image: ImageRef,
    pub width: u32,
    pub height: u32,
}

/// The film-grain node: the validated parameter surface plus the node
/// bookkeeping the host expects. Numeric ranges are enforced here, standing
/// in for the host's declarative schema.
#[derive(Debug, Clone)]
pub struct FilmGrainNode {
    pub id: String,
    pub image: ImageRef,
    pub amount_1: u32,
    pub amount_2: u32,
    pub seed_1: Option<u64>,
    pub seed_2: Option<u64>,
    pub blur_1: f32,
    pub blur_2: f32,
    pub is_intermediate: bool,
}

impl FilmGrainNode {
    /// Human-readable title shown in the host's UI.
    pub const TITLE: &'static str = "FilmGrain";
    /// Discovery tags for the host's node catalog.
    pub const TAGS: &'static [&'static str] = &["film_grain"];

    pub fn new(id: impl Into<String>, image: ImageRef) -> Self {
        Self {
            id: id.into(),
            image,
            amount_1: 100,
            amount_2: 50,
            seed_1: None,
            seed_2: None,
            blur_1: 0.5,
            blur_2: 0.5,
            is_intermediate: false,
        }
    }

    /// Fetches the source image, applies film grain, and stores the result.
    pub fn invoke<S: ImageServices>(
        &self,
        services: &S,
        session_id: Option<&str>,
    ) -> Result<ImageOutput, S::Error> {
        let layer_1 = NoiseLayerSpec::new(self.amount_1, self.seed_1, self.blur_1)?;
        let layer_2 = NoiseLayerSpec::new(self.amount_2, self.seed_2, self.blur_2)?;

        let source = services.fetch(&self.image)?;
        log::debug!(
            "film grain on {} ({}x{})",
            self.image.image_name,
            source.dimensions().0,
            source.dimensions().1
        );

        let result = film_grain(&source, &layer_1, &layer_2)?;

        let stored = services.store(
            result,
            StoreMetadata {
                origin: ResourceOrigin::Internal,
                category: ImageCategory::General,
                node_id: self.id.clone(),
                session_id: session_id.map(str::to_owned),
                is_intermediate: self.is_intermediate,
            },
        )?;

        Ok(ImageOutput {
            image: stored.image,
            width: stored.width,
            height: stored.height,
        })
    }
}
