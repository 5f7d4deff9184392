use crate::media::models::dimensions::Dimensions;

#[non_exhaustive]
pub struct MediaModel;

impl MediaModel {
    pub const DALLE_2: &'static str = "dall-e-2";
    pub const DALLE_3: &'static str = "dall-e-3";
    pub const GPT_IMAGE_1: &'static str = "gpt-image-1";

    pub const ALL: [&'static str; 3] = [Self::DALLE_2, Self::DALLE_3, Self::GPT_IMAGE_1];

    /// Sizes the model accepts, smallest first. `None` for models this
    /// service has no table for; those get the configured size unchanged.
    pub fn supported_sizes(model: &str) -> Option<&'static [Dimensions]> {
        const DALLE_2_SIZES: [Dimensions; 3] = [
            Dimensions::square(256),
            Dimensions::square(512),
            Dimensions::square(1024),
        ];
        const DALLE_3_SIZES: [Dimensions; 3] = [
            Dimensions::square(1024),
            Dimensions {
                width: 1792,
                height: 1024,
            },
            Dimensions {
                width: 1024,
                height: 1792,
            },
        ];
        const GPT_IMAGE_1_SIZES: [Dimensions; 3] = [
            Dimensions::square(1024),
            Dimensions {
                width: 1536,
                height: 1024,
            },
            Dimensions {
                width: 1024,
                height: 1536,
            },
        ];

        match model {
            Self::DALLE_2 => Some(&DALLE_2_SIZES),
            Self::DALLE_3 => Some(&DALLE_3_SIZES),
            Self::GPT_IMAGE_1 => Some(&GPT_IMAGE_1_SIZES),
            _ => None,
        }
    }

    /// The configured size when the model takes it, otherwise the model's first size.
    pub fn resolve_size(model: &str, configured: &Dimensions) -> Dimensions {
        match Self::supported_sizes(model) {
            Some(sizes) if sizes.contains(configured) => *configured,
            Some(sizes) => sizes.first().copied().unwrap_or(*configured),
            None => *configured,
        }
    }

    pub fn accepts_response_format(model: &str) -> bool {
        model != Self::GPT_IMAGE_1
    }
}
