use super::{base_output, Variant, VariantBuilder, VariantTraits, STYLE_EXTENSIONS};
use crate::descriptor::OutputOptions;
use crate::normalize::NormalizedOptions;
use crate::plugin::BabelProfile;

/// ES module build, the base pipeline: no image or SVG modules.
#[derive(Debug, Clone, Copy, Default)]
pub struct EsmBuilder;

impl VariantBuilder for EsmBuilder {
    fn variant(&self) -> Variant {
        Variant::Esm
    }

    fn traits(&self) -> VariantTraits {
        VariantTraits {
            asset_modules: false,
            style_extensions: STYLE_EXTENSIONS,
            babel: BabelProfile::default(),
            always_minify: false,
            inline_styles: false,
        }
    }

    fn output(&self, options: &NormalizedOptions) -> OutputOptions {
        base_output(options, Variant::Esm, &options.outputs.esm)
    }
}
