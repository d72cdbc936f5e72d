use super::{base_output, Variant, VariantBuilder, VariantTraits, UMD_STYLE_EXTENSIONS};
use crate::descriptor::OutputOptions;
use crate::normalize::NormalizedOptions;
use crate::plugin::BabelProfile;

/// Browser build: runtime helpers, browser targets, inlined styles and
/// unconditional minification.
#[derive(Debug, Clone, Copy, Default)]
pub struct UmdBuilder;

impl VariantBuilder for UmdBuilder {
    fn variant(&self) -> Variant {
        Variant::Umd
    }

    fn traits(&self) -> VariantTraits {
        VariantTraits {
            asset_modules: true,
            style_extensions: UMD_STYLE_EXTENSIONS,
            babel: BabelProfile {
                runtime_helpers: true,
                react_require: false,
                browser_targets: true,
            },
            always_minify: true,
            inline_styles: true,
        }
    }

    fn output(&self, options: &NormalizedOptions) -> OutputOptions {
        OutputOptions {
            globals: Some(options.globals.clone()),
            ..base_output(options, Variant::Umd, &options.outputs.umd)
        }
    }
}
