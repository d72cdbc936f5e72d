use super::{base_output, Variant, VariantBuilder, VariantTraits, STYLE_EXTENSIONS};
use crate::descriptor::OutputOptions;
use crate::normalize::NormalizedOptions;
use crate::plugin::BabelProfile;

/// CommonJS library build. The only variant that injects `React` imports
/// through `babel-plugin-react-require`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CjsBuilder;

impl VariantBuilder for CjsBuilder {
    fn variant(&self) -> Variant {
        Variant::Cjs
    }

    fn traits(&self) -> VariantTraits {
        VariantTraits {
            asset_modules: true,
            style_extensions: STYLE_EXTENSIONS,
            babel: BabelProfile {
                react_require: true,
                ..BabelProfile::default()
            },
            always_minify: false,
            inline_styles: false,
        }
    }

    fn output(&self, options: &NormalizedOptions) -> OutputOptions {
        base_output(options, Variant::Cjs, &options.outputs.cjs)
    }
}
