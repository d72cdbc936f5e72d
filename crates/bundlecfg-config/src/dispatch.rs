//! Target dispatch: one descriptor per requested variant, in request order.

use crate::context::BuildContext;
use crate::descriptor::Configured;
use crate::error::Result;
use crate::normalize::normalize;
use crate::options::{Options, Target};
use crate::validation::validate_schema;
use crate::variant::{OverrideFn, Variant};

/// Variants produced for an unrecognized target.
pub const FALLBACK_VARIANTS: [Variant; 2] = [Variant::Esm, Variant::Umd];

/// Map requested targets to the variants that will be built.
///
/// Order follows the request; repeated targets are built repeatedly.
pub fn plan(targets: &[Target]) -> Vec<Variant> {
    let mut variants = Vec::with_capacity(targets.len());
    for target in targets {
        match target {
            Target::Cjs => variants.push(Variant::Cjs),
            Target::Esm => variants.push(Variant::Esm),
            Target::Umd => variants.push(Variant::Umd),
            Target::Other(name) => {
                tracing::info!(
                    target = %name,
                    "unrecognized target, building {} and {}",
                    FALLBACK_VARIANTS[0],
                    FALLBACK_VARIANTS[1]
                );
                variants.extend(FALLBACK_VARIANTS);
            }
        }
    }
    variants
}

/// Build descriptors for every requested target.
///
/// Returns [`Configured::Single`] when exactly one descriptor results and
/// [`Configured::Many`] otherwise. Either every descriptor is built or an
/// error is returned.
///
/// # Example
///
/// ```
/// use bundlecfg_config::{configure, BuildContext, Manifest, Options};
///
/// let manifest = Manifest::from_json(r#"{"name": "my-lib"}"#).unwrap();
/// let ctx = BuildContext::new("/work/my-lib", manifest);
///
/// let configured = configure(&Options::new(["cjs"]), &ctx, None).unwrap();
/// let descriptor = configured.as_single().unwrap();
/// assert_eq!(descriptor.output.name, "myLib");
/// ```
pub fn configure(
    options: &Options,
    ctx: &BuildContext,
    overrides: Option<OverrideFn<'_>>,
) -> Result<Configured> {
    validate_schema(options)?;
    let normalized = normalize(options, ctx)?;
    let variants = plan(&options.target);

    if !normalized.globals.is_empty() && !variants.contains(&Variant::Umd) {
        tracing::warn!("'globals' only applies to the umd variant and will be ignored");
    }

    let descriptors = variants
        .into_iter()
        .map(|variant| variant.builder().build(&normalized, overrides))
        .collect();

    Ok(Configured::from_vec(descriptors))
}
