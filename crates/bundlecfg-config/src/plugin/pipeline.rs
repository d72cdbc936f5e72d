//! Ordered plugin list construction.

use super::Plugin;

/// Append-only builder for an ordered plugin list.
///
/// Disabled steps are simply never appended, so the finished list contains
/// no placeholders.
#[derive(Debug, Default)]
pub struct Pipeline {
    steps: Vec<Plugin>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(mut self, plugin: Plugin) -> Self {
        self.steps.push(plugin);
        self
    }

    /// Append the plugin built by `make` only when `enabled` holds.
    pub fn push_if(self, enabled: bool, make: impl FnOnce() -> Plugin) -> Self {
        if enabled { self.push(make()) } else { self }
    }

    pub fn push_some(self, plugin: Option<Plugin>) -> Self {
        match plugin {
            Some(plugin) => self.push(plugin),
            None => self,
        }
    }

    pub fn build(self) -> Vec<Plugin> {
        self.steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skipped_steps_leave_no_gap() {
        let plugins = Pipeline::new()
            .push(Plugin::Json)
            .push_if(false, || Plugin::Terser)
            .push_some(None)
            .push_if(true, || Plugin::Filesize)
            .build();
        assert_eq!(plugins, vec![Plugin::Json, Plugin::Filesize]);
    }

    #[test]
    fn steps_keep_push_order() {
        let plugins = Pipeline::new()
            .push(Plugin::PeerDepsExternal)
            .push_some(Some(Plugin::NodeGlobals))
            .push_if(true, || Plugin::NodeBuiltins)
            .build();
        assert_eq!(
            plugins,
            vec![
                Plugin::PeerDepsExternal,
                Plugin::NodeGlobals,
                Plugin::NodeBuiltins
            ]
        );
    }
}
