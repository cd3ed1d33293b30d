use std::path::{Path, PathBuf};

use resgen_codegen::builder::CodeFragment;
use resgen_core::{GeneratedFile, ResourceType};
use resgen_ir::Emission;
use resgen_manifest::GeneratorConfig;

use super::{GENERATED_HEADER, uses};
use crate::{RUST_NAMING, RawCode, RustFile, Use, descriptor_type, namespace_type};

/// Accessor namespace of one resource type.
#[derive(Debug, Clone)]
pub struct Namespace {
    pub kind: ResourceType,
    /// Shard modules in index order
    pub shard_modules: Vec<String>,
    pub entry_count: usize,
}

impl Namespace {
    pub fn from_emission(emission: &Emission) -> Self {
        Self {
            kind: emission.kind,
            shard_modules: emission
                .containers
                .iter()
                .map(|c| RUST_NAMING.module_name(&c.name()))
                .collect(),
            entry_count: emission.bindings.len(),
        }
    }

    fn type_name(&self) -> String {
        namespace_type(self.kind)
    }

    fn declaration(&self) -> CodeFragment {
        CodeFragment::sequence(vec![
            CodeFragment::doc(format!("Accessors for {} resources.", self.kind)),
            CodeFragment::line("#[derive(Debug, Clone, Copy)]"),
            CodeFragment::line(format!("pub struct {};", self.type_name())),
        ])
    }

    fn collector(&self) -> CodeFragment {
        let mut body = vec![CodeFragment::line(format!(
            "let mut map = HashMap::with_capacity({});",
            self.entry_count
        ))];
        body.extend(
            self.shard_modules
                .iter()
                .map(|module| CodeFragment::line(format!("{}::collect(&mut map);", module))),
        );
        body.push(CodeFragment::line("map"));

        CodeFragment::sequence(vec![
            CodeFragment::doc(format!("Every {} resource, keyed by name.", self.kind)),
            CodeFragment::braced(
                format!(
                    "pub fn all_{}_resources() -> HashMap<&'static str, &'static {}> {{",
                    self.kind,
                    descriptor_type(self.kind)
                ),
                body,
            ),
        ])
    }
}

/// The module root: shard module declarations, the `Res` entry point, and
/// one namespace type plus collector per resource type.
#[derive(Debug, Clone)]
pub struct ResMod {
    module: String,
    runtime: String,
    namespaces: Vec<Namespace>,
}

impl ResMod {
    pub fn new(emissions: &[Emission], config: &GeneratorConfig) -> Self {
        Self {
            module: config.module.clone(),
            runtime: config.runtime.clone(),
            namespaces: emissions
                .iter()
                .filter(|e| !e.is_empty())
                .map(Namespace::from_emission)
                .collect(),
        }
    }

    pub fn namespaces(&self) -> &[Namespace] {
        &self.namespaces
    }

    fn res_struct(&self) -> CodeFragment {
        CodeFragment::sequence(vec![
            CodeFragment::doc("Entry point for generated resource accessors."),
            CodeFragment::line("#[derive(Debug, Clone, Copy)]"),
            CodeFragment::line("pub struct Res;"),
        ])
    }

    fn res_impl(&self) -> CodeFragment {
        CodeFragment::sequence(vec![
            CodeFragment::line("#[allow(non_upper_case_globals)]"),
            CodeFragment::braced(
                "impl Res {",
                self.namespaces
                    .iter()
                    .map(|ns| {
                        CodeFragment::line(format!(
                            "pub const {}: {} = {};",
                            ns.kind,
                            ns.type_name(),
                            ns.type_name()
                        ))
                    })
                    .collect(),
            ),
        ])
    }
}

impl GeneratedFile for ResMod {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.module).join("mod.rs")
    }

    fn render(&self) -> String {
        if self.namespaces.is_empty() {
            return RustFile::new()
                .add(self.res_struct())
                .render_with_header(GENERATED_HEADER);
        }

        let descriptors = self.namespaces.iter().map(|ns| descriptor_type(ns.kind));
        let shard_modules = self
            .namespaces
            .iter()
            .flat_map(|ns| ns.shard_modules.iter())
            .map(|module| format!("mod {};", module));

        let mut file = RustFile::new()
            .use_group([uses::hash_map()])
            .use_group([Use::new(&self.runtime).symbols(descriptors)])
            .add(RawCode::lines(shard_modules))
            .add(self.res_struct())
            .add(self.res_impl());

        for ns in &self.namespaces {
            file = file.add(ns.declaration()).add(ns.collector());
        }

        file.render_with_header(GENERATED_HEADER)
    }
}
