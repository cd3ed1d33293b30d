use std::path::{Path, PathBuf};

use eyre::Result;
use resgen_codegen::{builder::CodeFragment, emitter};
use resgen_core::{GeneratedFile, ResourceType};
use resgen_ir::{Emission, ResourceVariant, ShardContainer};
use resgen_manifest::GeneratorConfig;

use super::{GENERATED_HEADER, uses};
use crate::{RUST_NAMING, RustFile, Use, descriptor_type, namespace_type};

/// One resource inside a shard file.
#[derive(Debug, Clone)]
pub struct ShardItem {
    /// Field and accessor identifier, escaped if it is a keyword
    pub field: String,
    /// Resource key as written in the manifest
    pub key: String,
    pub logical_id: String,
    pub variants: Vec<ResourceVariant>,
}

/// A shard file: the private container struct, its single static instance,
/// the accessors forwarding into it, and a collector for the lookup map.
#[derive(Debug, Clone)]
pub struct ShardRs {
    module: String,
    runtime: String,
    kind: ResourceType,
    container: String,
    file_stem: String,
    constant: String,
    items: Vec<ShardItem>,
}

impl ShardRs {
    /// Build the file for one container of an emission.
    ///
    /// Items follow the emission's bindings; a binding that does not resolve
    /// into this container is an internal consistency error.
    pub fn new(
        emission: &Emission,
        container: &ShardContainer,
        config: &GeneratorConfig,
    ) -> Result<Self> {
        let items = emission
            .bindings_for(container.id)
            .map(|binding| -> Result<ShardItem> {
                let entry = emitter::resolve_binding(emission, binding)?;
                Ok(ShardItem {
                    field: RUST_NAMING.accessor_name(entry.key.as_str()),
                    key: entry.key.to_string(),
                    logical_id: entry.logical_id.clone(),
                    variants: entry.variants.clone(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let container_name = container.name();
        Ok(Self {
            module: config.module.clone(),
            runtime: config.runtime.clone(),
            kind: emission.kind,
            file_stem: RUST_NAMING.module_name(&container_name),
            constant: RUST_NAMING.constant_name(&container_name),
            container: container_name,
            items,
        })
    }

    /// Module name of the file, e.g. `drawable0`.
    pub fn file_stem(&self) -> &str {
        &self.file_stem
    }

    pub fn items(&self) -> &[ShardItem] {
        &self.items
    }

    fn descriptor(&self) -> &'static str {
        descriptor_type(self.kind)
    }

    fn container_struct(&self) -> CodeFragment {
        CodeFragment::braced(
            format!("struct {} {{", self.container),
            self.items
                .iter()
                .map(|item| CodeFragment::line(format!("{}: {},", item.field, self.descriptor())))
                .collect(),
        )
    }

    fn static_instance(&self) -> CodeFragment {
        CodeFragment::block(
            format!(
                "static {}: {} = {} {{",
                self.constant, self.container, self.container
            ),
            self.items.iter().map(|item| self.descriptor_init(item)).collect(),
            "};",
        )
    }

    fn descriptor_init(&self, item: &ShardItem) -> CodeFragment {
        let mut args = vec![CodeFragment::line(format!("{:?},", item.logical_id))];
        if self.kind.is_keyed() {
            args.push(CodeFragment::line(format!("{:?},", item.key)));
        }
        args.push(resource_items(&item.variants));

        CodeFragment::block(
            format!("{}: {}::new(", item.field, self.descriptor()),
            args,
            "),",
        )
    }

    fn accessors(&self) -> CodeFragment {
        let mut methods = Vec::with_capacity(self.items.len() * 2);
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                methods.push(CodeFragment::blank());
            }
            methods.push(CodeFragment::braced(
                format!(
                    "pub fn {}(&self) -> &'static {} {{",
                    item.field,
                    self.descriptor()
                ),
                vec![CodeFragment::line(format!("&{}.{}", self.constant, item.field))],
            ));
        }
        CodeFragment::braced(format!("impl {} {{", namespace_type(self.kind)), methods)
    }

    fn collector(&self) -> CodeFragment {
        CodeFragment::braced(
            format!(
                "pub(super) fn collect(map: &mut HashMap<&'static str, &'static {}>) {{",
                self.descriptor()
            ),
            self.items
                .iter()
                .map(|item| {
                    CodeFragment::line(format!(
                        "map.insert({:?}, &{}.{});",
                        item.key, self.constant, item.field
                    ))
                })
                .collect(),
        )
    }
}

/// `&[ResourceItem::new(..)]`, one item per line when there are several.
fn resource_items(variants: &[ResourceVariant]) -> CodeFragment {
    match variants {
        [variant] => CodeFragment::line(format!("&[{}],", resource_item(variant))),
        _ => CodeFragment::block(
            "&[",
            variants
                .iter()
                .map(|v| CodeFragment::line(format!("{},", resource_item(v))))
                .collect(),
            "],",
        ),
    }
}

fn resource_item(variant: &ResourceVariant) -> String {
    let qualifiers: Vec<String> = variant
        .qualifiers
        .iter()
        .map(|q| format!("{:?}", q))
        .collect();
    format!(
        "ResourceItem::new(&[{}], {:?})",
        qualifiers.join(", "),
        variant.path
    )
}

impl GeneratedFile for ShardRs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.module)
            .join(format!("{}.rs", self.file_stem))
    }

    fn render(&self) -> String {
        RustFile::new()
            .use_group([uses::hash_map()])
            .use_group([Use::new(&self.runtime).symbols([self.descriptor(), "ResourceItem"])])
            .use_group([Use::new("super").symbol(namespace_type(self.kind))])
            .add(self.container_struct())
            .add(self.static_instance())
            .add(self.accessors())
            .add(self.collector())
            .render_with_header(GENERATED_HEADER)
    }
}

#[cfg(test)]
mod tests {
    use resgen_codegen::plan_and_emit;
    use resgen_ir::ResourceEntry;

    use super::*;

    fn shard(kind: ResourceType, keys: &[&str]) -> ShardRs {
        let entries = keys
            .iter()
            .map(|key| ResourceEntry::new(kind, *key, vec![ResourceVariant::new("values/x.xml")]))
            .collect();
        let emission = plan_and_emit(kind, entries, 10).unwrap();
        ShardRs::new(&emission, &emission.containers[0], &GeneratorConfig::default()).unwrap()
    }

    #[test]
    fn test_path() {
        let file = shard(ResourceType::Plurals, &["days"]);
        assert_eq!(file.file_stem(), "plurals0");
        assert_eq!(
            file.path(Path::new("src")),
            PathBuf::from("src/res/plurals0.rs")
        );
    }

    #[test]
    fn test_keyword_keys_are_escaped() {
        let file = shard(ResourceType::Drawable, &["match", "type"]);
        let code = file.render();

        assert!(code.contains("    r#type: DrawableResource,\n"));
        assert!(code.contains("pub fn r#match(&self) -> &'static DrawableResource {"));
        assert!(code.contains("map.insert(\"type\", &DRAWABLE0.r#type);"));
        assert!(code.contains("\"drawable:type\","));
    }

    #[test]
    fn test_keyed_types_carry_key() {
        let code = shard(ResourceType::String, &["app_name"]).render();
        assert!(code.contains(
            "    app_name: StringResource::new(\n        \"string:app_name\",\n        \"app_name\",\n"
        ));

        let code = shard(ResourceType::Font, &["inter"]).render();
        assert!(code.contains("    inter: FontResource::new(\n        \"font:inter\",\n        &["));
    }

    #[test]
    fn test_paths_are_escaped() {
        let variant = ResourceVariant::new("drawable/quote\"d.xml").qualifier("b\\w");
        assert_eq!(
            resource_item(&variant),
            r#"ResourceItem::new(&["b\\w"], "drawable/quote\"d.xml")"#
        );
    }

    #[test]
    fn test_header_first() {
        let code = shard(ResourceType::Font, &["inter"]).render();
        assert!(code.starts_with(GENERATED_HEADER));
    }
}
