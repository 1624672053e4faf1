// Thu Oct 15 2026 - Alex

use crate::config::KnownClass;
use crate::includes::{merge_includes, IncludeResolver, LibraryNaming, Side};
use crate::model::{Class, DefinitionScope, Include};
use crate::render::context::{join_blocks, RenderContext, RenderOptions, BANNER};
use crate::render::declaration::{class_naming, declaration_includes, declaration_with};
use crate::render::entities::{function_definition, scoped_definitions, ClassEntity};
use itertools::Itertools;

/// Function bodies in emission order: constructors, destructor, accessors,
/// methods, free functions, global initializers.
fn definitions(class: &Class) -> Vec<String> {
    let ctx = RenderContext::new(class);
    let mut blocks: Vec<String> = Vec::new();
    blocks.extend(class.constructors.iter().filter_map(|c| c.implementation(&ctx)));
    blocks.extend(class.destructor.iter().filter_map(|d| d.implementation(&ctx)));
    blocks.extend(class.members.iter().filter_map(|m| m.implementation(&ctx)));
    blocks.extend(class.methods.iter().filter_map(|m| m.implementation(&ctx)));
    blocks.extend(class.functions.iter().map(|f| function_definition(f, &ctx)));
    let globals = class
        .globals
        .iter()
        .filter_map(|g| g.implementation(&ctx))
        .join("\n");
    blocks.push(globals);
    blocks
}

fn implementation_body(class: &Class, options: RenderOptions) -> Vec<String> {
    let mut blocks = vec![scoped_definitions(&class.definitions, DefinitionScope::ImplGlobal)];
    let namespace = class.namespace.as_ref().filter(|_| options.namespace);
    blocks.extend(namespace.map(|ns| format!("namespace {} {{", ns)));
    blocks.push(scoped_definitions(&class.definitions, DefinitionScope::ImplNamespace));
    blocks.extend(definitions(class));
    blocks.extend(namespace.map(|ns| format!("}} // namespace {}", ns)));
    blocks
}

/// Includes of the implementation unit: the declaration's includes merged
/// with those inferred from the function bodies. The class itself is known
/// here, so its own header is pulled in.
pub fn implementation_includes(
    class: &Class,
    declaration_text: &str,
    implementation_text: &str,
    naming: &dyn LibraryNaming,
) -> Vec<Include> {
    let declared = declaration_includes(class, declaration_text, naming);

    let mut known = vec![KnownClass::new(&class.name)];
    known.extend(
        class
            .config
            .known_classes
            .iter()
            .filter(|k| k.name != class.name)
            .cloned(),
    );
    let resolver = IncludeResolver::new(naming, known, &class.config.include_triggers);
    let mut implemented = Vec::new();
    if class.is_free_unit() {
        implemented.push(Include::implementation(&class.name, false));
    }
    implemented.extend(resolver.resolve(implementation_text, Side::Implementation));

    merge_includes(declared, implemented)
}

pub fn implementation(class: &Class) -> String {
    let options = RenderOptions::standalone(class.config.banner, class.config.guard);
    implementation_with(class, options)
}

pub fn implementation_with(class: &Class, options: RenderOptions) -> String {
    let body = join_blocks(implementation_body(class, options));

    let includes = if options.includes {
        let naming = class_naming(class);
        let declaration = declaration_with(class, options.without_includes());
        implementation_includes(class, &declaration, &body, &naming)
            .iter()
            .filter_map(|i| i.implementation_line(&naming))
            .unique()
            .join("\n")
    } else {
        String::new()
    };

    join_blocks([
        if options.banner { BANNER.to_string() } else { String::new() },
        includes,
        body,
    ]) + "\n"
}
