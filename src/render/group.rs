// Thu Oct 15 2026 - Alex

use crate::config::{GeneratorConfig, KnownClass};
use crate::includes::{merge_includes, IncludeResolver, PatternNaming, Side};
use crate::model::{Class, Definition, DefinitionScope, Include};
use crate::render::context::{guard_variable, join_blocks, RenderOptions, BANNER};
use crate::render::declaration::declaration_with;
use crate::render::entities::scoped_definitions;
use crate::render::implementation::implementation_with;
use itertools::Itertools;

/// Several classes sharing one header/source pair.
#[derive(Debug, Clone)]
pub struct ClassGroup {
    pub name: String,
    pub config: GeneratorConfig,
    pub classes: Vec<Class>,
    pub includes: Vec<Include>,
    pub definitions: Vec<Definition>,
}

impl ClassGroup {
    /// The group's own header is included from its implementation.
    pub fn new(name: &str, config: GeneratorConfig) -> Self {
        Self {
            name: name.to_string(),
            config,
            classes: Vec::new(),
            includes: vec![Include::implementation(name, false)],
            definitions: Vec::new(),
        }
    }

    pub fn push(&mut self, class: Class) -> &mut Class {
        self.classes.push(class);
        let index = self.classes.len() - 1;
        &mut self.classes[index]
    }

    /// New class sharing the group configuration.
    pub fn class(&mut self, name: &str) -> &mut Class {
        let class = Class::new(name, self.config.clone());
        self.push(class)
    }

    pub fn find(&self, name: &str) -> Option<&Class> {
        self.classes.iter().find(|c| c.name == name)
    }

    pub fn last(&self) -> Option<&Class> {
        self.classes.last()
    }

    pub fn include(&mut self, include: Include) -> &mut Include {
        self.includes.push(include);
        let index = self.includes.len() - 1;
        &mut self.includes[index]
    }

    pub fn definition(&mut self, value: &str, scope: DefinitionScope) -> &mut Definition {
        self.definitions.push(Definition::new(value, scope));
        let index = self.definitions.len() - 1;
        &mut self.definitions[index]
    }

    fn naming(&self) -> PatternNaming {
        let naming = PatternNaming::from_config(&self.config);
        match (&self.config.namespace, self.config.name_with_namespace) {
            (Some(ns), true) => {
                let file = format!("{}_{}.h", ns.to_lowercase(), self.name.to_lowercase());
                naming.with_override(&self.name, &file)
            }
            _ => naming,
        }
    }

    fn resolver<'a>(&'a self, naming: &'a PatternNaming) -> IncludeResolver<'a> {
        let known: Vec<KnownClass> = self
            .config
            .known_classes
            .iter()
            .filter(|k| self.find(&k.name).is_none())
            .cloned()
            .collect();
        self.classes.iter().fold(
            IncludeResolver::new(naming, known, &self.config.include_triggers),
            |resolver, class| resolver.excluding(&class.name),
        )
    }

    fn namespace_blocks(&self) -> (String, String) {
        match &self.config.namespace {
            Some(ns) => (format!("namespace {} {{", ns), format!("}} // namespace {}", ns)),
            None => (String::new(), String::new()),
        }
    }

    fn declaration_body(&self) -> String {
        let (head, tail) = self.namespace_blocks();
        let mut blocks = vec![
            scoped_definitions(&self.definitions, DefinitionScope::Global),
            head,
            scoped_definitions(&self.definitions, DefinitionScope::Namespace),
        ];
        blocks.extend(
            self.classes
                .iter()
                .map(|c| declaration_with(c, RenderOptions::embedded())),
        );
        blocks.push(tail);
        join_blocks(blocks)
    }

    fn declared_includes(&self, body: &str, naming: &PatternNaming) -> Vec<Include> {
        let mut includes = self.resolver(naming).resolve(body, Side::Declaration);
        includes.extend(self.includes.iter().cloned());
        includes
    }

    pub fn declaration(&self) -> String {
        let naming = self.naming();
        let body = self.declaration_body();
        let includes = self
            .declared_includes(&body, &naming)
            .iter()
            .filter_map(|i| i.declaration_line(&naming))
            .unique()
            .join("\n");
        let guard = guard_variable(&self.name);
        let guarded = self.config.guard;
        join_blocks([
            if self.config.banner { BANNER.to_string() } else { String::new() },
            if guarded { format!("#ifndef {0}\n#define {0}", guard) } else { String::new() },
            includes,
            body,
            if guarded { format!("#endif // {}", guard) } else { String::new() },
        ]) + "\n"
    }

    pub fn implementation(&self) -> String {
        let naming = self.naming();
        let (head, tail) = self.namespace_blocks();
        let mut blocks = vec![
            scoped_definitions(&self.definitions, DefinitionScope::ImplGlobal),
            head,
            scoped_definitions(&self.definitions, DefinitionScope::ImplNamespace),
        ];
        blocks.extend(
            self.classes
                .iter()
                .map(|c| implementation_with(c, RenderOptions::embedded())),
        );
        blocks.push(tail);
        let body = join_blocks(blocks);

        let declared = self.declared_includes(&self.declaration_body(), &naming);
        let implemented = self.resolver(&naming).resolve(&body, Side::Implementation);
        let includes = merge_includes(declared, implemented)
            .iter()
            .filter_map(|i| i.implementation_line(&naming))
            .unique()
            .join("\n");

        join_blocks([
            if self.config.banner { BANNER.to_string() } else { String::new() },
            includes,
            body,
        ]) + "\n"
    }
}
