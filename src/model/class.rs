// Thu Oct 15 2026 - Alex

use crate::config::GeneratorConfig;
use crate::model::method::operator_name;
use crate::model::{
    AccessLevel, AccessSpecifier, AccessorStyle, Constructor, Definition, DefinitionScope,
    Destructor, Entry, Global, Include, Inheritance, Member, MemberOptions, MemberSpec, Method,
    ModelError, Signature,
};

/// Whether a unit renders a class body or only its free declarations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnitKind {
    #[default]
    Class,
    FreeFunctions,
}

/// One generation unit: a class plus everything emitted around it.
#[derive(Debug, Clone)]
pub struct Class {
    pub name: String,
    pub config: GeneratorConfig,
    pub kind: UnitKind,
    pub members: Vec<Member>,
    pub methods: Vec<Method>,
    pub functions: Vec<Method>,
    pub constructors: Vec<Constructor>,
    pub destructor: Option<Destructor>,
    pub globals: Vec<Global>,
    pub definitions: Vec<Definition>,
    pub inheritance: Inheritance,
    pub includes: Vec<Include>,
    pub namespace: Option<String>,
    pub storage_class: Option<String>,
    pub object_marker: Option<String>,
    pub metatype_marker: Option<String>,
}

impl Class {
    pub fn new(name: &str, config: GeneratorConfig) -> Self {
        let namespace = config.namespace.clone();
        Self {
            name: name.to_string(),
            config,
            kind: UnitKind::Class,
            members: Vec::new(),
            methods: Vec::new(),
            functions: Vec::new(),
            constructors: Vec::new(),
            destructor: None,
            globals: Vec::new(),
            definitions: Vec::new(),
            inheritance: Inheritance::default(),
            includes: Vec::new(),
            namespace,
            storage_class: None,
            object_marker: None,
            metatype_marker: None,
        }
    }

    /// A unit without a class body: definitions, free functions and
    /// extern globals only.
    pub fn free_unit(name: &str, config: GeneratorConfig) -> Self {
        let mut class = Self::new(name, config);
        class.kind = UnitKind::FreeFunctions;
        class
    }

    /// Class with a lazily created static instance and a protected
    /// default constructor.
    pub fn singleton(name: &str, config: GeneratorConfig) -> Self {
        let mut class = Self::new(name, config);
        let pointer = format!("{}*", name);
        class
            .global("mInstance", &pointer, "0")
            .with_access(AccessLevel::Protected);
        let body = format!(
            "if (!mInstance) {{\n    mInstance = new {}();\n}}\nreturn mInstance;",
            name
        );
        class
            .method("instance", &pointer, Signature::empty(), &body)
            .with_static();
        class.constructor(Signature::empty(), "").protected();
        class
    }

    pub fn is_free_unit(&self) -> bool {
        self.kind == UnitKind::FreeFunctions
    }

    pub fn accessor_style(&self) -> AccessorStyle {
        self.config.accessor_style
    }

    /// Member with default options: protected, public getter and setter.
    pub fn member(&mut self, name: &str, ty: &str) -> Result<&mut Member, ModelError> {
        self.insert_member(MemberSpec::new(name, ty))
    }

    pub fn member_with(
        &mut self,
        name: &str,
        ty: &str,
        value: Option<&str>,
        options: MemberOptions,
    ) -> Result<&mut Member, ModelError> {
        let mut spec = MemberSpec::new(name, ty).options(options);
        spec.value = value.map(str::to_string);
        self.insert_member(spec)
    }

    pub fn insert_member(
        &mut self,
        entry: impl Into<Entry<MemberSpec, Member>>,
    ) -> Result<&mut Member, ModelError> {
        let member = match entry.into() {
            Entry::Raw(spec) => Member::new(
                &spec.name,
                &spec.ty,
                spec.value.as_deref(),
                &spec.options,
                self.accessor_style(),
            ),
            Entry::Prebuilt(member) => member,
        };
        self.check_accessors(&member)?;
        self.members.push(member);
        let index = self.members.len() - 1;
        Ok(&mut self.members[index])
    }

    fn check_accessors(&self, candidate: &Member) -> Result<(), ModelError> {
        let kinds = [
            (candidate.getter.as_ref(), true),
            (candidate.setter.as_ref(), false),
        ];
        for (accessor, is_getter) in kinds {
            let Some(accessor) = accessor else { continue };
            for existing in &self.members {
                let other = if is_getter { &existing.getter } else { &existing.setter };
                if other.as_ref().map(|m| m.name.as_str()) == Some(accessor.name.as_str()) {
                    return Err(ModelError::AccessorCollision {
                        accessor: accessor.name.clone(),
                        member: candidate.name.clone(),
                        existing: existing.name.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    pub fn method(
        &mut self,
        name: &str,
        return_type: &str,
        signature: impl Into<Signature>,
        body: &str,
    ) -> &mut Method {
        self.add_method(Method::new(name, return_type, signature, body))
    }

    pub fn add_method(&mut self, method: Method) -> &mut Method {
        self.methods.push(method);
        let index = self.methods.len() - 1;
        &mut self.methods[index]
    }

    pub fn signal(&mut self, name: &str, signature: impl Into<Signature>) -> &mut Method {
        self.add_method(Method::new_signal(name, signature))
    }

    pub fn slot(&mut self, name: &str, signature: impl Into<Signature>, body: &str) -> &mut Method {
        self.add_method(Method::new_slot(name, signature, body))
    }

    /// Free function rendered after the class.
    pub fn function(
        &mut self,
        name: &str,
        return_type: &str,
        signature: impl Into<Signature>,
        body: &str,
    ) -> &mut Method {
        self.functions
            .push(Method::new(name, return_type, signature, body));
        let index = self.functions.len() - 1;
        &mut self.functions[index]
    }

    pub fn method_operator(
        &mut self,
        token: &str,
        return_type: &str,
        signature: impl Into<Signature>,
        body: &str,
    ) -> &mut Method {
        self.method(&operator_name(token), return_type, signature, body)
    }

    pub fn function_operator(
        &mut self,
        token: &str,
        return_type: &str,
        signature: impl Into<Signature>,
        body: &str,
    ) -> &mut Method {
        self.function(&operator_name(token), return_type, signature, body)
    }

    pub fn constructor(&mut self, signature: impl Into<Signature>, body: &str) -> &mut Constructor {
        self.constructors.push(Constructor::new(signature, body));
        let index = self.constructors.len() - 1;
        &mut self.constructors[index]
    }

    /// Sets the destructor, replacing any previous one.
    pub fn destructor(&mut self, body: &str) -> &mut Destructor {
        self.destructor.insert(Destructor::new(body))
    }

    /// Static global by default; call `as_extern` on the result for an
    /// extern one.
    pub fn global(&mut self, name: &str, ty: &str, initialization: &str) -> &mut Global {
        self.globals.push(Global::new(name, ty, initialization));
        let index = self.globals.len() - 1;
        &mut self.globals[index]
    }

    pub fn definition(&mut self, value: &str, scope: DefinitionScope) -> &mut Definition {
        self.definitions.push(Definition::new(value, scope));
        let index = self.definitions.len() - 1;
        &mut self.definitions[index]
    }

    pub fn inherits(&mut self, name: &str, access: AccessSpecifier) -> &mut Self {
        self.inheritance.push(name, access);
        self
    }

    pub fn include(&mut self, include: Include) -> &mut Include {
        self.includes.push(include);
        let index = self.includes.len() - 1;
        &mut self.includes[index]
    }

    pub fn storage_class(&mut self, value: &str) -> &mut Self {
        self.storage_class = Some(value.to_string());
        self
    }

    pub fn qobject(&mut self, enabled: bool) -> &mut Self {
        self.object_marker = enabled.then(|| "Q_OBJECT".to_string());
        self
    }

    pub fn metatype(&mut self, enabled: bool) -> &mut Self {
        self.metatype_marker = enabled.then(|| format!("Q_DECLARE_METATYPE({})", self.name));
        self
    }

    /// Accessor style for members added after this call.
    pub fn style(&mut self, style: AccessorStyle) -> &mut Self {
        self.config.accessor_style = style;
        self
    }

    pub fn find_member(&self, name: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.name == name)
    }

    pub fn find_method(&self, name: &str) -> Option<&Method> {
        self.methods.iter().find(|m| m.name == name)
    }

    /// Every method that gets a body in the implementation unit, accessor
    /// bodies included, in emission order.
    pub fn implemented_methods(&self) -> impl Iterator<Item = &Method> {
        self.members
            .iter()
            .flat_map(Member::accessors)
            .chain(self.methods.iter().filter(|m| m.has_implementation()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class() -> Class {
        Class::new("Foo", GeneratorConfig::default())
    }

    #[test]
    fn test_member_builder_chain() {
        let mut foo = class();
        foo.member("mBar", "int").unwrap().public().with_value("3");
        let bar = foo.find_member("mBar").unwrap();
        assert_eq!(bar.access, AccessLevel::Public);
        assert_eq!(bar.value.as_deref(), Some("3"));
    }

    #[test]
    fn test_accessor_collision_is_reported() {
        let mut foo = class();
        foo.member("mBar", "int").unwrap();
        let err = foo.member("bar", "int").unwrap_err();
        assert_eq!(
            err,
            ModelError::AccessorCollision {
                accessor: "bar".to_string(),
                member: "bar".to_string(),
                existing: "mBar".to_string(),
            }
        );
        assert_eq!(foo.members.len(), 1);
    }

    #[test]
    fn test_prebuilt_member_entry() {
        let mut foo = class();
        foo.insert_member(Member::bare("mCount", "int")).unwrap();
        foo.insert_member(("mName", "QString")).unwrap();
        assert_eq!(foo.members.len(), 2);
        assert!(foo.members[0].getter.is_none());
        assert!(foo.members[1].getter.is_some());
    }

    #[test]
    fn test_singleton_shape() {
        let single = Class::singleton("Registry", GeneratorConfig::default());
        assert_eq!(single.globals[0].ty, "Registry*");
        assert_eq!(single.globals[0].access, AccessLevel::Protected);
        assert!(single.find_method("instance").unwrap().is_static());
        assert_eq!(single.constructors[0].access, AccessLevel::Protected);
    }

    #[test]
    fn test_operators_and_markers() {
        let mut foo = class();
        foo.method_operator("==", "bool", "const Foo& other", "return true;")
            .with_const();
        foo.function_operator("<<", "QDebug", "QDebug debug, const Foo& foo", "return debug;");
        foo.qobject(true).metatype(true);
        assert_eq!(foo.methods[0].name, "operator==");
        assert_eq!(foo.functions[0].name, "operator<<");
        assert_eq!(foo.metatype_marker.as_deref(), Some("Q_DECLARE_METATYPE(Foo)"));
        assert_eq!(foo.object_marker.as_deref(), Some("Q_OBJECT"));
    }

    #[test]
    fn test_implemented_methods_skip_signals_and_pure() {
        let mut foo = class();
        foo.member("mA", "int").unwrap();
        foo.signal("changed", Signature::empty());
        foo.method("run", "void", "", "").with_pure_virtual();
        foo.method("size", "int", "", "return 1;");
        let names: Vec<_> = foo.implemented_methods().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["a", "setA", "size"]);
    }
}
