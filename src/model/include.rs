// Thu Oct 15 2026 - Alex

use crate::includes::LibraryNaming;

/// One include or forward declaration. `name` is the type name; the file
/// name is derived when rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Include {
    pub name: String,
    pub in_header: bool,
    pub system: bool,
    pub forward: bool,
    pub namespace: Option<String>,
}

impl Include {
    pub fn new(name: &str, in_header: bool, system: bool, forward: bool) -> Self {
        Self {
            name: name.to_string(),
            in_header,
            system,
            forward,
            namespace: None,
        }
    }

    /// Full include placed in the declaration unit.
    pub fn header(name: &str, system: bool) -> Self {
        Self::new(name, true, system, false)
    }

    /// Full include placed in the implementation unit only.
    pub fn implementation(name: &str, system: bool) -> Self {
        Self::new(name, false, system, false)
    }

    pub fn forward(name: &str, namespace: Option<&str>) -> Self {
        let mut include = Self::new(name, false, false, true);
        include.namespace = namespace.map(str::to_string);
        include
    }

    pub fn in_namespace(&mut self, namespace: &str) -> &mut Self {
        self.namespace = Some(namespace.to_string());
        self
    }

    fn expression(&self, naming: &dyn LibraryNaming) -> String {
        let file = naming.file_name(&self.name);
        if self.system {
            format!("#include <{}>", file)
        } else {
            format!("#include \"{}\"", file)
        }
    }

    pub fn declaration_line(&self, naming: &dyn LibraryNaming) -> Option<String> {
        if self.in_header {
            return Some(self.expression(naming));
        }
        if !self.forward {
            return None;
        }
        Some(match &self.namespace {
            Some(ns) => format!("namespace {} {{ class {}; }}", ns, self.name),
            None => format!("class {};", self.name),
        })
    }

    /// A forward declaration turns into a full include here; a header
    /// include is already pulled in through the declaration unit.
    pub fn implementation_line(&self, naming: &dyn LibraryNaming) -> Option<String> {
        if self.in_header {
            None
        } else {
            Some(self.expression(naming))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::includes::PatternNaming;

    #[test]
    fn test_lines() {
        let naming = PatternNaming::default();

        let header = Include::header("QString", true);
        assert_eq!(header.declaration_line(&naming).as_deref(), Some("#include <QString>"));
        assert_eq!(header.implementation_line(&naming), None);

        let local = Include::implementation("Bar", false);
        assert_eq!(local.declaration_line(&naming), None);
        assert_eq!(local.implementation_line(&naming).as_deref(), Some("#include \"bar.h\""));

        let forward = Include::forward("Bar", Some("app"));
        assert_eq!(
            forward.declaration_line(&naming).as_deref(),
            Some("namespace app { class Bar; }")
        );
        assert_eq!(forward.implementation_line(&naming).as_deref(), Some("#include \"bar.h\""));
    }
}
