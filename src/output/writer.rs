// Thu Oct 15 2026 - Alex

use crate::model::Class;
use crate::output::error::OutputError;
use crate::render::{declaration, implementation, ClassGroup};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// Header and source paths written for one unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenUnit {
    pub header: PathBuf,
    pub source: PathBuf,
}

impl WrittenUnit {
    pub fn paths(&self) -> [&Path; 2] {
        [&self.header, &self.source]
    }
}

/// `foo` for `Foo`, `app_foo` when the namespace is part of the name.
pub fn unit_stem(name: &str, namespace: Option<&str>, with_namespace: bool) -> String {
    match namespace {
        Some(ns) if with_namespace => format!("{}_{}", ns, name).to_lowercase(),
        _ => name.to_lowercase(),
    }
}

fn write_file(path: &Path, text: &str) -> Result<(), OutputError> {
    fs::write(path, text).map_err(|source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn write_unit(dir: &Path, stem: &str, header: &str, source: &str) -> Result<WrittenUnit, OutputError> {
    if !dir.is_dir() {
        return Err(OutputError::MissingDirectory(dir.to_path_buf()));
    }
    let unit = WrittenUnit {
        header: dir.join(format!("{}.h", stem)),
        source: dir.join(format!("{}.cpp", stem)),
    };
    write_file(&unit.header, header)?;
    write_file(&unit.source, source)?;
    info!("Wrote {} and {}", unit.header.display(), unit.source.display());
    Ok(unit)
}

pub fn write_class(class: &Class, dir: &Path) -> Result<WrittenUnit, OutputError> {
    let stem = unit_stem(
        &class.name,
        class.namespace.as_deref(),
        class.config.name_with_namespace,
    );
    write_unit(dir, &stem, &declaration(class), &implementation(class))
}

/// Writes each class to its own pair, stopping at the first failure.
pub fn write_classes<'a>(
    classes: impl IntoIterator<Item = &'a Class>,
    dir: &Path,
) -> Result<Vec<WrittenUnit>, OutputError> {
    classes.into_iter().map(|c| write_class(c, dir)).collect()
}

pub fn write_group(group: &ClassGroup, dir: &Path) -> Result<WrittenUnit, OutputError> {
    let stem = unit_stem(
        &group.name,
        group.config.namespace.as_deref(),
        group.config.name_with_namespace,
    );
    write_unit(dir, &stem, &group.declaration(), &group.implementation())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneratorConfig;
    use crate::named_args::NamedArgs;
    use tempfile::TempDir;

    #[test]
    fn test_unit_stem() {
        assert_eq!(unit_stem("Foo", None, true), "foo");
        assert_eq!(unit_stem("Foo", Some("App"), false), "foo");
        assert_eq!(unit_stem("Foo", Some("App"), true), "app_foo");
    }

    #[test]
    fn test_write_class() {
        let dir = TempDir::new().unwrap();
        let mut class = Class::new("Foo", GeneratorConfig::default());
        class.member("mValue", "int").unwrap();

        let unit = write_class(&class, dir.path()).unwrap();
        assert_eq!(unit.header, dir.path().join("foo.h"));
        let header = fs::read_to_string(&unit.header).unwrap();
        let source = fs::read_to_string(&unit.source).unwrap();
        assert!(header.contains("#ifndef FOO_H"));
        assert!(source.contains("int Foo::value() const"));
    }

    #[test]
    fn test_write_namespaced_group() {
        let dir = TempDir::new().unwrap();
        let mut config = GeneratorConfig::default().with_namespace("app");
        config.name_with_namespace = true;
        let mut group = ClassGroup::new("Shapes", config);
        group.class("Point");

        let unit = write_group(&group, dir.path()).unwrap();
        assert_eq!(unit.source, dir.path().join("app_shapes.cpp"));
        assert!(unit.paths().iter().all(|p| p.exists()));
    }

    #[test]
    fn test_write_named_args_pair() {
        let dir = TempDir::new().unwrap();
        let mut named = NamedArgs::new("FooImpl", "Foo");
        named.member("mBar", "int").unwrap();

        let units = write_classes(named.classes(), dir.path()).unwrap();
        let stems: Vec<String> = units
            .iter()
            .filter_map(|u| u.header.file_name())
            .map(|n| n.to_string_lossy().to_string())
            .collect();
        assert_eq!(stems, vec!["fooimpl.h", "foo.h"]);
        let proxy = fs::read_to_string(&units[1].source).unwrap();
        assert!(proxy.contains("#include \"fooimpl.h\""));
    }

    #[test]
    fn test_missing_directory() {
        let dir = TempDir::new().unwrap();
        let class = Class::new("Foo", GeneratorConfig::default());
        let result = write_class(&class, &dir.path().join("absent"));
        assert!(matches!(result, Err(OutputError::MissingDirectory(_))));
    }
}
