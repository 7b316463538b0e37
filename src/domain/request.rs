//! Scaffold requests and the naming conventions derived from them.

/// Upper-case the first character of `name`, preserving the remainder as typed.
///
/// `fooBar` becomes `FooBar`; casing beyond the first character is never
/// touched.
pub fn type_name(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Parameters for scaffolding a class triplet (`.hpp`/`.cpp`/`.tpp`).
///
/// Identifiers are taken as given: folder and class are camelCase by
/// convention, group is PascalCase, but nothing beyond non-emptiness is
/// enforced. The class name may equal the folder name.
#[derive(Debug, Clone)]
pub struct ClassScaffoldRequest {
    pub folder: String,
    pub class_name: String,
    pub group_name: String,
}

impl ClassScaffoldRequest {
    pub fn new(
        folder: impl Into<String>,
        class_name: impl Into<String>,
        group_name: impl Into<String>,
    ) -> Self {
        Self { folder: folder.into(), class_name: class_name.into(), group_name: group_name.into() }
    }

    /// C++ type name: the class name with its first character upper-cased.
    pub fn type_name(&self) -> String {
        type_name(&self.class_name)
    }

    pub fn header_file(&self) -> String {
        format!("{}.hpp", self.class_name)
    }

    pub fn source_file(&self) -> String {
        format!("{}.cpp", self.class_name)
    }

    pub fn template_file(&self) -> String {
        format!("{}.tpp", self.class_name)
    }
}

/// Parameters for scaffolding a unit-test suite; everything derives from the
/// folder name.
#[derive(Debug, Clone)]
pub struct TestScaffoldRequest {
    pub folder: String,
}

impl TestScaffoldRequest {
    pub fn new(folder: impl Into<String>) -> Self {
        Self { folder: folder.into() }
    }

    /// Name of the test executable target.
    pub fn executable(&self) -> String {
        format!("{}Test", self.folder)
    }

    pub fn file_name(&self) -> String {
        format!("{}Test.cpp", self.folder)
    }

    /// Suite name for the free-standing test case.
    pub fn suite_name(&self) -> String {
        type_name(&self.folder)
    }

    /// Name of the generated test fixture class.
    pub fn fixture_name(&self) -> String {
        format!("{}Fixture", self.suite_name())
    }
}
