// AST definitions for .enum documents

pub use super::lexer::IntType;

/// One member of an enum type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enumerator {
    pub name: String,
    /// Display text; the name unless a tag literal follows it
    pub tag: String,
}

impl Enumerator {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            tag: name.clone(),
            name,
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }
}

/// `type <name> enum [<base>] { ... }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDefinition {
    pub type_name: String,
    pub base_type: IntType,
    /// Declaration order; it determines the generated ordinal values
    pub enumerators: Vec<Enumerator>,
}

impl EnumDefinition {
    pub fn new(type_name: impl Into<String>, base_type: IntType) -> Self {
        Self {
            type_name: type_name.into(),
            base_type,
            enumerators: Vec::new(),
        }
    }
}

/// Root of a parsed `.enum` file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub package: String,
    pub enums: Vec<EnumDefinition>,
}

impl Document {
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            enums: Vec::new(),
        }
    }
}
