use serde::{Deserialize, Serialize};

/// Declaration kinds known to typedoc.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclarationKind {
    Project,
    Module,
    Namespace,
    Enum,
    EnumMember,
    Variable,
    Function,
    Class,
    Interface,
    Constructor,
    Property,
    Method,
    CallSignature,
    IndexSignature,
    ConstructorSignature,
    Parameter,
    TypeLiteral,
    TypeParameter,
    Accessor,
    GetSignature,
    SetSignature,
    TypeAlias,
    Reference,
    /// A kind this crate does not know about.
    Other,
}

// Bit layout of typedoc >= 0.23, which no longer writes `kindString`.
const KIND_BITS: [(u32, DeclarationKind); 23] = [
    (0x1, DeclarationKind::Project),
    (0x2, DeclarationKind::Module),
    (0x4, DeclarationKind::Namespace),
    (0x8, DeclarationKind::Enum),
    (0x10, DeclarationKind::EnumMember),
    (0x20, DeclarationKind::Variable),
    (0x40, DeclarationKind::Function),
    (0x80, DeclarationKind::Class),
    (0x100, DeclarationKind::Interface),
    (0x200, DeclarationKind::Constructor),
    (0x400, DeclarationKind::Property),
    (0x800, DeclarationKind::Method),
    (0x1000, DeclarationKind::CallSignature),
    (0x2000, DeclarationKind::IndexSignature),
    (0x4000, DeclarationKind::ConstructorSignature),
    (0x8000, DeclarationKind::Parameter),
    (0x10000, DeclarationKind::TypeLiteral),
    (0x20000, DeclarationKind::TypeParameter),
    (0x40000, DeclarationKind::Accessor),
    (0x80000, DeclarationKind::GetSignature),
    (0x100000, DeclarationKind::SetSignature),
    (0x200000, DeclarationKind::TypeAlias),
    (0x400000, DeclarationKind::Reference),
];

impl DeclarationKind {
    /// Resolves a typedoc `ReflectionKind` bit.
    pub fn from_bits(bits: u32) -> Option<Self> {
        KIND_BITS
            .iter()
            .find(|(bit, _)| *bit == bits)
            .map(|(_, kind)| *kind)
    }

    /// The typedoc `ReflectionKind` bit for this kind, `0` for [`DeclarationKind::Other`].
    pub fn bits(self) -> u32 {
        KIND_BITS
            .iter()
            .find(|(_, kind)| *kind == self)
            .map_or(0, |(bit, _)| *bit)
    }

    /// Parses either a `kindString` ("Type alias") or an identifier ("TypeAlias").
    pub fn from_name(name: &str) -> Option<Self> {
        let normalized: String = name
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();

        let kind = match normalized.as_str() {
            "project" => Self::Project,
            "module" => Self::Module,
            "namespace" => Self::Namespace,
            "enum" | "enumeration" => Self::Enum,
            "enummember" | "enumerationmember" => Self::EnumMember,
            "variable" => Self::Variable,
            "function" => Self::Function,
            "class" => Self::Class,
            "interface" => Self::Interface,
            "constructor" => Self::Constructor,
            "property" => Self::Property,
            "method" => Self::Method,
            "callsignature" => Self::CallSignature,
            "indexsignature" => Self::IndexSignature,
            "constructorsignature" => Self::ConstructorSignature,
            "parameter" => Self::Parameter,
            "typeliteral" => Self::TypeLiteral,
            "typeparameter" => Self::TypeParameter,
            "accessor" => Self::Accessor,
            "getsignature" => Self::GetSignature,
            "setsignature" => Self::SetSignature,
            "typealias" => Self::TypeAlias,
            "reference" => Self::Reference,
            _ => return None,
        };

        Some(kind)
    }

    /// The label typedoc used for `kindString`.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Project => "Project",
            Self::Module => "Module",
            Self::Namespace => "Namespace",
            Self::Enum => "Enumeration",
            Self::EnumMember => "Enumeration member",
            Self::Variable => "Variable",
            Self::Function => "Function",
            Self::Class => "Class",
            Self::Interface => "Interface",
            Self::Constructor => "Constructor",
            Self::Property => "Property",
            Self::Method => "Method",
            Self::CallSignature => "Call signature",
            Self::IndexSignature => "Index signature",
            Self::ConstructorSignature => "Constructor signature",
            Self::Parameter => "Parameter",
            Self::TypeLiteral => "Type literal",
            Self::TypeParameter => "Type parameter",
            Self::Accessor => "Accessor",
            Self::GetSignature => "Get signature",
            Self::SetSignature => "Set signature",
            Self::TypeAlias => "Type alias",
            Self::Reference => "Reference",
            Self::Other => "Unknown",
        }
    }

    /// Kinds whose members are walked recursively instead of serialized.
    pub fn is_container(self) -> bool {
        matches!(
            self,
            Self::Class | Self::Interface | Self::Namespace | Self::Module
        )
    }
}

impl std::fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// The raw `kind` field: a bit from typedoc, or a name from hand-written trees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawKind {
    Bits(u32),
    Name(String),
}

impl RawKind {
    pub fn resolve(&self) -> Option<DeclarationKind> {
        match self {
            Self::Bits(bits) => DeclarationKind::from_bits(*bits),
            Self::Name(name) => DeclarationKind::from_name(name),
        }
    }
}
