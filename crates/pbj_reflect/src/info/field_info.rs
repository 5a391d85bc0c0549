use crate::info::{DescriptorError, FieldKind, ScalarType, ScalarValue};

// -----------------------------------------------------------------------------
// FieldDecl

/// A field declaration, as emitted by generated code.
///
/// Declarations are `const`, so a message type's whole table can live in a `static`.
/// Fields are omitted from JSON when unset or empty unless [`keep_empty`](Self::keep_empty)
/// is called.
///
/// # Examples
///
/// ```
/// use pbj_reflect::info::{FieldDecl, ScalarType};
///
/// const FIELDS: &[FieldDecl] = &[
///     FieldDecl::scalar("int32_with_def", ScalarType::I32).with_default("10"),
///     FieldDecl::scalar("string_with_no_def", ScalarType::String),
///     FieldDecl::repeated_scalar("int64_slice", ScalarType::I64),
///     FieldDecl::message("struct2"),
/// ];
///
/// assert_eq!(FIELDS[0].default_literal(), Some("10"));
/// assert!(FIELDS[3].omit_empty());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FieldDecl {
    name: &'static str,
    kind: FieldKind,
    omit_empty: bool,
    default: Option<&'static str>,
}

impl FieldDecl {
    /// Declares a field named `name` of the given kind.
    #[inline]
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            omit_empty: true,
            default: None,
        }
    }

    /// Declares an optional scalar field.
    #[inline]
    pub const fn scalar(name: &'static str, ty: ScalarType) -> Self {
        Self::new(name, FieldKind::Scalar(ty))
    }

    /// Declares an optional nested message field.
    #[inline]
    pub const fn message(name: &'static str) -> Self {
        Self::new(name, FieldKind::Message)
    }

    /// Declares a repeated scalar field.
    #[inline]
    pub const fn repeated_scalar(name: &'static str, ty: ScalarType) -> Self {
        Self::new(name, FieldKind::RepeatedScalar(ty))
    }

    /// Declares a repeated message field.
    #[inline]
    pub const fn repeated_message(name: &'static str) -> Self {
        Self::new(name, FieldKind::RepeatedMessage)
    }

    /// Declares a map field.
    #[inline]
    pub const fn map(name: &'static str) -> Self {
        Self::new(name, FieldKind::Map)
    }

    /// Attaches a default literal, interpreted according to the field's scalar type.
    #[inline]
    pub const fn with_default(mut self, literal: &'static str) -> Self {
        self.default = Some(literal);
        self
    }

    /// Always emit the field, rendering unset values as `null`.
    #[inline]
    pub const fn keep_empty(mut self) -> Self {
        self.omit_empty = false;
        self
    }

    /// Returns the JSON name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the declared kind.
    #[inline]
    pub const fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Returns `true` if the field is omitted when unset or empty.
    #[inline]
    pub const fn omit_empty(&self) -> bool {
        self.omit_empty
    }

    /// Returns the declared default literal, if any.
    #[inline]
    pub const fn default_literal(&self) -> Option<&'static str> {
        self.default
    }
}

// -----------------------------------------------------------------------------
// FieldInfo

/// A resolved field of a [`MessageInfo`](crate::info::MessageInfo).
///
/// The default literal has already been parsed; a literal that does not fit the
/// field leaves [`has_default`](Self::has_default) `false`.
#[derive(Debug, Clone)]
pub struct FieldInfo {
    index: usize,
    name: &'static str,
    kind: FieldKind,
    omit_empty: bool,
    default: Option<(&'static str, ScalarValue)>,
}

impl FieldInfo {
    /// Resolves `decl` as the field at position `index`.
    ///
    /// An unrepresentable default is returned as a [`DescriptorError`] next to a
    /// field that carries no default.
    pub fn resolve(index: usize, decl: &FieldDecl) -> (Self, Option<DescriptorError>) {
        let mut info = Self {
            index,
            name: decl.name,
            kind: decl.kind,
            omit_empty: decl.omit_empty,
            default: None,
        };

        let Some(literal) = decl.default else {
            return (info, None);
        };

        match parse_default(decl, literal) {
            Ok(value) => {
                info.default = Some((literal, value));
                (info, None)
            }
            Err(err) => (info, Some(err)),
        }
    }

    /// Returns the ordinal position in the message.
    #[inline]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Returns the JSON name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the field kind.
    #[inline]
    pub const fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Returns `true` if the field is omitted when unset or empty.
    #[inline]
    pub const fn omit_empty(&self) -> bool {
        self.omit_empty
    }

    /// Returns `true` if the field declares a usable default.
    #[inline]
    pub const fn has_default(&self) -> bool {
        self.default.is_some()
    }

    /// Returns the default literal, or `""` if there is none.
    #[inline]
    pub fn default_literal(&self) -> &'static str {
        self.default.as_ref().map_or("", |(literal, _)| *literal)
    }

    /// Returns the parsed default.
    #[inline]
    pub fn default_value(&self) -> Option<&ScalarValue> {
        self.default.as_ref().map(|(_, value)| value)
    }
}

fn parse_default(decl: &FieldDecl, literal: &'static str) -> Result<ScalarValue, DescriptorError> {
    let FieldKind::Scalar(ty) = decl.kind else {
        return Err(DescriptorError::NotScalar {
            field: decl.name,
            literal,
            kind: decl.kind,
        });
    };

    // Enumerations also accept a member name, the value must be declared either way.
    if let ScalarType::Enum(info) = ty {
        let value = literal.parse::<i32>().ok().or_else(|| info.value_of(literal));
        return match value {
            Some(v) if info.contains(v) => Ok(ScalarValue::Enum(v)),
            _ => Err(DescriptorError::UnknownEnumValue {
                field: decl.name,
                literal,
                enum_name: info.name(),
            }),
        };
    }

    ScalarValue::parse(ty, literal).ok_or(DescriptorError::InvalidLiteral {
        field: decl.name,
        literal,
        ty,
    })
}
