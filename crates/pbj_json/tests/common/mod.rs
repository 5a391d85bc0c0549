//! Hand-written equivalents of generated message types.
//!
//! Each type also derives `serde::Serialize` with `skip_serializing_if` on its
//! omit-when-empty fields, so the standard encoding can be checked against serde itself.
#![allow(dead_code)]

use std::collections::BTreeMap;

use pbj_reflect::access::{FieldMut, FieldRef};
use pbj_reflect::info::{Described, FieldDecl, MessageInfo, MessageInfoCell, ScalarType};
use pbj_reflect::serde::is_unset_or_empty;
use pbj_reflect::{Message, ProtoEnum, proto_enum};
use serde::{Deserialize, Serialize};

proto_enum! {
    pub enum MockPbEnum {
        PS_MNG = 0,
        PS_MEMBER = 1,
        PS_MM = 2,
    }
}

// -----------------------------------------------------------------------------
// MockInnerPbStruct

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MockInnerPbStruct {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub def: Option<String>,
}

impl Described for MockInnerPbStruct {
    fn message_info() -> &'static MessageInfo {
        static CELL: MessageInfoCell = MessageInfoCell::new();
        CELL.get_or_init(|| {
            MessageInfo::new::<Self>("MockInnerPbStruct", &[
                FieldDecl::scalar("key", ScalarType::String),
                FieldDecl::scalar("value", ScalarType::String),
                FieldDecl::scalar("def", ScalarType::String).with_default("def-str"),
            ])
        })
    }
}

impl Message for MockInnerPbStruct {
    fn field(&self, index: usize) -> Option<FieldRef<'_>> {
        match index {
            0 => Some(FieldRef::Scalar(&self.key)),
            1 => Some(FieldRef::Scalar(&self.value)),
            2 => Some(FieldRef::Scalar(&self.def)),
            _ => None,
        }
    }

    fn field_mut(&mut self, index: usize) -> Option<FieldMut<'_>> {
        match index {
            0 => Some(FieldMut::Scalar(&mut self.key)),
            1 => Some(FieldMut::Scalar(&mut self.value)),
            2 => Some(FieldMut::Scalar(&mut self.def)),
            _ => None,
        }
    }
}

// -----------------------------------------------------------------------------
// MockPbStruct

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MockPbStruct {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub int32_with_def: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub int32_with_no_def: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bool_with_def: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bool_with_no_def: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub string_with_def: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub string_with_no_def: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enum_with_def: Option<MockPbEnum>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enum_with_no_def: Option<MockPbEnum>,

    #[serde(skip_serializing_if = "is_unset_or_empty")]
    pub int64_slice: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "is_unset_or_empty")]
    pub struct_slice: Option<Vec<MockInnerPbStruct>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub struct2: Option<Box<MockInnerPbStruct>>,
}

impl Described for MockPbStruct {
    fn message_info() -> &'static MessageInfo {
        static CELL: MessageInfoCell = MessageInfoCell::new();
        CELL.get_or_init(|| {
            let mock_enum = ScalarType::Enum(MockPbEnum::enum_info());
            MessageInfo::new::<Self>("MockPbStruct", &[
                FieldDecl::scalar("int32_with_def", ScalarType::I32).with_default("10"),
                FieldDecl::scalar("int32_with_no_def", ScalarType::I32),
                FieldDecl::scalar("bool_with_def", ScalarType::Bool).with_default("1"),
                FieldDecl::scalar("bool_with_no_def", ScalarType::Bool),
                FieldDecl::scalar("string_with_def", ScalarType::String).with_default("test-string"),
                FieldDecl::scalar("string_with_no_def", ScalarType::String),
                FieldDecl::scalar("enum_with_def", mock_enum).with_default("1"),
                FieldDecl::scalar("enum_with_no_def", mock_enum),
                FieldDecl::repeated_scalar("int64_slice", ScalarType::I64),
                FieldDecl::repeated_message("struct_slice"),
                FieldDecl::message("struct2"),
            ])
        })
    }
}

impl Message for MockPbStruct {
    fn field(&self, index: usize) -> Option<FieldRef<'_>> {
        match index {
            0 => Some(FieldRef::Scalar(&self.int32_with_def)),
            1 => Some(FieldRef::Scalar(&self.int32_with_no_def)),
            2 => Some(FieldRef::Scalar(&self.bool_with_def)),
            3 => Some(FieldRef::Scalar(&self.bool_with_no_def)),
            4 => Some(FieldRef::Scalar(&self.string_with_def)),
            5 => Some(FieldRef::Scalar(&self.string_with_no_def)),
            6 => Some(FieldRef::Scalar(&self.enum_with_def)),
            7 => Some(FieldRef::Scalar(&self.enum_with_no_def)),
            8 => Some(FieldRef::RepeatedScalar(&self.int64_slice)),
            9 => Some(FieldRef::RepeatedMessage(&self.struct_slice)),
            10 => Some(FieldRef::message(self.struct2.as_deref())),
            _ => None,
        }
    }

    fn field_mut(&mut self, index: usize) -> Option<FieldMut<'_>> {
        match index {
            0 => Some(FieldMut::Scalar(&mut self.int32_with_def)),
            1 => Some(FieldMut::Scalar(&mut self.int32_with_no_def)),
            2 => Some(FieldMut::Scalar(&mut self.bool_with_def)),
            3 => Some(FieldMut::Scalar(&mut self.bool_with_no_def)),
            4 => Some(FieldMut::Scalar(&mut self.string_with_def)),
            5 => Some(FieldMut::Scalar(&mut self.string_with_no_def)),
            6 => Some(FieldMut::Scalar(&mut self.enum_with_def)),
            7 => Some(FieldMut::Scalar(&mut self.enum_with_no_def)),
            8 => Some(FieldMut::RepeatedScalar(&mut self.int64_slice)),
            9 => Some(FieldMut::RepeatedMessage(&mut self.struct_slice)),
            10 => Some(FieldMut::message(self.struct2.as_deref_mut())),
            _ => None,
        }
    }
}

// -----------------------------------------------------------------------------
// MockPbList

/// Repeated fields held as plain `Vec`s, which are always present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MockPbList {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub int64_slice: Vec<i64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub struct_slice: Vec<MockInnerPbStruct>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub struct2: Option<Box<MockInnerPbStruct>>,
}

impl Described for MockPbList {
    fn message_info() -> &'static MessageInfo {
        static CELL: MessageInfoCell = MessageInfoCell::new();
        CELL.get_or_init(|| {
            MessageInfo::new::<Self>("MockPbList", &[
                FieldDecl::repeated_scalar("int64_slice", ScalarType::I64),
                FieldDecl::repeated_message("struct_slice"),
                FieldDecl::message("struct2"),
            ])
        })
    }
}

impl Message for MockPbList {
    fn field(&self, index: usize) -> Option<FieldRef<'_>> {
        match index {
            0 => Some(FieldRef::RepeatedScalar(&self.int64_slice)),
            1 => Some(FieldRef::RepeatedMessage(&self.struct_slice)),
            2 => Some(FieldRef::message(self.struct2.as_deref())),
            _ => None,
        }
    }

    fn field_mut(&mut self, index: usize) -> Option<FieldMut<'_>> {
        match index {
            0 => Some(FieldMut::RepeatedScalar(&mut self.int64_slice)),
            1 => Some(FieldMut::RepeatedMessage(&mut self.struct_slice)),
            2 => Some(FieldMut::message(self.struct2.as_deref_mut())),
            _ => None,
        }
    }
}

// -----------------------------------------------------------------------------
// Grid

/// A message with a map keyed by points, which JSON cannot encode.
#[derive(Debug, Default)]
pub struct Grid {
    pub cells: Option<BTreeMap<(i32, i32), String>>,
}

impl Described for Grid {
    fn message_info() -> &'static MessageInfo {
        static CELL: MessageInfoCell = MessageInfoCell::new();
        CELL.get_or_init(|| MessageInfo::new::<Self>("Grid", &[FieldDecl::map("cells")]))
    }
}

impl Message for Grid {
    fn field(&self, index: usize) -> Option<FieldRef<'_>> {
        match index {
            0 => Some(FieldRef::Map(&self.cells)),
            _ => None,
        }
    }

    fn field_mut(&mut self, index: usize) -> Option<FieldMut<'_>> {
        match index {
            0 => Some(FieldMut::Map(&mut self.cells)),
            _ => None,
        }
    }
}

/// An instance with every kind of field populated.
pub fn populated() -> MockPbStruct {
    MockPbStruct {
        int32_with_no_def: Some(-7),
        bool_with_no_def: Some(false),
        string_with_no_def: Some("quoted \"text\"".into()),
        enum_with_no_def: Some(MockPbEnum::PS_MM),
        int64_slice: Some(vec![1, i64::MAX]),
        struct_slice: Some(vec![
            MockInnerPbStruct {
                key: Some("k".into()),
                value: Some("v".into()),
                ..MockInnerPbStruct::default()
            },
            MockInnerPbStruct::default(),
        ]),
        struct2: Some(Box::new(MockInnerPbStruct {
            def: Some(String::new()),
            ..MockInnerPbStruct::default()
        })),
        ..MockPbStruct::default()
    }
}
