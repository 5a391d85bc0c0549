//! Hand-written equivalents of generated message types, shared by unit tests.

use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

use crate::access::{FieldMut, FieldRef, Message};
use crate::info::{Described, FieldDecl, MessageInfo, MessageInfoCell, ScalarType};
use crate::{ProtoEnum, proto_enum};

proto_enum! {
    pub enum MockEnum {
        PS_MNG = 0,
        PS_MEMBER = 1,
        PS_MM = 2,
    }
}

// -----------------------------------------------------------------------------
// Inner

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inner {
    pub key: Option<String>,
    pub value: Option<String>,
    pub def: Option<String>,
}

impl Described for Inner {
    fn message_info() -> &'static MessageInfo {
        static CELL: MessageInfoCell = MessageInfoCell::new();
        CELL.get_or_init(|| {
            MessageInfo::new::<Self>("Inner", &[
                FieldDecl::scalar("key", ScalarType::String),
                FieldDecl::scalar("value", ScalarType::String),
                FieldDecl::scalar("def", ScalarType::String).with_default("def-str"),
            ])
        })
    }
}

impl Message for Inner {
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
// Outer

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Outer {
    pub int32_with_def: Option<i32>,
    pub int32_with_no_def: Option<i32>,
    pub bool_with_def: Option<bool>,
    pub bool_with_no_def: Option<bool>,
    pub string_with_def: Option<String>,
    pub string_with_no_def: Option<String>,
    pub enum_with_def: Option<MockEnum>,
    pub enum_with_no_def: Option<MockEnum>,
    pub int64_slice: Option<Vec<i64>>,
    pub struct_slice: Option<Vec<Inner>>,
    pub struct2: Option<Box<Inner>>,
    pub labels: Option<BTreeMap<String, i32>>,
}

impl Described for Outer {
    fn message_info() -> &'static MessageInfo {
        static CELL: MessageInfoCell = MessageInfoCell::new();
        CELL.get_or_init(|| {
            let mock_enum = ScalarType::Enum(MockEnum::enum_info());
            MessageInfo::new::<Self>("Outer", &[
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
                FieldDecl::map("labels"),
            ])
        })
    }
}

impl Message for Outer {
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
            11 => Some(FieldRef::Map(&self.labels)),
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
            11 => Some(FieldMut::Map(&mut self.labels)),
            _ => None,
        }
    }
}
