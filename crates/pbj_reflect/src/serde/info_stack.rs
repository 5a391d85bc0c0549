use alloc::vec::Vec;
use core::fmt::{Debug, Formatter};

use crate::info::MessageInfo;

/// The chain of messages being serialized, outermost first.
///
/// Attached to serializer errors so a failure deep inside a tree names its path.
#[derive(Default, Clone)]
pub(super) struct MessageInfoStack {
    stack: Vec<&'static MessageInfo>,
}

impl MessageInfoStack {
    pub const fn new() -> Self {
        Self { stack: Vec::new() }
    }

    pub fn push(&mut self, info: &'static MessageInfo) {
        self.stack.push(info);
    }

    pub fn pop(&mut self) {
        self.stack.pop();
    }
}

impl Debug for MessageInfoStack {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        let mut iter = self.stack.iter();

        if let Some(first) = iter.next() {
            writeln!(f, "`{}`", first.type_path())?;
        }

        for info in iter {
            writeln!(f, " -> `{}`", info.type_path())?;
        }

        Ok(())
    }
}
