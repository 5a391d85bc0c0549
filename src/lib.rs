#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub use pbj_json as json;
pub use pbj_os as os;
pub use pbj_reflect as reflect;
pub use pbj_utils as utils;
