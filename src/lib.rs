#![doc = include_str!("../README.md")]

pub use crate::convert::{
    ClassFn, FilterFn, NameFn, Openair, Tnp, TypeFn, default_filter, default_name,
    default_openair_type, default_tnp_class, default_tnp_type, openair_type, tnp_class, tnp_type,
};
pub use crate::error::{Error, Result};
pub use crate::filter::Filter;
pub use crate::geom::{NM_TO_RADIANS, min_max_latitude, parse_latlon};
pub use crate::merge::merge_loa;
pub use crate::types::*;

mod convert;
mod error;
mod filter;
mod geom;
mod merge;
mod types;
