//! Layer extraction and grouping
//!
//! A selection is first narrowed to a component or variant set
//! ([`pick_candidate`], [`resolve`]), its descendants are flattened into
//! name-path keyed layers ([`flatten`]), and those layers are folded into
//! per-property option groups ([`build_groups`]).

pub mod flatten;
pub mod groups;
pub mod resolve;

pub use flatten::{flatten, FlattenedLayer};
pub use groups::{build_groups, variant_matches, LayerOption, PropertyGroup, UniqueLayer};
pub use resolve::{pick_candidate, resolve, Target};
