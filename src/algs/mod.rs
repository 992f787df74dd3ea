//! Flag algorithms: enumeration, switching, encoding, group algebra and the
//! table builders on top of them.

pub mod codec;
pub mod flags;
pub mod group;
pub mod switch;
pub mod tables;

pub use codec::{flag_to_simplicial_set, simplicial_set_to_flag};
pub use flags::{Flag, FlagSpace, enumerate_all, is_valid};
pub use group::FlagGroup;
pub use switch::{switch, switch_path};
pub use tables::{FlagTables, TableOptions, TableSuite};
