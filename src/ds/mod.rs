pub mod forward_list;
pub mod slot_arena;

pub use forward_list::{ForwardList, Link};
pub use slot_arena::{SlotArena, SlotId};
