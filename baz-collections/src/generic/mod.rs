pub mod fixed_bitset;
pub mod fixed_heap;
pub mod fixed_list;
pub mod fixed_map;
