pub mod circular_list;
pub mod linked_deque;
