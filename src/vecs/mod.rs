pub mod circular_array_deque;
