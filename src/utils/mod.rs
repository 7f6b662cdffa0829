pub mod random_index;
