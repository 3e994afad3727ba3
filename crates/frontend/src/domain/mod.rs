pub mod pft;
