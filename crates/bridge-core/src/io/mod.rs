pub mod pbn;
