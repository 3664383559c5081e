pub mod interval_remap;
