pub mod blf_optimizer;
pub mod orientation;
pub mod score;
pub mod search;
pub mod sheet_packer;
