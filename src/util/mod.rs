mod bit_ops;

pub use bit_ops::BitOps;
